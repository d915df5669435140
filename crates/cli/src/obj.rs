use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use lathe_mesh::Mesh;

/// Writes a mesh as Wavefront OBJ.
///
/// Position, UV and normal share one index per vertex, so each `f` corner
/// is `i/i/i`. OBJ indices are 1-based.
pub fn write_obj<P: AsRef<Path>>(p: P, mesh: &Mesh) -> anyhow::Result<()> {
    let mut f = BufWriter::new(File::create(p)?);
    for v in &mesh.vertices {
        writeln!(f, "v {} {} {}", v.position[0], v.position[1], v.position[2])?;
    }
    for v in &mesh.vertices {
        writeln!(f, "vt {} {}", v.uv[0], v.uv[1])?;
    }
    for v in &mesh.vertices {
        writeln!(f, "vn {} {} {}", v.normal[0], v.normal[1], v.normal[2])?;
    }
    for t in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (t[0] + 1, t[1] + 1, t[2] + 1);
        writeln!(f, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    f.flush()?;
    Ok(())
}
