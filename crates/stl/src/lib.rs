use anyhow::Context;
use byteorder::{LittleEndian, WriteBytesExt};
use cgmath::InnerSpace;
use lathe_mesh::{Mesh, Vector3, Vertex};
use std::io::Write;
use std::path::Path;

fn write_binary<T: Write>(f: &mut T, mesh: &Mesh) -> std::io::Result<()> {
    // Binary files start with an 80 byte header. There is no defined
    // structure for this header so we leave it zeroed.
    f.write_all(&[0u8; 80])?;

    // Immediately following the header is an unsigned 32-bit integer that
    // indicates the number of triangles that follow.
    f.write_u32::<LittleEndian>(mesh.triangle_count() as u32)?;

    for triangle in mesh.triangles() {
        // Each triangle is specified by a normal vector followed by the 3
        // vertices. Vertices are listed in counter-clockwise order, so
        // readers that ignore the normal still reconstruct the same facet.
        let normal = facet_normal(&triangle);
        for value in [normal.x, normal.y, normal.z] {
            f.write_f32::<LittleEndian>(value)?;
        }
        for vertex in &triangle {
            for value in vertex.position {
                f.write_f32::<LittleEndian>(value)?;
            }
        }
        // The 2-byte "attribute byte count" has no standard structure; we
        // write zero like most exporters.
        f.write_u16::<LittleEndian>(0)?;
    }
    Ok(())
}

/// Per-facet normal from the triangle winding. STL has no notion of the
/// mesh's per-vertex normals, so the facet normal is recomputed; a
/// degenerate facet gets the conventional zero vector.
fn facet_normal(triangle: &[Vertex; 3]) -> Vector3 {
    let u = triangle[1].position() - triangle[0].position();
    let v = triangle[2].position() - triangle[0].position();
    let n = u.cross(v);
    if n.magnitude2() > f32::EPSILON {
        n.normalize()
    } else {
        Vector3::new(0.0, 0.0, 0.0)
    }
}

pub fn write_stl<P: AsRef<Path>>(p: P, mesh: &Mesh) -> anyhow::Result<()> {
    let mut f = std::fs::File::create(&p)
        .with_context(|| format!("creating {}", p.as_ref().display()))?;
    write_binary(&mut f, mesh)
        .with_context(|| format!("writing {}", p.as_ref().display()))?;
    Ok(())
}

pub trait StlWriter: Write {
    fn write_stl(&mut self, mesh: &Mesh) -> std::io::Result<()>;
}

impl<T: Write> StlWriter for T {
    fn write_stl(&mut self, mesh: &Mesh) -> std::io::Result<()> {
        write_binary(self, mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::ReadBytesExt;
    use lathe_mesh::Vector2;

    fn single_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        let normal = Vector3::new(0.0, 0.0, 1.0);
        let uv = Vector2::new(0.0, 0.0);
        mesh.add_vertex(Vertex::new(Vector3::new(0.0, 0.0, 0.0), normal, uv));
        mesh.add_vertex(Vertex::new(Vector3::new(1.0, 0.0, 0.0), normal, uv));
        mesh.add_vertex(Vertex::new(Vector3::new(0.0, 1.0, 0.0), normal, uv));
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn layout_is_80_byte_header_count_then_50_byte_facets() {
        let mut buf = Vec::new();
        buf.write_stl(&single_triangle()).unwrap();
        assert_eq!(80 + 4 + 50, buf.len());

        let mut count = &buf[80..84];
        assert_eq!(1, count.read_u32::<LittleEndian>().unwrap());
    }

    #[test]
    fn facet_normal_follows_ccw_winding() {
        let mut buf = Vec::new();
        buf.write_stl(&single_triangle()).unwrap();

        let mut normal = &buf[84..96];
        assert_eq!(0.0, normal.read_f32::<LittleEndian>().unwrap());
        assert_eq!(0.0, normal.read_f32::<LittleEndian>().unwrap());
        assert_eq!(1.0, normal.read_f32::<LittleEndian>().unwrap());
    }

    #[test]
    fn degenerate_facet_gets_zero_normal() {
        let mut mesh = Mesh::new();
        let normal = Vector3::new(0.0, 0.0, 1.0);
        let uv = Vector2::new(0.0, 0.0);
        let v = mesh.add_vertex(Vertex::new(Vector3::new(1.0, 2.0, 3.0), normal, uv));
        mesh.add_triangle(v, v, v);

        let mut buf = Vec::new();
        buf.write_stl(&mesh).unwrap();
        let mut normal = &buf[84..96];
        for _ in 0..3 {
            assert_eq!(0.0, normal.read_f32::<LittleEndian>().unwrap());
        }
    }
}
