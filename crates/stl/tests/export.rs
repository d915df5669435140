use byteorder::{LittleEndian, ReadBytesExt};
use lathe::{generate_sphere, SphereConfig};
use lathe_stl::StlWriter;

#[test]
fn export_sphere() {
    let config = SphereConfig {
        vertical_cuts: 8,
        horizontal_cuts: 16,
    };
    let mesh = generate_sphere(&config).unwrap();

    let mut buf = Vec::new();
    buf.write_stl(&mesh).unwrap();

    // Header, facet count, then one 50 byte record per triangle.
    assert_eq!(80 + 4 + 50 * mesh.triangle_count(), buf.len());
    let mut count = &buf[80..84];
    assert_eq!(
        mesh.triangle_count() as u32,
        count.read_u32::<LittleEndian>().unwrap()
    );
}
