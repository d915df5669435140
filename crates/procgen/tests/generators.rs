use lathe::{generate_sphere, generate_vessel, SphereConfig, VesselConfig};

#[test]
fn sphere_buffers_are_upload_ready() {
    let mesh = generate_sphere(&SphereConfig::default()).unwrap();
    assert!(mesh.is_well_formed());
    // 32 bytes per vertex, 4 per index.
    assert_eq!(mesh.vertex_count() * 32, mesh.vertex_bytes().len());
    assert_eq!(mesh.indices.len() * 4, mesh.index_bytes().len());
}

#[test]
fn vessel_buffers_are_upload_ready() {
    let mesh = generate_vessel(&VesselConfig::default()).unwrap();
    assert!(mesh.is_well_formed());
    assert_eq!(mesh.vertex_count() * 32, mesh.vertex_bytes().len());
    assert_eq!(mesh.indices.len() * 4, mesh.index_bytes().len());
}

#[test]
fn vessel_geometry_stays_inside_its_radii() {
    let config = VesselConfig::default();
    let mesh = generate_vessel(&config).unwrap();

    let reach = config.internal_radius + config.torus_radius + config.tube_radius;
    let max_radius = config.external_radius.max(reach);
    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        let r = (x * x + z * z).sqrt();
        assert!(r <= max_radius + 1e-5);
        assert!(y >= -config.torus_radius - config.tube_radius - 1e-5);
        assert!(y <= config.height + config.torus_radius + config.tube_radius + 1e-5);
    }
}
