use std::f32::consts::PI;

use lathe_mesh::{Mesh, Vector2, Vector3, Vertex};

use crate::config::SphereConfig;
use crate::error::GeometryError;

/// Generates a unit UV sphere centered at the origin.
///
/// Emits exactly `vertical_cuts * horizontal_cuts` vertices and two
/// triangles per `(ring, column)` cell. Position and normal coincide
/// because the sphere is a unit-radius surface around the origin. UVs use
/// the equirectangular mapping `((atan2(z, x) + pi) / 2pi, acos(y) / pi)`,
/// which puts the texture seam at `phi = pi`.
///
/// Columns wrap modularly so the last column's cells close the seam back
/// to column zero. The band below the last ring has no further ring of
/// vertices; its row index is clamped to the last ring, which collapses
/// those cells to degenerate triangles instead of indexing past the
/// buffer.
pub fn generate_sphere(config: &SphereConfig) -> Result<Mesh, GeometryError> {
    config.validate()?;

    let rings = config.vertical_cuts;
    let columns = config.horizontal_cuts;
    let theta_step = PI / rings as f32;
    let phi_step = 2.0 * PI / columns as f32;

    let mut mesh = Mesh::new();
    for i in 0..rings {
        let theta = i as f32 * theta_step;
        let next_ring = (i + 1).min(rings - 1);
        for j in 0..columns {
            let phi = j as f32 * phi_step;
            let x = theta.sin() * phi.cos();
            let z = theta.sin() * phi.sin();
            let y = theta.cos();

            let position = Vector3::new(x, y, z);
            let uv = Vector2::new((z.atan2(x) + PI) / (2.0 * PI), y.acos() / PI);
            mesh.add_vertex(Vertex::new(position, position, uv));

            let prev = (j + columns - 1) % columns;
            let here = i * columns + j;
            let here_prev = i * columns + prev;
            let below = next_ring * columns + j;
            let below_prev = next_ring * columns + prev;

            mesh.add_triangle(here, below, below_prev);
            mesh.add_triangle(here, here_prev, below_prev);
        }
    }

    log::debug!(
        "sphere: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    debug_assert!(mesh.is_well_formed());
    Ok(mesh)
}
