use std::f32::consts::PI;

use cgmath::InnerSpace;
use lathe_mesh::{Mesh, Vector2, Vector3, Vertex};

use crate::assemble::{Assembler, Shape};
use crate::config::VesselConfig;
use crate::error::GeometryError;

/// Vertices per wall column: the side-facing pair carries the radial
/// normal, the cap-facing pair carries the vertical normal so the rim and
/// bottom keep hard edges.
const WALL_COLUMN_VERTS: u32 = 4;
const SLOT_TOP_SIDE: u32 = 0;
const SLOT_TOP_CAP: u32 = 1;
const SLOT_BOTTOM_SIDE: u32 = 2;
const SLOT_BOTTOM_CAP: u32 = 3;

/// Normals below this length are treated as degenerate rather than
/// normalized into NaNs.
const NORMAL_EPSILON: f32 = 1e-6;

/// Which way a cylinder wall's side faces point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing {
    Outward,
    Inward,
}

/// Generates the composite vessel: an outer and an inner cylinder wall, a
/// solid bottom with a raised inner floor, a flat rim annulus joining the
/// two walls, and a half-torus handle, all concatenated into one buffer
/// pair.
///
/// The walls, the two bottom center poles and the handle each come from a
/// pure sub-shape function; the fans and the annulus are index-only and
/// stitch cap-facing wall vertices once the assembler has fixed their base
/// offsets.
pub fn generate_vessel(config: &VesselConfig) -> Result<Mesh, GeometryError> {
    config.validate()?;

    let mut assembler = Assembler::new();

    let outer = assembler.push_shape(wall(
        config.external_radius,
        0.0,
        config.height,
        config.definition,
        Facing::Outward,
    ));
    let inner = assembler.push_shape(wall(
        config.internal_radius,
        config.bottom_border,
        config.height,
        config.definition,
        Facing::Inward,
    ));
    let bottom_pole = assembler.push_shape(pole(0.0, Facing::Outward));
    let floor_pole = assembler.push_shape(pole(config.bottom_border, Facing::Inward));

    assembler.push_indices(&fan_indices(bottom_pole, outer, config.definition, false));
    assembler.push_indices(&fan_indices(floor_pole, inner, config.definition, true));
    assembler.push_indices(&annulus_indices(outer, inner, config.definition));

    assembler.push_shape(handle(config)?);

    let mesh = assembler.finish();
    log::debug!(
        "vessel: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    debug_assert!(mesh.is_well_formed());
    Ok(mesh)
}

/// One cylinder wall: `definition` columns of four vertices each, with two
/// side triangles per column. Columns wrap modularly so the last column
/// closes the seam against column zero. The cap-facing slots emit no faces
/// here; the fans and the annulus index into them after assembly.
///
/// An inward-facing wall flips both the radial normals and the winding.
/// The bottom cap-facing normal points down on the outer wall (the solid
/// bottom is seen from below) and up on the inner wall (the floor is seen
/// from inside).
fn wall(radius: f32, y_bottom: f32, y_top: f32, definition: u32, facing: Facing) -> Shape {
    let mut shape = Shape::default();
    let phi_step = 2.0 * PI / definition as f32;

    for i in 0..definition {
        let phi = i as f32 * phi_step;
        let (sin, cos) = phi.sin_cos();
        let radial = Vector3::new(cos, 0.0, sin);
        let (side_normal, bottom_cap_normal) = match facing {
            Facing::Outward => (radial, -Vector3::unit_y()),
            Facing::Inward => (-radial, Vector3::unit_y()),
        };
        let top = Vector3::new(radius * cos, y_top, radius * sin);
        let bottom = Vector3::new(radius * cos, y_bottom, radius * sin);
        let u = i as f32 / definition as f32;

        shape.add_vertex(Vertex::new(top, side_normal, Vector2::new(u, 1.0)));
        shape.add_vertex(Vertex::new(top, Vector3::unit_y(), cap_uv(cos, sin)));
        shape.add_vertex(Vertex::new(bottom, side_normal, Vector2::new(u, 0.0)));
        shape.add_vertex(Vertex::new(bottom, bottom_cap_normal, cap_uv(cos, sin)));
    }

    for i in 0..definition {
        let col = i * WALL_COLUMN_VERTS;
        let next = ((i + 1) % definition) * WALL_COLUMN_VERTS;
        let (t0, t1) = (col + SLOT_TOP_SIDE, next + SLOT_TOP_SIDE);
        let (b0, b1) = (col + SLOT_BOTTOM_SIDE, next + SLOT_BOTTOM_SIDE);
        match facing {
            Facing::Outward => {
                shape.add_triangle(t0, t1, b0);
                shape.add_triangle(t1, b1, b0);
            }
            Facing::Inward => {
                shape.add_triangle(t0, b0, t1);
                shape.add_triangle(t1, b0, b1);
            }
        }
    }

    shape
}

/// A single center vertex on the vessel axis; `Outward` is the down-facing
/// bottom pole, `Inward` the up-facing floor pole.
fn pole(y: f32, facing: Facing) -> Shape {
    let normal = match facing {
        Facing::Outward => -Vector3::unit_y(),
        Facing::Inward => Vector3::unit_y(),
    };
    let mut shape = Shape::default();
    shape.add_vertex(Vertex::new(
        Vector3::new(0.0, y, 0.0),
        normal,
        Vector2::new(0.5, 0.5),
    ));
    shape
}

/// Fan triangulation from a center pole over a wall's bottom cap-facing
/// vertices. Indices are absolute; `wall_base` is the wall's offset in the
/// shared buffer.
fn fan_indices(center: u32, wall_base: u32, definition: u32, up: bool) -> Vec<u32> {
    let mut indices = Vec::with_capacity(definition as usize * 3);
    for i in 0..definition {
        let rim = wall_base + i * WALL_COLUMN_VERTS + SLOT_BOTTOM_CAP;
        let rim_next = wall_base + ((i + 1) % definition) * WALL_COLUMN_VERTS + SLOT_BOTTOM_CAP;
        if up {
            indices.extend_from_slice(&[center, rim_next, rim]);
        } else {
            indices.extend_from_slice(&[center, rim, rim_next]);
        }
    }
    indices
}

/// The flat ring joining the outer wall's top rim to the inner wall's,
/// visible from above. Index-only, like the fans.
fn annulus_indices(outer_base: u32, inner_base: u32, definition: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(definition as usize * 6);
    for i in 0..definition {
        let next = (i + 1) % definition;
        let o = outer_base + i * WALL_COLUMN_VERTS + SLOT_TOP_CAP;
        let o_next = outer_base + next * WALL_COLUMN_VERTS + SLOT_TOP_CAP;
        let n = inner_base + i * WALL_COLUMN_VERTS + SLOT_TOP_CAP;
        let n_next = inner_base + next * WALL_COLUMN_VERTS + SLOT_TOP_CAP;
        indices.extend_from_slice(&[o, n, o_next]);
        indices.extend_from_slice(&[o_next, n, n_next]);
    }
    indices
}

/// The half-torus handle.
///
/// `u` sweeps the major circle over half a revolution; the last ring emits
/// vertices but no outgoing faces, so there is no wraparound in `u`. `v`
/// sweeps the full tube circle with modular wraparound. The major circle
/// lies in the XY plane, offset horizontally by the internal radius and
/// centered at half the vessel height, so the open half faces the wall.
///
/// Normals are the normalized cross product of the two analytic tangents;
/// this is the one surface where the normal is not trivially derived from
/// the position.
fn handle(config: &VesselConfig) -> Result<Shape, GeometryError> {
    let def = config.torus_definition;
    let major_step = PI / def as f32;
    let minor_step = 2.0 * PI / def as f32;
    let center = Vector3::new(config.internal_radius, config.height / 2.0, 0.0);

    let mut shape = Shape::default();
    for u in 0..=def {
        let a = u as f32 * major_step - PI / 2.0;
        let (sin_a, cos_a) = a.sin_cos();
        for v in 0..def {
            let b = v as f32 * minor_step;
            let (sin_b, cos_b) = b.sin_cos();
            let ring = config.torus_radius + config.tube_radius * cos_b;
            let position =
                center + Vector3::new(ring * cos_a, ring * sin_a, config.tube_radius * sin_b);

            let major_tangent = Vector3::new(-ring * sin_a, ring * cos_a, 0.0);
            let minor_tangent = Vector3::new(
                -config.tube_radius * sin_b * cos_a,
                -config.tube_radius * sin_b * sin_a,
                config.tube_radius * cos_b,
            );
            let normal = major_tangent.cross(minor_tangent);
            if normal.magnitude() < NORMAL_EPSILON {
                return Err(GeometryError::DegenerateNormal { u, v });
            }

            let uv = Vector2::new(u as f32 / def as f32, v as f32 / def as f32);
            shape.add_vertex(Vertex::new(position, normal.normalize(), uv));
        }
    }

    for u in 0..def {
        for v in 0..def {
            let v_next = (v + 1) % def;
            let i00 = u * def + v;
            let i10 = (u + 1) * def + v;
            let i11 = (u + 1) * def + v_next;
            let i01 = u * def + v_next;
            shape.add_triangle(i00, i10, i11);
            shape.add_triangle(i00, i11, i01);
        }
    }

    Ok(shape)
}

fn cap_uv(cos: f32, sin: f32) -> Vector2 {
    Vector2::new(0.5 + 0.5 * cos, 0.5 + 0.5 * sin)
}
