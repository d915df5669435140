//! Procedural generation of revolution-solid triangle meshes.
//!
//! Two generators are provided: a unit UV sphere and a composite vessel
//! (two concentric cylinder walls, a solid bottom, a flat rim annulus and a
//! half-torus handle). Both emit a single [`lathe_mesh::Mesh`] buffer pair
//! that a renderer can upload as-is; nothing here knows about textures,
//! shaders or transforms.

mod assemble;
mod config;
mod error;
mod sphere;
mod vessel;

pub use assemble::{Assembler, Shape};
pub use config::{SphereConfig, VesselConfig};
pub use error::GeometryError;
pub use sphere::generate_sphere;
pub use vessel::generate_vessel;
