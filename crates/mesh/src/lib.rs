mod geometry;
mod mesh;

pub use geometry::*;
pub use mesh::*;
