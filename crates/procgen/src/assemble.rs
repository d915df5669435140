use lathe_mesh::{Mesh, Vertex};

/// One sub-shape's vertices and triangles, indexed in its own local space
/// starting at zero. Sub-shapes know nothing about where they land in the
/// shared buffer; the [`Assembler`] applies the offset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shape {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Shape {
    /// Appends a vertex and returns its local index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }
}

/// Concatenates independent sub-shapes into one shared vertex/index buffer
/// pair, translating each shape's indices by the number of vertices emitted
/// before it.
#[derive(Debug, Default)]
pub struct Assembler {
    mesh: Mesh,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sub-shape and returns the base index its vertices landed
    /// at in the shared buffer.
    pub fn push_shape(&mut self, shape: Shape) -> u32 {
        debug_assert!(shape
            .indices
            .iter()
            .all(|&i| (i as usize) < shape.vertices.len()));

        let base = self.mesh.vertices.len() as u32;
        self.mesh.vertices.extend(shape.vertices);
        self.mesh
            .indices
            .extend(shape.indices.into_iter().map(|i| i + base));
        base
    }

    /// Appends triangles that address vertices already in the shared
    /// buffer, such as cap fans stitched between previously pushed walls.
    pub fn push_indices(&mut self, indices: &[u32]) {
        debug_assert_eq!(0, indices.len() % 3);
        self.mesh.indices.extend_from_slice(indices);
    }

    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertices.len() as u32
    }

    pub fn finish(self) -> Mesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_mesh::{Vector2, Vector3};

    fn vertex(x: f32) -> Vertex {
        Vertex::new(
            Vector3::new(x, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector2::new(0.0, 0.0),
        )
    }

    fn triangle_shape(x0: f32) -> Shape {
        let mut shape = Shape::default();
        let a = shape.add_vertex(vertex(x0));
        let b = shape.add_vertex(vertex(x0 + 1.0));
        let c = shape.add_vertex(vertex(x0 + 2.0));
        shape.add_triangle(a, b, c);
        shape
    }

    #[test]
    fn shapes_are_offset_by_running_vertex_count() {
        let mut assembler = Assembler::new();
        let first = assembler.push_shape(triangle_shape(0.0));
        let second = assembler.push_shape(triangle_shape(10.0));
        assert_eq!(0, first);
        assert_eq!(3, second);

        let mesh = assembler.finish();
        assert_eq!(vec![0, 1, 2, 3, 4, 5], mesh.indices);
        assert!(mesh.is_well_formed());
    }

    #[test]
    fn raw_indices_pass_through_untranslated() {
        let mut assembler = Assembler::new();
        assembler.push_shape(triangle_shape(0.0));
        assembler.push_shape(triangle_shape(10.0));
        assembler.push_indices(&[0, 3, 5]);

        let mesh = assembler.finish();
        assert_eq!(&[0, 3, 5], &mesh.indices[6..]);
        assert!(mesh.is_well_formed());
    }
}
