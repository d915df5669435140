use crate::geometry::Vertex;

/// An indexed triangle mesh.
///
/// The vertex buffer is append-only and exclusively owns its vertices; the
/// index buffer is a flat list of `u32` triples, one triple per triangle.
/// The order of the three indices within a triple determines the front-face
/// winding (counter-clockwise here). A generator may append a triangle
/// whose vertices have not been pushed yet, but by the time it hands the
/// mesh to a consumer every index must be inside the vertex buffer; see
/// [`Mesh::is_well_formed`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Appends one triangle's indices.
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if the index list forms whole triangles and every index is
    /// inside the vertex buffer.
    pub fn is_well_formed(&self) -> bool {
        let count = self.vertices.len() as u32;
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| i < count)
    }

    /// Iterates the mesh as resolved triangles.
    ///
    /// Panics on an out-of-range index; callers are expected to hold a
    /// well-formed mesh.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }

    /// Raw bytes of the vertex buffer, suitable for direct GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
