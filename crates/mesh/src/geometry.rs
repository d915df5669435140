pub type Vector3 = cgmath::Vector3<f32>;
pub type Vector2 = cgmath::Vector2<f32>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// A single mesh vertex.
///
/// Fields are plain float arrays rather than cgmath vectors so the type can
/// derive the bytemuck traits and a vertex buffer can be uploaded with a
/// single byte cast.
#[derive(Debug, PartialEq, Copy, Clone, bytemuck_derive::Pod, bytemuck_derive::Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vector3, normal: Vector3, uv: Vector2) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            uv: uv.into(),
        }
    }

    pub fn position(&self) -> Vector3 {
        Vector3::from(self.position)
    }

    pub fn normal(&self) -> Vector3 {
        Vector3::from(self.normal)
    }

    pub fn uv(&self) -> Vector2 {
        Vector2::from(self.uv)
    }
}

static_assertions::assert_eq_size!(Vertex, [f32; 8]);
