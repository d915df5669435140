/// Generation failures.
///
/// All of these are caller-supplied configuration problems surfaced before
/// or during a single generation pass; nothing is retried and no partial
/// mesh is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("{name} must be greater than zero")]
    NonPositiveParameter { name: &'static str },

    #[error("external radius must be larger than internal radius")]
    RadiusOrder,

    #[error("bottom border must be smaller than the vessel height")]
    BorderTooTall,

    #[error("degenerate surface normal at sample ({u}, {v})")]
    DegenerateNormal { u: u32, v: u32 },
}
