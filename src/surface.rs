type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Parameters of the instanced draw issued every frame.
///
/// `instance_count` must always equal the clip region's rectangle count; a
/// mismatch either reads past the clip buffer or silently drops clip rects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawParams {
    pub vertex_count: u32,
    pub instance_count: u32,
}

/// Minimal lifecycle interface between the rendering logic and whatever
/// windowing toolkit hosts it. Initialization maps to the implementor's
/// constructor and teardown to `Drop`.
pub trait GraphicsSurface {
    /// Render one frame into the current drawable.
    fn on_paint(&mut self) -> Result<()>;

    /// Drawable size changed; geometry and clip buffers stay untouched.
    fn on_resize(&mut self, width: u32, height: u32);

    /// The draw the next paint will issue.
    fn draw_params(&self) -> DrawParams;
}
