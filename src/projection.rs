use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Orthographic projection mapping the drawable rect to NDC with y pointing
/// down: pixel (0, 0) lands at (-1, 1) and (width, height) at (1, -1).
pub fn ortho_for_drawable(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0)
}

/// Uniform buffer contents for the vertex stage.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ProjectionUniform {
    pub matrix: [[f32; 4]; 4],
}

impl ProjectionUniform {
    pub fn new(matrix: Mat4) -> Self {
        Self {
            matrix: matrix.to_cols_array_2d(),
        }
    }

    /// Recomputed every frame from the current drawable size.
    pub fn for_drawable(width: u32, height: u32) -> Self {
        Self::new(ortho_for_drawable(width as f32, height as f32))
    }
}
