use bytemuck::{Pod, Zeroable};

use crate::geometry::Rect;

/// Per-instance clip bounds, bound at shader location 1.
///
/// Layout is (x_min, x_max, y_min, y_max); the vertex stage turns each bound
/// into one signed edge distance, so the order here is part of the shader
/// interface.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ClipInstance {
    pub bounds: [f32; 4],
}

impl ClipInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            bounds: [rect.x_min(), rect.x_max(), rect.y_min(), rect.y_max()],
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ClipInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Ordered set of clip rectangles. Each rectangle becomes one draw instance,
/// and the drawn result is the union of the quad intersected with each rect.
#[derive(Clone, Debug, Default)]
pub struct ClipRegion {
    rects: Vec<Rect>,
}

impl ClipRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three hard-coded rectangles shown by the demo window.
    pub fn demo() -> Self {
        let mut region = Self::new();
        region.push(Rect::new(0.0, 0.0, 100.0, 100.0));
        region.push(Rect::new(300.0, 350.0, 100.0, 250.0));
        region.push(Rect::new(0.0, 400.0, 30.0, 150.0));
        region
    }

    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn rect_count(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Flatten into per-instance GPU data, preserving rectangle order.
    pub fn instances(&self) -> Vec<ClipInstance> {
        self.rects.iter().copied().map(ClipInstance::from_rect).collect()
    }
}
