use bytemuck::{Pod, Zeroable};

/// Axis-aligned rectangle in pixel coordinates, stored as origin + extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x_min(&self) -> f32 {
        self.x
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_min(&self) -> f32 {
        self.y
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x_min() && x <= self.x_max() && y >= self.y_min() && y <= self.y_max()
    }
}

/// Per-vertex data: a 2D position in pixel space, bound at shader location 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Two counter-ordered triangles covering `rect`, as six vertices.
///
/// The quad is built once at startup and never changes; only the projection
/// matrix tracks the drawable size afterwards.
pub fn quad_vertices(rect: Rect) -> [Vertex; 6] {
    let (x0, y0) = (rect.x_min(), rect.y_min());
    let (x1, y1) = (rect.x_max(), rect.y_max());

    [
        // First triangle.
        Vertex { position: [x0, y0] },
        Vertex { position: [x1, y0] },
        Vertex { position: [x1, y1] },
        // Second triangle.
        Vertex { position: [x0, y0] },
        Vertex { position: [x1, y1] },
        Vertex { position: [x0, y1] },
    ]
}
