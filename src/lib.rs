pub mod app;
pub mod clip;
pub mod context;
pub mod geometry;
pub mod projection;
pub mod renderer;
pub mod shader;
pub mod surface;

pub use clip::{ClipInstance, ClipRegion};
pub use geometry::{quad_vertices, Rect, Vertex};
pub use projection::{ortho_for_drawable, ProjectionUniform};
pub use shader::ShaderVariant;
pub use surface::{DrawParams, GraphicsSurface};
