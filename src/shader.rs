//! Embedded WGSL sources for the clip-stamp pipeline.
//!
//! Two variants of the same shader interface: the preferred one culls on the
//! rasterizer through hardware clip distances, the fallback computes the same
//! four signed edge distances and discards in the fragment stage on backends
//! that do not expose clip distances (GL/GLES-class adapters). The variant is
//! picked once at initialization and baked into the pipeline.
//!
//! Shader interface, matched by the CPU-side buffer layouts:
//! - `@location(0) position: vec2<f32>`: per-vertex quad position
//! - `@location(1) clip_rect: vec4<f32>`: per-instance (xMin, xMax, yMin, yMax)
//! - `@group(0) @binding(0)`: projection matrix uniform

/// Hardware clip-plane variant. Requires `wgpu::Features::CLIP_DISTANCES`.
pub const CLIP_DISTANCE_SHADER: &str = r#"
enable clip_distances;

struct Projection {
    matrix: mat4x4<f32>,
};

@group(0) @binding(0) var<uniform> projection: Projection;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) clip_rect: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @builtin(clip_distances) clip_distances: array<f32, 4>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_distances[0] = vertex.position.x - vertex.clip_rect.x;
    out.clip_distances[1] = vertex.clip_rect.y - vertex.position.x;
    out.clip_distances[2] = vertex.position.y - vertex.clip_rect.z;
    out.clip_distances[3] = vertex.clip_rect.w - vertex.position.y;

    out.position = projection.matrix * vec4<f32>(vertex.position, 0.0, 1.0);
    return out;
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.0, 0.0, 1.0);
}
"#;

/// Fallback for adapters without clip distances: same edge distances carried
/// as a varying, culled with a fragment discard instead of clip planes.
pub const FRAGMENT_DISCARD_SHADER: &str = r#"
struct Projection {
    matrix: mat4x4<f32>,
};

@group(0) @binding(0) var<uniform> projection: Projection;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) clip_rect: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) edge_distances: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.edge_distances = vec4<f32>(
        vertex.position.x - vertex.clip_rect.x,
        vertex.clip_rect.y - vertex.position.x,
        vertex.position.y - vertex.clip_rect.z,
        vertex.clip_rect.w - vertex.position.y
    );

    out.position = projection.matrix * vec4<f32>(vertex.position, 0.0, 1.0);
    return out;
}

@fragment
fn fs_main(frag: VertexOutput) -> @location(0) vec4<f32> {
    if (any(frag.edge_distances < vec4<f32>(0.0))) {
        discard;
    }
    return vec4<f32>(1.0, 0.0, 0.0, 1.0);
}
"#;

/// Shading variant selected once at initialization from the device features.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderVariant {
    ClipDistance,
    FragmentDiscard,
}

impl ShaderVariant {
    pub fn for_features(features: wgpu::Features) -> Self {
        if features.contains(wgpu::Features::CLIP_DISTANCES) {
            ShaderVariant::ClipDistance
        } else {
            ShaderVariant::FragmentDiscard
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            ShaderVariant::ClipDistance => CLIP_DISTANCE_SHADER,
            ShaderVariant::FragmentDiscard => FRAGMENT_DISCARD_SHADER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShaderVariant::ClipDistance => "clip-distance shader",
            ShaderVariant::FragmentDiscard => "fragment-discard shader",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_selection() {
        assert_eq!(
            ShaderVariant::for_features(wgpu::Features::CLIP_DISTANCES),
            ShaderVariant::ClipDistance
        );
        assert_eq!(
            ShaderVariant::for_features(wgpu::Features::empty()),
            ShaderVariant::FragmentDiscard
        );
        // Unrelated features do not trigger the hardware path.
        assert_eq!(
            ShaderVariant::for_features(wgpu::Features::TIMESTAMP_QUERY),
            ShaderVariant::FragmentDiscard
        );
    }

    #[test]
    fn test_sources_match_variants() {
        assert!(ShaderVariant::ClipDistance
            .source()
            .contains("enable clip_distances"));
        assert!(ShaderVariant::FragmentDiscard.source().contains("discard"));
        assert!(!ShaderVariant::FragmentDiscard
            .source()
            .contains("enable clip_distances"));
    }

    #[test]
    fn test_sources_share_the_wire_contract() {
        for variant in [ShaderVariant::ClipDistance, ShaderVariant::FragmentDiscard] {
            let source = variant.source();
            assert!(source.contains("@location(0) position: vec2<f32>"));
            assert!(source.contains("@location(1) clip_rect: vec4<f32>"));
            assert!(source.contains("@group(0) @binding(0)"));
            assert!(source.contains("vs_main"));
            assert!(source.contains("fs_main"));
        }
    }
}
