use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::clip::{ClipInstance, ClipRegion};
use crate::context::GpuContext;
use crate::geometry::{quad_vertices, Rect, Vertex};
use crate::projection::ProjectionUniform;
use crate::shader::ShaderVariant;
use crate::surface::{DrawParams, GraphicsSurface};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Pixel rect covered by the stamped quad. Fixed at startup; resizing the
/// window changes the projection, not the geometry.
const QUAD_RECT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

/// Renders a full-window quad stamped through a set of rectangular clip
/// windows, one draw instance per clip rect.
///
/// Geometry and clip buffers are built once in the constructor and stay
/// immutable; each paint only refreshes the projection uniform and records a
/// single instanced draw. All GPU resources are released on drop.
pub struct ClipRenderer {
    gpu: GpuContext,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    projection_bind_group: wgpu::BindGroup,
    projection_buffer: wgpu::Buffer,
    geometry_buffer: wgpu::Buffer,
    clip_buffer: wgpu::Buffer,
    variant: ShaderVariant,
    draw_params: DrawParams,
}

impl ClipRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;
        let gpu = GpuContext::new_with_surface(&instance, &surface).await?;

        let surface_config = Self::configure_surface(&gpu, &surface, size.width, size.height);

        let variant = ShaderVariant::for_features(gpu.features());
        log::info!("compiling {}", variant.label());

        let (pipeline, projection_bind_group, projection_buffer) =
            Self::create_pipeline(&gpu, surface_config.format, variant, size);

        let vertices = quad_vertices(QUAD_RECT);
        let geometry_buffer = gpu
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Quad Geometry Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let region = ClipRegion::demo();
        let instances = region.instances();
        let clip_buffer = gpu
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Clip Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            });

        // The draw must cover one instance per clip rect, no more, no less.
        let draw_params = DrawParams {
            vertex_count: vertices.len() as u32,
            instance_count: instances.len() as u32,
        };

        Ok(Self {
            gpu,
            surface,
            surface_config,
            pipeline,
            projection_bind_group,
            projection_buffer,
            geometry_buffer,
            clip_buffer,
            variant,
            draw_params,
        })
    }

    pub fn variant(&self) -> ShaderVariant {
        self.variant
    }

    fn configure_surface(
        gpu: &GpuContext,
        surface: &wgpu::Surface<'_>,
        width: u32,
        height: u32,
    ) -> wgpu::SurfaceConfiguration {
        let caps = surface.get_capabilities(gpu.adapter());
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &config);
        config
    }

    fn create_pipeline(
        gpu: &GpuContext,
        format: wgpu::TextureFormat,
        variant: ShaderVariant,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> (wgpu::RenderPipeline, wgpu::BindGroup, wgpu::Buffer) {
        let device = gpu.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(variant.label()),
            source: wgpu::ShaderSource::Wgsl(variant.source().into()),
        });

        let projection_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Projection Uniform Buffer"),
            contents: bytemuck::bytes_of(&ProjectionUniform::for_drawable(
                size.width.max(1),
                size.height.max(1),
            )),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Projection Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let projection_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Projection Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Clip Stamp Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Clip Stamp Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout(), ClipInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        (pipeline, projection_bind_group, projection_buffer)
    }

    fn render_frame(&mut self) -> Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Swapchain went stale (resize race, lost context); reconfigure
                // and let the next frame draw.
                self.surface
                    .configure(self.gpu.device(), &self.surface_config);
                return Ok(());
            }
            Err(e) => return Err(Box::new(e)),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let projection =
            ProjectionUniform::for_drawable(self.surface_config.width, self.surface_config.height);
        self.gpu
            .queue()
            .write_buffer(&self.projection_buffer, 0, bytemuck::bytes_of(&projection));

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Clip Stamp Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clip Stamp Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.projection_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.geometry_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.clip_buffer.slice(..));
            render_pass.draw(
                0..self.draw_params.vertex_count,
                0..self.draw_params.instance_count,
            );
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}

impl GraphicsSurface for ClipRenderer {
    fn on_paint(&mut self) -> Result<()> {
        self.render_frame()
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface
            .configure(self.gpu.device(), &self.surface_config);
    }

    fn draw_params(&self) -> DrawParams {
        self.draw_params
    }
}
