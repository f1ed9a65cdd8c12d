use app_core::geometry::Vertex;
use app_core::{GradientMap, ObjectKind, RenderFrame};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod targets;

use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ToonGlobals {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    base_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleGlobals {
    view_proj: [[f32; 4]; 4],
    color: [f32; 4],
    size: f32,
    aspect: f32,
    _pad: [f32; 2],
}

// Two triangles covering a unit sprite centered on the particle.
const SPRITE_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    _gradient_tex: wgpu::Texture,

    toon_pipeline: wgpu::RenderPipeline,
    toon_globals: wgpu::Buffer,
    toon_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,

    particle_pipeline: wgpu::RenderPipeline,
    particle_globals: wgpu::Buffer,
    particle_bind_group: wgpu::BindGroup,
    sprite_vb: wgpu::Buffer,
    particle_vb: wgpu::Buffer,
    particle_count: u32,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        gradient: &GradientMap,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // The canvas is transparent so the page background shows through.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        // ---------------- Toon meshes ----------------
        let toon_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("toon_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::TOON_WGSL.into()),
        });
        let (gradient_tex, gradient_view) =
            helpers::create_gradient_texture(&device, &queue, gradient.texels());
        // Nearest filtering keeps the bands hard-edged.
        let gradient_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("gradient_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let toon_bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("toon_bgl0"),
            entries: &[
                helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let toon_bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("toon_bgl1"),
            entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let toon_globals = helpers::uniform_buffer(
            &device,
            "toon_globals",
            std::mem::size_of::<ToonGlobals>() as u64,
        );
        let toon_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("toon_bg0"),
            layout: &toon_bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: toon_globals.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&gradient_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&gradient_sampler),
                },
            ],
        });
        let toon_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("toon_pl"),
            bind_group_layouts: &[&toon_bgl0, &toon_bgl1],
            push_constant_ranges: &[],
        });
        let mesh_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        };
        let toon_pipeline = helpers::make_scene_pipeline(
            &device,
            "toon_pipeline",
            &toon_pl,
            &toon_shader,
            &[mesh_layout],
            format,
        );

        let meshes = ObjectKind::SECTIONS
            .iter()
            .map(|kind| {
                let mesh = kind.mesh();
                let uniforms = helpers::uniform_buffer(
                    &device,
                    "object_uniforms",
                    std::mem::size_of::<ObjectUniforms>() as u64,
                );
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("toon_bg1"),
                    layout: &toon_bgl1,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniforms.as_entire_binding(),
                    }],
                });
                GpuMesh {
                    vertex_buffer: helpers::vertex_buffer(&device, "mesh_vb", &mesh.vertices),
                    index_buffer: helpers::index_buffer(&device, "mesh_ib", &mesh.indices),
                    index_count: mesh.indices.len() as u32,
                    uniforms,
                    bind_group,
                }
            })
            .collect();

        // ---------------- Particles ----------------
        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::PARTICLES_WGSL.into()),
        });
        let particle_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particle_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let particle_globals = helpers::uniform_buffer(
            &device,
            "particle_globals",
            std::mem::size_of::<ParticleGlobals>() as u64,
        );
        let particle_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particle_bg"),
            layout: &particle_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: particle_globals.as_entire_binding(),
            }],
        });
        let particle_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle_pl"),
            bind_group_layouts: &[&particle_bgl],
            push_constant_ranges: &[],
        });
        let particle_buffers = [
            // slot 0: sprite corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x2],
            },
            // slot 1: particle centers
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![1 => Float32x3],
            },
        ];
        let particle_pipeline = helpers::make_scene_pipeline(
            &device,
            "particle_pipeline",
            &particle_pl,
            &particle_shader,
            &particle_buffers,
            format,
        );
        let sprite_vb = helpers::vertex_buffer(&device, "sprite_vb", &SPRITE_CORNERS);
        let particle_vb = helpers::vertex_buffer(&device, "particle_vb", &[[0.0_f32; 3]]);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            _gradient_tex: gradient_tex,
            toon_pipeline,
            toon_globals,
            toon_bind_group,
            meshes,
            particle_pipeline,
            particle_globals,
            particle_bind_group,
            sprite_vb,
            particle_vb,
            particle_count: 0,
            width,
            height,
        })
    }

    /// Replace the particle instance buffer.
    pub fn set_particles(&mut self, positions: &[Vec3]) {
        let data: Vec<[f32; 3]> = positions.iter().map(|p| p.to_array()).collect();
        if data.is_empty() {
            self.particle_count = 0;
            return;
        }
        self.particle_vb = helpers::vertex_buffer(&self.device, "particle_vb", &data);
        self.particle_count = data.len() as u32;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
            log::info!("[render] surface resized to {}x{}", width, height);
        }
    }

    pub fn render(&mut self, frame: &RenderFrame) -> Result<(), wgpu::SurfaceError> {
        let view_proj = frame.view_proj.to_cols_array_2d();
        let c = frame.material_color;
        let light = frame.light;
        let lc = light.color * light.intensity;
        let globals = ToonGlobals {
            view_proj,
            light_dir: light.direction.extend(0.0).to_array(),
            light_color: [lc.x, lc.y, lc.z, 1.0],
            base_color: [c[0], c[1], c[2], 1.0],
        };
        self.queue
            .write_buffer(&self.toon_globals, 0, bytemuck::bytes_of(&globals));
        for (mesh, model) in self.meshes.iter().zip(&frame.models) {
            let u = ObjectUniforms {
                model: model.to_cols_array_2d(),
            };
            self.queue
                .write_buffer(&mesh.uniforms, 0, bytemuck::bytes_of(&u));
        }
        let pg = ParticleGlobals {
            view_proj,
            color: [c[0], c[1], c[2], 1.0],
            size: frame.particle_size,
            aspect: frame.aspect.max(1e-3),
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.particle_globals, 0, bytemuck::bytes_of(&pg));

        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.toon_pipeline);
            rpass.set_bind_group(0, &self.toon_bind_group, &[]);
            for mesh in &self.meshes {
                rpass.set_bind_group(1, &mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            if self.particle_count > 0 {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_bind_group(0, &self.particle_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.sprite_vb.slice(..));
                rpass.set_vertex_buffer(1, self.particle_vb.slice(..));
                rpass.draw(0..SPRITE_CORNERS.len() as u32, 0..self.particle_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
