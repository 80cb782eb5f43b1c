use crate::constants::{
    AUDIO_EMISSIVE_GAIN, BLOOM_RADIUS, BLOOM_THRESHOLD, DIM_RGB, FOG_DENSITY, SECONDARY_RGB,
};
use crate::core::{projection_matrix, FrameParams, InstanceDesc};
use web_sys as web;

mod helpers;
mod post;
mod scene;
mod targets;

use post::{PostBindGroups, PostResources, PostUniforms};
use scene::{create_scene_resources, SceneResources, SceneUniforms};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneResources,
    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        instances: &[InstanceDesc],
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
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
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

        let targets = RenderTargets::new(&device, width, height);
        let scene = create_scene_resources(
            &device,
            helpers::HDR_FORMAT,
            helpers::DEPTH_FORMAT,
            instances,
        );
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        let post_groups = post::build_bind_groups(&device, &post, &targets);
        log::info!(
            "[gpu] ready {}x{} format={:?} instances={}",
            width,
            height,
            format,
            scene.instance_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            post,
            post_groups,
            width,
            height,
        })
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
            self.targets.recreate(&self.device, width, height);
            self.post_groups = post::build_bind_groups(&self.device, &self.post, &self.targets);
        }
    }

    pub fn render(&mut self, frame: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let bg = frame.mood.background_rgb;
        let clear = wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: 1.0,
        };
        self.write_scene_uniforms(frame);
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.scene.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.scene.instance_buffer.slice(..));
            rpass.draw(0..self.scene.vertex_count, 0..self.scene.instance_count);
        }

        let (bw, bh) = targets::bloom_size(self.width, self.height);
        let base = PostUniforms {
            resolution: [bw as f32, bh as f32],
            bloom_strength: frame.bloom_strength,
            threshold: BLOOM_THRESHOLD,
            radius: BLOOM_RADIUS,
            chroma: if frame.passes.chromatic {
                frame.chromatic_shift
            } else {
                0.0
            },
            bloom_on: if frame.passes.bloom { 1.0 } else { 0.0 },
            ..Default::default()
        };

        if frame.passes.bloom {
            let u = &self.post.uniforms;
            post::write_post_uniforms(&self.queue, &u.bright, base);
            post::write_post_uniforms(
                &self.queue,
                &u.blur_h,
                PostUniforms {
                    blur_dir: [1.0, 0.0],
                    ..base
                },
            );
            post::write_post_uniforms(
                &self.queue,
                &u.blur_v,
                PostUniforms {
                    blur_dir: [0.0, 1.0],
                    ..base
                },
            );
            // bright pass -> bloom_a
            post::blit(
                &mut encoder,
                "bright_pass",
                &self.targets.bloom_a_view,
                wgpu::Color::BLACK,
                &self.post.bright_pipeline,
                &self.post_groups.bright,
                None,
            );
            // blur horizontal bloom_a -> bloom_b
            post::blit(
                &mut encoder,
                "blur_h",
                &self.targets.bloom_b_view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_groups.blur_h,
                None,
            );
            // blur vertical bloom_b -> bloom_a
            post::blit(
                &mut encoder,
                "blur_v",
                &self.targets.bloom_a_view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_groups.blur_v,
                None,
            );
        }

        post::write_post_uniforms(
            &self.queue,
            &self.post.uniforms.composite,
            PostUniforms {
                resolution: [self.width as f32, self.height as f32],
                ..base
            },
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            clear,
            &self.post.composite_pipeline,
            &self.post_groups.composite,
            Some(&self.post_groups.bloom_only),
        );

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }

    fn write_scene_uniforms(&self, frame: &FrameParams) {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view_proj = projection_matrix(aspect) * frame.view;
        let rgba = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        let eye = frame.camera_eye;
        let u = SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            groups: frame.groups.map(|m| m.to_cols_array_2d()),
            accent: rgba(frame.mood.accent_rgb),
            secondary: rgba(SECONDARY_RGB),
            dim: rgba(DIM_RGB),
            background: rgba(frame.mood.background_rgb),
            params: [
                frame.elapsed_sec,
                frame.audio_pulse,
                frame.mood.distortion,
                FOG_DENSITY,
            ],
            eye: [eye.x, eye.y, eye.z, AUDIO_EMISSIVE_GAIN],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}
