pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::assets::{Assets, Sprite};
use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::Mesh;
use game_core::{Config, Snapshot};
use resources::{GameBuffers, InstanceData, SpriteTextures};
use wgpu::*;
use winit::window::Window;

/// Fields drop top to bottom: textures and buffers first, then the device
/// and surface, and the window last.
pub struct Renderer {
    pub sprites: SpriteTextures,
    pub buffers: GameBuffers,
    pub quad: Mesh,

    // Pipelines
    pub sprite_pipeline: RenderPipeline,

    // Bind Groups
    pub camera_bind_group: BindGroup,

    // State
    pub last_instance_data: Option<(InstanceData, InstanceData, InstanceData)>,

    pub surface_config: SurfaceConfiguration,
    pub surface: Surface<'static>,
    pub queue: Queue,
    pub device: Device,
    pub window: Arc<Window>,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        assets: &Assets,
        config: &Config,
    ) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(window.clone()).await?;
        log::info!("Surface {}x{} ({:?})", ctx.size.0, ctx.size.1, ctx.config.format);

        // The simulation's screen always fills the window, whatever its pixel size
        let camera = Camera::screen(config.screen_width, config.screen_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let quad = Mesh::quad(&ctx.device, &ctx.queue);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let sampler = resources::create_sampler(&ctx.device);
        let sprite = |sprite: &Sprite, label: &str| {
            resources::create_sprite_texture(
                &ctx.device,
                &ctx.queue,
                &pipes.texture_layout,
                &sampler,
                sprite,
                label,
            )
        };
        let sprites = SpriteTextures {
            left_paddle: sprite(&assets.left_paddle, "Left Paddle Texture"),
            right_paddle: sprite(&assets.right_paddle, "Right Paddle Texture"),
            ball: sprite(&assets.ball, "Ball Texture"),
        };

        Ok(Self {
            sprites,
            buffers,
            quad,
            sprite_pipeline: pipes.sprite_pipeline,
            camera_bind_group,
            last_instance_data: None,
            surface_config: ctx.config,
            surface: ctx.surface,
            queue: ctx.queue,
            device: ctx.device,
            window,
        })
    }

    /// Reapply the surface configuration after the surface was lost or
    /// the window changed size
    pub fn reconfigure(&mut self) {
        let size = self.window.inner_size();
        if size.width > 0 && size.height > 0 {
            self.surface_config.width = size.width;
            self.surface_config.height = size.height;
        }
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, snapshot: &Snapshot) -> Result<(), ClientError> {
        draw::draw_frame(self, snapshot)
    }
}
