use crate::assets::Sprite;
use crate::camera::{Camera, CameraUniform};
use game_core::Rect;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    /// Sprite covering `rect`, its texels multiplied by `tint`
    pub fn from_rect(rect: &Rect, tint: [f32; 4]) -> Self {
        Self {
            transform: [rect.min.x, rect.min.y, rect.size.x, rect.size.y],
            tint,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub left_paddle: Buffer,
    pub right_paddle: Buffer,
    pub ball: Buffer,
}

/// A decoded sprite living on the GPU, ready to bind
pub struct SpriteTexture {
    #[allow(dead_code)]
    pub texture: Texture,
    pub bind_group: BindGroup,
}

pub struct SpriteTextures {
    pub left_paddle: SpriteTexture,
    pub right_paddle: SpriteTexture,
    pub ball: SpriteTexture,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffers
    let instance_buffer = |label: &str| {
        device.create_buffer(&BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<InstanceData>() as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };

    GameBuffers {
        camera: camera_buffer,
        left_paddle: instance_buffer("Left Paddle Instance Buffer"),
        right_paddle: instance_buffer("Right Paddle Instance Buffer"),
        ball: instance_buffer("Ball Instance Buffer"),
    }
}

/// Linear filtering for scaled sprites
pub fn create_sampler(device: &Device) -> Sampler {
    device.create_sampler(&SamplerDescriptor {
        label: Some("Sprite Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Linear,
        min_filter: FilterMode::Linear,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    })
}

pub fn create_sprite_texture(
    device: &Device,
    queue: &Queue,
    layout: &BindGroupLayout,
    sampler: &Sampler,
    sprite: &Sprite,
    label: &str,
) -> SpriteTexture {
    let size = Extent3d {
        width: sprite.width,
        height: sprite.height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::Rgba8UnormSrgb,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        &sprite.pixels,
        TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * sprite.width),
            rows_per_image: Some(sprite.height),
        },
        size,
    );

    let view = texture.create_view(&TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(&view),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(sampler),
            },
        ],
    });

    SpriteTexture {
        texture,
        bind_group,
    }
}
