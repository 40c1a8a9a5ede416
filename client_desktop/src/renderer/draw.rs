use game_core::{LoopState, Snapshot};
use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;
use crate::error::ClientError;

/// Background behind the sprites; the fade starts from the same white
const PLAY_FIELD: Color = Color::WHITE;

/// Sprites are drawn half transparent while the game is paused
const PAUSED_TINT: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
const NO_TINT: [f32; 4] = [1.0; 4];

pub fn draw_frame(renderer: &mut Renderer, snapshot: &Snapshot) -> Result<(), ClientError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::warn!("Surface lost, reconfiguring");
            renderer.reconfigure();
            return Ok(());
        }
        Err(SurfaceError::OutOfMemory) => return Err(ClientError::OutOfMemory),
        Err(e) => {
            log::warn!("Skipping frame: {}", e);
            return Ok(());
        }
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    match snapshot.fade_level {
        // The fade covers the whole window; nothing else is drawn
        Some(level) => {
            let clear = fade_color(level, renderer.surface_config.format.is_srgb());
            clear_pass(&mut encoder, &view, clear);
        }
        None => {
            update_buffers(renderer, snapshot);
            let mut pass = begin_pass(&mut encoder, &view, PLAY_FIELD);
            draw_objects(renderer, &mut pass);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Grey level for the fade, 255 = white. On an sRGB surface the value is
/// linearised first so the presented byte equals `level`.
pub fn fade_color(level: f32, srgb_surface: bool) -> Color {
    let encoded = (level / 255.0).clamp(0.0, 1.0) as f64;
    let v = if srgb_surface {
        if encoded <= 0.04045 {
            encoded / 12.92
        } else {
            ((encoded + 0.055) / 1.055).powf(2.4)
        }
    } else {
        encoded
    };
    Color {
        r: v,
        g: v,
        b: v,
        a: 1.0,
    }
}

fn sprite_tint(state: LoopState) -> [f32; 4] {
    match state {
        LoopState::Paused => PAUSED_TINT,
        LoopState::Running | LoopState::Fading => NO_TINT,
    }
}

/// Left paddle, right paddle and ball instances for one snapshot
fn instances(snapshot: &Snapshot) -> (InstanceData, InstanceData, InstanceData) {
    let tint = sprite_tint(snapshot.state);
    (
        InstanceData::from_rect(&snapshot.left, tint),
        InstanceData::from_rect(&snapshot.right, tint),
        InstanceData::from_rect(&snapshot.ball, tint),
    )
}

fn update_buffers(renderer: &mut Renderer, snapshot: &Snapshot) {
    let current = instances(snapshot);
    if renderer.last_instance_data == Some(current) {
        return;
    }

    let (left, right, ball) = current;
    let buffers = &renderer.buffers;
    renderer
        .queue
        .write_buffer(&buffers.left_paddle, 0, bytemuck::cast_slice(&[left]));
    renderer
        .queue
        .write_buffer(&buffers.right_paddle, 0, bytemuck::cast_slice(&[right]));
    renderer
        .queue
        .write_buffer(&buffers.ball, 0, bytemuck::cast_slice(&[ball]));
    renderer.last_instance_data = Some(current);
}

fn begin_pass<'e>(
    encoder: &'e mut CommandEncoder,
    view: &TextureView,
    clear: Color,
) -> RenderPass<'e> {
    encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Main Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations {
                load: LoadOp::Clear(clear),
                store: StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    })
}

fn clear_pass(encoder: &mut CommandEncoder, view: &TextureView, clear: Color) {
    let _pass = begin_pass(encoder, view, clear);
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    pass.set_pipeline(&renderer.sprite_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);

    let sprites = [
        (&renderer.sprites.left_paddle, &renderer.buffers.left_paddle),
        (&renderer.sprites.right_paddle, &renderer.buffers.right_paddle),
        (&renderer.sprites.ball, &renderer.buffers.ball),
    ];
    for (sprite, instance) in sprites {
        pass.set_bind_group(1, &sprite.bind_group, &[]);
        pass.set_vertex_buffer(1, instance.slice(..));
        pass.draw_indexed(0..renderer.quad.index_count, 0, 0..1);
    }
}
