use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Discrete player commands, one per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PaddleUp,
    PaddleDown,
    TogglePause,
    ToggleSlowMotion,
    LogPaddle,
    ForceReset,
    LogTouch,
    Quit,
}

/// Fold queued key-press moves into the matching paddle intents
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    if queue.is_empty() {
        return;
    }

    for &(side, delta) in &queue.moves {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side {
                intent.delta += delta;
            }
        }
    }

    // Clear processed inputs
    queue.clear();
}
