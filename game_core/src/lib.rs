pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use systems::{Command, TouchKind};

use hecs::World;
use systems::*;

/// What happened during one call to [`step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub scorer: Option<Side>,
    pub touch: TouchKind,
}

/// Run the deterministic Pong game simulation.
///
/// `time.dt` is clamped to `MAX_DT` and consumed in `FIXED_DT` micro-steps.
/// A point ends the step early: nothing moves again until the ball is reset.
/// `events` and the report cover every micro-step; the reported touch is the
/// latest paddle contact.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputQueue,
) -> StepReport {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);
    let mut report = StepReport::default();
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ingest key-press moves into paddle intents
        ingest_inputs(world, input);

        // 2. Move paddles: human by intent, computer on its wave
        move_paddles(world, config);
        drive_ai_paddles(world, &step_time, config);

        // 3. Move ball
        move_ball(world, &step_time, config);

        // 4. Check collisions (ball vs paddles, walls)
        let touch = check_collisions(world, config, events);
        if touch.is_touch() {
            report.touch = touch;
        }

        // 5. Check scoring (ball crossed a side edge)
        report.scorer = check_scoring(world, config, score, events);
        if report.scorer.is_some() {
            break;
        }
    }

    // Update time
    time.now += clamped_dt - remaining_dt.max(0.0);
    report
}

/// Helper to create a keyboard-driven paddle entity
pub fn create_human_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create a self-driving paddle entity
pub fn create_ai_paddle(world: &mut World, side: Side, y: f32, moving_up: bool) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), AiDriver::new(moving_up)))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, heading: Heading) -> hecs::Entity {
    world.spawn((Ball::new(pos, heading),))
}
