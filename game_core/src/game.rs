use hecs::{Entity, World};
use rand::Rng;

use crate::systems::{reset_ball, Command, TouchKind};
use crate::{
    create_ai_paddle, create_ball, create_human_paddle, step, Ball, Config, Events, Fade,
    FrameLoop, GameRng, Heading, InputQueue, LoopAction, LoopState, Paddle, Params, Rect, Score,
    Side, Time, TransitionResult,
};

/// Everything the client needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub left: Rect,
    pub right: Rect,
    pub ball: Rect,
    pub fade_level: Option<f32>,
    pub score: Score,
    pub state: LoopState,
}

/// A local match: human on the left, computer on the right
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputQueue,
    pub fade: Fade,
    pub fsm: FrameLoop,
    pub last_touch: TouchKind,
    human: Entity,
    computer: Entity,
    ball: Entity,
    quit: bool,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(config.seed);

        let human = create_human_paddle(&mut world, Side::Left, 0.0);
        let computer = create_ai_paddle(&mut world, Side::Right, 0.0, false);

        // Serve from the center in a seeded random diagonal
        let heading = Heading::new(rng.0.gen_bool(0.5), rng.0.gen_bool(0.5));
        let ball = create_ball(&mut world, config.ball_center(), heading);
        log::info!("New game: serving {:?}", heading);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputQueue::new(),
            fade: Fade::new(),
            fsm: FrameLoop::new(),
            last_touch: TouchKind::NoTouch,
            human,
            computer,
            ball,
            quit: false,
        }
    }

    /// Apply one player command
    pub fn handle(&mut self, command: Command) {
        if !self.fsm.accepts(command) {
            log::debug!("Ignoring {:?} while {:?}", command, self.fsm.state());
            return;
        }

        match command {
            Command::PaddleUp => self.input.push_move(Side::Left, -self.config.paddle_step),
            Command::PaddleDown => self.input.push_move(Side::Left, self.config.paddle_step),
            Command::TogglePause => {
                let result = self.transition(LoopAction::TogglePause);
                log::info!("{:?}", result.to_state);
            }
            Command::ToggleSlowMotion => {
                let on = self.fsm.toggle_slow_motion();
                log::info!("Slow motion {}", if on { "on" } else { "off" });
            }
            Command::LogPaddle => {
                let rect = self.paddle_rect(self.human);
                log::info!("Left paddle at x={} y={}", rect.left(), rect.top());
            }
            Command::ForceReset => {
                reset_ball(&mut self.world, &self.config);
                log::info!("Ball reset");
            }
            Command::LogTouch => {
                log::info!(
                    "Touch: {:?} (code {})",
                    self.last_touch,
                    self.last_touch.code()
                );
            }
            Command::Quit => self.quit = true,
        }
    }

    /// Advance one presented frame, `wall_dt` seconds after the previous one.
    /// Slow motion replaces the wall-clock delta with a single fixed tick.
    pub fn frame(&mut self, wall_dt: f32) {
        match self.fsm.state() {
            LoopState::Paused => {}
            LoopState::Running => {
                self.time.dt = if self.fsm.slow_motion() {
                    Params::FIXED_DT
                } else {
                    wall_dt
                };
                let report = step(
                    &mut self.world,
                    &mut self.time,
                    &self.config,
                    &mut self.score,
                    &mut self.events,
                    &mut self.input,
                );
                self.last_touch = report.touch;
                if self.events.ball_hit_paddle {
                    if let Some(side) = report.touch.side() {
                        log::debug!("Ball hit {:?} paddle: {:?}", side, report.touch);
                    }
                }
                if self.events.ball_hit_wall {
                    log::debug!("Ball hit a wall");
                }
                if report.scorer.is_some() {
                    self.transition(LoopAction::PointScored);
                    self.fade.start();
                }
            }
            LoopState::Fading => {
                if self.fade.advance(self.config.fade_steps_per_frame) {
                    reset_ball(&mut self.world, &self.config);
                    self.transition(LoopAction::FadeDone);
                }
            }
        }
    }

    fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if !result.success {
            log::warn!("{:?} rejected while {:?}", result.action, result.from_state);
        }
        result
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.config.ball_center(), Heading::default()))
    }

    fn paddle_rect(&self, entity: Entity) -> Rect {
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| self.config.paddle_rect(paddle.side, paddle.y))
            .unwrap_or_else(|_| self.config.paddle_rect(Side::Left, 0.0))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left: self.paddle_rect(self.human),
            right: self.paddle_rect(self.computer),
            ball: self.ball().rect(self.config.ball_size),
            fade_level: self.fade.is_active().then(|| self.fade.level()),
            score: self.score,
            state: self.fsm.state(),
        }
    }
}
