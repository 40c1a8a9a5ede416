use crate::params::Params;
use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Human (left) player score
    pub right: u32, // Computer (right) player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events raised during the last call to `step`
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Paddle moves requested by key presses since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub moves: Vec<(Side, f32)>, // (paddle, displacement)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn push_move(&mut self, side: Side, delta: f32) {
        self.moves.push((side, delta));
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Screen fade played after a point: a grey level ramping from white to black
#[derive(Debug, Clone, Copy, Default)]
pub struct Fade {
    level: f32, // 0 = inactive
}

impl Fade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.level = Params::FADE_START;
    }

    /// Consume `steps` half-steps. Returns true when the fade has just finished.
    pub fn advance(&mut self, steps: u32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.level = (self.level - Params::FADE_STEP * steps as f32).max(0.0);
        self.level <= 0.0
    }

    pub fn is_active(&self) -> bool {
        self.level > 0.0
    }

    /// Current channel intensity, 0..=255
    pub fn level(&self) -> f32 {
        self.level
    }
}
