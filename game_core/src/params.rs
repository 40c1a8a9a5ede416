/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 300.0;
    pub const PADDLE_STEP: f32 = 10.0; // per key press, not per tick
    pub const AI_PADDLE_SPEED: f32 = 120.0; // units per second

    // Ball
    pub const BALL_SIZE: f32 = 50.0;
    pub const BALL_SPEED: f32 = 300.0; // units per second on each axis

    // Collision
    pub const FACE_BAND: f32 = 50.0; // height of the flat middle band of a paddle face

    // Fade
    pub const FADE_START: f32 = 255.0;
    pub const FADE_STEP: f32 = 0.5;
    pub const FADE_STEPS_PER_FRAME: u32 = 8;

    // Debug
    pub const SLOW_MOTION_DELAY_MS: u64 = 100;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
