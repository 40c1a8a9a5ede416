use glam::Vec2;

use crate::map::Rect;

/// Which edge of the screen a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - a fixed-size vertical bar at one screen edge
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge, clamped to [0, screen_height - paddle_height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// The two flags that decide the sign of the ball's displacement per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heading {
    pub moving_right: bool,
    pub moving_up: bool,
}

impl Heading {
    pub fn new(moving_right: bool, moving_up: bool) -> Self {
        Self {
            moving_right,
            moving_up,
        }
    }

    pub fn inverted(self) -> Self {
        Self {
            moving_right: !self.moving_right,
            moving_up: !self.moving_up,
        }
    }

    /// Unit direction in screen space (y grows downwards)
    pub fn dir(self) -> Vec2 {
        Vec2::new(
            if self.moving_right { 1.0 } else { -1.0 },
            if self.moving_up { -1.0 } else { 1.0 },
        )
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub heading: Heading,
}

impl Ball {
    pub fn new(pos: Vec2, heading: Heading) -> Self {
        Self { pos, heading }
    }

    pub fn rect(&self, size: f32) -> Rect {
        Rect::square(self.pos, size)
    }

    /// Put the ball back at `center` and send it the other way on both axes
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.heading = self.heading.inverted();
    }
}

/// Pending manual displacement for a human-controlled paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub delta: f32, // accumulated key-press movement, consumed each tick
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Autopilot for the computer paddle: a constant-speed triangle wave
#[derive(Debug, Clone, Copy, Default)]
pub struct AiDriver {
    pub moving_up: bool,
}

impl AiDriver {
    pub fn new(moving_up: bool) -> Self {
        Self { moving_up }
    }
}
