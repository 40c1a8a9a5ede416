use serde::Deserialize;
use thiserror::Error;

use crate::map::Rect;
use crate::params::Params;
use crate::Side;

/// Invalid configuration values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit a screen of height {screen}")]
    PaddleTooTall { paddle: f32, screen: f32 },

    #[error("two paddles of width {paddle} leave no room on a screen of width {screen}")]
    PaddlesTooWide { paddle: f32, screen: f32 },

    #[error("face band {band} must lie within the paddle height ({paddle})")]
    BadFaceBand { band: f32, paddle: f32 },

    #[error("fade must consume at least one step per tick")]
    NoFadeProgress,
}

/// Game configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub ai_paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub face_band: f32,
    pub fade_steps_per_frame: u32,
    pub slow_motion_delay_ms: u64,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            face_band: Params::FACE_BAND,
            fade_steps_per_frame: Params::FADE_STEPS_PER_FRAME,
            slow_motion_delay_ms: Params::SLOW_MOTION_DELAY_MS,
            seed: 12345,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject geometry the simulation cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ai_paddle_speed", self.ai_paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.paddle_height > self.screen_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                screen: self.screen_height,
            });
        }
        if self.paddle_width * 2.0 + self.ball_size >= self.screen_width {
            return Err(ConfigError::PaddlesTooWide {
                paddle: self.paddle_width,
                screen: self.screen_width,
            });
        }
        if !(0.0..=self.paddle_height).contains(&self.face_band) {
            return Err(ConfigError::BadFaceBand {
                band: self.face_band,
                paddle: self.paddle_height,
            });
        }
        if self.fade_steps_per_frame == 0 {
            return Err(ConfigError::NoFadeProgress);
        }
        Ok(())
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.screen_width - self.paddle_width,
        }
    }

    /// Largest y a paddle's top edge may take
    pub fn paddle_max_y(&self) -> f32 {
        self.screen_height - self.paddle_height
    }

    /// Clamp paddle Y to screen bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Bounding box of a paddle whose top edge is at `y`
    pub fn paddle_rect(&self, side: Side, y: f32) -> Rect {
        Rect::new(
            self.paddle_x(side),
            y,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Top-left position that centers the ball on screen
    pub fn ball_center(&self) -> glam::Vec2 {
        glam::Vec2::new(
            (self.screen_width - self.ball_size) / 2.0,
            (self.screen_height - self.ball_size) / 2.0,
        )
    }
}
