//! Sprite images loaded at startup

use std::path::{Path, PathBuf};

use crate::error::ClientError;

pub const ASSET_DIR: &str = "assets";
pub const LEFT_PADDLE: &str = "bar_left.png";
pub const RIGHT_PADDLE: &str = "bar_right.png";
pub const BALL: &str = "ball.png";

/// Decoded RGBA8 pixels ready for upload
#[derive(Debug, Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Sprite {
    pub fn from_image(image: image::DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            pixels: rgba.into_raw(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let image = image::open(path).map_err(|source| ClientError::Asset {
            path: path.to_path_buf(),
            source,
        })?;
        let sprite = Self::from_image(image);
        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            sprite.width,
            sprite.height
        );
        Ok(sprite)
    }
}

/// The three sprites the game draws
pub struct Assets {
    pub left_paddle: Sprite,
    pub right_paddle: Sprite,
    pub ball: Sprite,
}

impl Assets {
    /// Load every sprite from `dir`. Any missing or undecodable file is fatal.
    pub fn load(dir: &Path) -> Result<Self, ClientError> {
        let path = |name: &str| -> PathBuf { dir.join(name) };
        Ok(Self {
            left_paddle: Sprite::load(&path(LEFT_PADDLE))?,
            right_paddle: Sprite::load(&path(RIGHT_PADDLE))?,
            ball: Sprite::load(&path(BALL))?,
        })
    }
}
