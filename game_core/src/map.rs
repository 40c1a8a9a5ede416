use glam::Vec2;

/// Axis-aligned rectangle in screen units, anchored at its top-left corner.
/// Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn square(pos: Vec2, side: f32) -> Self {
        Self {
            min: pos,
            size: Vec2::splat(side),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Horizontal spans overlap or touch
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() <= other.right() && self.right() >= other.left()
    }
}
