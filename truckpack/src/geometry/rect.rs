use crate::geometry::geo_traits::{AlmostCollidesWith, CollidesWith};
use crate::util::FPA;
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    /// Rectangle with its corner closest to the origin at `(x, y)`.
    /// Does not validate the dimensions.
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// True if `other` lies entirely within `self` (shared edges allowed).
    pub fn encloses(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// Same as [`Rect::encloses`], with a tolerance for floating point precision.
    pub fn almost_encloses(&self, other: &Rect) -> bool {
        FPA::from(self.x_min) <= FPA::from(other.x_min)
            && FPA::from(self.y_min) <= FPA::from(other.y_min)
            && FPA::from(self.x_max) >= FPA::from(other.x_max)
            && FPA::from(self.y_max) >= FPA::from(other.y_max)
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// The parts of `self` that remain free after `occupied` is taken out of it.
    ///
    /// Returns up to four maximal strips, in this order: left of `occupied`, right of it, above its
    /// top edge and below its bottom edge. Left and right strips span the full height of `self`,
    /// the other two its full width, so the strips may overlap each other.
    /// Strips with zero width or height are omitted.
    pub fn residual_strips(&self, occupied: &Rect) -> impl Iterator<Item = Rect> {
        let left = (occupied.x_min > self.x_min).then(|| Rect {
            x_max: occupied.x_min,
            ..*self
        });
        let right = (occupied.x_max < self.x_max).then(|| Rect {
            x_min: occupied.x_max,
            ..*self
        });
        let above = (occupied.y_max < self.y_max).then(|| Rect {
            y_min: occupied.y_max,
            ..*self
        });
        let below = (occupied.y_min > self.y_min).then(|| Rect {
            y_max: occupied.y_min,
            ..*self
        });

        [left, right, above, below]
            .into_iter()
            .flatten()
            .filter(|r| r.width() > 0.0 && r.height() > 0.0)
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        self.x_min < other.x_max
            && self.x_max > other.x_min
            && self.y_min < other.y_max
            && self.y_max > other.y_min
    }
}

impl AlmostCollidesWith<Rect> for Rect {
    #[inline(always)]
    fn almost_collides_with(&self, other: &Rect) -> bool {
        FPA(self.x_min) < FPA(other.x_max)
            && FPA(self.x_max) > FPA(other.x_min)
            && FPA(self.y_min) < FPA(other.y_max)
            && FPA(self.y_max) > FPA(other.y_min)
    }
}
