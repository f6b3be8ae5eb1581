use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use truckpack::geometry::{Orientation, Rect};

/// Rule to rank the free rectangles a unit fits in.
/// The unit is always placed at the origin of the chosen free rectangle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitRule {
    /// Minimize the smaller of the two leftovers, then the larger one
    #[default]
    BestShortSideFit,
    /// Minimize the larger of the two leftovers, then the smaller one
    BestLongSideFit,
    /// Minimize the leftover area, then the smaller leftover
    BestAreaFit,
    /// Minimize the top edge of the placed unit, then its x
    BottomLeft,
}

/// Score of a (free rectangle, orientation) pair, compared lexicographically. Lower is better.
#[derive(PartialEq, PartialOrd, Eq, Ord, Copy, Clone, Debug)]
pub struct FitScore(OrderedFloat<f32>, OrderedFloat<f32>);

impl FitScore {
    pub fn new(primary: f32, secondary: f32) -> Self {
        FitScore(OrderedFloat(primary), OrderedFloat(secondary))
    }
}

impl FitRule {
    /// Scores placing `orientation` at the origin of `free`, which it is assumed to fit in.
    pub fn score(&self, free: &Rect, orientation: &Orientation) -> FitScore {
        debug_assert!(orientation.fits_in(free));
        let leftover_w = free.width() - orientation.width;
        let leftover_h = free.height() - orientation.height;
        let short = f32::min(leftover_w, leftover_h);
        let long = f32::max(leftover_w, leftover_h);

        match self {
            FitRule::BestShortSideFit => FitScore::new(short, long),
            FitRule::BestLongSideFit => FitScore::new(long, short),
            FitRule::BestAreaFit => FitScore::new(free.area() - orientation.area(), short),
            FitRule::BottomLeft => FitScore::new(free.y_min + orientation.height, free.x_min),
        }
    }
}
