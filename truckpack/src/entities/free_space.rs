use crate::geometry::Rect;
use crate::geometry::geo_traits::CollidesWith;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// How the free rectangles of a [`FreeSpace`] are pruned after every placement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FreeRectPruning {
    /// Keep every residual strip, the free list may contain duplicates and nested rectangles
    None,
    /// Remove exact duplicates. Never changes which placement is found first.
    #[default]
    Duplicates,
    /// Remove every rectangle enclosed by another one.
    /// Keeps the list small, but a tighter nested rectangle is no longer offered to the search,
    /// so layouts may differ from the unpruned ones.
    Contained,
}

/// The empty space of a truck, represented as a list of (possibly overlapping) rectangles.
///
/// Together the rectangles cover exactly the area not occupied by a placed unit.
/// The order of the list is deterministic: rectangles unaffected by a placement keep their
/// position, rectangles that are split are replaced in place by their residual strips.
#[derive(Clone, Debug)]
pub struct FreeSpace {
    rects: Vec<Rect>,
    pruning: FreeRectPruning,
}

impl FreeSpace {
    /// Free space of an empty truck: a single rectangle spanning `bbox`.
    pub fn new(bbox: Rect, pruning: FreeRectPruning) -> Self {
        FreeSpace {
            rects: vec![bbox],
            pruning,
        }
    }

    /// Removes `occupied` from the free space.
    /// Every free rectangle overlapping it is replaced by its residual strips (see [`Rect::residual_strips`]).
    pub fn subtract(&mut self, occupied: &Rect) {
        self.rects = self
            .rects
            .iter()
            .flat_map(|free| match free.collides_with(occupied) {
                false => vec![*free],
                true => free.residual_strips(occupied).collect_vec(),
            })
            .collect_vec();

        self.prune();
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// True if no free space is left
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    fn prune(&mut self) {
        match self.pruning {
            FreeRectPruning::None => {}
            // of two equal rectangles, the first one is kept
            FreeRectPruning::Duplicates => {
                self.rects = self
                    .rects
                    .iter()
                    .unique_by(|r| [r.x_min, r.y_min, r.x_max, r.y_max].map(f32::to_bits))
                    .copied()
                    .collect_vec();
            }
            FreeRectPruning::Contained => {
                let n = self.rects.len();
                let redundant = |i: usize, j: usize| -> bool {
                    let (a, b) = (&self.rects[i], &self.rects[j]);
                    b.encloses(a) && (a != b || j < i)
                };
                let keep = (0..n)
                    .map(|i| !(0..n).any(|j| j != i && redundant(i, j)))
                    .collect_vec();

                self.rects = self
                    .rects
                    .iter()
                    .zip(keep)
                    .filter_map(|(r, k)| k.then_some(*r))
                    .collect_vec();
            }
        }
    }
}
