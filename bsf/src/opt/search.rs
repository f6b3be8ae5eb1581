use crate::opt::fit_rule::{FitRule, FitScore};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use truckpack::entities::{FreeSpace, Instance};
use truckpack::geometry::Orientation;

/// Order in which the items (and thus all their units) are loaded
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlacementOrder {
    /// The order in which the items were supplied
    #[default]
    InputOrder,
    /// Largest nominal area first, ties in input order
    DescendingArea,
}

/// A position in the free space where a unit can be placed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub position: (f32, f32),
    pub orientation: Orientation,
    pub score: FitScore,
}

/// Searches the free space for the best spot for a unit in any of its `orientations`.
///
/// Orientations are tried in the given order, free rectangles in the order of the free space.
/// On equal scores the first pair encountered wins.
pub fn search(
    free_space: &FreeSpace,
    orientations: &[Orientation],
    rule: FitRule,
    n_evaluated: &mut usize,
) -> Option<Fit> {
    let mut best: Option<Fit> = None;

    for orientation in orientations {
        for free in free_space.rects() {
            *n_evaluated += 1;
            if !orientation.fits_in(free) {
                continue;
            }
            let score = rule.score(free, orientation);
            let improves = match &best {
                Some(fit) => score < fit.score,
                None => true,
            };
            if improves {
                best = Some(Fit {
                    position: (free.x_min, free.y_min),
                    orientation: *orientation,
                    score,
                });
            }
        }
    }
    best
}

/// Indices of the items of the instance, in the order they should be loaded.
pub fn item_placement_order(instance: &Instance, order: PlacementOrder) -> Vec<usize> {
    let indices = 0..instance.items.len();
    match order {
        PlacementOrder::InputOrder => indices.collect_vec(),
        PlacementOrder::DescendingArea => indices
            .sorted_by_cached_key(|i| Reverse(OrderedFloat(instance.item(*i).area())))
            .collect_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truckpack::entities::{Container, FreeRectPruning, Item, PlacementOptions};
    use truckpack::geometry::Rect;

    fn orientation(width: f32, height: f32, rotated: bool) -> Orientation {
        Orientation {
            width,
            height,
            rotated,
        }
    }

    #[test]
    fn picks_the_tightest_rectangle() {
        let mut free_space = FreeSpace::new(
            Rect::from_origin(0.0, 0.0, 100.0, 100.0),
            FreeRectPruning::None,
        );
        // leaves a 40 wide strip on the right and a 100 wide one on top
        free_space.subtract(&Rect::from_origin(0.0, 0.0, 60.0, 50.0));

        let mut n_evaluated = 0;
        let fit = search(
            &free_space,
            &[orientation(40.0, 30.0, false)],
            FitRule::BestShortSideFit,
            &mut n_evaluated,
        )
        .unwrap();
        assert_eq!(fit.position, (60.0, 0.0));
        assert_eq!(n_evaluated, free_space.len());
    }

    #[test]
    fn ties_keep_the_first_pair() {
        let free_space = FreeSpace::new(
            Rect::from_origin(0.0, 0.0, 100.0, 100.0),
            FreeRectPruning::None,
        );
        let fit = search(
            &free_space,
            &[orientation(50.0, 20.0, false), orientation(20.0, 50.0, true)],
            FitRule::BestShortSideFit,
            &mut 0,
        )
        .unwrap();
        assert!(!fit.orientation.rotated);
    }

    #[test]
    fn nothing_fits() {
        let free_space = FreeSpace::new(
            Rect::from_origin(0.0, 0.0, 10.0, 10.0),
            FreeRectPruning::None,
        );
        let fit = search(
            &free_space,
            &[orientation(11.0, 5.0, false), orientation(5.0, 11.0, true)],
            FitRule::BestShortSideFit,
            &mut 0,
        );
        assert_eq!(fit, None);
    }

    #[test]
    fn descending_area_is_stable() {
        let items = vec![
            Item::new(1, 10.0, 10.0, 1),
            Item::new(2, 20.0, 20.0, 1),
            Item::new(3, 5.0, 20.0, 1),
            Item::new(4, 10.0, 40.0, 1),
        ];
        let instance = Instance::new(
            items,
            Container::try_new(100.0, 100.0).unwrap(),
            PlacementOptions::default(),
        );
        assert_eq!(
            item_placement_order(&instance, PlacementOrder::DescendingArea),
            vec![1, 3, 0, 2]
        );
        assert_eq!(
            item_placement_order(&instance, PlacementOrder::InputOrder),
            vec![0, 1, 2, 3]
        );
    }
}
