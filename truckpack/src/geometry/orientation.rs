use crate::entities::{Item, PlacementOptions};
use crate::geometry::Rect;

/// The footprint a unit occupies when placed in one of its allowed orientations.
/// Dimensions include the margin of the [`PlacementOptions`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub width: f32,
    pub height: f32,
    /// Width and height are swapped with respect to the [`Item`]
    pub rotated: bool,
}

impl Orientation {
    /// All orientations in which a unit of `item` may be placed, the unrotated one first.
    pub fn candidates(item: &Item, options: &PlacementOptions) -> Vec<Orientation> {
        let m = options.margin;
        let upright = Orientation {
            width: item.width + m,
            height: item.height + m,
            rotated: false,
        };
        match options.allow_rotate {
            false => vec![upright],
            true => vec![
                upright,
                Orientation {
                    width: item.height + m,
                    height: item.width + m,
                    rotated: true,
                },
            ],
        }
    }

    /// True if the footprint fits inside `rect` without exceeding any of its sides.
    #[inline(always)]
    pub fn fits_in(&self, rect: &Rect) -> bool {
        self.width <= rect.width() && self.height <= rect.height()
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_adds_swapped_candidate() {
        let item = Item::new(7, 400.0, 300.0, 1);
        let options = PlacementOptions {
            allow_rotate: true,
            margin: 0.0,
        };
        let candidates = Orientation::candidates(&item, &options);
        assert_eq!(candidates.len(), 2);
        assert_eq!((candidates[0].width, candidates[0].height), (400.0, 300.0));
        assert!(!candidates[0].rotated);
        assert_eq!((candidates[1].width, candidates[1].height), (300.0, 400.0));
        assert!(candidates[1].rotated);
    }

    #[test]
    fn margin_inflates_both_sides() {
        let item = Item::new(1, 100.0, 50.0, 1);
        let options = PlacementOptions {
            allow_rotate: false,
            margin: 5.0,
        };
        let candidates = Orientation::candidates(&item, &options);
        assert_eq!(
            candidates,
            vec![Orientation {
                width: 105.0,
                height: 55.0,
                rotated: false
            }]
        );
    }

    #[test]
    fn fits_in_is_inclusive() {
        let o = Orientation {
            width: 10.0,
            height: 20.0,
            rotated: false,
        };
        assert!(o.fits_in(&Rect::from_origin(0.0, 0.0, 10.0, 20.0)));
        assert!(!o.fits_in(&Rect::from_origin(0.0, 0.0, 9.5, 20.0)));
    }
}
