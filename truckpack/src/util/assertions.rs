//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and in tests

use crate::entities::{Container, Layout, PackResult, PlacedItem};
use crate::geometry::geo_traits::AlmostCollidesWith;
use itertools::Itertools;
use log::error;

/// All placed units lie within the truck and no two of them overlap.
pub fn layout_is_feasible(layout: &Layout) -> bool {
    placed_items_are_feasible(&layout.container, &layout.placed_items)
}

/// No free rectangle of the layout covers (part of) a placed unit.
pub fn free_space_is_unoccupied(layout: &Layout) -> bool {
    for free in layout.free_space().rects() {
        if !layout.container.bbox().almost_encloses(free) {
            error!("free rectangle {free:?} exceeds the truck");
            return false;
        }
        if let Some(pi) = layout
            .placed_items
            .iter()
            .find(|pi| free.almost_collides_with(&pi.footprint()))
        {
            error!("free rectangle {free:?} overlaps placed unit {pi:?}");
            return false;
        }
    }
    true
}

/// The most recently placed unit lies within the truck, overlaps no other unit and no free
/// rectangle. Checked after every placement: earlier units were verified when they were placed
/// and free rectangles only ever shrink.
pub fn last_placement_is_feasible(layout: &Layout) -> bool {
    let Some((last, others)) = layout.placed_items.split_last() else {
        return true;
    };
    let footprint = last.footprint();
    if !layout.container.bbox().almost_encloses(&footprint) {
        error!("unit {last:?} is not contained in the truck {:?}", layout.container);
        return false;
    }
    if let Some(pi) = others
        .iter()
        .find(|pi| pi.footprint().almost_collides_with(&footprint))
    {
        error!("units {pi:?} and {last:?} overlap");
        return false;
    }
    if let Some(free) = layout
        .free_space()
        .rects()
        .iter()
        .find(|free| free.almost_collides_with(&footprint))
    {
        error!("free rectangle {free:?} overlaps placed unit {last:?}");
        return false;
    }
    true
}

pub fn placed_items_are_feasible(container: &Container, placed_items: &[PlacedItem]) -> bool {
    let bbox = container.bbox();
    if let Some(pi) = placed_items
        .iter()
        .find(|pi| !bbox.almost_encloses(&pi.footprint()))
    {
        error!("unit {pi:?} is not contained in the truck {container:?}");
        return false;
    }

    for (a, b) in placed_items.iter().tuple_combinations() {
        if a.footprint().almost_collides_with(&b.footprint()) {
            error!("units {a:?} and {b:?} overlap");
            return false;
        }
    }
    true
}

/// Every truck of the result is feasible, non-empty and indexed consistently.
pub fn result_is_feasible(result: &PackResult) -> bool {
    if result.count != result.containers.len() {
        error!(
            "count {} does not match the number of trucks {}",
            result.count,
            result.containers.len()
        );
        return false;
    }
    result.containers.iter().enumerate().all(|(i, pis)| {
        !pis.is_empty()
            && pis.iter().all(|pi| pi.container_index == i)
            && placed_items_are_feasible(&result.container, pis)
    })
}
