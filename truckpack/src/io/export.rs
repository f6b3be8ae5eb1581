use crate::entities::{PackResult, PlacedItem};
use crate::io::ext_repr::{ExtPlacedItem, ExtSolution, ExtTruck};
use std::time::Duration;

/// Exports a packing result out of the library
pub fn export(result: &PackResult, run_time: Duration) -> ExtSolution {
    ExtSolution {
        count: result.count,
        density: result.density(),
        run_time_ms: run_time.as_millis() as u64,
        trucks: result
            .containers
            .iter()
            .enumerate()
            .map(|(index, placed_items)| ExtTruck {
                index,
                density: result.container_density(index).unwrap_or_default(),
                placed_items: placed_items.iter().map(export_placed_item).collect(),
            })
            .collect(),
    }
}

pub fn export_placed_item(pi: &PlacedItem) -> ExtPlacedItem {
    ExtPlacedItem {
        item_id: pi.item_id,
        x: pi.x,
        y: pi.y,
        width: pi.width,
        height: pi.height,
        rotated: pi.rotated,
    }
}
