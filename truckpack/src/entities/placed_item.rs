use crate::geometry::{Orientation, Rect};

/// A unit that has been placed in a truck.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    /// The id of the [`Item`](crate::entities::Item) this unit was expanded from
    pub item_id: u64,
    pub x: f32,
    pub y: f32,
    /// Width of the footprint, margin included
    pub width: f32,
    /// Height of the footprint, margin included
    pub height: f32,
    pub rotated: bool,
    /// Index of the truck the unit was placed in
    pub container_index: usize,
}

impl PlacedItem {
    pub fn new(
        item_id: u64,
        (x, y): (f32, f32),
        orientation: &Orientation,
        container_index: usize,
    ) -> Self {
        PlacedItem {
            item_id,
            x,
            y,
            width: orientation.width,
            height: orientation.height,
            rotated: orientation.rotated,
            container_index,
        }
    }

    /// The area occupied by the unit inside its truck
    pub fn footprint(&self) -> Rect {
        Rect::from_origin(self.x, self.y, self.width, self.height)
    }
}
