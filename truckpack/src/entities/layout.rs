use crate::entities::{Container, FreeRectPruning, FreeSpace, PlacedItem};
use crate::geometry::Orientation;
use crate::util::assertions;

/// A [`Layout`] is the dynamic representation of a single truck being loaded:
/// the units placed so far, in placement order, and the free space that remains.
#[derive(Clone, Debug)]
pub struct Layout {
    /// Position of the truck in the packing run
    pub index: usize,
    /// The truck used for this layout
    pub container: Container,
    /// All units placed in this layout, in the order they were placed
    pub placed_items: Vec<PlacedItem>,
    /// Empty space in the truck
    free_space: FreeSpace,
}

impl Layout {
    pub fn new(index: usize, container: Container, pruning: FreeRectPruning) -> Self {
        Layout {
            index,
            container,
            placed_items: vec![],
            free_space: FreeSpace::new(container.bbox(), pruning),
        }
    }

    /// Places a unit of item `item_id` with its corner at `position` and updates the free space.
    /// Returns the index of the new [`PlacedItem`] in the layout.
    pub fn place_item(
        &mut self,
        item_id: u64,
        position: (f32, f32),
        orientation: &Orientation,
    ) -> usize {
        let pi = PlacedItem::new(item_id, position, orientation, self.index);
        self.free_space.subtract(&pi.footprint());
        self.placed_items.push(pi);

        debug_assert!(assertions::last_placement_is_feasible(self));

        self.placed_items.len() - 1
    }

    pub fn free_space(&self) -> &FreeSpace {
        &self.free_space
    }

    /// True if no units are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// The sum of the footprints of all placed units (margins included)
    pub fn placed_item_area(&self) -> f32 {
        self.placed_items
            .iter()
            .map(|pi| pi.footprint().area())
            .sum::<f32>()
    }

    /// The ratio of the area covered by placed units to the area of the truck.
    pub fn density(&self) -> f32 {
        self.placed_item_area() / self.container.area()
    }

    /// Consumes the layout, keeping only the placed units.
    pub fn into_placed_items(self) -> Vec<PlacedItem> {
        self.placed_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn upright(width: f32, height: f32) -> Orientation {
        Orientation {
            width,
            height,
            rotated: false,
        }
    }

    #[test]
    fn placing_updates_free_space() {
        let container = Container::try_new(1200.0, 800.0).unwrap();
        let mut layout = Layout::new(3, container, FreeRectPruning::None);
        assert!(layout.is_empty());

        let idx = layout.place_item(
            1,
            (0.0, 0.0),
            &Orientation {
                width: 300.0,
                height: 400.0,
                rotated: true,
            },
        );
        assert_eq!(idx, 0);
        assert_eq!(layout.placed_items[0].container_index, 3);
        assert!(layout.placed_items[0].rotated);
        assert_eq!(
            layout.free_space().rects(),
            &[
                Rect::from_origin(300.0, 0.0, 900.0, 800.0),
                Rect::from_origin(0.0, 400.0, 1200.0, 400.0),
            ]
        );
    }

    #[test]
    fn density_counts_footprints() {
        let container = Container::try_new(100.0, 100.0).unwrap();
        let mut layout = Layout::new(0, container, FreeRectPruning::None);
        layout.place_item(1, (0.0, 0.0), &upright(50.0, 50.0));
        layout.place_item(2, (50.0, 0.0), &upright(50.0, 50.0));
        assert_eq!(layout.placed_item_area(), 5000.0);
        assert_eq!(layout.density(), 0.5);
        assert_eq!(layout.into_placed_items().len(), 2);
    }

    #[test]
    fn grid_of_units_keeps_layout_consistent() {
        let container = Container::try_new(100.0, 60.0).unwrap();
        let mut layout = Layout::new(0, container, FreeRectPruning::Duplicates);
        for i in 0..5 {
            for j in 0..3 {
                layout.place_item(1, (i as f32 * 20.0, j as f32 * 20.0), &upright(20.0, 20.0));
                assert!(assertions::last_placement_is_feasible(&layout));
            }
        }
        assert!(assertions::layout_is_feasible(&layout));
        assert!(assertions::free_space_is_unoccupied(&layout));
        assert!(layout.free_space().is_empty());
        assert_eq!(layout.density(), 1.0);
    }
}
