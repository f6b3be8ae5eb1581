use crate::entities::{Container, Item, PlacementOptions};

/// Static description of a packing run: the items to load, the truck they go into and how they may
/// be placed.
#[derive(Debug, Clone)]
pub struct Instance {
    pub items: Vec<Item>,
    pub container: Container,
    pub options: PlacementOptions,
}

impl Instance {
    pub fn new(items: Vec<Item>, container: Container, options: PlacementOptions) -> Self {
        debug_assert!(
            options.margin >= 0.0,
            "margin should be non-negative: {}",
            options.margin
        );
        Self {
            items,
            container,
            options,
        }
    }

    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    /// Number of units after expanding all quantities
    pub fn total_item_qty(&self) -> usize {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
