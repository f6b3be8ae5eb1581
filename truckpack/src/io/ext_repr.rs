use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// External representation of a packing scenario: a truck, how items may be placed and the items to load.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtScenario {
    /// Name of the scenario
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Width of the truck's load space
    pub truck_width: f32,
    /// Height of the truck's load space
    pub truck_height: f32,
    /// Items may be rotated by 90 degrees. Defaults to true
    #[serde(default = "default_allow_rotate")]
    pub allow_rotate: bool,
    /// Clearance added to both dimensions of every item
    #[serde(default)]
    pub margin: f32,
    /// Items to be loaded, in the order they were entered
    pub items: Vec<ExtItem>,
}

impl ExtScenario {
    /// Maps each item id to a display name. Items without a name are left out.
    pub fn item_labels(&self) -> HashMap<u64, String> {
        self.items
            .iter()
            .filter(|item| !item.name.trim().is_empty())
            .map(|item| (item.id, item.name.clone()))
            .collect()
    }
}

/// External representation of an [`Item`](crate::entities::Item) row.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique identifier of the item within the scenario
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub width: f32,
    pub height: f32,
    /// Number of copies to load. Rows with a quantity of zero or less are skipped
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// External representation of a [`PackResult`](crate::entities::PackResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Number of trucks used
    pub count: usize,
    /// Fraction of the used trucks' area covered by items
    pub density: f32,
    pub run_time_ms: u64,
    pub trucks: Vec<ExtTruck>,
}

/// A single loaded truck
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTruck {
    pub index: usize,
    pub density: f32,
    pub placed_items: Vec<ExtPlacedItem>,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    pub item_id: u64,
    pub x: f32,
    pub y: f32,
    /// Width of the footprint, margin included
    pub width: f32,
    /// Height of the footprint, margin included
    pub height: f32,
    pub rotated: bool,
}

fn default_allow_rotate() -> bool {
    true
}

fn default_quantity() -> i64 {
    1
}
