use serde::{Deserialize, Serialize};

/// Per-scenario options on how units may be placed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlacementOptions {
    /// Units may be placed with width and height swapped
    #[serde(default = "default_allow_rotate")]
    pub allow_rotate: bool,
    /// Clearance added to both placed dimensions of every unit
    #[serde(default)]
    pub margin: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            allow_rotate: true,
            margin: 0.0,
        }
    }
}

fn default_allow_rotate() -> bool {
    true
}
