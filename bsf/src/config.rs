use serde::{Deserialize, Serialize};
use truckpack::entities::FreeRectPruning;
use truckpack::io::svg::SvgDrawOptions;

use crate::opt::fit_rule::FitRule;
use crate::opt::search::PlacementOrder;

/// Configuration for the BSF packer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BSFConfig {
    /// Order in which the items are loaded
    #[serde(default)]
    pub placement_order: PlacementOrder,
    /// Rule used to pick among the free rectangles a unit fits in
    #[serde(default)]
    pub fit_rule: FitRule,
    /// Which redundant free rectangles are discarded after every placement
    #[serde(default)]
    pub free_rect_pruning: FreeRectPruning,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for BSFConfig {
    fn default() -> Self {
        Self {
            placement_order: PlacementOrder::InputOrder,
            fit_rule: FitRule::BestShortSideFit,
            free_rect_pruning: FreeRectPruning::Duplicates,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
