use std::time::Instant;

use crate::config::BSFConfig;
use crate::opt::search::{item_placement_order, search};
use log::{debug, info};
use thousands::Separable;
use truckpack::PackError;
use truckpack::entities::{Container, Instance, Item, Layout, PackResult, PlacementOptions};
use truckpack::geometry::Orientation;
use truckpack::util::assertions;

/// Best-Short-Side-Fit (BSF) packer: loads units one by one into the open truck and opens a new
/// truck whenever a unit no longer fits.
pub struct BSFPacker {
    pub instance: Instance,
    pub config: BSFConfig,
    /// Number of (free rectangle, orientation) pairs evaluated
    pub n_evaluated: usize,
}

impl BSFPacker {
    pub fn new(instance: Instance, config: BSFConfig) -> Self {
        Self {
            instance,
            config,
            n_evaluated: 0,
        }
    }

    pub fn solve(&mut self) -> Result<PackResult, PackError> {
        let start = Instant::now();
        let container = self.instance.container;

        let orientations = self
            .instance
            .items
            .iter()
            .map(|item| Orientation::candidates(item, &self.instance.options))
            .collect::<Vec<_>>();

        //reject the run before anything is placed if some unit can never be loaded
        for (item, item_orientations) in self.instance.items.iter().zip(&orientations) {
            if item.quantity > 0 && !item_orientations.iter().any(|o| container.fits(o)) {
                return Err(too_large(item));
            }
        }

        let n_units = self.instance.total_item_qty();
        let mut n_placed = 0;
        let mut closed: Vec<Layout> = vec![];
        let mut open = Layout::new(0, container, self.config.free_rect_pruning);

        for item_index in item_placement_order(&self.instance, self.config.placement_order) {
            let item = self.instance.item(item_index);
            let item_orientations = &orientations[item_index];

            for _ in 0..item.quantity {
                let (position, orientation) = match search(
                    open.free_space(),
                    item_orientations,
                    self.config.fit_rule,
                    &mut self.n_evaluated,
                ) {
                    Some(fit) => (fit.position, fit.orientation),
                    None => {
                        let orientation = *item_orientations
                            .iter()
                            .find(|o| container.fits(o))
                            .ok_or_else(|| too_large(item))?;
                        if !open.is_empty() {
                            let next =
                                Layout::new(closed.len() + 1, container, self.config.free_rect_pruning);
                            let full = std::mem::replace(&mut open, next);
                            debug!(
                                "[BSF] truck {} closed with {} units ({:.3}%), opening truck {}",
                                full.index,
                                full.placed_items.len(),
                                full.density() * 100.0,
                                open.index
                            );
                            closed.push(full);
                        }
                        ((0.0, 0.0), orientation)
                    }
                };

                open.place_item(item.id, position, &orientation);
                n_placed += 1;
                debug!(
                    "[BSF] placing unit {}/{} of item {} at ({}, {}) as {}x{}{} in truck {}",
                    n_placed,
                    n_units,
                    item.id,
                    position.0,
                    position.1,
                    orientation.width,
                    orientation.height,
                    if orientation.rotated { " (rotated)" } else { "" },
                    open.index
                );
            }
        }

        if !open.is_empty() {
            closed.push(open);
        }

        let result = PackResult::new(
            container,
            closed.into_iter().map(Layout::into_placed_items).collect(),
        );

        debug_assert!(assertions::result_is_feasible(&result));

        info!(
            "[BSF] packing finished in {:.3}ms ({} candidates evaluated)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.n_evaluated.separate_with_commas()
        );
        info!(
            "[BSF] {} units loaded into {} trucks with a density of {:.3}%",
            result.n_placed(),
            result.count,
            result.density() * 100.0
        );

        Ok(result)
    }
}

/// Packs `items` into as many `container_width` x `container_height` trucks as needed, using the
/// default configuration.
pub fn pack(
    items: &[Item],
    container_width: f32,
    container_height: f32,
    options: PlacementOptions,
) -> Result<PackResult, PackError> {
    let container = Container::try_new(container_width, container_height)?;
    let instance = Instance::new(items.to_vec(), container, options);
    BSFPacker::new(instance, BSFConfig::default()).solve()
}

fn too_large(item: &Item) -> PackError {
    PackError::ItemTooLarge {
        id: item.id,
        width: item.width,
        height: item.height,
    }
}
