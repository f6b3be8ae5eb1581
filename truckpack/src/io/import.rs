use crate::entities::{Container, Instance, Item, PlacementOptions};
use crate::io::ext_repr::{ExtItem, ExtScenario};
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::warn;
use rayon::prelude::*;

/// Imports a scenario into the library.
///
/// Rows with a quantity of zero or less are skipped. Non-positive item dimensions, a negative
/// margin or duplicate item ids are rejected.
pub fn import(ext_scenario: &ExtScenario) -> Result<Instance> {
    let container = Container::try_new(ext_scenario.truck_width, ext_scenario.truck_height)
        .with_context(|| format!("scenario '{}' has an invalid truck", ext_scenario.name))?;

    ensure!(
        ext_scenario.margin >= 0.0 && ext_scenario.margin.is_finite(),
        "margin should be a non-negative number, got {}",
        ext_scenario.margin
    );

    ensure!(
        ext_scenario.items.iter().map(|item| item.id).all_unique(),
        "all items should have unique ids: {:?}",
        ext_scenario.items.iter().map(|item| item.id).sorted().collect_vec()
    );

    let items = ext_scenario
        .items
        .par_iter()
        .map(import_item)
        .collect::<Result<Vec<Option<Item>>>>()?
        .into_iter()
        .flatten()
        .collect_vec();

    let options = PlacementOptions {
        allow_rotate: ext_scenario.allow_rotate,
        margin: ext_scenario.margin,
    };

    Ok(Instance::new(items, container, options))
}

pub fn import_item(ext_item: &ExtItem) -> Result<Option<Item>> {
    let ExtItem {
        id,
        width,
        height,
        quantity,
        ..
    } = *ext_item;

    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        bail!("item {id} has invalid dimensions: {width} x {height}");
    }
    if quantity <= 0 {
        warn!("skipping item {id}: quantity {quantity} is not positive");
        return Ok(None);
    }

    Ok(Some(Item::new(id, width, height, quantity as usize)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackError;

    fn scenario(json: &str) -> ExtScenario {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn defaults_are_applied() {
        let ext = scenario(
            r#"{
                "name": "defaults",
                "truck_width": 1200,
                "truck_height": 800,
                "items": [{"id": 1, "width": 400, "height": 300}]
            }"#,
        );
        let instance = import(&ext).unwrap();
        assert_eq!(instance.options, PlacementOptions::default());
        assert_eq!(instance.items, vec![Item::new(1, 400.0, 300.0, 1)]);
        assert!(ext.item_labels().is_empty());
    }

    #[test]
    fn rows_without_positive_quantity_are_skipped() {
        let ext = scenario(
            r#"{
                "name": "skip",
                "truck_width": 1200,
                "truck_height": 800,
                "allow_rotate": false,
                "margin": 10,
                "items": [
                    {"id": 1, "name": "A", "width": 400, "height": 300, "quantity": 0},
                    {"id": 2, "name": "B", "width": 600, "height": 400, "quantity": 2},
                    {"id": 3, "name": "C", "width": 100, "height": 100, "quantity": -4}
                ]
            }"#,
        );
        let instance = import(&ext).unwrap();
        assert_eq!(instance.items, vec![Item::new(2, 600.0, 400.0, 2)]);
        assert_eq!(instance.total_item_qty(), 2);
        assert!(!instance.options.allow_rotate);
        assert_eq!(instance.options.margin, 10.0);
        assert_eq!(ext.item_labels().get(&3).map(String::as_str), Some("C"));
    }

    #[test]
    fn invalid_truck_is_reported_as_pack_error() {
        let ext = scenario(
            r#"{"name": "bad", "truck_width": 0, "truck_height": 800, "items": []}"#,
        );
        let err = import(&ext).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PackError>(),
            Some(PackError::InvalidContainerSize { .. })
        ));
    }

    #[test]
    fn invalid_rows_are_rejected() {
        let negative_width = scenario(
            r#"{"name": "w", "truck_width": 10, "truck_height": 10,
                "items": [{"id": 1, "width": -1, "height": 3}]}"#,
        );
        assert!(import(&negative_width).is_err());

        let duplicate_ids = scenario(
            r#"{"name": "d", "truck_width": 10, "truck_height": 10,
                "items": [{"id": 1, "width": 1, "height": 3}, {"id": 1, "width": 2, "height": 2}]}"#,
        );
        assert!(import(&duplicate_ids).is_err());

        let negative_margin = scenario(
            r#"{"name": "m", "truck_width": 10, "truck_height": 10, "margin": -2, "items": []}"#,
        );
        assert!(import(&negative_margin).is_err());
    }
}
