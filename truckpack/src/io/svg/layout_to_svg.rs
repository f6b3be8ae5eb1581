use crate::entities::{Container, PackResult, PlacedItem};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use std::collections::HashMap;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws every truck of `result`, in order.
pub fn result_to_svgs(
    result: &PackResult,
    labels: &HashMap<u64, String>,
    options: SvgDrawOptions,
    title: &str,
) -> Vec<Document> {
    result
        .containers
        .iter()
        .enumerate()
        .map(|(i, placed_items)| {
            let title = format!("{title} | truck {}/{}", i + 1, result.count);
            truck_to_svg(&result.container, placed_items, labels, options, &title)
        })
        .collect()
}

/// Draws a single truck and the items placed in it.
/// Items are labelled with their entry in `labels`, or `#id` when absent.
pub fn truck_to_svg(
    container: &Container,
    placed_items: &[PlacedItem],
    labels: &HashMap<u64, String>,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let bbox = container.bbox();
    let vbox = bbox.scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        f32::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let header = {
        //print some information above the left top of the truck
        let placed_area: f32 = placed_items.iter().map(|pi| pi.footprint().area()).sum();
        let density = placed_area / container.area();

        let content = format!(
            "width: {:.3} | height: {:.3} | density: {:.3}% | {}",
            bbox.width(),
            bbox.height(),
            density * 100.0,
            title,
        );
        Text::new(content)
            .set("x", bbox.x_min)
            .set(
                "y",
                bbox.y_min - 0.5 * 0.025 * f32::min(bbox.width(), bbox.height()),
            )
            .set("font-size", f32::min(bbox.width(), bbox.height()) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let container_group = Group::new()
        .set("id", "truck")
        .add(svg_util::data_to_path(
            svg_util::aa_rect_data(bbox),
            &[
                ("fill", &*format!("{}", theme.container_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "truck, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max
        )));

    let items_group = placed_items
        .iter()
        .enumerate()
        .fold(Group::new().set("id", "items"), |group, (i, pi)| {
            let footprint = pi.footprint();
            let (fill, stroke) = theme.item_colors(pi.item_id);

            let mut item_group = Group::new()
                .set("id", format!("placed_item_{i}"))
                .add(svg_util::data_to_path(
                    svg_util::aa_rect_data(footprint),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("fill-opacity", "0.85"),
                        ("stroke", &*format!("{stroke}")),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!(
                    "item, id: {}, x: {:.3}, y: {:.3}, size: {:.3}x{:.3}, rotated: {}",
                    pi.item_id, pi.x, pi.y, pi.width, pi.height, pi.rotated
                )));

            if options.labels {
                let name = labels
                    .get(&pi.item_id)
                    .cloned()
                    .unwrap_or_else(|| format!("#{}", pi.item_id));
                let name = match pi.rotated {
                    true => format!("{name} ↻"),
                    false => name,
                };
                let font_size = f32::min(footprint.width(), footprint.height()) * 0.12;
                let (cx, cy) = (
                    footprint.x_min + footprint.width() / 2.0,
                    footprint.y_min + footprint.height() / 2.0,
                );
                let text = |content: String, y: f32| {
                    Text::new(content)
                        .set("x", cx)
                        .set("y", y)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle")
                        .set("font-size", font_size)
                        .set("font-family", "sans-serif")
                        .set("fill", format!("{}", theme.label_color))
                };
                item_group = item_group
                    .add(text(name, cy - 0.6 * font_size))
                    .add(text(
                        format!("{}×{}mm", pi.width, pi.height),
                        cy + 0.6 * font_size,
                    ));
            }
            group.add(item_group)
        });

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    Document::new()
        .set("viewBox", vbox_svg)
        .add(container_group)
        .add(items_group)
        .add(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PlacedItem;
    use crate::geometry::Orientation;

    fn placed(item_id: u64, pos: (f32, f32), w: f32, h: f32, rotated: bool) -> PlacedItem {
        let orientation = Orientation {
            width: w,
            height: h,
            rotated,
        };
        PlacedItem::new(item_id, pos, &orientation, 0)
    }

    #[test]
    fn items_are_labelled_and_coloured() {
        let container = Container::try_new(1200.0, 800.0).unwrap();
        let items = [
            placed(1, (0.0, 0.0), 300.0, 400.0, true),
            placed(2, (0.0, 400.0), 600.0, 400.0, false),
        ];
        let labels = HashMap::from([(1, "Box A".to_string())]);

        let svg = truck_to_svg(
            &container,
            &items,
            &labels,
            SvgDrawOptions::default(),
            "delivery",
        )
        .to_string();

        assert!(svg.contains("Box A ↻"));
        assert!(svg.contains("#2"));
        assert!(svg.contains("300×400mm"));
        // colours are picked by item id
        assert!(svg.contains("#10B981") && svg.contains("#047857"));
        assert!(svg.contains("#F59E0B") && svg.contains("#D97706"));
        assert!(!svg.contains("#3B82F6"));
        assert!(svg.contains("density: 37.500%"));
        assert!(svg.contains("delivery"));
    }

    #[test]
    fn labels_can_be_turned_off() {
        let container = Container::try_new(100.0, 100.0).unwrap();
        let items = [placed(7, (0.0, 0.0), 50.0, 50.0, false)];
        let options = SvgDrawOptions {
            labels: false,
            ..SvgDrawOptions::default()
        };
        let svg = truck_to_svg(&container, &items, &HashMap::new(), options, "").to_string();
        assert!(!svg.contains("50×50mm"));
        assert!(svg.contains("placed_item_0"));
    }

    #[test]
    fn one_document_per_truck() {
        let container = Container::try_new(100.0, 100.0).unwrap();
        let result = PackResult::new(
            container,
            vec![
                vec![placed(1, (0.0, 0.0), 100.0, 100.0, false)],
                vec![PlacedItem {
                    container_index: 1,
                    ..placed(1, (0.0, 0.0), 100.0, 100.0, false)
                }],
            ],
        );
        let svgs = result_to_svgs(&result, &HashMap::new(), SvgDrawOptions::default(), "full");
        assert_eq!(svgs.len(), 2);
        assert!(svgs[1].to_string().contains("truck 2/2"));
    }
}
