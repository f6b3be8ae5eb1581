use crate::geometry::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Path;
use svg::node::element::path::Data;

/// Number of distinct item colours in a theme
pub const N_ITEM_COLORS: usize = 8;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Write the name (or id) and size on top of each item
    #[serde(default = "default_true")]
    pub labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub container_fill: Color,
    pub item_fills: [Color; N_ITEM_COLORS],
    pub item_strokes: [Color; N_ITEM_COLORS],
    pub label_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::PALETTE
    }
}

impl SvgLayoutTheme {
    pub const PALETTE: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        container_fill: Color(0xF8, 0xFA, 0xFC),
        item_fills: [
            Color(0x3B, 0x82, 0xF6), // BLUE
            Color(0x10, 0xB9, 0x81), // EMERALD
            Color(0xF5, 0x9E, 0x0B), // AMBER
            Color(0xEF, 0x44, 0x44), // RED
            Color(0x8B, 0x5C, 0xF6), // VIOLET
            Color(0x06, 0xB6, 0xD4), // CYAN
            Color(0x84, 0xCC, 0x16), // LIME
            Color(0xF9, 0x73, 0x16), // ORANGE
        ],
        item_strokes: [
            Color(0x1D, 0x4E, 0xD8),
            Color(0x04, 0x78, 0x57),
            Color(0xD9, 0x77, 0x06),
            Color(0xDC, 0x26, 0x26),
            Color(0x7C, 0x3A, 0xED),
            Color(0x08, 0x91, 0xB2),
            Color(0x65, 0xA3, 0x0D),
            Color(0xEA, 0x58, 0x0C),
        ],
        label_color: Color(0xFF, 0xFF, 0xFF),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        container_fill: Color(0xD3, 0xD3, 0xD3),
        item_fills: [Color(0x7A, 0x7A, 0x7A); N_ITEM_COLORS],
        item_strokes: [Color(0x3D, 0x3D, 0x3D); N_ITEM_COLORS],
        label_color: Color(0x00, 0x00, 0x00),
    };

    /// Fill and stroke colour of an item, picked by its id
    pub fn item_colors(&self, item_id: u64) -> (Color, Color) {
        let i = (item_id % N_ITEM_COLORS as u64) as usize;
        (self.item_fills[i], self.item_strokes[i])
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "color should be of the form #RRGGBB, got: {s}"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

pub fn aa_rect_data(rect: Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

fn default_true() -> bool {
    true
}
