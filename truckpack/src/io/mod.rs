/// External (serializable) representations of scenarios and packing results.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// All logic for drawing packed trucks as SVG
pub mod svg;
