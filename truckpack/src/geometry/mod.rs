mod orientation;

/// Traits shared by the geometric primitives
pub mod geo_traits;

mod rect;

#[doc(inline)]
pub use orientation::Orientation;

#[doc(inline)]
pub use rect::Rect;
