mod container;
mod free_space;
mod instance;
mod item;
mod layout;
mod pack_result;
mod placed_item;
mod placement_options;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use free_space::FreeRectPruning;

#[doc(inline)]
pub use free_space::FreeSpace;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use pack_result::PackResult;

#[doc(inline)]
pub use placed_item::PlacedItem;

#[doc(inline)]
pub use placement_options::PlacementOptions;
