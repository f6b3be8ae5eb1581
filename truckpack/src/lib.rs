//! Geometry, entities and io for packing rectangular items into a fleet of identical trucks.
//!
//! The crate models the state of a packing run: [`Item`](entities::Item)s are expanded into units,
//! placed in [`Layout`](entities::Layout)s (one per truck) which track the remaining free space as
//! a set of [`Rect`](geometry::Rect)s, and frozen into a [`PackResult`](entities::PackResult).
//! The placement heuristics themselves live in the `bsf` crate.

/// Entities to model a packing run
pub mod entities;

/// Geometric primitives and orientations
pub mod geometry;

/// Importing scenarios into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::PackError;
