use thiserror::Error;

/// Errors that abort a packing run. No partial result is produced when one is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    /// The truck has a non-positive (or NaN) width or height.
    #[error("invalid container size: {width} x {height}, both sides must be strictly positive")]
    InvalidContainerSize { width: f32, height: f32 },

    /// A unit does not fit an empty truck in any of its allowed orientations.
    #[error("item {id} ({width} x {height}) does not fit in an empty container")]
    ItemTooLarge { id: u64, width: f32, height: f32 },
}
