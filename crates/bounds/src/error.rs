//! Error types for the kalends-bounds crate.

/// Error returned when a [`RangeBounds`](crate::RangeBounds) is built without
/// the functions its operations need.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundsError {
    /// No comparison function was supplied.
    #[error("range bounds need a compare function before use")]
    MissingCompare,

    /// No distance function was supplied.
    #[error("range bounds need a distance function before use")]
    MissingDistance,
}
