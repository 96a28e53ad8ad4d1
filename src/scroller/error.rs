//! Error types for building and driving a scroller.

use thiserror::Error;

/// Failures a [`Scroller`](super::Scroller) reports to its owner.
///
/// Anything else that can go wrong with a live collection (items vanishing,
/// identities churning, an empty collection) is absorbed by the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollerError {
    /// Bad construction input. Nothing was built.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The scroller was used after it was destroyed.
    #[error("illegal state: {0}")]
    IllegalState(String),
}

/// Convenience alias for scroller results.
pub type Result<T> = std::result::Result<T, ScrollerError>;
