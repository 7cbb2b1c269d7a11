//! Errors raised while building a deck.
//!
//! Rendering itself never fails; everything that can go wrong is caught when
//! slides are constructed or when a deck file is resolved.

use thiserror::Error;

/// Validation failure for slide or deck construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// [`crate::types::Slide::new`] was given an empty (or whitespace-only) title.
    #[error("slide title must not be empty")]
    EmptyTitle,

    /// A deck entry was given an empty (or whitespace-only) title.
    #[error("slide #{index} has no title")]
    MissingTitle {
        /// Zero-based position of the slide in its deck.
        index: usize,
    },

    /// A deck file referenced an icon name the icon set does not know.
    #[error("slide #{slide} uses unknown icon `{name}`")]
    UnknownIcon {
        /// Zero-based position of the slide in its deck.
        slide: usize,
        /// The unresolved icon name.
        name: String,
    },
}
