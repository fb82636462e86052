//! Domain-level error type shared by the deck container and the deck parser.

use thiserror::Error;

/// Central error for deck loading and deck mutation.
///
/// Deck loading performs no partial recovery: the first offending line
/// rejects the whole source as [`DomainError::MalformedInput`], a source
/// that yields zero cards is [`DomainError::EmptySource`], and an input
/// that cannot be opened or read at all is
/// [`DomainError::UnreadableSource`]. [`DomainError::EmptyDeck`] is the
/// deck container's only failure, raised by drawing from a deck of size
/// zero.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The input could not be opened or read.
    #[error("unreadable deck source {detail}: {source}")]
    UnreadableSource {
        detail: String,
        #[source]
        source: std::io::Error,
    },

    /// A line failed structural or domain validation.
    #[error("malformed deck input at line {line}: {detail}")]
    MalformedInput { line: usize, detail: String },

    /// The source was opened and fully read but produced no cards.
    #[error("deck source contains no cards")]
    EmptySource,

    /// A draw was attempted on a deck with no cards left.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

impl DomainError {
    /// Create an UnreadableSource error from an I/O failure.
    pub fn unreadable(detail: impl Into<String>, source: std::io::Error) -> Self {
        Self::UnreadableSource {
            detail: detail.into(),
            source,
        }
    }

    /// Create a MalformedInput error for a 1-based source line.
    pub fn malformed(line: usize, detail: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            detail: detail.into(),
        }
    }
}
