//! Error types for line classification.
//!
//! The taxonomy here is deliberately small. "No class matched" is not an
//! error at all — it is the common case for two of the three classifier
//! families on any given line, and is reported as a plain `false` from
//! dispatch. The types below cover the two genuine failure shapes: a line
//! that does not even frame, and a matched class whose field content
//! violates a protocol assumption.

use thiserror::Error;

/// A raw line that cannot carry any IRC message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameError {
    /// The line was empty after stripping terminators.
    #[error("empty line")]
    Empty,

    /// No command verb could be found.
    #[error("missing command verb")]
    MissingVerb,
}

/// Malformed field content inside a line that matched a known class.
///
/// This indicates a protocol-assumption violation, not routine traffic.
/// Dispatchers log it and report the line as unhandled; it never
/// propagates out of `parse_and_handle`, so a bad line cannot terminate
/// the connection's read loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractError {
    /// A channel-scoped reply carried no `#`-prefixed channel token.
    #[error("{class}: no channel token in reply")]
    MissingChannel {
        /// Name of the message class that matched.
        class: &'static str,
    },

    /// A required field was absent from the matched line.
    #[error("{class}: missing {field} field")]
    MissingField {
        /// Name of the message class that matched.
        class: &'static str,
        /// The field that was expected.
        field: &'static str,
    },
}
