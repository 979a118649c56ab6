//! Error types for converting raw schema values into typed enumerations.

use thiserror::Error;

/// Errors raised when a raw integer from the codec layer does not map onto
/// one of the schema enumerations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum KindError {
    /// The raw body-type discriminant is not part of the schema.
    #[error("unknown body type {raw}")]
    UnknownBodyType {
        /// The unrecognised raw value.
        raw: i32,
    },
    /// A body level outside `1..=MAX_LEVEL`.
    #[error("level {level} out of range 1..={max}")]
    InvalidLevel {
        /// The offending level.
        level: i32,
        /// Highest valid level.
        max: i32,
    },
}
