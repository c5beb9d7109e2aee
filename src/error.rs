//! Error types for the zquad codec.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZQuadError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZQuadError {
    /// Coordinate or argument validation failure.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A navigation step that would leave the quad's zoom range.
    #[error("Zoom {requested} is out of range for a quad at zoom {zoom}")]
    ZoomOutOfRange { zoom: u8, requested: u8 },

    /// An integer that is not the value of any quad at zoom 0..=26.
    #[error("Value {0} is not a valid quad")]
    InvalidQuad(u64),

    /// A name that does not decode to a quad.
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// A single token can only spell a quad at zoom 7 or shallower.
    #[error("A quad at zoom {0} is too deep to be spelled as one chunk")]
    NotAChunk(u8),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
