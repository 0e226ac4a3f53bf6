//! Error types for tcap-ie.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// BER decode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// Data truncated unexpectedly.
    TruncatedData,
    /// Insufficient data for read.
    InsufficientData { needed: usize, available: usize },
    /// Indefinite length not supported.
    IndefiniteLength,
    /// Length field uses more octets than allowed.
    LengthTooLong { octets: usize },
    /// TLV extends past end of data.
    TlvOverflow,
    /// Constructed values nested deeper than allowed.
    DepthExceeded { max: usize },
}

impl DecodeErrorKind {
    /// Whether this kind means the input ended before a header or value did.
    pub fn is_unexpected_end(&self) -> bool {
        matches!(
            self,
            Self::TruncatedData | Self::InsufficientData { .. } | Self::TlvOverflow
        )
    }
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TruncatedData => write!(f, "unexpected end of data"),
            Self::InsufficientData { needed, available } => {
                write!(f, "need {} bytes but only {} remaining", needed, available)
            }
            Self::IndefiniteLength => write!(f, "indefinite length encoding not supported"),
            Self::LengthTooLong { octets } => {
                write!(f, "length encoding too long ({} octets)", octets)
            }
            Self::TlvOverflow => write!(f, "TLV extends past end of data"),
            Self::DepthExceeded { max } => {
                write!(f, "constructed values nested deeper than {}", max)
            }
        }
    }
}

/// BER encode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeErrorKind {
    /// Destination buffer shorter than the encoded IE.
    BufferTooSmall { needed: usize, available: usize },
    /// Children supplied for a primitive tag.
    NotConstructed { tag: u8 },
}

impl std::fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BufferTooSmall { needed, available } => {
                write!(
                    f,
                    "buffer too small: need {} bytes, have {}",
                    needed, available
                )
            }
            Self::NotConstructed { tag } => {
                write!(f, "tag 0x{:02X} is primitive and cannot hold children", tag)
            }
        }
    }
}

/// Library error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// BER decoding error.
    ///
    /// `offset` is relative to the start of the buffer handed to the
    /// top-level decode call.
    #[error("decode error at offset {offset}: {kind}")]
    Decode {
        offset: usize,
        kind: DecodeErrorKind,
    },

    /// BER encoding error.
    #[error("encode error: {kind}")]
    Encode { kind: EncodeErrorKind },

    /// Tag code does not fit in the 5 code bits.
    #[error("invalid tag code {code}: must be at most 31")]
    InvalidTag { code: u8 },

    /// Input exceeds the configured maximum size.
    #[error("message too large: {size} bytes exceeds maximum {max}")]
    MessageTooLarge { size: usize, max: usize },
}

impl Error {
    /// Create a decode error.
    pub fn decode(offset: usize, kind: DecodeErrorKind) -> Self {
        Self::Decode { offset, kind }
    }

    /// Create an encode error.
    pub fn encode(kind: EncodeErrorKind) -> Self {
        Self::Encode { kind }
    }

    /// Get the decode error kind if this is a decode error.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Self::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether the input ended before a declared header or value region.
    pub fn is_unexpected_end(&self) -> bool {
        self.decode_kind()
            .is_some_and(|kind| kind.is_unexpected_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = Error::decode(
            3,
            DecodeErrorKind::InsufficientData {
                needed: 10,
                available: 4,
            },
        );
        assert_eq!(
            err.to_string(),
            "decode error at offset 3: need 10 bytes but only 4 remaining"
        );
    }

    #[test]
    fn test_encode_error_display() {
        let err = Error::encode(EncodeErrorKind::BufferTooSmall {
            needed: 5,
            available: 2,
        });
        assert_eq!(
            err.to_string(),
            "encode error: buffer too small: need 5 bytes, have 2"
        );
    }

    #[test]
    fn test_unexpected_end_classification() {
        assert!(Error::decode(0, DecodeErrorKind::TruncatedData).is_unexpected_end());
        assert!(Error::decode(0, DecodeErrorKind::TlvOverflow).is_unexpected_end());
        assert!(!Error::decode(1, DecodeErrorKind::IndefiniteLength).is_unexpected_end());
        assert!(!Error::InvalidTag { code: 40 }.is_unexpected_end());
    }
}
