//! Errors for jwkrsa

use thiserror::Error;

/// JWK materialization errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Key Material Errors
    // ============================================================================
    /// A member required for the key type is empty; carries the key type
    #[error("Missing required key assets: {0}")]
    MissingAssets(String),

    #[error("Base64URL decoding of '{field}' failed: {source}")]
    Encoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("JWK field '{field}' too large: {size} bytes (maximum: {max} bytes)")]
    JwkFieldTooLarge {
        field: String,
        size: usize,
        max: usize,
    },

    #[error("RSA exponent out of range: {size} significant bytes (maximum: {max} bytes)")]
    ExponentOutOfRange { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    // ============================================================================
    // Conversion Errors
    // ============================================================================
    #[error("RSA key rejected: {0}")]
    KeyRejected(String),

    #[error("Key encoding failed: {0}")]
    KeyEncoding(String),
}

/// Result type alias for jwkrsa operations
pub type Result<T> = std::result::Result<T, Error>;
