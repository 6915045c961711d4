//! Base64URL decoding per RFC 4648 §5
//!
//! Thin wrapper around the `base64` crate. JWK integers use the URL-safe
//! alphabet without `=` padding (RFC 7518 §6.3).

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Decode a named JWK member, enforcing the encoded size limit first
pub(crate) fn decode_field(
    field: &'static str,
    input: &str,
    max_encoded: usize,
) -> Result<Vec<u8>> {
    if input.len() > max_encoded {
        return Err(Error::JwkFieldTooLarge {
            field: field.into(),
            size: input.len(),
            max: max_encoded,
        });
    }

    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|source| Error::Encoding { field, source })
}
