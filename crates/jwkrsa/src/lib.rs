//! Materialize RSA public keys from JSON Web Keys.
//!
//! A [`JwkRecord`] carries the Base64URL `n` and `e` members of a JWK.
//! [`JwkRecord::rsa_public_key`] decodes them into an [`RsaPublicKeyMaterial`]
//! and memoizes the result on the record, so key sets shared across many
//! verification calls decode each key once.
//!
//! ```
//! use jwkrsa::JwkRecord;
//!
//! let record = JwkRecord::from_json(r#"{"kty":"RSA","kid":"k1","n":"xQEC","e":"AQAB"}"#)?;
//! let key = record.rsa_public_key()?;
//!
//! assert_eq!(key.e(), 65537);
//! assert!(record.is_computed());
//! # Ok::<(), jwkrsa::Error>(())
//! ```

mod error;
mod jwk;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod limits;
pub(crate) mod utils;

// Public Interface
pub use algorithm::AlgorithmType;
pub use error::{Error, Result};
pub use jwk::{JwkRecord, PrecomputedKey, RsaPublicKeyMaterial};

pub use rsa::BigUint;
