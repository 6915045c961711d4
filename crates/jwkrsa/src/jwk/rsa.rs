//! RSA public keys from JWK `n` and `e`

use super::{JwkRecord, PrecomputedKey};
use crate::error::{Error, Result};
use crate::limits::{MAX_JWK_E_SIZE, MAX_JWK_N_SIZE, MAX_RSA_EXPONENT_BYTES};
use crate::utils::{base64url, der};
use rsa::BigUint;
use std::sync::Arc;

/// RSA public key components decoded from a JWK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKeyMaterial {
    n: BigUint,
    e: u32,
}

impl RsaPublicKeyMaterial {
    /// Build from a modulus and public exponent
    pub fn new(n: BigUint, e: u32) -> Self {
        Self { n, e }
    }

    /// Modulus
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Public exponent
    pub fn e(&self) -> u32 {
        self.e
    }

    /// Modulus size in bits
    pub fn bits(&self) -> usize {
        self.n.bits()
    }

    /// Convert into an `rsa` crate public key for RustCrypto verifiers
    ///
    /// The `rsa` crate enforces its own bounds on modulus size and exponent,
    /// which materialization does not.
    pub fn to_rsa_public_key(&self) -> Result<rsa::RsaPublicKey> {
        rsa::RsaPublicKey::new(self.n.clone(), BigUint::from(self.e))
            .map_err(|e| Error::KeyRejected(e.to_string()))
    }

    /// DER-encoded SubjectPublicKeyInfo, as accepted by `aws-lc-rs` and `ring`
    pub fn to_der(&self) -> Result<Vec<u8>> {
        der::rsa_spki(&self.n.to_bytes_be(), self.e)
    }
}

impl JwkRecord {
    /// Materialize the RSA public key described by `n` and `e`
    ///
    /// The first successful call stores the key on the record; later calls
    /// return the same `Arc` without decoding. A slot holding another key kind
    /// is recomputed and replaced.
    ///
    /// # Errors
    /// - [`Error::MissingAssets`] if `n` or `e` is empty
    /// - [`Error::JwkFieldTooLarge`] if `n` or `e` exceeds its encoded size limit
    /// - [`Error::Encoding`] if `n` or `e` is not unpadded Base64URL
    /// - [`Error::ExponentOutOfRange`] if `e` does not fit in 32 bits
    pub fn rsa_public_key(&self) -> Result<Arc<RsaPublicKeyMaterial>> {
        // Held for the whole conversion so the slot is written at most once
        let mut slot = self.slot();

        match slot.as_ref() {
            Some(PrecomputedKey::Rsa(key)) => {
                tracing::trace!(kid = ?self.kid, "using precomputed rsa key");
                return Ok(Arc::clone(key));
            }
            Some(other) => {
                tracing::warn!(
                    kid = ?self.kid,
                    cached = other.kind(),
                    "replacing precomputed key of another kind with rsa key"
                );
            }
            None => {}
        }

        let key = Arc::new(self.decode_rsa().inspect_err(|err| {
            tracing::debug!(kid = ?self.kid, error = %err, "rsa key materialization failed");
        })?);

        tracing::debug!(
            kid = ?self.kid,
            bits = key.bits(),
            e = key.e(),
            "materialized rsa public key"
        );

        *slot = Some(PrecomputedKey::Rsa(Arc::clone(&key)));
        Ok(key)
    }

    fn decode_rsa(&self) -> Result<RsaPublicKeyMaterial> {
        if self.exponent.is_empty() || self.modulus.is_empty() {
            return Err(Error::MissingAssets("rsa".into()));
        }

        // RFC 7518 §6.3: both members are Base64urlUInt values
        let e_bytes = base64url::decode_field("e", &self.exponent, MAX_JWK_E_SIZE)?;
        let n_bytes = base64url::decode_field("n", &self.modulus, MAX_JWK_N_SIZE)?;

        // RFC 7517 Appendix A.1: big-endian
        let e = exponent_from_be(&e_bytes)?;
        let n = BigUint::from_bytes_be(&n_bytes);

        Ok(RsaPublicKeyMaterial::new(n, e))
    }
}

/// Big-endian bytes to `u32`, ignoring leading zeros
fn exponent_from_be(bytes: &[u8]) -> Result<u32> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];

    if significant.len() > MAX_RSA_EXPONENT_BYTES {
        return Err(Error::ExponentOutOfRange {
            size: significant.len(),
            max: MAX_RSA_EXPONENT_BYTES,
        });
    }

    Ok(significant
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
}
