//! JSON Web Key records and their precomputed key slot
pub(crate) mod rsa;

use crate::algorithm::AlgorithmType;
use crate::error::{Error, Result};
use crate::limits::{MAX_JWK_ALG_SIZE, MAX_JWK_KID_SIZE};
use miniserde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use self::rsa::RsaPublicKeyMaterial;

/// Key material memoized on a [`JwkRecord`]
///
/// The slot is shared by every key kind a key set may hold, so a lookup
/// checks the variant before using the cached value.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum PrecomputedKey {
    /// RSA public key materialized from `n` and `e`
    Rsa(Arc<RsaPublicKeyMaterial>),
    /// DER SubjectPublicKeyInfo of an elliptic-curve key, produced outside this crate
    Ec(Arc<[u8]>),
}

impl PrecomputedKey {
    /// Key kind name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            PrecomputedKey::Rsa(_) => "rsa",
            PrecomputedKey::Ec(_) => "ec",
        }
    }
}

/// Raw JWK members as they appear in JSON
#[derive(Deserialize)]
struct RawJwk {
    kty: Option<String>,
    kid: Option<String>,
    alg: Option<String>,
    #[serde(rename = "use")]
    key_use: Option<String>,
    n: Option<String>,
    e: Option<String>,
}

/// One entry of a JSON Web Key Set
///
/// `modulus` and `exponent` hold the `n` and `e` members verbatim. An absent
/// member is an empty string. The precomputed slot is filled on the first
/// successful conversion and never cleared; changing `modulus` or `exponent`
/// afterwards does not invalidate it.
#[derive(Debug, Default)]
pub struct JwkRecord {
    /// Key type (e.g., "RSA")
    pub kty: Option<String>,
    /// Key ID
    pub kid: Option<String>,
    /// Algorithm (advisory per RFC 7517)
    pub alg: Option<String>,
    /// Key use (RFC 7517 Section 4.2)
    pub key_use: Option<String>,
    /// RSA modulus, Base64URL unsigned integer
    pub modulus: String,
    /// RSA public exponent, Base64URL unsigned integer
    pub exponent: String,
    precomputed: Mutex<Option<PrecomputedKey>>,
}

impl JwkRecord {
    /// Create an RSA record from its encoded modulus and exponent
    pub fn new(modulus: impl Into<String>, exponent: impl Into<String>) -> Self {
        Self {
            kty: Some("RSA".into()),
            modulus: modulus.into(),
            exponent: exponent.into(),
            ..Self::default()
        }
    }

    /// Parse a single JWK JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawJwk = miniserde::json::from_str(json)
            .map_err(|_| Error::FormatInvalidJson("jwk: invalid jwk json".into()))?;

        if let Some(kid) = &raw.kid {
            check_field_size("kid", kid, MAX_JWK_KID_SIZE)?;
        }
        if let Some(alg) = &raw.alg {
            check_field_size("alg", alg, MAX_JWK_ALG_SIZE)?;
        }

        Ok(Self {
            kty: raw.kty,
            kid: raw.kid,
            alg: raw.alg,
            key_use: raw.key_use,
            modulus: raw.n.unwrap_or_default(),
            exponent: raw.e.unwrap_or_default(),
            precomputed: Mutex::new(None),
        })
    }

    /// Parse the advisory `alg` member, if present
    pub fn algorithm(&self) -> Result<Option<AlgorithmType>> {
        self.alg.as_deref().map(AlgorithmType::from_str).transpose()
    }

    /// Current content of the precomputed slot
    pub fn precomputed(&self) -> Option<PrecomputedKey> {
        self.slot().clone()
    }

    /// Store a key in the precomputed slot unless an RSA key is already cached
    ///
    /// Returns `false` and leaves the slot unchanged once [`rsa_public_key`]
    /// has succeeded on this record.
    ///
    /// [`rsa_public_key`]: JwkRecord::rsa_public_key
    pub fn set_precomputed(&self, key: PrecomputedKey) -> bool {
        let mut slot = self.slot();
        if matches!(*slot, Some(PrecomputedKey::Rsa(_))) {
            return false;
        }
        *slot = Some(key);
        true
    }

    /// Whether an RSA key has already been materialized
    pub fn is_computed(&self) -> bool {
        matches!(*self.slot(), Some(PrecomputedKey::Rsa(_)))
    }

    // The slot only ever holds fully constructed values, so a poisoned lock is still usable
    pub(crate) fn slot(&self) -> MutexGuard<'_, Option<PrecomputedKey>> {
        self.precomputed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn check_field_size(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::JwkFieldTooLarge {
            field: field.into(),
            size: value.len(),
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_rsa() {
        let record = JwkRecord::from_json(
            r#"{"kty":"RSA","kid":"k1","alg":"RS256","use":"sig","n":"AQAB","e":"AQAB"}"#,
        )
        .expect("jwk parse");

        assert_eq!(record.kty.as_deref(), Some("RSA"));
        assert_eq!(record.kid.as_deref(), Some("k1"));
        assert_eq!(record.key_use.as_deref(), Some("sig"));
        assert_eq!(record.modulus, "AQAB");
        assert_eq!(record.exponent, "AQAB");
        assert_eq!(record.algorithm().unwrap(), Some(AlgorithmType::RS256));
        assert!(record.precomputed().is_none());
    }

    #[test]
    fn test_from_json_missing_members_are_empty() {
        let record = JwkRecord::from_json(r#"{"kty":"RSA","kid":"k1"}"#).unwrap();
        assert!(record.modulus.is_empty());
        assert!(record.exponent.is_empty());
        assert_eq!(record.algorithm().unwrap(), None);
    }

    #[test]
    fn test_from_json_ignores_unknown_members() {
        let record =
            JwkRecord::from_json(r#"{"kty":"RSA","n":"AQAB","e":"AQAB","x5t":"abc"}"#).unwrap();
        assert_eq!(record.modulus, "AQAB");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            JwkRecord::from_json("{not json"),
            Err(Error::FormatInvalidJson(_))
        ));
        assert!(matches!(
            JwkRecord::from_json(r#"{"n": 12}"#),
            Err(Error::FormatInvalidJson(_))
        ));
    }

    #[test]
    fn test_from_json_kid_too_large() {
        let json = format!(r#"{{"kid":"{}","n":"AQAB","e":"AQAB"}}"#, "k".repeat(300));
        assert_eq!(
            JwkRecord::from_json(&json).unwrap_err(),
            Error::JwkFieldTooLarge {
                field: "kid".into(),
                size: 300,
                max: MAX_JWK_KID_SIZE,
            }
        );
    }

    #[test]
    fn test_from_json_alg_too_large() {
        let json = r#"{"alg":"RS256RS256RS256RS256","n":"AQAB","e":"AQAB"}"#;
        assert!(matches!(
            JwkRecord::from_json(json),
            Err(Error::JwkFieldTooLarge { field, .. }) if field == "alg"
        ));
    }

    #[test]
    fn test_algorithm_unsupported() {
        let record = JwkRecord {
            alg: Some("ES256".into()),
            ..JwkRecord::new("AQAB", "AQAB")
        };
        assert!(matches!(
            record.algorithm(),
            Err(Error::AlgorithmUnsupported(alg)) if alg == "ES256"
        ));
    }

    #[test]
    fn test_set_precomputed() {
        let record = JwkRecord::new("AQAB", "AQAB");
        let ec = PrecomputedKey::Ec(Arc::from(vec![0x30, 0x00]));
        assert!(record.set_precomputed(ec));

        let cached = record.precomputed().expect("slot should be filled");
        assert_eq!(cached.kind(), "ec");
        assert!(!record.is_computed());
    }

    #[test]
    fn test_set_precomputed_keeps_rsa_key() {
        let record = JwkRecord::new("xQEC", "AQAB");
        let first = record.rsa_public_key().unwrap();

        let ec = PrecomputedKey::Ec(Arc::from(vec![0x30, 0x00]));
        assert!(!record.set_precomputed(ec));
        assert!(record.is_computed());

        let second = record.rsa_public_key().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_record_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwkRecord>();
    }
}
