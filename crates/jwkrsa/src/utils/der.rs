//! DER encoding of RSA public keys as SubjectPublicKeyInfo
//!
//! Uses the RustCrypto `spki` and `der` crates. The output is the form
//! accepted by `aws-lc-rs` and `ring` for RSA signature verification.

use crate::error::{Error, Result};
use crate::limits::MAX_RSA_MODULUS_SIZE;
use der::{Encode, Sequence, asn1::BitString, asn1::UintRef};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};

const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

fn encoding_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::KeyEncoding(format!("{operation}: {details}"))
}

/// RSAPublicKey as defined in RFC 8017 Appendix A.1.1:
///
/// ```text
/// RSAPublicKey ::= SEQUENCE {
///     modulus           INTEGER,  -- n
///     publicExponent    INTEGER   -- e
/// }
/// ```
#[derive(Sequence)]
struct RsaPublicKey<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

/// Build a DER SubjectPublicKeyInfo from big-endian modulus bytes and an exponent
pub(crate) fn rsa_spki(n: &[u8], e: u32) -> Result<Vec<u8>> {
    if n.len() > MAX_RSA_MODULUS_SIZE {
        return Err(encoding_error(
            "RSA modulus too large",
            format!("{} bytes (maximum: {MAX_RSA_MODULUS_SIZE} bytes)", n.len()),
        ));
    }

    let e_bytes = e.to_be_bytes();

    // UintRef strips redundant leading zeros and adds the sign byte when needed
    let rsa_pubkey = RsaPublicKey {
        modulus: UintRef::new(n).map_err(|err| encoding_error("invalid RSA modulus", err))?,
        public_exponent: UintRef::new(&e_bytes)
            .map_err(|err| encoding_error("invalid RSA exponent", err))?,
    };

    let rsa_pubkey_der = rsa_pubkey
        .to_der()
        .map_err(|err| encoding_error("failed to encode RSA public key", err))?;

    let spki = SubjectPublicKeyInfoOwned {
        algorithm: AlgorithmIdentifierOwned {
            oid: RSA_ENCRYPTION_OID,
            parameters: Some(der::asn1::AnyRef::NULL.into()),
        },
        subject_public_key: BitString::new(0, rsa_pubkey_der)
            .map_err(|err| encoding_error("failed to create bit string", err))?,
    };

    spki.to_der()
        .map_err(|err| encoding_error("failed to encode SPKI", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsa_spki_small_key() {
        let der = rsa_spki(&[0x00, 0x01], 65537).expect("should encode");
        assert_eq!(der[0], 0x30); // SEQUENCE
    }

    #[test]
    fn test_rsa_spki_2048_bit_length_encoding() {
        // 256-byte modulus needs the two-byte DER length form
        let mut n = vec![0x00; 256];
        n[0] = 0xc1;
        let der = rsa_spki(&n, 65537).expect("should encode");

        assert_eq!(der[0], 0x30);
        assert_eq!(der[1], 0x82);
        assert!(der.len() > 256);
    }

    #[test]
    fn test_rsa_spki_large_modulus_rejected() {
        let n = vec![0x01; MAX_RSA_MODULUS_SIZE + 1];
        let result = rsa_spki(&n, 65537);
        assert!(
            matches!(result, Err(Error::KeyEncoding(msg)) if msg.contains("RSA modulus too large"))
        );
    }
}
