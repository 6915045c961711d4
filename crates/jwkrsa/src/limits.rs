//! Size limit constants for input validation

// ============================================================================
// JWK field size limits
// ============================================================================

/// Maximum size for Base64URL-encoded RSA modulus (n) field (12KB)
/// 8192-byte modulus (65536 bits) encodes to ~10.9KB Base64URL
pub(crate) const MAX_JWK_N_SIZE: usize = 12 * 1024;

/// Maximum size for Base64URL-encoded RSA exponent (e) field (64 bytes)
/// Standard exponent 65537 (0x010001) encodes to 4 bytes, but we allow margin
pub(crate) const MAX_JWK_E_SIZE: usize = 64;

/// Maximum size for JWK key ID (kid) field (256 bytes)
pub(crate) const MAX_JWK_KID_SIZE: usize = 256;

/// Maximum size for JWK algorithm (alg) field (16 bytes)
pub(crate) const MAX_JWK_ALG_SIZE: usize = 16;

/// Maximum length accepted when parsing an algorithm name
pub(crate) const MAX_ALG_LENGTH: usize = 16;

// ============================================================================
// Decoded key material limits
// ============================================================================

/// Significant bytes allowed in a decoded RSA public exponent (fits `u32`)
pub(crate) const MAX_RSA_EXPONENT_BYTES: usize = 4;

/// Largest decoded modulus accepted for DER encoding (65536 bits)
pub(crate) const MAX_RSA_MODULUS_SIZE: usize = 8192;
