//! RSA signature algorithm identifiers
//!
//! These are lookup tags for a verification dispatch table; materialization
//! never interprets them.
use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;

/// Algorithm identifier usable with an RSA public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmType {
    /// RSASSA-PKCS1-v1_5 using SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    RS512,
    /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256
    PS256,
    /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384
    PS384,
    /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512
    PS512,
}

impl AlgorithmType {
    /// All supported identifiers
    pub const ALL: [AlgorithmType; 6] = [
        AlgorithmType::RS256,
        AlgorithmType::RS384,
        AlgorithmType::RS512,
        AlgorithmType::PS256,
        AlgorithmType::PS384,
        AlgorithmType::PS512,
    ];

    /// Parse a JOSE `alg` value
    pub fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAX_ALG_LENGTH {
            return Err(Error::AlgorithmUnsupported(format!(
                "Algorithm string too long: {} bytes (maximum: {} bytes)",
                s.len(),
                MAX_ALG_LENGTH
            )));
        }

        match s {
            "none" => Err(Error::AlgorithmNoneRejected),
            "RS256" => Ok(AlgorithmType::RS256),
            "RS384" => Ok(AlgorithmType::RS384),
            "RS512" => Ok(AlgorithmType::RS512),
            "PS256" => Ok(AlgorithmType::PS256),
            "PS384" => Ok(AlgorithmType::PS384),
            "PS512" => Ok(AlgorithmType::PS512),
            _ => Err(Error::AlgorithmUnsupported(s.into())),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmType::RS256 => "RS256",
            AlgorithmType::RS384 => "RS384",
            AlgorithmType::RS512 => "RS512",
            AlgorithmType::PS256 => "PS256",
            AlgorithmType::PS384 => "PS384",
            AlgorithmType::PS512 => "PS512",
        }
    }

    /// Whether the algorithm uses PSS padding
    pub const fn is_pss(&self) -> bool {
        matches!(
            self,
            AlgorithmType::PS256 | AlgorithmType::PS384 | AlgorithmType::PS512
        )
    }
}

impl std::fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert!(matches!(
            AlgorithmType::from_str("none"),
            Err(Error::AlgorithmNoneRejected)
        ));
        for unsupported in ["HS256", "ES256", "EdDSA", "rs256", ""] {
            assert!(
                matches!(
                    AlgorithmType::from_str(unsupported),
                    Err(Error::AlgorithmUnsupported(_))
                ),
                "{unsupported} should be unsupported"
            );
        }

        for alg in AlgorithmType::ALL {
            assert_eq!(AlgorithmType::from_str(alg.as_str()).unwrap(), alg);
        }
    }

    #[test]
    fn test_algorithm_from_str_too_long() {
        let long = "RS".repeat(MAX_ALG_LENGTH);
        assert!(matches!(
            AlgorithmType::from_str(&long),
            Err(Error::AlgorithmUnsupported(msg)) if msg.contains("too long")
        ));
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(format!("{}", AlgorithmType::RS256), "RS256");
        assert_eq!(format!("{}", AlgorithmType::PS512), "PS512");
        assert_eq!(AlgorithmType::PS384.as_ref(), "PS384");
    }

    #[test]
    fn test_algorithm_is_pss() {
        let pss: Vec<_> = AlgorithmType::ALL
            .into_iter()
            .filter(AlgorithmType::is_pss)
            .collect();
        assert_eq!(
            pss,
            vec![
                AlgorithmType::PS256,
                AlgorithmType::PS384,
                AlgorithmType::PS512
            ]
        );
    }
}
