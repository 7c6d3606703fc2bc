//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Decode standard base64. Surrounding whitespace is ignored, which is
/// what secrets pasted into `.env` files usually carry.
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().any(|&b| b != 0));
        assert_ne!(bytes, random_bytes(32));
    }

    #[test]
    fn test_base64_secret_roundtrip() {
        let secret = random_bytes(32);
        let encoded = format!("{}\n", general_purpose::STANDARD.encode(&secret));
        assert_eq!(from_base64(&encoded).unwrap(), secret);
    }

    #[test]
    fn test_base64_rejects_garbage() {
        assert!(from_base64("not base64!!").is_err());
    }
}
