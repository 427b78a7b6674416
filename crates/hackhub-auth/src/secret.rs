//! Random opaque secrets.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;

/// Secret length in bytes, before base64 encoding.
const SECRET_LENGTH: usize = 32;

/// Generate a random opaque secret.
///
/// Used as the placeholder password for accounts provisioned from an external
/// identity assertion: the value is hashed and then discarded, so the account
/// always carries a password hash while the plaintext is unknowable and can
/// never be used to log in.
#[must_use]
pub fn random_secret() -> String {
    let mut bytes = [0u8; SECRET_LENGTH];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_distinct() {
        assert_ne!(random_secret(), random_secret());
    }

    #[test]
    fn secret_is_url_safe_base64() {
        let secret = random_secret();
        assert!(!secret.is_empty());
        assert!(!secret.contains('+'));
        assert!(!secret.contains('/'));
        assert!(!secret.contains('='));
    }
}
