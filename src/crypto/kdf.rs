//! Password-to-key derivation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::{KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};

/// Derive a 256-bit AES key from a password and a 16-byte salt.
///
/// PBKDF2-HMAC-SHA256 with the fixed iteration count from
/// [`PBKDF2_ITERATIONS`]. Deterministic: the same password and salt always
/// produce the same key, which is what lets `open` re-derive the key from
/// the salt stored in the envelope. Cost depends only on the iteration
/// count, never on the password's content or length, so derivation time
/// reveals nothing about the password.
///
/// Empty passwords are accepted and derive a valid (trivially guessable)
/// key; rejecting weak passwords is the caller's responsibility.
///
/// The key is wrapped in `Zeroizing` so the material is wiped when the
/// caller drops it at the end of a seal or open.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, key.as_mut());
    key
}
