//! Authenticated encryption: AES-256-GCM.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use super::{CryptoError, KEY_LEN, NONCE_LEN};

/// Encrypt plaintext under a derived key and fresh nonce.
///
/// Returns ciphertext with the 16-byte GCM tag appended, so the output is
/// always `plaintext.len() + 16` bytes. The tag binds to the exact
/// plaintext/key/nonce triple; no associated data is used. Stateless —
/// nothing survives the call.
///
/// The caller owns nonce freshness: a nonce must never repeat under the
/// same key. Here every seal derives a new key from a fresh salt, so a
/// fresh nonce per call keeps the pair unique.
pub fn encrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| CryptoError::Encrypt)
}

/// Verify and decrypt ciphertext+tag.
///
/// The tag is verified before any plaintext is released. On mismatch the
/// error is always `WrongPasswordOrCorrupted` — the cipher cannot tell a
/// wrong key from tampered ciphertext, and must not try to.
pub fn decrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::WrongPasswordOrCorrupted)
}
