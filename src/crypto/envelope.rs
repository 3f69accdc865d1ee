//! Envelope codec: the fixed binary layout and its base64 transport form.
//!
//! ```text
//! Offset  Size  Field
//! 0       16    Salt (random, feeds key derivation)
//! 16      12    Nonce (random, feeds AES-GCM)
//! 28      N     Ciphertext + 16-byte GCM tag
//! ```
//!
//! Offsets are fixed, so no delimiters or length prefixes are needed. There
//! is no version byte: any future layout change is a breaking change. The
//! whole structure is base64-encoded (standard alphabet, padded) so it can
//! travel inside a JSON string field.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::{CryptoError, ENVELOPE_MIN_LEN, NONCE_LEN, SALT_LEN};

/// A decoded envelope: the salt and nonce recovered from the fixed offsets,
/// plus everything after byte 28 as ciphertext+tag.
#[derive(Debug)]
pub struct Envelope {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
}

/// Pack salt, nonce, and ciphertext+tag into the transport text.
///
/// Concatenates the three fields in layout order and base64-encodes the
/// result. Infallible: any byte content encodes.
pub fn pack(salt: &[u8; SALT_LEN], nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> String {
    let mut combined = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    combined.extend_from_slice(salt);
    combined.extend_from_slice(nonce);
    combined.extend_from_slice(ciphertext);
    BASE64.encode(combined)
}

/// Unpack transport text back into salt, nonce, and ciphertext+tag.
///
/// Fails with [`CryptoError::Format`] when the text is not valid base64 or
/// decodes to fewer than [`ENVELOPE_MIN_LEN`] bytes. The codec only
/// enforces this structural floor — whether the ciphertext region actually
/// authenticates is the cipher's call, not the codec's.
pub fn unpack(transport_text: &str) -> Result<Envelope, CryptoError> {
    let combined = BASE64
        .decode(transport_text)
        .map_err(|_| CryptoError::Format)?;

    if combined.len() < ENVELOPE_MIN_LEN {
        return Err(CryptoError::Format);
    }

    // Length checked above, so both conversions are infallible.
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&combined[..SALT_LEN]);
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&combined[SALT_LEN..ENVELOPE_MIN_LEN]);

    Ok(Envelope {
        salt,
        nonce,
        ciphertext: combined[ENVELOPE_MIN_LEN..].to_vec(),
    })
}
