//! Crypto module: the zero-knowledge envelope protocol.
//!
//! A note body is sealed locally before upload: a fresh random salt feeds
//! PBKDF2 to derive an AES-256-GCM key from the password, the body is
//! encrypted under a fresh nonce, and salt + nonce + ciphertext are packed
//! into a base64 envelope. The server stores and returns the envelope
//! verbatim and never sees the password, the key, or the plaintext.
//!
//! Every operation re-derives the key from scratch; nothing is cached
//! between calls and all functions are pure over their explicit inputs, so
//! concurrent seals and opens never interfere. Key derivation is the
//! dominant cost per call — that cost is what makes offline password
//! guessing expensive.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

pub mod cipher;
pub mod envelope;
pub mod kdf;

// ── Envelope layout constants ───────────────────────────────────────────────

/// Salt length in bytes; occupies envelope bytes [0, 16).
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes (96-bit, the GCM standard); bytes [16, 28).
pub const NONCE_LEN: usize = 12;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// GCM authentication tag length in bytes, appended to the ciphertext.
pub const TAG_LEN: usize = 16;

/// Structural minimum for a decoded envelope: salt + nonce. Anything shorter
/// cannot carry a valid salt/nonce pair and is rejected before key derivation.
pub const ENVELOPE_MIN_LEN: usize = SALT_LEN + NONCE_LEN;

/// PBKDF2-HMAC-SHA256 iteration count. Envelopes carry no KDF parameters, so
/// changing this value breaks every existing envelope.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

// ── Error taxonomy ──────────────────────────────────────────────────────────

/// Failures of the envelope protocol.
///
/// `WrongPasswordOrCorrupted` deliberately does not distinguish a bad
/// password from tampered ciphertext — reporting which one failed would hand
/// an attacker a distinguishing oracle. No variant ever carries password,
/// key, or plaintext material.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Envelope text is not valid base64, or decodes to fewer than
    /// [`ENVELOPE_MIN_LEN`] bytes. Not retryable with the same input.
    #[error("invalid envelope format")]
    Format,

    /// Authentication failed: wrong password, corrupted envelope, or both.
    /// Retryable — a failed attempt does not consume the envelope.
    #[error("wrong password or corrupted data")]
    WrongPasswordOrCorrupted,

    /// The secure random source could not produce salt/nonce bytes. Fatal
    /// for the current seal; never retried automatically.
    #[error("secure random source unavailable")]
    RandomSource(#[source] rand::Error),

    /// AEAD encryption refused the input (only reachable for plaintext far
    /// beyond any note size the protocol carries).
    #[error("encryption failed")]
    Encrypt,
}

// ── Seal / open ─────────────────────────────────────────────────────────────

/// Seal a note body with a password, returning the transport envelope.
///
/// Generates a fresh 16-byte salt and 12-byte nonce from the OS secure
/// random source, derives the key, encrypts, and packs. Two seals of the
/// same message never produce the same envelope.
pub fn seal(message: &str, password: &str) -> Result<String, CryptoError> {
    seal_with_rng(message, password, &mut OsRng)
}

/// Seal with an explicit random source.
///
/// The RNG is a capability argument rather than an ambient global so tests
/// can pass a seeded generator and get deterministic envelopes. Production
/// callers go through [`seal`], which injects `OsRng`.
pub fn seal_with_rng<R: RngCore + CryptoRng>(
    message: &str,
    password: &str,
    rng: &mut R,
) -> Result<String, CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut salt)
        .map_err(CryptoError::RandomSource)?;

    let mut nonce = [0u8; NONCE_LEN];
    rng.try_fill_bytes(&mut nonce)
        .map_err(CryptoError::RandomSource)?;

    let key = kdf::derive_key(password, &salt);
    let ciphertext = cipher::encrypt(&key, &nonce, message.as_bytes())?;
    debug_assert_eq!(ciphertext.len(), message.len() + TAG_LEN);

    Ok(envelope::pack(&salt, &nonce, &ciphertext))
}

/// Open a transport envelope with a candidate password.
///
/// Unpacks the envelope (`Format` on malformed input, before any key
/// derivation happens), re-derives the key from the recovered salt, and
/// decrypts. Any authentication failure — wrong password, flipped ciphertext
/// bit, mangled nonce — surfaces as the single `WrongPasswordOrCorrupted`
/// error. A failed open leaves the envelope intact; callers may retry.
pub fn open(envelope_text: &str, password: &str) -> Result<String, CryptoError> {
    let env = envelope::unpack(envelope_text)?;

    let key = kdf::derive_key(password, &env.salt);
    let plaintext = cipher::decrypt(&key, &env.nonce, &env.ciphertext)?;

    // The tag verified but the bytes are not a note we could have sealed.
    // Collapse into the same undifferentiated failure.
    String::from_utf8(plaintext).map_err(|_| CryptoError::WrongPasswordOrCorrupted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seal_open_round_trip() {
        let envelope = seal("meet at the usual place", "hunter2").expect("seal should succeed");
        let message = open(&envelope, "hunter2").expect("open should succeed");
        assert_eq!(message, "meet at the usual place");
    }

    #[test]
    fn test_open_wrong_password_fails() {
        let envelope = seal("meet at the usual place", "hunter2").expect("seal should succeed");
        let result = open(&envelope, "hunter3");
        assert!(
            matches!(result, Err(CryptoError::WrongPasswordOrCorrupted)),
            "wrong password must yield WrongPasswordOrCorrupted, got: {:?}",
            result
        );
    }

    #[test]
    fn test_seal_twice_differs_but_both_open() {
        let e1 = seal("same message", "pw").expect("first seal should succeed");
        let e2 = seal("same message", "pw").expect("second seal should succeed");
        assert_ne!(e1, e2, "fresh salt/nonce must make every envelope unique");
        assert_eq!(open(&e1, "pw").expect("first open"), "same message");
        assert_eq!(open(&e2, "pw").expect("second open"), "same message");
    }

    #[test]
    fn test_seal_with_seeded_rng_is_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let e1 = seal_with_rng("msg", "pw", &mut rng_a).expect("seal a");
        let e2 = seal_with_rng("msg", "pw", &mut rng_b).expect("seal b");
        assert_eq!(e1, e2, "same seed must produce byte-identical envelopes");
    }

    #[test]
    fn test_open_rejects_invalid_base64_as_format() {
        let result = open("not-valid-base64!!", "anything");
        assert!(
            matches!(result, Err(CryptoError::Format)),
            "non-base64 input must yield Format, got: {:?}",
            result
        );
    }

    #[test]
    fn test_open_rejects_short_envelope_as_format() {
        // 27 decoded bytes — one short of the salt+nonce structural floor.
        use base64::Engine;
        let short = base64::engine::general_purpose::STANDARD.encode([0u8; 27]);
        let result = open(&short, "anything");
        assert!(
            matches!(result, Err(CryptoError::Format)),
            "sub-floor envelope must yield Format, got: {:?}",
            result
        );
    }

    #[test]
    fn test_open_authentic_non_utf8_collapses() {
        // Hand-build an envelope over non-UTF-8 bytes. The tag verifies, but
        // open must still fail with the undifferentiated error.
        let salt = [1u8; SALT_LEN];
        let nonce = [2u8; NONCE_LEN];
        let key = kdf::derive_key("pw", &salt);
        let ciphertext =
            cipher::encrypt(&key, &nonce, &[0xFF, 0xFE, 0x80]).expect("encrypt should succeed");
        let envelope_text = envelope::pack(&salt, &nonce, &ciphertext);

        let result = open(&envelope_text, "pw");
        assert!(
            matches!(result, Err(CryptoError::WrongPasswordOrCorrupted)),
            "non-UTF-8 plaintext must collapse into WrongPasswordOrCorrupted, got: {:?}",
            result
        );
    }

    #[test]
    fn test_empty_message_round_trip() {
        let envelope = seal("", "pw").expect("sealing an empty message is valid");
        assert_eq!(open(&envelope, "pw").expect("open"), "");
    }

    #[test]
    fn test_empty_password_round_trip() {
        // An empty password derives a valid (guessable) key; rejecting it is
        // the caller's job, not the core's.
        let envelope = seal("body", "").expect("seal with empty password");
        assert_eq!(open(&envelope, "").expect("open"), "body");
        assert!(open(&envelope, "x").is_err());
    }

    #[test]
    fn test_errors_never_contain_secrets() {
        let envelope = seal("the plaintext body", "secret-password").expect("seal");
        let err = open(&envelope, "wrong-guess").expect_err("open must fail");
        let msg = format!("{:?} {}", err, err);
        assert!(!msg.contains("secret-password"), "error leaked the password");
        assert!(!msg.contains("wrong-guess"), "error leaked the candidate");
        assert!(!msg.contains("plaintext body"), "error leaked plaintext");
    }
}
