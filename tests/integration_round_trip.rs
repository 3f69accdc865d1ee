/// Integration tests: envelope protocol properties, end to end.
///
/// Tests cover:
///   1. Round trip       — seal then open with the same password
///   2. Wrong password   — open with a different password must fail
///   3. Tamper detection — any flipped envelope bit must fail authentication
///   4. Freshness        — two seals of the same input never match
///   5. Structural floor — sub-28-byte envelopes are rejected as malformed
///   6. Concrete scenario — the "hello world" / "secret123" exchange
///
/// All tests are plain `#[test]` — no network access, no appliance needed.
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use deaddrop::crypto::{open, seal, CryptoError, ENVELOPE_MIN_LEN, NONCE_LEN, SALT_LEN, TAG_LEN};

// ── Test 1: Round trip ─────────────────────────────────────────────────────

#[test]
fn test_round_trip_ascii() {
    let envelope = seal("the cache is under the third bench", "pa55word")
        .expect("seal should succeed");
    let message = open(&envelope, "pa55word").expect("open should succeed");
    assert_eq!(message, "the cache is under the third bench");
}

#[test]
fn test_round_trip_multibyte_utf8() {
    let original = "Überraschung! — 空港で会いましょう 🕊";
    let envelope = seal(original, "pässwörd").expect("seal should succeed");
    assert_eq!(
        open(&envelope, "pässwörd").expect("open should succeed"),
        original,
        "multi-byte UTF-8 must survive the round trip exactly"
    );
}

// ── Test 2: Wrong password rejected ────────────────────────────────────────

#[test]
fn test_wrong_password_rejected() {
    let envelope = seal("message", "password-one").expect("seal should succeed");
    let result = open(&envelope, "password-two");
    assert!(
        matches!(result, Err(CryptoError::WrongPasswordOrCorrupted)),
        "a different password must yield WrongPasswordOrCorrupted, got: {:?}",
        result
    );
}

// ── Test 3: Tamper detection ───────────────────────────────────────────────

/// Flip one bit in every byte of the ciphertext+tag region, one at a time,
/// and verify the correct password can never open the altered envelope.
#[test]
fn test_single_bit_tamper_in_ciphertext_region_always_detected() {
    let envelope = seal("tamper target", "pw").expect("seal should succeed");
    let raw = BASE64.decode(&envelope).expect("envelope must be base64");

    for i in ENVELOPE_MIN_LEN..raw.len() {
        let mut tampered = raw.clone();
        tampered[i] ^= 0x01;
        let tampered_text = BASE64.encode(&tampered);

        let result = open(&tampered_text, "pw");
        assert!(
            matches!(result, Err(CryptoError::WrongPasswordOrCorrupted)),
            "flipped bit in byte {} must yield WrongPasswordOrCorrupted, got: {:?}",
            i,
            result
        );
    }
}

/// A flipped salt bit derives a different key; a flipped nonce bit breaks
/// the GCM stream. Both must surface as the same undifferentiated failure.
#[test]
fn test_tampered_salt_or_nonce_detected() {
    let envelope = seal("tamper target", "pw").expect("seal should succeed");
    let raw = BASE64.decode(&envelope).expect("envelope must be base64");

    let mut bad_salt = raw.clone();
    bad_salt[0] ^= 0x80;
    let result = open(&BASE64.encode(&bad_salt), "pw");
    assert!(
        matches!(result, Err(CryptoError::WrongPasswordOrCorrupted)),
        "tampered salt must fail authentication, got: {:?}",
        result
    );

    let mut bad_nonce = raw.clone();
    bad_nonce[SALT_LEN] ^= 0x80;
    let result = open(&BASE64.encode(&bad_nonce), "pw");
    assert!(
        matches!(result, Err(CryptoError::WrongPasswordOrCorrupted)),
        "tampered nonce must fail authentication, got: {:?}",
        result
    );
}

// ── Test 4: Freshness ──────────────────────────────────────────────────────

/// Same message, same password, two seals: the envelopes must differ (fresh
/// salt and nonce every call) while both open back to the same content.
#[test]
fn test_two_seals_differ_but_open_identically() {
    let e1 = seal("stable content", "pw").expect("first seal");
    let e2 = seal("stable content", "pw").expect("second seal");

    assert_ne!(e1, e2, "envelopes must differ across seals");

    let raw1 = BASE64.decode(&e1).expect("base64");
    let raw2 = BASE64.decode(&e2).expect("base64");
    assert_ne!(&raw1[..SALT_LEN], &raw2[..SALT_LEN], "salts must differ");
    assert_ne!(
        &raw1[SALT_LEN..ENVELOPE_MIN_LEN],
        &raw2[SALT_LEN..ENVELOPE_MIN_LEN],
        "nonces must differ"
    );

    assert_eq!(open(&e1, "pw").expect("open e1"), "stable content");
    assert_eq!(open(&e2, "pw").expect("open e2"), "stable content");
}

// ── Test 5: Structural floor ───────────────────────────────────────────────

#[test]
fn test_structural_floor_rejected_as_format() {
    for len in [0usize, 1, 15, 16, 27] {
        let text = BASE64.encode(vec![0u8; len]);
        let result = open(&text, "pw");
        assert!(
            matches!(result, Err(CryptoError::Format)),
            "{}-byte envelope must yield Format, got: {:?}",
            len,
            result
        );
    }
}

// ── Test 6: Concrete scenario ──────────────────────────────────────────────

/// The canonical exchange: "hello world" sealed with "secret123".
#[test]
fn test_hello_world_scenario() {
    let envelope = seal("hello world", "secret123").expect("seal should succeed");

    // 16 salt + 12 nonce + 11 body + 16 tag = 55 raw bytes, base64-encoded.
    let raw = BASE64.decode(&envelope).expect("envelope must be base64");
    assert_eq!(
        raw.len(),
        SALT_LEN + NONCE_LEN + 11 + TAG_LEN,
        "raw envelope must be exactly salt + nonce + body + tag"
    );
    assert!(
        envelope.len() >= 56,
        "transport text must be at least 56 chars, got {}",
        envelope.len()
    );

    assert_eq!(
        open(&envelope, "secret123").expect("correct password must open"),
        "hello world"
    );
    assert!(
        matches!(
            open(&envelope, "wrong"),
            Err(CryptoError::WrongPasswordOrCorrupted)
        ),
        "wrong password must be rejected"
    );
    assert!(
        matches!(open("not-valid-base64!!", "anything"), Err(CryptoError::Format)),
        "garbage transport text must be rejected as Format"
    );
}
