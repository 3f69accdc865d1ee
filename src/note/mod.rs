/// Note module: wire types for the drop box JSON API.
///
/// Field names are the wire contract — the appliance serializes exactly
/// these keys, so renaming a field here is a protocol change. The `message`
/// field holds the plaintext body when `encrypted` is false and the opaque
/// envelope text when it is true; the server stores and returns it verbatim
/// either way. Titles and timestamps always travel in the clear.
use serde::{Deserialize, Serialize};

/// Metadata for one note, as returned by `GET /api/notes`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NoteMetadata {
    /// Server-assigned note ID (opaque hex string).
    pub id: String,
    /// Title, never encrypted.
    pub title: String,
    /// Unix timestamp (seconds) when the note was created, server clock.
    pub timestamp: u64,
    /// Whether `message` is an envelope rather than plaintext.
    pub encrypted: bool,
}

/// A full note, as returned by `GET /api/notes/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub timestamp: u64,
    pub encrypted: bool,
    /// Plaintext body, or the envelope text when `encrypted` is true.
    pub message: String,
}

/// Response wrapper for the note list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NoteList {
    pub notes: Vec<NoteMetadata>,
}

/// Request body for `POST /api/notes`.
///
/// The client seals `message` before building this request when a password
/// was supplied; the server never sees which — it just stores the string.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateNoteRequest {
    pub title: String,
    pub message: String,
    pub encrypted: bool,
}

/// Response body for `POST /api/notes`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateNoteResponse {
    pub id: String,
    pub status: String,
}

/// Storage statistics from `GET /api/stats`. `total` and `used` are bytes
/// of flash on the appliance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StorageStats {
    pub count: u32,
    pub total: u64,
    pub used: u64,
}

/// Request body for `POST /api/time` — the appliance has no battery-backed
/// clock, so the client pushes its own Unix time after connecting.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimeSyncRequest {
    pub timestamp: u64,
}

/// Error body the server attaches to non-2xx responses.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
