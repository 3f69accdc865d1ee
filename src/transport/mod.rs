/// Transport module: HTTP client for the drop box JSON API.
///
/// Wraps `reqwest::blocking::Client` against the appliance's endpoints:
///
/// ```text
/// GET    /api/notes       list note metadata
/// POST   /api/notes       create a note ({title, message, encrypted})
/// GET    /api/notes/{id}  read one note (envelope returned verbatim)
/// DELETE /api/notes/{id}  delete a note (404 treated as already gone)
/// GET    /api/stats       storage statistics
/// POST   /api/time        push the client's Unix time to the appliance
/// ```
///
/// The appliance serves HTTPS with a self-signed certificate baked into its
/// firmware, so certificate verification is off unless the caller opts back
/// in. The server only ever sees envelopes for encrypted notes — nothing in
/// this module touches passwords or plaintext of sealed bodies.
use std::time::Duration;

use crate::error::DeadDropError;
use crate::note::{
    CreateNoteRequest, CreateNoteResponse, ErrorResponse, Note, NoteList, NoteMetadata,
    StorageStats, TimeSyncRequest,
};

/// HTTP client for a DeadDrop appliance.
pub struct ServerClient {
    client: reqwest::blocking::Client,
    /// Base URL, e.g. "https://192.168.4.1" (no trailing slash).
    base: String,
}

impl ServerClient {
    /// Create a new ServerClient.
    ///
    /// `base` may carry a trailing slash (stripped) and should include the
    /// scheme; a bare host is assumed to be https. When `verify_tls` is
    /// false the client accepts the appliance's self-signed certificate.
    pub fn new(base: &str, verify_tls: bool) -> anyhow::Result<Self> {
        let trimmed = base.trim_end_matches('/');
        let base = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))?;

        Ok(Self { client, base })
    }

    /// GET `/api/notes` — all note metadata, newest first.
    pub fn list_notes(&self) -> anyhow::Result<Vec<NoteMetadata>> {
        let url = format!("{}/api/notes", self.base);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| anyhow::anyhow!("list request failed: {}", e))?;
        let list: NoteList = Self::expect_json(response, "list notes")?;

        let mut notes = list.notes;
        notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(notes)
    }

    /// POST `/api/notes` — create a note, returning the server-assigned ID.
    ///
    /// The request's `message` is already an envelope when the caller sealed
    /// it; this method uploads whatever it is handed.
    pub fn create_note(&self, request: &CreateNoteRequest) -> anyhow::Result<String> {
        let url = format!("{}/api/notes", self.base);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| anyhow::anyhow!("create request failed: {}", e))?;
        let created: CreateNoteResponse = Self::expect_json(response, "create note")?;
        Ok(created.id)
    }

    /// GET `/api/notes/{id}` — one full note. A 404 maps to the typed
    /// [`DeadDropError::NoteNotFound`] so callers can treat it as permanent
    /// and skip retries.
    pub fn get_note(&self, id: &str) -> anyhow::Result<Note> {
        let url = format!("{}/api/notes/{}", self.base, id);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| anyhow::anyhow!("read request failed: {}", e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DeadDropError::NoteNotFound.into());
        }

        Self::expect_json(response, "read note")
    }

    /// DELETE `/api/notes/{id}`.
    ///
    /// Treats 404 as success (idempotent — note already gone).
    pub fn delete_note(&self, id: &str) -> anyhow::Result<()> {
        let url = format!("{}/api/notes/{}", self.base, id);
        let response = self
            .client
            .delete(&url)
            .send()
            .map_err(|e| anyhow::anyhow!("delete request failed: {}", e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(()); // Already deleted — idempotent
        }
        if !response.status().is_success() {
            return Err(Self::server_error(response, "delete note").into());
        }
        Ok(())
    }

    /// GET `/api/stats` — note count and flash usage.
    pub fn stats(&self) -> anyhow::Result<StorageStats> {
        let url = format!("{}/api/stats", self.base);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| anyhow::anyhow!("stats request failed: {}", e))?;
        Self::expect_json(response, "stats")
    }

    /// POST `/api/time` — push the given Unix timestamp to the appliance's
    /// clock so note timestamps come out right.
    pub fn sync_time(&self, timestamp: u64) -> anyhow::Result<()> {
        let url = format!("{}/api/time", self.base);
        let response = self
            .client
            .post(&url)
            .json(&TimeSyncRequest { timestamp })
            .send()
            .map_err(|e| anyhow::anyhow!("time sync request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(Self::server_error(response, "time sync").into());
        }
        Ok(())
    }

    // ── Private helpers ────────────────────────────────────────────────────

    /// Check the status and deserialize a JSON body, surfacing the server's
    /// own `{"error": ...}` message when there is one.
    fn expect_json<T: serde::de::DeserializeOwned>(
        response: reqwest::blocking::Response,
        what: &str,
    ) -> anyhow::Result<T> {
        if !response.status().is_success() {
            return Err(Self::server_error(response, what).into());
        }
        response
            .json::<T>()
            .map_err(|e| anyhow::anyhow!("failed to parse {} response: {}", what, e))
    }

    /// Build a [`DeadDropError::Server`] from a non-2xx response, preferring
    /// the server's JSON error message over the bare status code.
    fn server_error(response: reqwest::blocking::Response, what: &str) -> DeadDropError {
        let status = response.status();
        let detail = response
            .json::<ErrorResponse>()
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("status {}", status));
        DeadDropError::Server(format!("{} failed: {}", what, detail))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
