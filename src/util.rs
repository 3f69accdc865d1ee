//! Shared utility functions.

/// Convert a duration in seconds to a human-readable string.
///
/// >= 86400s -> "Xd", >= 3600s -> "Xh", >= 60s -> "Xm", otherwise -> "Xs".
pub fn human_duration(secs: u64) -> String {
    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

/// Convert a byte count to a whole-KB display string, rounding up so that
/// a non-empty store never reads "0 KB".
pub fn human_kb(bytes: u64) -> String {
    format!("{} KB", bytes.div_ceil(1024))
}
