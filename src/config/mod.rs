/// Config module: the stored server URL under `~/.deaddrop`.
///
/// The drop box is usually reached at its Wi-Fi AP address, so that is the
/// default; `deaddrop server <URL>` persists an override. The file is a
/// single trimmed line — nothing secret lives here, but writes still go
/// through a temp-file rename so a crash never leaves a half-written URL.
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::DeadDropError;

/// Address the appliance assigns itself on its own access point.
pub const DEFAULT_SERVER: &str = "https://192.168.4.1";

pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or(DeadDropError::HomeDirNotFound)?;
    Ok(home.join(".deaddrop"))
}

pub fn server_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("server"))
}

pub fn ensure_config_dir() -> anyhow::Result<()> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {} directory", dir.display()))?;
    Ok(())
}

/// Persist the server URL for future invocations.
pub fn write_server(url: &str) -> anyhow::Result<()> {
    ensure_config_dir()?;
    write_server_atomic(url, &server_path()?)
}

/// Write the URL to `dest` atomically (write to temp then rename).
///
/// Uses a temp file in the same directory to ensure atomic replacement on
/// POSIX systems.
pub fn write_server_atomic(url: &str, dest: &Path) -> anyhow::Result<()> {
    let parent = dest
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Config destination path has no parent directory"))?;

    let tmp = parent.join(".server.tmp");

    std::fs::write(&tmp, url.trim()).map_err(DeadDropError::AtomicWriteFailed)?;

    if let Err(e) = std::fs::rename(&tmp, dest) {
        // Attempt cleanup of temp file on rename failure
        let _ = std::fs::remove_file(&tmp);
        return Err(DeadDropError::AtomicWriteFailed(e).into());
    }

    Ok(())
}

/// Read the stored server URL, falling back to [`DEFAULT_SERVER`] when no
/// override has been written yet.
pub fn read_server() -> anyhow::Result<String> {
    read_server_at(&server_path()?)
}

pub fn read_server_at(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        return Ok(DEFAULT_SERVER.to_string());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read server URL from {}", path.display()))?;
    let value = content.trim().to_string();
    if value.is_empty() {
        return Ok(DEFAULT_SERVER.to_string());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("server");
        write_server_atomic("https://10.0.0.5", &path).expect("write should succeed");
        let url = read_server_at(&path).expect("read should succeed");
        assert_eq!(url, "https://10.0.0.5");
    }

    #[test]
    fn test_read_missing_file_yields_default() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("server");
        let url = read_server_at(&path).expect("read of missing file should succeed");
        assert_eq!(url, DEFAULT_SERVER);
    }

    #[test]
    fn test_read_blank_file_yields_default() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("server");
        std::fs::write(&path, "  \n").expect("write blank");
        let url = read_server_at(&path).expect("read should succeed");
        assert_eq!(url, DEFAULT_SERVER);
    }

    #[test]
    fn test_write_trims_whitespace() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("server");
        write_server_atomic("  https://drop.local \n", &path).expect("write should succeed");
        let url = read_server_at(&path).expect("read should succeed");
        assert_eq!(url, "https://drop.local");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("server");
        write_server_atomic("https://10.0.0.5", &path).expect("write should succeed");
        assert!(
            !dir.path().join(".server.tmp").exists(),
            "temp file must be gone after a successful write"
        );
    }
}
