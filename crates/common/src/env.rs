//! Environment/runtime helpers
//!
//! Sanity checks to ensure the SQLite database file can be created at startup.

use std::path::PathBuf;

use tracing::debug;

/// Resolve the on-disk file behind a `sqlite:` URL.
///
/// Returns `None` for in-memory databases and for URLs of other schemes.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" || path.starts_with("file::memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the parent directory of the SQLite file exists.
pub async fn ensure_sqlite_dir(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else { return Ok(()) };
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
            debug!(dir = %dir.display(), "sqlite directory ready");
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_have_no_file() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("sqlite://:memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }

    #[test]
    fn query_string_is_stripped() {
        assert_eq!(
            sqlite_file_path("sqlite://data/meubanco.db?mode=rwc"),
            Some(PathBuf::from("data/meubanco.db"))
        );
        assert_eq!(sqlite_file_path("sqlite:app.db"), Some(PathBuf::from("app.db")));
    }

    #[tokio::test]
    async fn creates_missing_parent_directory() {
        let dir = std::env::temp_dir().join(format!("servicos-env-{}", std::process::id()));
        let url = format!("sqlite://{}/nested/app.db?mode=rwc", dir.display());
        ensure_sqlite_dir(&url).await.unwrap();
        assert!(dir.join("nested").is_dir());
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
