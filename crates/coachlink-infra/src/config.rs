//! Configuration loader for Coachlink.
//!
//! Reads an optional `config.toml` and deserializes it into
//! [`CoachlinkConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::{Path, PathBuf};

use coachlink_types::config::CoachlinkConfig;

/// Environment variable naming an explicit config file path.
pub const CONFIG_ENV: &str = "COACHLINK_CONFIG";

/// Resolve which config file to read.
///
/// Priority: explicit CLI path, then `$COACHLINK_CONFIG`, then `config.toml`
/// in the working directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from("config.toml"),
    }
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`CoachlinkConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(path: &Path) -> CoachlinkConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return CoachlinkConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return CoachlinkConfig::default();
        }
    };

    match toml::from_str::<CoachlinkConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            CoachlinkConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).await;
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.coach.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 3000

[stream]
base_url = "http://localhost:4000"
token_ttl_secs = 900

[coach]
max_tokens = 150
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.stream.base_url, "http://localhost:4000");
        assert_eq!(config.stream.token_ttl_secs, Some(900));
        assert_eq!(config.coach.max_tokens, 150);
        assert_eq!(config.coach.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("/etc/coachlink.toml")));
        assert_eq!(path, PathBuf::from("/etc/coachlink.toml"));
    }
}
