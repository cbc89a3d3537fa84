//! Configuration loader for Patter.
//!
//! Reads `config.toml` from the data directory (`~/.patter/` in production)
//! and deserializes it into [`AppConfig`]. Falls back to defaults when the
//! file is missing or malformed, so a fresh install runs with zero setup.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration. Every section is optional in the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub serve: ServeConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `PATTER_DATA_DIR` environment variable
/// 2. Platform home directory (`~/.patter`)
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PATTER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".patter");
    }

    // Last resort: current directory
    PathBuf::from(".patter")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Resolve the address the HTTP server binds to.
///
/// CLI flags win over `config.toml`; config wins over the built-in default
/// of `127.0.0.1:3000`.
pub fn resolve_serve_addr(config: &AppConfig, host: Option<&str>, port: Option<u16>) -> String {
    let host = host.unwrap_or(&config.serve.host);
    let port = port.unwrap_or(config.serve.port);
    format!("{host}:{port}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.serve.host, "127.0.0.1");
        assert_eq!(config.serve.port, 3000);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[serve]
host = "0.0.0.0"
port = 8080
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.serve.host, "0.0.0.0");
        assert_eq!(config.serve.port, 8080);
    }

    #[tokio::test]
    async fn load_config_partial_toml_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "[serve]\nport = 4000\n")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.serve.host, "127.0.0.1");
        assert_eq!(config.serve.port, 4000);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.serve.host, "127.0.0.1");
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn resolve_serve_addr_defaults() {
        let config = AppConfig::default();
        assert_eq!(resolve_serve_addr(&config, None, None), "127.0.0.1:3000");
    }

    #[test]
    fn resolve_serve_addr_flags_override_config() {
        let config = AppConfig {
            serve: ServeConfig {
                host: "10.0.0.1".to_string(),
                port: 9000,
            },
        };
        assert_eq!(resolve_serve_addr(&config, None, None), "10.0.0.1:9000");
        assert_eq!(
            resolve_serve_addr(&config, Some("0.0.0.0"), Some(8080)),
            "0.0.0.0:8080"
        );
        assert_eq!(resolve_serve_addr(&config, None, Some(8080)), "10.0.0.1:8080");
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("PATTER_DATA_DIR", "/tmp/test-patter");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-patter"));
        unsafe {
            std::env::remove_var("PATTER_DATA_DIR");
        }
    }
}
