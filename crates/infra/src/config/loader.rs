//! Configuration loader
//!
//! Loads gateway configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `NOVITUS_HOST` is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `NOVITUS_HOST`: Gateway base URL (required)
//! - `NOVITUS_TOKEN`: Pre-existing bearer token
//! - `NOVITUS_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `NOVITUS_USER_AGENT`: User-Agent header value
//! - `NOVITUS_ACCEPT_INVALID_CERTS`: Trust self-signed certificates
//!   (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./novitus.json` or `./novitus.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use novitus_domain::constants::DEFAULT_TIMEOUT_SECS;
use novitus_domain::{GatewayConfig, NovitusError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["novitus.json", "novitus.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If that fails, falls
/// back to loading from a config file.
///
/// # Errors
/// Returns `NovitusError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded configuration does not validate
pub fn load() -> Result<GatewayConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!(host = %config.host, "Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `NovitusError::Config` if `NOVITUS_HOST` is missing or a value
/// is invalid.
pub fn load_from_env() -> Result<GatewayConfig> {
    let host = env_var("NOVITUS_HOST")?;
    let token = std::env::var("NOVITUS_TOKEN").ok().filter(|t| !t.is_empty());
    let timeout_secs = match std::env::var("NOVITUS_TIMEOUT_SECS") {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| NovitusError::Config(format!("Invalid timeout: {}", e)))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };
    let user_agent = std::env::var("NOVITUS_USER_AGENT").ok();
    let accept_invalid_certs = env_bool("NOVITUS_ACCEPT_INVALID_CERTS", false);

    let config = GatewayConfig { host, token, timeout_secs, user_agent, accept_invalid_certs };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `NovitusError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The loaded configuration does not validate
pub fn load_from_file(path: Option<PathBuf>) -> Result<GatewayConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(NovitusError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            NovitusError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| NovitusError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `NovitusError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<GatewayConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| NovitusError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| NovitusError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(NovitusError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the working directory, then the executable's directory, for the
/// first existing config file.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    probe_in(&roots)
}

fn probe_in(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `NovitusError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        NovitusError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 5] = [
        "NOVITUS_HOST",
        "NOVITUS_TOKEN",
        "NOVITUS_TIMEOUT_SECS",
        "NOVITUS_USER_AGENT",
        "NOVITUS_ACCEPT_INVALID_CERTS",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    fn write_config(extension: &str, contents: &str) -> PathBuf {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        path
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("TEST_NOVITUS_BOOL_YES", "yes");
        std::env::set_var("TEST_NOVITUS_BOOL_UPPER", "TRUE");
        std::env::set_var("TEST_NOVITUS_BOOL_OFF", "off");

        assert!(env_bool("TEST_NOVITUS_BOOL_YES", false));
        assert!(env_bool("TEST_NOVITUS_BOOL_UPPER", false));
        assert!(!env_bool("TEST_NOVITUS_BOOL_OFF", true));

        std::env::remove_var("TEST_NOVITUS_BOOL_MISSING");
        assert!(env_bool("TEST_NOVITUS_BOOL_MISSING", true));

        std::env::remove_var("TEST_NOVITUS_BOOL_YES");
        std::env::remove_var("TEST_NOVITUS_BOOL_UPPER");
        std::env::remove_var("TEST_NOVITUS_BOOL_OFF");
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("NOVITUS_HOST", "https://fiscal.shop.local:8888");
        std::env::set_var("NOVITUS_TOKEN", "preissued");
        std::env::set_var("NOVITUS_TIMEOUT_SECS", "12");
        std::env::set_var("NOVITUS_USER_AGENT", "till-3");
        std::env::set_var("NOVITUS_ACCEPT_INVALID_CERTS", "1");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.host, "https://fiscal.shop.local:8888");
        assert_eq!(config.token.as_deref(), Some("preissued"));
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.user_agent.as_deref(), Some("till-3"));
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_load_from_env_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("NOVITUS_HOST", "http://127.0.0.1:8888");
        std::env::set_var("NOVITUS_TOKEN", "");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert!(config.token.is_none());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_load_from_env_missing_host() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, NovitusError::Config(ref msg) if msg.contains("NOVITUS_HOST")));
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("NOVITUS_HOST", "http://127.0.0.1:8888");
        std::env::set_var("NOVITUS_TIMEOUT_SECS", "soon");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(NovitusError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_rejects_bad_host() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("NOVITUS_HOST", "fiscal.shop.local");

        let result = load_from_env();
        clear_env();

        assert!(result.is_err(), "host without scheme must be rejected");
    }

    #[test]
    fn test_load_from_file_json() {
        let path = write_config(
            "json",
            r#"{ "host": "http://10.0.0.5:8888", "timeout_secs": 5, "token": "abc" }"#,
        );

        let config = load_from_file(Some(path.clone())).expect("config from JSON file");
        assert_eq!(config.host, "http://10.0.0.5:8888");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.token.as_deref(), Some("abc"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let path = write_config(
            "toml",
            r#"
host = "https://fiscal.example.com"
user_agent = "backoffice"
"#,
        );

        let config = load_from_file(Some(path.clone())).expect("config from TOML file");
        assert_eq!(config.host, "https://fiscal.example.com");
        assert_eq!(config.user_agent.as_deref(), Some("backoffice"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_validates() {
        let path = write_config("json", r#"{ "host": "http://gw", "timeout_secs": 0 }"#);

        let result = load_from_file(Some(path.clone()));
        assert!(matches!(result, Err(NovitusError::Config(_))));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/novitus.json")));
        assert!(matches!(result, Err(NovitusError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let path = write_config("json", r#"{ "host": "#);

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_probe_prefers_novitus_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();
        assert_eq!(probe_in(&[dir.path().to_path_buf()]), Some(dir.path().join("config.json")));

        std::fs::write(dir.path().join("novitus.toml"), "").unwrap();
        assert_eq!(probe_in(&[dir.path().to_path_buf()]), Some(dir.path().join("novitus.toml")));
    }

    #[test]
    fn test_probe_returns_none_for_empty_dirs() {
        let dir = TempDir::new().unwrap();
        assert!(probe_in(&[dir.path().to_path_buf()]).is_none());
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("host: x", &PathBuf::from("novitus.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
