// src/config.rs
use crate::ingest::cache::DEFAULT_CACHE_TTL_SECS;
use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_UPSTREAM_URL: &str = "https://jobicy.com/api/v2/remote-jobs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub upstream_url: String,
    pub request_timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub port: u16,
    pub log_file: PathBuf,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            request_timeout_secs: 30,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            port: 8000,
            log_file: PathBuf::from("/tmp/jobboard.log"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<IngestConfig>,
    #[serde(default)]
    production: Option<IngestConfig>,
}

impl IngestConfig {
    /// Defaults, then `config.yaml` (if present) for the current environment,
    /// then `JOBBOARD_*` environment variables.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = PathBuf::from("config.yaml");
        let config = if config_path.exists() {
            Self::load_from_file(&config_path, &environment)?
        } else {
            info!("config.yaml not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())
    }

    fn get_environment() -> String {
        std::env::var("JOBBOARD_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        Ok(section.unwrap_or_default())
    }

    /// Applies overrides read through `lookup` so tests need not touch the
    /// process environment.
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("JOBBOARD_UPSTREAM_URL") {
            self.upstream_url = url;
        }
        if let Some(timeout) = lookup("JOBBOARD_TIMEOUT_SECS") {
            self.request_timeout_secs = timeout
                .parse()
                .context("JOBBOARD_TIMEOUT_SECS must be a whole number of seconds")?;
        }
        if let Some(ttl) = lookup("JOBBOARD_CACHE_TTL_SECS") {
            self.cache_ttl_secs = ttl
                .parse()
                .context("JOBBOARD_CACHE_TTL_SECS must be a whole number of seconds")?;
        }
        if let Some(port) = lookup("JOBBOARD_PORT") {
            self.port = port
                .parse()
                .context("JOBBOARD_PORT must be a valid port number")?;
        }
        if let Some(log_file) = lookup("JOBBOARD_LOG_FILE") {
            self.log_file = PathBuf::from(log_file);
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("Request timeout must be greater than zero");
        }
        self.cache_ttl()?;

        Ok(self)
    }

    pub fn cache_ttl(&self) -> Result<Duration> {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .with_context(|| format!("Cache TTL of {}s is out of range", self.cache_ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    const YAML: &str = r#"
local:
  upstream_url: http://localhost:9000/jobs
  cache_ttl_secs: 5
production:
  port: 9090
"#;

    #[test]
    fn test_from_yaml_selects_environment() {
        let local = IngestConfig::from_yaml(YAML, "local").unwrap();
        assert_eq!(local.upstream_url, "http://localhost:9000/jobs");
        assert_eq!(local.cache_ttl_secs, 5);
        assert_eq!(local.request_timeout_secs, 30);

        let production = IngestConfig::from_yaml(YAML, "production").unwrap();
        assert_eq!(production.port, 9090);
        assert_eq!(production.upstream_url, DEFAULT_UPSTREAM_URL);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = IngestConfig::from_yaml("local:\n  port: 1234\n", "production").unwrap();
        assert_eq!(config, IngestConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("JOBBOARD_UPSTREAM_URL", "http://upstream.test/jobs"),
            ("JOBBOARD_CACHE_TTL_SECS", "60"),
            ("JOBBOARD_PORT", "8081"),
        ]
        .into_iter()
        .collect();

        let config = IngestConfig::default()
            .apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.upstream_url, "http://upstream.test/jobs");
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_invalid_env_override_is_rejected() {
        let result = IngestConfig::default().apply_env_overrides(|key| {
            (key == "JOBBOARD_PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());

        let result = IngestConfig::default().apply_env_overrides(|key| {
            (key == "JOBBOARD_TIMEOUT_SECS").then(|| "0".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_cache_ttl_is_rejected() {
        for ttl in ["18446744073709551615", "100000000000000000"] {
            let result = IngestConfig::default()
                .apply_env_overrides(|key| (key == "JOBBOARD_CACHE_TTL_SECS").then(|| ttl.to_string()));
            assert!(result.is_err(), "ttl {} should be rejected", ttl);
        }

        let config = IngestConfig {
            cache_ttl_secs: u64::MAX,
            ..IngestConfig::default()
        };
        assert!(config.cache_ttl().is_err());
        assert_eq!(
            IngestConfig::default().cache_ttl().unwrap(),
            Duration::minutes(10)
        );
    }

    #[test]
    fn test_load_logs_through_the_active_subscriber() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || CaptureWriter(writer.clone()))
            .with_ansi(false)
            .finish();

        let loaded = tracing::subscriber::with_default(subscriber, IngestConfig::load);

        assert!(loaded.is_ok());
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Loading configuration for environment"));
    }

    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
