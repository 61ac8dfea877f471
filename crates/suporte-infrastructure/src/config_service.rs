//! Configuration service implementation.
//!
//! Loads `IntakeConfig` overrides from `config.toml`
//! (~/.config/suporte/config.toml by default).

use crate::paths::SuportePaths;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use suporte_core::config::IntakeConfig;
use suporte_core::error::{Result, SupportError};
use tracing::{debug, info};

/// Configuration service that loads and caches the intake configuration.
///
/// A missing file means "use the built-in defaults"; a malformed one is an
/// error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<IntakeConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the given file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading the platform default location.
    pub fn new_default() -> Result<Self> {
        let path = SuportePaths::config_file()
            .map_err(|e| SupportError::config(format!("Failed to get config path: {}", e)))?;
        Ok(Self::with_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub async fn get_config(&self) -> Result<IntakeConfig> {
        if let Some(cached) = self.cached()? {
            return Ok(cached);
        }

        let loaded = Self::load_from(&self.path).await?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| SupportError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) -> Result<()> {
        let mut write_lock = self
            .config
            .write()
            .map_err(|_| SupportError::internal("config cache lock poisoned"))?;
        *write_lock = None;
        Ok(())
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<IntakeConfig> {
        Ok(toml::from_str(content)?)
    }

    fn cached(&self) -> Result<Option<IntakeConfig>> {
        let read_lock = self
            .config
            .read()
            .map_err(|_| SupportError::internal("config cache lock poisoned"))?;
        Ok(read_lock.clone())
    }

    async fn load_from(path: &Path) -> Result<IntakeConfig> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let config = Self::parse(&content)?;
                info!(path = %path.display(), "Loaded intake configuration");
                Ok(config)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(IntakeConfig::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suporte_core::config::RelayFailurePolicy;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        assert_eq!(service.get_config().await.unwrap(), IntakeConfig::default());
    }

    #[tokio::test]
    async fn test_loads_and_caches_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
reset_delay_ms = 1500

[relay]
destination = "equipa@websolutions.pt"
failure_policy = "tolerate_without_attachments"
"#,
        )
        .unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config().await.unwrap();
        assert_eq!(config.reset_delay_ms, 1500);
        assert_eq!(config.relay.destination, "equipa@websolutions.pt");
        assert_eq!(
            config.relay.failure_policy,
            RelayFailurePolicy::TolerateWithoutAttachments
        );

        // cached until invalidated
        std::fs::write(&path, "reset_delay_ms = 10\n").unwrap();
        assert_eq!(service.get_config().await.unwrap().reset_delay_ms, 1500);
        service.invalidate_cache().unwrap();
        assert_eq!(service.get_config().await.unwrap().reset_delay_ms, 10);
    }

    #[tokio::test]
    async fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "reset_delay_ms = \"soon\"").unwrap();

        let err = ConfigService::with_path(&path).get_config().await.unwrap_err();
        assert!(matches!(err, SupportError::Config(_)));
    }
}
