//! Configuration loader.
//!
//! This module provides functionality to load configuration from multiple sources.

use super::{
    ConfigError, DEFAULT_CONFIG_FILES, ENV_PREFIX, Result, SERVICE_ENV_VARS, models::*, validation,
};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader that handles loading from multiple sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
    sources: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default values.
    pub fn new() -> Self {
        let figment = Figment::new().merge(Serialized::defaults(ScoutConfig::default()));
        Self {
            figment,
            sources: Vec::new(),
        }
    }

    /// Load configuration from a file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let figment = std::mem::take(&mut self.figment);
        self.figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => {
                self.figment = figment;
                return Err(ConfigError::FileLoadError(format!(
                    "Unsupported file format: {}",
                    path.display()
                )));
            }
        };

        debug!(path = %path.display(), "Merged configuration file");
        self.sources.push(path.to_path_buf());
        Ok(self)
    }

    /// Attempt to load the first configuration file found in the working
    /// directory, then in the platform config directory.
    pub fn load_default_files(&mut self) -> &mut Self {
        for file in DEFAULT_CONFIG_FILES {
            let path = PathBuf::from(file);
            if path.exists() && self.load_file(&path).is_ok() {
                return self;
            }
        }

        if let Some(proj_dirs) = directories::ProjectDirs::from("org", "scout", "scout") {
            let config_dir = proj_dirs.config_dir();

            for ext in &["toml", "yaml", "yml", "json"] {
                let path = config_dir.join(format!("config.{}", ext));
                if path.exists() && self.load_file(&path).is_ok() {
                    break;
                }
            }
        }

        self
    }

    /// Load the conventional service variables (`VOYAGE_API_KEY`, ...) and
    /// `SCOUT_`-prefixed overrides, where `__` separates nested keys
    /// (`SCOUT_INDEX__NAMESPACE`).
    pub fn load_env(&mut self) -> &mut Self {
        let mut figment = std::mem::take(&mut self.figment);

        for &(var, key) in SERVICE_ENV_VARS {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }

        self.figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        self
    }

    /// Load configuration from a custom source.
    pub fn merge<T: figment::Provider>(&mut self, provider: T) -> &mut Self {
        let figment = std::mem::take(&mut self.figment).merge(provider);
        self.figment = figment;
        self
    }

    /// Files merged so far, in order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Extract and validate the configuration.
    pub fn extract(&self) -> Result<ScoutConfig> {
        let config: ScoutConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;

        Ok(config)
    }

    /// Defaults, then the first default file, then the environment.
    pub fn load() -> Result<ScoutConfig> {
        Self::new().load_default_files().load_env().extract()
    }

    /// Defaults, then `path`, then the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<ScoutConfig> {
        Self::new().load_file(path)?.load_env().extract()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
