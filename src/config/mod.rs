//! Configuration management.

use crate::extract::ExtractionConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "shopsight.toml";

/// Main configuration for shopsight.
#[derive(Debug, Clone)]
pub struct ShopsightConfig {
    /// Path to the JSON catalog file.
    pub catalog_path: PathBuf,
    /// Search pipeline tuning.
    pub search: SearchConfig,
    /// NLP service configuration.
    pub nlp: ServiceConfig,
    /// Vision service configuration.
    pub vision: ServiceConfig,
}

/// Search pipeline tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Candidate cap applied at the repository fetch.
    pub max_candidates: usize,
    /// Presentation limit for ranked results.
    pub max_results: usize,
    /// Product count for the image path without a vision credential.
    pub image_default_results: usize,
    /// Image-path minimum score (strictly-greater-than).
    pub image_score_floor: u32,
    /// Image-path result count when the floor empties the set.
    pub image_fallback_results: usize,
    /// Flat score assigned on the credential-less image path.
    pub default_image_score: u32,
    /// Intent extraction settings.
    pub extraction: ExtractionConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_candidates: 50,
            max_results: 20,
            image_default_results: 12,
            image_score_floor: 5,
            image_fallback_results: 8,
            default_image_score: 50,
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Credential and endpoint for one external AI service.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// API key; absent means the service is unavailable.
    pub api_key: Option<String>,
    /// Base URL override (for proxies and tests).
    pub endpoint: Option<String>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Catalog file path.
    pub catalog_path: Option<String>,
    /// Search section.
    pub search: Option<ConfigFileSearch>,
    /// NLP service section.
    pub nlp: Option<ConfigFileService>,
    /// Vision service section.
    pub vision: Option<ConfigFileService>,
}

/// Search section in the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileSearch {
    /// Candidate cap.
    pub max_candidates: Option<usize>,
    /// Presentation limit.
    pub max_results: Option<usize>,
    /// Whether to attempt the NLP strategy.
    pub use_nlp: Option<bool>,
    /// NLP timeout in milliseconds.
    pub nlp_timeout_ms: Option<u64>,
}

/// Service section in the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileService {
    /// API key.
    pub api_key: Option<String>,
    /// Base URL.
    pub endpoint: Option<String>,
}

impl Default for ShopsightConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.json"),
            search: SearchConfig::default(),
            nlp: ServiceConfig::default(),
            vision: ServiceConfig::default(),
        }
    }
}

impl ShopsightConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file).with_env_overrides())
    }

    /// Loads configuration from the default location, falling back to
    /// defaults (plus environment overrides) when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a present config file is malformed.
    pub fn load() -> crate::Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default().with_env_overrides())
        }
    }

    /// Builds a configuration from a parsed config file.
    #[must_use]
    pub fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(catalog_path) = file.catalog_path {
            config.catalog_path = PathBuf::from(catalog_path);
        }

        if let Some(search) = file.search {
            if let Some(max_candidates) = search.max_candidates {
                config.search.max_candidates = max_candidates;
            }
            if let Some(max_results) = search.max_results {
                config.search.max_results = max_results;
            }
            if let Some(use_nlp) = search.use_nlp {
                config.search.extraction.use_nlp = use_nlp;
            }
            if let Some(timeout) = search.nlp_timeout_ms {
                config.search.extraction.nlp_timeout_ms = timeout;
            }
        }

        if let Some(nlp) = file.nlp {
            config.nlp.api_key = nlp.api_key;
            config.nlp.endpoint = nlp.endpoint;
        }
        if let Some(vision) = file.vision {
            config.vision.api_key = vision.api_key;
            config.vision.endpoint = vision.endpoint;
        }

        config
    }

    /// Applies environment variable overrides.
    ///
    /// `GOOGLE_NLP_API_KEY` and `GOOGLE_VISION_API_KEY` take precedence over
    /// file-provided keys, matching how the services are deployed.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("GOOGLE_NLP_API_KEY") {
            if !key.is_empty() {
                self.nlp.api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var("GOOGLE_VISION_API_KEY") {
            if !key.is_empty() {
                self.vision.api_key = Some(key);
            }
        }
        if let Ok(path) = std::env::var("SHOPSIGHT_CATALOG") {
            if !path.is_empty() {
                self.catalog_path = PathBuf::from(path);
            }
        }
        self
    }
}
