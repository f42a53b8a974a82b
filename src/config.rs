//! Run configuration.
//!
//! Every field has a default matching the Lviv sweep, so a config file only
//! needs to name what it changes. The API key has no default and must come
//! from the file, the command line or `GOOGLE_PLACES_API_KEY`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::models::BoundingBox;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api_key: Option<String>,
    pub output: PathBuf,
    pub categories: Vec<String>,
    pub bounding_box: BoundingBox,
    /// Degrees between neighbouring sample points
    pub grid_step: f64,
    /// Nearby Search radius in meters
    pub radius_m: u32,
    pub language: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Wait before a `next_page_token` becomes usable
    pub page_token_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            output: PathBuf::from("lviv_otg_accommodations.csv"),
            categories: vec![
                "lodging".to_string(),
                "hostel".to_string(),
                "apartment".to_string(),
            ],
            bounding_box: BoundingBox::default(),
            grid_step: 0.02,
            radius_m: 1000,
            language: "uk".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            page_token_delay_ms: 2000,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check everything a run needs before the first request goes out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_key()?;
        self.grid()?;

        if self.categories.is_empty() {
            return Err(ConfigError::invalid("at least one category is required"));
        }
        if self.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::invalid("categories must not be blank"));
        }
        if self.radius_m == 0 {
            return Err(ConfigError::invalid("radius_m must be positive"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("timeout_secs must be positive"));
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::invalid("language must not be blank"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::invalid("output path must not be empty"));
        }
        Url::parse(&self.base_url).map_err(|e| {
            ConfigError::invalid(format!("base_url {:?} is not a valid URL: {}", self.base_url, e))
        })?;

        Ok(())
    }

    pub fn api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::invalid(
                "API key is missing; set api_key, pass --api-key or export GOOGLE_PLACES_API_KEY",
            )),
        }
    }

    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.bounding_box, self.grid_step)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn page_token_delay(&self) -> Duration {
        Duration::from_millis(self.page_token_delay_ms)
    }
}
