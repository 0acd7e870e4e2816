use oklch_map::sampler::{DARK_ZONE, DEFAULT_ZONES, GRAY_ZONE, PALE_ZONE, VIVID_ZONE};
use oklch_map::{ChartFrame, ColorSampler, SampleZone};
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Name moderation proxy
    #[serde(default)]
    pub moderation: ModerationConfig,

    /// Fill an empty store with synthetic records at startup
    #[serde(default = "default_seed_when_empty")]
    pub seed_when_empty: bool,

    /// Age in days after which the cleanup sweep touches a record
    #[serde(default = "default_prune_after_days")]
    pub prune_after_days: u32,

    /// Longest accepted name, in characters
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Token required by the admin endpoints (disabled when unset)
    #[serde(default)]
    pub admin_token: Option<String>,

    /// Chart dimensions used for territory cells
    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub sampler: SamplerConfig,
}

fn default_seed_when_empty() -> bool {
    true
}

fn default_prune_after_days() -> u32 {
    14
}

fn default_max_name_length() -> usize {
    30
}

/// Configuration for the moderation proxy
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ModerationConfig {
    /// Proxy URL; names are accepted without review when unset
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: f64,
    #[serde(default = "default_chart_height")]
    pub height: f64,
}

fn default_chart_width() -> f64 {
    240.0
}

fn default_chart_height() -> f64 {
    280.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Rejection-sampling attempts per zone before the fallback point
    #[serde(default = "default_max_tries")]
    pub max_tries: usize,

    /// Zone selection weights; the built-in ones when unset
    #[serde(default)]
    pub weights: Option<ZoneWeights>,
}

/// Selection weight of each sampling zone. Must sum to 1.0.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ZoneWeights {
    pub pale: f64,
    pub dark: f64,
    pub gray: f64,
    pub vivid: f64,
}

impl Default for ZoneWeights {
    fn default() -> Self {
        Self {
            pale: PALE_ZONE.weight,
            dark: DARK_ZONE.weight,
            gray: GRAY_ZONE.weight,
            vivid: VIVID_ZONE.weight,
        }
    }
}

impl ZoneWeights {
    /// The built-in zone table carrying these weights
    pub fn zones(&self) -> Vec<SampleZone> {
        vec![
            SampleZone { weight: self.pale, ..PALE_ZONE },
            SampleZone { weight: self.dark, ..DARK_ZONE },
            SampleZone { weight: self.gray, ..GRAY_ZONE },
            SampleZone { weight: self.vivid, ..VIVID_ZONE },
        ]
    }
}

fn default_max_tries() -> usize {
    oklch_map::sampler::MAX_TRIES
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_tries: default_max_tries(),
            weights: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_FILE`, or defaults
    pub fn from_env() -> Self {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => {
                tracing::info!("CONFIG_FILE not set, using default configuration");
                Self::default()
            }
        }
    }

    /// Load configuration from a YAML file
    ///
    /// An unreadable, unparsable or invalid file yields the defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    if let Err(e) = config.validate() {
                        tracing::warn!(%e, path = %path.display(), "Invalid config, using defaults");
                        return Self::default();
                    }
                    tracing::info!(
                        path = %path.display(),
                        moderation = config.moderation.endpoint.is_some(),
                        admin = config.admin_token.is_some(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Check the values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ChartConfig { width, height } = self.chart;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ConfigError::ChartSize { width, height });
        }
        self.color_sampler().map(|_| ())
    }

    pub fn chart_frame(&self) -> ChartFrame {
        ChartFrame::new(self.chart.width, self.chart.height)
    }

    pub fn color_sampler(&self) -> Result<ColorSampler, ConfigError> {
        let zones = match &self.sampler.weights {
            Some(weights) => weights.zones(),
            None => DEFAULT_ZONES.to_vec(),
        };
        Ok(ColorSampler::new(zones, self.sampler.max_tries)?)
    }

    /// Cleanup cutoff in epoch milliseconds for a sweep run at `now_ms`
    pub fn prune_cutoff(&self, now_ms: i64) -> i64 {
        now_ms - i64::from(self.prune_after_days) * 86_400_000
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            moderation: ModerationConfig::default(),
            seed_when_empty: default_seed_when_empty(),
            prune_after_days: default_prune_after_days(),
            max_name_length: default_max_name_length(),
            admin_token: None,
            chart: ChartConfig::default(),
            sampler: SamplerConfig::default(),
        }
    }
}
