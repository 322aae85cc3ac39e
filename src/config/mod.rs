//! Environment-backed configuration.
//!
//! Everything has a default. Override with `LEDGER_MATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::constants::{DEFAULT_FALLBACK_K, DEFAULT_OUTPUT_PATH, DEFAULT_TABLE_PATH};
use crate::embedding::{DevicePreference, EncoderConfig, ModelProfile};
use crate::matching::{MatchPolicy, ThresholdLadder};
use crate::pipeline::PipelineOptions;

/// Preset bundling ladder, fallback size, category granularity and model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchingMode {
    /// Single threshold, no fallback, top-level categories, fast model.
    #[default]
    Basic,
    /// Threshold ladder, top-K fallback, subcategories, strong model.
    Cascading,
}

impl MatchingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchingMode::Basic => "basic",
            MatchingMode::Cascading => "cascading",
        }
    }
}

impl fmt::Display for MatchingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "offline" => Ok(MatchingMode::Basic),
            "cascading" | "cascade" | "extended" => Ok(MatchingMode::Cascading),
            _ => Err(ConfigError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Matcher configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `LEDGER_MATCH_*` overrides on top of the
/// preset selected by `LEDGER_MATCH_MODE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Chart-of-accounts workbook. Default: `Konzernkontenplan_template.xlsx`.
    pub table_path: PathBuf,

    /// Result workbook. Default: `Matching_Ergebnis_offline.xlsx`.
    pub output_path: PathBuf,

    /// Preset the remaining fields were derived from.
    pub mode: MatchingMode,

    /// Sentence encoder identity.
    pub model: ModelProfile,

    /// Directory with the encoder files. Required unless `stub` is set.
    pub model_dir: Option<PathBuf>,

    /// Run the deterministic stub encoder instead of a model. Default: `false`.
    pub stub: bool,

    pub device: DevicePreference,

    /// Thresholds tried in order, strictly descending.
    pub thresholds: ThresholdLadder,

    /// Fallback size when no threshold matches. `0` disables the fallback.
    pub fallback_k: usize,

    /// Whether subcategory selections narrow the candidate set.
    pub subcategories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_mode(MatchingMode::default())
    }
}

impl Config {
    const ENV_TABLE: &'static str = "LEDGER_MATCH_TABLE";
    const ENV_OUTPUT: &'static str = "LEDGER_MATCH_OUTPUT";
    const ENV_MODE: &'static str = "LEDGER_MATCH_MODE";
    const ENV_MODEL: &'static str = "LEDGER_MATCH_MODEL";
    const ENV_MODEL_DIR: &'static str = "LEDGER_MATCH_MODEL_DIR";
    const ENV_DEVICE: &'static str = "LEDGER_MATCH_DEVICE";
    const ENV_THRESHOLDS: &'static str = "LEDGER_MATCH_THRESHOLDS";
    const ENV_FALLBACK_K: &'static str = "LEDGER_MATCH_FALLBACK_K";
    const ENV_SUBCATEGORIES: &'static str = "LEDGER_MATCH_SUBCATEGORIES";
    const ENV_STUB: &'static str = "LEDGER_MATCH_STUB";

    /// Preset defaults for `mode`, without consulting the environment.
    pub fn for_mode(mode: MatchingMode) -> Self {
        let (model, thresholds, fallback_k, subcategories) = match mode {
            MatchingMode::Basic => (ModelProfile::Fast, ThresholdLadder::basic(), 0, false),
            MatchingMode::Cascading => (
                ModelProfile::Strong,
                ThresholdLadder::cascading(),
                DEFAULT_FALLBACK_K,
                true,
            ),
        };

        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            mode,
            model,
            model_dir: None,
            stub: false,
            device: DevicePreference::default(),
            thresholds,
            fallback_k,
            subcategories,
        }
    }

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_mode(None)
    }

    /// Like [`Config::from_env`], but `mode` (when given) wins over `LEDGER_MATCH_MODE`.
    pub fn from_env_with_mode(mode: Option<MatchingMode>) -> Result<Self, ConfigError> {
        let mode = match mode {
            Some(mode) => mode,
            None => Self::parse_mode_from_env()?,
        };
        let defaults = Self::for_mode(mode);

        let table_path = Self::parse_path_from_env(Self::ENV_TABLE, defaults.table_path);
        let output_path = Self::parse_path_from_env(Self::ENV_OUTPUT, defaults.output_path);
        let model = Self::parse_model_from_env(defaults.model)?;
        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let stub = Self::parse_bool_from_env(Self::ENV_STUB, defaults.stub)?;
        let device = Self::parse_device_from_env(defaults.device)?;
        let thresholds = Self::parse_thresholds_from_env(defaults.thresholds)?;
        let fallback_k = Self::parse_usize_from_env(Self::ENV_FALLBACK_K, defaults.fallback_k);
        let subcategories =
            Self::parse_bool_from_env(Self::ENV_SUBCATEGORIES, defaults.subcategories)?;

        Ok(Self {
            table_path,
            output_path,
            mode,
            model,
            model_dir,
            stub,
            device,
            thresholds,
            fallback_k,
            subcategories,
        })
    }

    /// Validates paths (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.table_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.table_path.clone(),
            });
        }
        if !self.table_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.table_path.clone(),
            });
        }

        if self.output_path.is_dir() {
            return Err(ConfigError::NotAFile {
                path: self.output_path.clone(),
            });
        }
        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(ConfigError::NotADirectory {
                path: parent.to_path_buf(),
            });
        }

        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Encoder settings.
    ///
    /// `stub` wins over `model_dir`. Without either the encoder cannot be
    /// built and [`ConfigError::MissingModelDir`] is returned.
    pub fn encoder_config(&self) -> Result<EncoderConfig, ConfigError> {
        let config = match (self.stub, &self.model_dir) {
            (true, _) => EncoderConfig::stub(self.model),
            (false, Some(dir)) => EncoderConfig::new(self.model, dir.clone()),
            (false, None) => return Err(ConfigError::MissingModelDir),
        };
        Ok(config.with_device(self.device))
    }

    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy::new(self.thresholds.clone(), self.fallback_k)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            policy: self.match_policy(),
            subcategories: self.subcategories,
        }
    }

    fn parse_mode_from_env() -> Result<MatchingMode, ConfigError> {
        match Self::read_non_empty(Self::ENV_MODE) {
            Some(value) => value.parse(),
            None => Ok(MatchingMode::default()),
        }
    }

    fn parse_model_from_env(default: ModelProfile) -> Result<ModelProfile, ConfigError> {
        match Self::read_non_empty(Self::ENV_MODEL) {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidModel { value, source: e }),
            None => Ok(default),
        }
    }

    fn parse_device_from_env(default: DevicePreference) -> Result<DevicePreference, ConfigError> {
        match Self::read_non_empty(Self::ENV_DEVICE) {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidDevice { value, source: e }),
            None => Ok(default),
        }
    }

    fn parse_thresholds_from_env(default: ThresholdLadder) -> Result<ThresholdLadder, ConfigError> {
        match Self::read_non_empty(Self::ENV_THRESHOLDS) {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidThresholds { value, source: e }),
            None => Ok(default),
        }
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = Self::read_non_empty(name) else {
            return Ok(default);
        };

        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool { name, value }),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        Self::parse_optional_path_from_env(var_name).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::read_non_empty(var_name).map(PathBuf::from)
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        match Self::read_non_empty(var_name) {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!(var = var_name, value = %value, default, "Ignoring unparsable value");
                default
            }),
            None => default,
        }
    }

    fn read_non_empty(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
