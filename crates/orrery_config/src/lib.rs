//! TOML configuration for the orrery engines.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the built-in settings:
//!
//! ```toml
//! [ascendant]
//! polar_limit_deg = 89.9
//!
//! [forecast]
//! label_format = "%a, %b %-d"
//! max_days = 366
//!
//! [provider]
//! kepler_tolerance_deg = 1e-8
//! kepler_max_iterations = 30
//! ```

pub mod error;

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use orrery_core::KeplerConfig;
use orrery_lunar::{DEFAULT_LABEL_FORMAT, DEFAULT_MAX_DAYS, ForecastConfig};
use orrery_zodiac::{AscendantConfig, DEFAULT_POLAR_LIMIT_DEG};

pub use error::ConfigError;

/// Environment variable naming a config file for [`OrreryConfig::from_env`].
pub const CONFIG_ENV_VAR: &str = "ORRERY_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AscendantSection {
    pub polar_limit_deg: f64,
}

impl Default for AscendantSection {
    fn default() -> Self {
        Self {
            polar_limit_deg: DEFAULT_POLAR_LIMIT_DEG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastSection {
    pub label_format: String,
    pub max_days: u32,
}

impl Default for ForecastSection {
    fn default() -> Self {
        Self {
            label_format: DEFAULT_LABEL_FORMAT.to_string(),
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderSection {
    pub kepler_tolerance_deg: f64,
    pub kepler_max_iterations: u32,
}

impl Default for ProviderSection {
    fn default() -> Self {
        let k = KeplerConfig::default();
        Self {
            kepler_tolerance_deg: k.tolerance_deg,
            kepler_max_iterations: k.max_iterations,
        }
    }
}

/// Root of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrreryConfig {
    pub ascendant: AscendantSection,
    pub forecast: ForecastSection,
    pub provider: ProviderSection,
}

impl OrreryConfig {
    /// Parse and validate TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading config from {}", path.display());
        Self::parse(&text)
    }

    /// Load the file named by `ORRERY_CONFIG`, or return defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load_optional(std::env::var_os(CONFIG_ENV_VAR).as_deref())
    }

    /// Load `path` when it is set and non-empty, else return defaults.
    fn load_optional(path: Option<&OsStr>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.is_empty() => Self::load(Path::new(path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limit = self.ascendant.polar_limit_deg;
        if !limit.is_finite() || limit <= 0.0 || limit >= 90.0 {
            return Err(ConfigError::Invalid(
                "ascendant.polar_limit_deg must lie in (0, 90)",
            ));
        }
        if self.forecast.max_days == 0 {
            return Err(ConfigError::Invalid("forecast.max_days must be positive"));
        }
        if self.forecast_config().validate().is_err() {
            return Err(ConfigError::Invalid(
                "forecast.label_format must be a non-empty date pattern",
            ));
        }
        let tol = self.provider.kepler_tolerance_deg;
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Invalid(
                "provider.kepler_tolerance_deg must be positive",
            ));
        }
        if self.provider.kepler_max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "provider.kepler_max_iterations must be positive",
            ));
        }
        Ok(())
    }

    pub fn ascendant_config(&self) -> AscendantConfig {
        AscendantConfig {
            polar_limit_deg: self.ascendant.polar_limit_deg,
        }
    }

    pub fn forecast_config(&self) -> ForecastConfig {
        ForecastConfig {
            label_format: self.forecast.label_format.clone(),
            max_days: self.forecast.max_days,
        }
    }

    pub fn kepler_config(&self) -> KeplerConfig {
        KeplerConfig {
            tolerance_deg: self.provider.kepler_tolerance_deg,
            max_iterations: self.provider.kepler_max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = OrreryConfig::parse("").unwrap();
        assert_eq!(cfg, OrreryConfig::default());
        assert_eq!(cfg.ascendant_config(), AscendantConfig::default());
        assert_eq!(cfg.forecast_config(), ForecastConfig::default());
        assert_eq!(cfg.kepler_config(), KeplerConfig::default());
    }

    #[test]
    fn defaults_validate() {
        assert!(OrreryConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_override() {
        let cfg = OrreryConfig::parse(
            r#"
            [ascendant]
            polar_limit_deg = 66.5

            [forecast]
            max_days = 30
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ascendant.polar_limit_deg, 66.5);
        assert_eq!(cfg.forecast.max_days, 30);
        assert_eq!(cfg.forecast.label_format, DEFAULT_LABEL_FORMAT);
        assert_eq!(cfg.provider, ProviderSection::default());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for text in [
            "[ascendant]\npolar_limit_deg = 90.0",
            "[ascendant]\npolar_limit_deg = -1.0",
            "[forecast]\nmax_days = 0",
            "[forecast]\nlabel_format = \"\"",
            "[forecast]\nlabel_format = \"%b %-d %H:%M\"",
            "[provider]\nkepler_tolerance_deg = 0.0",
            "[provider]\nkepler_max_iterations = 0",
        ] {
            assert!(
                matches!(OrreryConfig::parse(text), Err(ConfigError::Invalid(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        assert!(matches!(
            OrreryConfig::parse("[ascendant]\npolar_limit = 80.0"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = OrreryConfig::load(Path::new("/nonexistent/orrery.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/orrery.toml"));
    }

    #[test]
    fn env_path_unset_or_empty_gives_defaults() {
        assert_eq!(OrreryConfig::load_optional(None).unwrap(), OrreryConfig::default());
        assert_eq!(
            OrreryConfig::load_optional(Some(OsStr::new(""))).unwrap(),
            OrreryConfig::default()
        );
    }

    #[test]
    fn env_path_set_loads_that_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[forecast]\nmax_days = 14").unwrap();
        let cfg = OrreryConfig::load_optional(Some(file.path().as_os_str())).unwrap();
        assert_eq!(cfg.forecast.max_days, 14);
        assert_eq!(cfg.ascendant, AscendantSection::default());
    }

    #[test]
    fn env_path_set_to_missing_file_is_io_error() {
        let missing = OsStr::new("/nonexistent/orrery-env.toml");
        assert!(matches!(
            OrreryConfig::load_optional(Some(missing)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn round_trips_through_toml_text() {
        let cfg = OrreryConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        assert_eq!(OrreryConfig::parse(&text).unwrap(), cfg);
    }
}
