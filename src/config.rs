//! TOML-based generator configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::CATEGORY_COUNT;

/// Top-level generator configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`GeneratorConfig::from_toml_file`] or use
/// [`GeneratorConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Population size and seeding parameters.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Tariff schedule and per-category subscription bias.
    #[serde(default)]
    pub tariff: TariffConfig,
    /// House types with their power envelopes, in declared order.
    #[serde(default = "default_house_types")]
    pub house_types: Vec<HouseTypeConfig>,
}

/// Population size and seeding parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Number of subareas under the EDCo's purview (must be > 0).
    pub n_subareas: usize,
    /// Minimum number of houses per house type in a subarea (must be > 0).
    pub min_houses: usize,
    /// Maximum number of houses per house type in a subarea; the count is
    /// drawn from the half-open range `[min_houses, max_houses)`.
    pub max_houses: usize,
    /// Master random seed.
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            n_subareas: 2,
            min_houses: 5,
            max_houses: 10,
            seed: 47,
        }
    }
}

/// Tariff schedule and per-category subscription bias.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// Discrete tariff rates (currency per kW), strictly decreasing.
    pub schedule: Vec<f64>,
    /// Mean subscribed tariff per appliance category, one entry per
    /// category. Category 0 is the most important and gets the highest mean.
    pub category_means: Vec<f64>,
    /// Standard deviation shared by all category distributions (must be > 0).
    pub std_dev: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            schedule: vec![8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
            category_means: vec![8.0, 6.0, 5.0, 4.0, 2.0],
            std_dev: 2.0,
        }
    }
}

/// One house type with its total-power envelope in watts.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseTypeConfig {
    /// House type label (e.g. `"I"`, `"II"`).
    pub label: String,
    /// Target floor on total appliance power (W). Documented intent only:
    /// the sampler's stopping rule never checks it, so a house can finish
    /// below this value.
    pub lower_w: f64,
    /// Hard ceiling on total appliance power (W).
    pub upper_w: f64,
}

fn default_house_types() -> Vec<HouseTypeConfig> {
    let limits: [(&str, f64, f64); 5] = [
        ("I", 1000.0, 2000.0),
        ("II", 2000.0, 4000.0),
        ("III", 4000.0, 6000.0),
        ("IV", 6000.0, 8000.0),
        ("V", 8000.0, 10000.0),
    ];
    limits
        .iter()
        .map(|&(label, lower_w, upper_w)| HouseTypeConfig {
            label: label.to_string(),
            lower_w,
            upper_w,
        })
        .collect()
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"generation.n_subareas"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl GeneratorConfig {
    /// Returns the baseline scenario (the reference parameter set: 2
    /// subareas, 5-10 houses per type, tariffs 8 down to 1).
    pub fn baseline() -> Self {
        Self {
            generation: GenerationConfig::default(),
            tariff: TariffConfig::default(),
            house_types: default_house_types(),
        }
    }

    /// Returns the dense preset: more subareas and more houses per type.
    pub fn dense() -> Self {
        Self {
            generation: GenerationConfig {
                n_subareas: 5,
                min_houses: 20,
                max_houses: 40,
                ..GenerationConfig::default()
            },
            tariff: TariffConfig::default(),
            house_types: default_house_types(),
        }
    }

    /// Returns the sparse preset: a single subarea with few, small houses.
    pub fn sparse() -> Self {
        Self {
            generation: GenerationConfig {
                n_subareas: 1,
                min_houses: 1,
                max_houses: 4,
                ..GenerationConfig::default()
            },
            tariff: TariffConfig::default(),
            house_types: vec![
                HouseTypeConfig {
                    label: "I".to_string(),
                    lower_w: 1000.0,
                    upper_w: 2000.0,
                },
                HouseTypeConfig {
                    label: "II".to_string(),
                    lower_w: 2000.0,
                    upper_w: 4000.0,
                },
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "dense", "sparse"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "dense" => Ok(Self::dense()),
            "sparse" => Ok(Self::sparse()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Every invariant is checked here, before any sampling begins; the
    /// generation stages assume a validated configuration. Returns an
    /// empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let g = &self.generation;

        if g.n_subareas == 0 {
            errors.push(ConfigError {
                field: "generation.n_subareas".into(),
                message: "must be > 0".into(),
            });
        }
        if g.min_houses == 0 {
            errors.push(ConfigError {
                field: "generation.min_houses".into(),
                message: "must be > 0".into(),
            });
        }
        if g.min_houses >= g.max_houses {
            errors.push(ConfigError {
                field: "generation.min_houses".into(),
                message: "must be < generation.max_houses".into(),
            });
        }

        let t = &self.tariff;
        if t.schedule.is_empty() {
            errors.push(ConfigError {
                field: "tariff.schedule".into(),
                message: "must not be empty".into(),
            });
        }
        if t.schedule.windows(2).any(|w| w[0] <= w[1]) {
            errors.push(ConfigError {
                field: "tariff.schedule".into(),
                message: "must be strictly decreasing".into(),
            });
        }
        if t.category_means.len() != CATEGORY_COUNT {
            errors.push(ConfigError {
                field: "tariff.category_means".into(),
                message: format!(
                    "must have exactly {CATEGORY_COUNT} entries, got {}",
                    t.category_means.len()
                ),
            });
        }
        if t.std_dev <= 0.0 || !t.std_dev.is_finite() {
            errors.push(ConfigError {
                field: "tariff.std_dev".into(),
                message: "must be > 0".into(),
            });
        }

        if self.house_types.is_empty() {
            errors.push(ConfigError {
                field: "house_types".into(),
                message: "must declare at least one house type".into(),
            });
        }
        for (i, ht) in self.house_types.iter().enumerate() {
            if ht.label.is_empty() {
                errors.push(ConfigError {
                    field: format!("house_types[{i}].label"),
                    message: "must not be empty".into(),
                });
            }
            if ht.lower_w <= 0.0 {
                errors.push(ConfigError {
                    field: format!("house_types[{i}].lower_w"),
                    message: "must be > 0".into(),
                });
            }
            if ht.lower_w > ht.upper_w {
                errors.push(ConfigError {
                    field: format!("house_types[{i}].lower_w"),
                    message: "must be <= upper_w".into(),
                });
            }
        }

        errors
    }
}
