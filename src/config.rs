//! TOML-based estimator scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::estimator::EstimatorInput;

/// Top-level estimator scenario parsed from TOML.
///
/// All fields have defaults matching the typical commercial asset. Load
/// from TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::commercial_baseline`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Shiftable asset parameters.
    pub asset: AssetConfig,
    /// Time-of-use tariff rates.
    pub tariff: TariffConfig,
    /// Participation-rate range.
    pub participation: ParticipationConfig,
    /// Optional incentive-program selection.
    pub programs: ProgramsConfig,
    /// Optional carbon-savings factors.
    pub carbon: CarbonConfig,
}

/// Shiftable asset parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    /// Maximum power that can be shifted or controlled (kW, must be > 0).
    pub capacity_kw: f64,
    /// Hours per day electricity use can shift (0.5–24).
    pub flex_hours_per_day: f64,
    /// Earliest shifting start, e.g. "16:00" (display only).
    pub window_start: Option<String>,
    /// Latest shifting finish (display only).
    pub window_end: Option<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            capacity_kw: 100.0,
            flex_hours_per_day: 4.0,
            window_start: None,
            window_end: None,
        }
    }
}

/// Time-of-use tariff rates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// Off-peak or average rate (p/kWh).
    pub baseline_rate_p: f64,
    /// Peak rate (p/kWh).
    pub peak_rate_p: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            baseline_rate_p: 15.0,
            peak_rate_p: 35.0,
        }
    }
}

/// Participation-rate range (% of time flexibility is actually exercised).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticipationConfig {
    /// Conservative estimate (%).
    pub low_pct: f64,
    /// Optimistic estimate (%).
    pub high_pct: f64,
}

impl Default for ParticipationConfig {
    fn default() -> Self {
        Self {
            low_pct: 30.0,
            high_pct: 80.0,
        }
    }
}

/// Incentive-program selection and availability.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgramsConfig {
    /// Selected program names; empty disables incentive revenue.
    pub selected: Vec<String>,
    /// Conservative dispatch availability (hours/year, ≤ 8760).
    pub availability_hours_low: f64,
    /// Optimistic dispatch availability (hours/year, ≤ 8760).
    pub availability_hours_high: f64,
}

impl Default for ProgramsConfig {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            availability_hours_low: 2000.0,
            availability_hours_high: 4000.0,
        }
    }
}

/// Carbon-savings factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarbonConfig {
    /// Whether to produce a CO2 figure at all.
    pub enabled: bool,
    /// Peak carbon intensity (kg CO2/kWh).
    pub peak_emission_factor: f64,
    /// Off-peak carbon intensity (kg CO2/kWh).
    pub offpeak_emission_factor: f64,
}

impl Default for CarbonConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            peak_emission_factor: 0.25,
            offpeak_emission_factor: 0.15,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"asset.capacity_kw"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the typical commercial asset scenario (all defaults).
    pub fn commercial_baseline() -> Self {
        Self::default()
    }

    /// Returns the battery-fleet preset: 1 MW aggregated storage bidding
    /// into the dynamic frequency-response suite.
    pub fn battery_fleet() -> Self {
        Self {
            asset: AssetConfig {
                capacity_kw: 1000.0,
                flex_hours_per_day: 6.0,
                ..AssetConfig::default()
            },
            programs: ProgramsConfig {
                selected: vec![
                    "Dynamic Containment (DC)".to_string(),
                    "Dynamic Moderation (DM)".to_string(),
                ],
                ..ProgramsConfig::default()
            },
            carbon: CarbonConfig {
                enabled: true,
                ..CarbonConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the demand-turn-down preset: a site shaving its evening peak
    /// through DFS and peak-load reduction.
    pub fn demand_turn_down() -> Self {
        Self {
            asset: AssetConfig {
                capacity_kw: 250.0,
                flex_hours_per_day: 3.0,
                window_start: Some("16:00".to_string()),
                window_end: Some("19:00".to_string()),
            },
            tariff: TariffConfig {
                baseline_rate_p: 18.0,
                peak_rate_p: 42.0,
            },
            participation: ParticipationConfig {
                low_pct: 20.0,
                high_pct: 60.0,
            },
            programs: ProgramsConfig {
                selected: vec![
                    "Demand Flexibility Service (DFS)".to_string(),
                    "Peak load reduction (PR)".to_string(),
                ],
                availability_hours_low: 300.0,
                availability_hours_high: 900.0,
            },
            carbon: CarbonConfig {
                enabled: true,
                ..CarbonConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["commercial_baseline", "battery_fleet", "demand_turn_down"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "commercial_baseline" => Ok(Self::commercial_baseline()),
            "battery_fleet" => Ok(Self::battery_fleet()),
            "demand_turn_down" => Ok(Self::demand_turn_down()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
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

    /// Parses a scenario from a TOML string.
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
    /// Returns an empty vector if configuration is valid. The estimator
    /// functions never validate; these checks are the only gate.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let a = &self.asset;
        if a.capacity_kw <= 0.0 {
            errors.push(ConfigError {
                field: "asset.capacity_kw".into(),
                message: "must be > 0".into(),
            });
        }
        if !(0.5..=24.0).contains(&a.flex_hours_per_day) {
            errors.push(ConfigError {
                field: "asset.flex_hours_per_day".into(),
                message: "must be in [0.5, 24]".into(),
            });
        }

        let t = &self.tariff;
        if t.baseline_rate_p < 0.0 {
            errors.push(ConfigError {
                field: "tariff.baseline_rate_p".into(),
                message: "must be >= 0".into(),
            });
        }
        if t.peak_rate_p < 0.0 {
            errors.push(ConfigError {
                field: "tariff.peak_rate_p".into(),
                message: "must be >= 0".into(),
            });
        }

        let p = &self.participation;
        if !(0.0..=100.0).contains(&p.low_pct) {
            errors.push(ConfigError {
                field: "participation.low_pct".into(),
                message: "must be in [0, 100]".into(),
            });
        }
        if !(0.0..=100.0).contains(&p.high_pct) {
            errors.push(ConfigError {
                field: "participation.high_pct".into(),
                message: "must be in [0, 100]".into(),
            });
        }
        if p.low_pct > p.high_pct {
            errors.push(ConfigError {
                field: "participation.low_pct".into(),
                message: "must be <= participation.high_pct".into(),
            });
        }

        let pr = &self.programs;
        if !(0.0..=8760.0).contains(&pr.availability_hours_low) {
            errors.push(ConfigError {
                field: "programs.availability_hours_low".into(),
                message: "must be in [0, 8760]".into(),
            });
        }
        if !(0.0..=8760.0).contains(&pr.availability_hours_high) {
            errors.push(ConfigError {
                field: "programs.availability_hours_high".into(),
                message: "must be in [0, 8760]".into(),
            });
        }
        if pr.availability_hours_low > pr.availability_hours_high {
            errors.push(ConfigError {
                field: "programs.availability_hours_low".into(),
                message: "must be <= programs.availability_hours_high".into(),
            });
        }

        let c = &self.carbon;
        if c.enabled {
            if c.peak_emission_factor <= 0.0 {
                errors.push(ConfigError {
                    field: "carbon.peak_emission_factor".into(),
                    message: "must be > 0 when carbon is enabled".into(),
                });
            }
            if c.offpeak_emission_factor <= 0.0 {
                errors.push(ConfigError {
                    field: "carbon.offpeak_emission_factor".into(),
                    message: "must be > 0 when carbon is enabled".into(),
                });
            }
        }

        errors
    }

    /// Builds the estimator input record for this scenario.
    pub fn to_input(&self) -> EstimatorInput {
        let has_programs = !self.programs.selected.is_empty();
        EstimatorInput {
            capacity_kw: self.asset.capacity_kw,
            flex_hours_per_day: self.asset.flex_hours_per_day,
            window_start: self.asset.window_start.clone(),
            window_end: self.asset.window_end.clone(),
            baseline_rate_p: self.tariff.baseline_rate_p,
            peak_rate_p: self.tariff.peak_rate_p,
            participation_low_pct: self.participation.low_pct,
            participation_high_pct: self.participation.high_pct,
            programs: self.programs.selected.clone(),
            availability_hours_low: has_programs.then_some(self.programs.availability_hours_low),
            availability_hours_high: has_programs.then_some(self.programs.availability_hours_high),
            peak_emission_factor: self.carbon.enabled.then_some(self.carbon.peak_emission_factor),
            offpeak_emission_factor: self
                .carbon
                .enabled
                .then_some(self.carbon.offpeak_emission_factor),
        }
    }
}
