//! Dataset types and the compatibility classification policy.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stacking mode: the axis along which a service pair is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Same MW, same time, same direction.
    Codelivery,
    /// Different MW, same asset, same time.
    Splitting,
    /// Same asset, different times.
    Jumping,
}

impl Mode {
    /// All three modes, in the order results are reported.
    pub const ALL: [Mode; 3] = [Mode::Codelivery, Mode::Splitting, Mode::Jumping];

    /// Lowercase name as used in the dataset file.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Codelivery => "codelivery",
            Mode::Splitting => "splitting",
            Mode::Jumping => "jumping",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "codelivery" => Ok(Mode::Codelivery),
            "splitting" => Ok(Mode::Splitting),
            "jumping" => Ok(Mode::Jumping),
            other => Err(format!(
                "unknown mode \"{other}\", expected codelivery, splitting, or jumping"
            )),
        }
    }
}

/// Raw compatibility cell as stored in the dataset.
///
/// Both fields `None` is the "unknown" sentinel returned for pairs the
/// table has no entry for in either direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityCell {
    /// Free-text classification value ("Explicit Yes — ...", "No Data", ...).
    pub value: Option<String>,
    /// Display color hint carried alongside the value.
    pub color: Option<String>,
}

impl CompatibilityCell {
    /// Classifies this cell's value under the ordered substring policy.
    pub fn classification(&self) -> Classification {
        classify(self.value.as_deref())
    }
}

/// Classification of a raw compatibility value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Compatible,
    Incompatible,
    NoData,
    NotApplicable,
    Unknown,
}

impl Classification {
    /// Short text badge for terminal reports.
    pub fn badge(self) -> &'static str {
        match self {
            Classification::Compatible => "[YES]",
            Classification::Incompatible => "[NO]",
            Classification::NoData => "[?]",
            Classification::NotApplicable => "[N/A]",
            Classification::Unknown => "[?]",
        }
    }
}

/// Classifies a raw value by ordered substring containment.
///
/// The check order is a contract of the source dataset: "Explicit Yes",
/// then "Explicit No", then "No Data", then "N/A"; first match wins. A
/// value containing both "Explicit Yes" and "N/A" text therefore
/// classifies as compatible. Anything else, including a missing or empty
/// value, is unknown.
pub fn classify(value: Option<&str>) -> Classification {
    let Some(v) = value else {
        return Classification::Unknown;
    };
    if v.contains("Explicit Yes") {
        Classification::Compatible
    } else if v.contains("Explicit No") {
        Classification::Incompatible
    } else if v.contains("No Data") {
        Classification::NoData
    } else if v.contains("N/A") {
        Classification::NotApplicable
    } else {
        Classification::Unknown
    }
}

/// Per-service technical requirement record: field name to value.
///
/// Values are strings or numbers in the source data, hence `serde_json::Value`.
pub type RequirementRecord = BTreeMap<String, serde_json::Value>;

/// One mode's pair table. Pairs may be stored in a single direction.
pub type PairTable = HashMap<String, HashMap<String, CompatibilityCell>>;

/// The three-mode compatibility table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompatibilityTables {
    #[serde(default)]
    pub codelivery: PairTable,
    #[serde(default)]
    pub splitting: PairTable,
    #[serde(default)]
    pub jumping: PairTable,
}

impl CompatibilityTables {
    /// The table for one mode.
    pub fn table(&self, mode: Mode) -> &PairTable {
        match mode {
            Mode::Codelivery => &self.codelivery,
            Mode::Splitting => &self.splitting,
            Mode::Jumping => &self.jumping,
        }
    }
}

/// Descriptive fields about the dataset snapshot, reported verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetMetadata {
    pub title: String,
    pub version: String,
    pub source: String,
    pub date: String,
}

/// One immutable dataset snapshot, loaded whole from the backing JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackingDataset {
    /// Service display names, in source order.
    pub services: Vec<String>,
    /// Stacking name to technical-requirements record key.
    #[serde(default)]
    pub service_name_mapping: HashMap<String, String>,
    /// Technical requirement records keyed by mapped name.
    #[serde(default)]
    pub technical_requirements: HashMap<String, RequirementRecord>,
    /// Pairwise compatibility, one table per mode.
    #[serde(default)]
    pub compatibility: CompatibilityTables,
    /// Snapshot provenance.
    #[serde(default)]
    pub metadata: DatasetMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_explicit_yes() {
        let c = classify(Some("Explicit Yes — both services can be delivered"));
        assert_eq!(c, Classification::Compatible);
    }

    #[test]
    fn classify_explicit_no() {
        assert_eq!(
            classify(Some("Explicit No — conflicting baselines")),
            Classification::Incompatible
        );
    }

    #[test]
    fn classify_precedence_yes_beats_na() {
        // First match wins: a value carrying both markers is compatible.
        let c = classify(Some("Explicit Yes, but see N/A note"));
        assert_eq!(c, Classification::Compatible);
    }

    #[test]
    fn classify_precedence_no_data_beats_na() {
        let c = classify(Some("No Data (treated as N/A in V1.0)"));
        assert_eq!(c, Classification::NoData);
    }

    #[test]
    fn classify_none_and_empty_are_unknown() {
        assert_eq!(classify(None), Classification::Unknown);
        assert_eq!(classify(Some("")), Classification::Unknown);
        assert_eq!(classify(Some("tbc")), Classification::Unknown);
    }

    #[test]
    fn default_cell_is_unknown_sentinel() {
        let cell = CompatibilityCell::default();
        assert!(cell.value.is_none());
        assert!(cell.color.is_none());
        assert_eq!(cell.classification(), Classification::Unknown);
    }

    #[test]
    fn mode_round_trips_through_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let err = "overlapping".parse::<Mode>();
        assert!(err.is_err());
        let msg = err.err();
        assert!(msg.as_deref().is_some_and(|m| m.contains("unknown mode")));
    }
}
