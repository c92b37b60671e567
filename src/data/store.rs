//! Load-once store over the static stacking dataset.

use std::fmt;
use std::fs;
use std::path::Path;

use super::model::{
    CompatibilityCell, DatasetMetadata, Mode, RequirementRecord, StackingDataset,
};

/// Fatal load-time error: the backing dataset is missing, unreadable, or
/// structurally invalid. There is no retry or partial load; the dataset is
/// all-or-nothing.
#[derive(Debug)]
pub struct DataError {
    /// Source the load was attempted from (path or `"<inline>"`).
    pub source: String,
    /// Human-readable failure description.
    pub message: String,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stacking data unavailable: {} — {}", self.source, self.message)
    }
}

impl std::error::Error for DataError {}

/// All three mode cells for one service pair.
///
/// `service_a` always precedes `service_b` in the input ordering of the
/// multi-service check that produced this entry.
#[derive(Debug, Clone)]
pub struct PairCompatibility {
    pub service_a: String,
    pub service_b: String,
    pub codelivery: CompatibilityCell,
    pub splitting: CompatibilityCell,
    pub jumping: CompatibilityCell,
}

impl PairCompatibility {
    /// The cell for one mode.
    pub fn cell(&self, mode: Mode) -> &CompatibilityCell {
        match mode {
            Mode::Codelivery => &self.codelivery,
            Mode::Splitting => &self.splitting,
            Mode::Jumping => &self.jumping,
        }
    }
}

/// Single source of truth for the static reference data.
///
/// Constructed once at process start and passed by reference to query
/// callers. The snapshot is immutable for the process lifetime; there is no
/// reload path by design (static reference data, not a live feed). Because
/// the data never changes, sharing `&CompatibilityStore` across threads
/// needs no locking.
#[derive(Debug, Clone)]
pub struct CompatibilityStore {
    data: StackingDataset,
}

impl CompatibilityStore {
    /// Wraps an already-deserialized dataset.
    pub fn new(data: StackingDataset) -> Self {
        Self { data }
    }

    /// Reads and deserializes the dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a `DataError` if the file cannot be read or is not valid
    /// dataset JSON. This is fatal to startup, not recoverable.
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let raw = fs::read_to_string(path).map_err(|e| DataError {
            source: path.display().to_string(),
            message: format!("cannot read: {e}"),
        })?;
        let data: StackingDataset = serde_json::from_str(&raw).map_err(|e| DataError {
            source: path.display().to_string(),
            message: format!("invalid dataset JSON: {e}"),
        })?;
        Ok(Self::new(data))
    }

    /// Deserializes the dataset from an in-memory JSON string.
    ///
    /// # Errors
    ///
    /// Returns a `DataError` if the string is not valid dataset JSON.
    pub fn from_json_str(raw: &str) -> Result<Self, DataError> {
        let data: StackingDataset = serde_json::from_str(raw).map_err(|e| DataError {
            source: "<inline>".to_string(),
            message: format!("invalid dataset JSON: {e}"),
        })?;
        Ok(Self::new(data))
    }

    /// Service names verbatim, preserving source order.
    pub fn services(&self) -> &[String] {
        &self.data.services
    }

    /// Compatibility cell for a pair in one mode.
    ///
    /// The underlying table may store each pair in a single physical
    /// direction, so both orderings are probed; the result is commutative in
    /// observable classification. A pair present in neither direction yields
    /// the unknown sentinel (both fields `None`), never an error.
    pub fn compatibility(&self, service_a: &str, service_b: &str, mode: Mode) -> CompatibilityCell {
        let table = self.data.compatibility.table(mode);
        table
            .get(service_a)
            .and_then(|row| row.get(service_b))
            .or_else(|| table.get(service_b).and_then(|row| row.get(service_a)))
            .cloned()
            .unwrap_or_default()
    }

    /// Technical requirement record for a service, empty if none exists.
    ///
    /// The stacking-compatibility name is resolved through the
    /// name-mapping table first (services may share a record); an unmapped
    /// name is used directly as the key. Absence of a record is a valid,
    /// displayable state, not an error.
    pub fn technical_requirements(&self, service_name: &str) -> RequirementRecord {
        let key = self.requirements_key(service_name);
        self.data
            .technical_requirements
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn requirements_key<'a>(&'a self, service_name: &'a str) -> &'a str {
        self.data
            .service_name_mapping
            .get(service_name)
            .map_or(service_name, String::as_str)
    }

    /// All pairwise compatibility entries for a selection of services.
    ///
    /// Computes every one of the n·(n−1)/2 pairs, each with all three mode
    /// cells. Entries follow the input ordering with i<j indexing: the pair
    /// (services[i], services[j]) appears before (services[k], services[l])
    /// whenever i < k, or i == k and j < l.
    pub fn check_multi_compatibility(&self, services: &[String]) -> Vec<PairCompatibility> {
        let mut results = Vec::new();
        for (i, a) in services.iter().enumerate() {
            for b in &services[i + 1..] {
                results.push(PairCompatibility {
                    service_a: a.clone(),
                    service_b: b.clone(),
                    codelivery: self.compatibility(a, b, Mode::Codelivery),
                    splitting: self.compatibility(a, b, Mode::Splitting),
                    jumping: self.compatibility(a, b, Mode::Jumping),
                });
            }
        }
        results
    }

    /// Dataset provenance fields, verbatim.
    pub fn metadata(&self) -> &DatasetMetadata {
        &self.data.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Classification;

    fn store_from(json: &str) -> CompatibilityStore {
        CompatibilityStore::from_json_str(json).expect("fixture dataset should parse")
    }

    fn fixture() -> CompatibilityStore {
        store_from(
            r#"{
                "services": ["Alpha", "Beta", "Gamma"],
                "service_name_mapping": {"Alpha": "Alpha Record"},
                "technical_requirements": {
                    "Alpha Record": {"Minimum capacity": "1 MW", "Response time": "1 second"},
                    "Beta": {"Minimum capacity": "100 kW"}
                },
                "compatibility": {
                    "codelivery": {
                        "Alpha": {"Beta": {"value": "Explicit Yes", "color": "green"}}
                    },
                    "splitting": {
                        "Alpha": {"Beta": {"value": "Explicit No", "color": "red"}}
                    },
                    "jumping": {
                        "Alpha": {"Beta": {"value": "No Data", "color": "grey"}}
                    }
                },
                "metadata": {
                    "title": "Fixture", "version": "0.1", "source": "test", "date": "2025"
                }
            }"#,
        )
    }

    #[test]
    fn services_preserve_source_order() {
        let store = fixture();
        assert_eq!(store.services(), ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn lookup_is_commutative_over_single_direction_storage() {
        let store = fixture();
        // The fixture only stores Alpha -> Beta.
        let forward = store.compatibility("Alpha", "Beta", Mode::Codelivery);
        let reverse = store.compatibility("Beta", "Alpha", Mode::Codelivery);
        assert_eq!(forward, reverse);
        assert_eq!(forward.classification(), Classification::Compatible);
    }

    #[test]
    fn missing_pair_yields_unknown_sentinel() {
        let store = fixture();
        let cell = store.compatibility("Alpha", "Gamma", Mode::Jumping);
        assert!(cell.value.is_none());
        assert!(cell.color.is_none());
        assert_eq!(cell.classification(), Classification::Unknown);
    }

    #[test]
    fn requirements_resolve_through_name_mapping() {
        let store = fixture();
        let reqs = store.technical_requirements("Alpha");
        assert_eq!(
            reqs.get("Minimum capacity").and_then(|v| v.as_str()),
            Some("1 MW")
        );
    }

    #[test]
    fn requirements_fall_back_to_name_as_key() {
        let store = fixture();
        let reqs = store.technical_requirements("Beta");
        assert_eq!(
            reqs.get("Minimum capacity").and_then(|v| v.as_str()),
            Some("100 kW")
        );
    }

    #[test]
    fn unknown_service_requirements_are_empty_not_an_error() {
        let store = fixture();
        let reqs = store.technical_requirements("UnknownService");
        assert!(reqs.is_empty());
    }

    #[test]
    fn multi_check_covers_all_pairs_in_input_order() {
        let store = fixture();
        let selection: Vec<String> = ["Gamma", "Alpha", "Beta"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let results = store.check_multi_compatibility(&selection);
        // 3 choose 2 pairs, input order with i<j indexing.
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].service_a, "Gamma");
        assert_eq!(results[0].service_b, "Alpha");
        assert_eq!(results[1].service_a, "Gamma");
        assert_eq!(results[1].service_b, "Beta");
        assert_eq!(results[2].service_a, "Alpha");
        assert_eq!(results[2].service_b, "Beta");
    }

    #[test]
    fn multi_check_entries_carry_all_three_modes() {
        let store = fixture();
        let selection: Vec<String> = ["Alpha", "Beta"].iter().map(ToString::to_string).collect();
        let results = store.check_multi_compatibility(&selection);
        assert_eq!(results.len(), 1);
        let pair = &results[0];
        assert_eq!(pair.cell(Mode::Codelivery).classification(), Classification::Compatible);
        assert_eq!(pair.cell(Mode::Splitting).classification(), Classification::Incompatible);
        assert_eq!(pair.cell(Mode::Jumping).classification(), Classification::NoData);
    }

    #[test]
    fn missing_file_is_a_data_error() {
        let err = CompatibilityStore::from_json_file(Path::new("does/not/exist.json"));
        assert!(err.is_err());
        let e = err.err();
        assert!(e.as_ref().is_some_and(|e| e.message.contains("cannot read")));
    }

    #[test]
    fn malformed_json_is_a_data_error() {
        let err = CompatibilityStore::from_json_str("{ not json");
        assert!(err.is_err());
    }

    #[test]
    fn unknown_top_level_field_is_rejected() {
        let err = CompatibilityStore::from_json_str(
            r#"{"services": [], "bogus": true}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn metadata_is_verbatim() {
        let store = fixture();
        assert_eq!(store.metadata().title, "Fixture");
        assert_eq!(store.metadata().version, "0.1");
    }
}
