//! Shared test fixtures for integration tests.

use revstack::data::CompatibilityStore;

/// JSON for a small dataset with every pair stored in one direction only.
pub fn fixture_json() -> String {
    r#"{
        "services": [
            "Dynamic Containment (DC)",
            "Dynamic Moderation (DM)",
            "Balancing Reserve (BR)",
            "Demand Flexibility Service (DFS)"
        ],
        "service_name_mapping": {
            "Dynamic Containment (DC)": "Dynamic Containment",
            "Demand Flexibility Service (DFS)": "Demand Flexibility Service"
        },
        "technical_requirements": {
            "Dynamic Containment": {
                "Minimum capacity": "1 MW (aggregation permitted)",
                "Response time": "1 second"
            },
            "Demand Flexibility Service": {
                "Minimum capacity": "100 kW (aggregated)",
                "Notice period": "Day-ahead"
            },
            "Balancing Reserve (BR)": {
                "Minimum capacity": "1 MW"
            }
        },
        "compatibility": {
            "codelivery": {
                "Dynamic Containment (DC)": {
                    "Dynamic Moderation (DM)": {"value": "Explicit No — exclusive MW", "color": "red"},
                    "Balancing Reserve (BR)": {"value": "Explicit No — conflicting activation", "color": "red"}
                },
                "Dynamic Moderation (DM)": {
                    "Balancing Reserve (BR)": {"value": "No Data — combination not assessed in V1.0", "color": "grey"}
                }
            },
            "splitting": {
                "Dynamic Containment (DC)": {
                    "Dynamic Moderation (DM)": {"value": "Explicit Yes — separate metering required", "color": "green"}
                }
            },
            "jumping": {
                "Dynamic Containment (DC)": {
                    "Demand Flexibility Service (DFS)": {"value": "N/A — services cannot be active at the same time", "color": "amber"}
                }
            }
        },
        "metadata": {
            "title": "Fixture Stacking Dataset",
            "version": "1.0",
            "source": "test fixture",
            "date": "January 2025"
        }
    }"#
    .to_string()
}

/// Store built from the fixture dataset.
pub fn fixture_store() -> CompatibilityStore {
    CompatibilityStore::from_json_str(&fixture_json()).expect("fixture dataset should parse")
}

/// The fixture's service names as owned strings.
pub fn fixture_services() -> Vec<String> {
    fixture_store().services().to_vec()
}
