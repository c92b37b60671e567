//! API request, response, and query types.

use serde::{Deserialize, Serialize};

use crate::data::model::{Classification, CompatibilityCell, Mode, RequirementRecord};
use crate::data::store::PairCompatibility;

/// One mode's cell plus its derived classification.
#[derive(Debug, Serialize)]
pub struct CellResponse {
    /// Raw classification value, absent for unknown pairs.
    pub value: Option<String>,
    /// Display color hint.
    pub color: Option<String>,
    /// Derived classification under the substring policy.
    pub classification: Classification,
}

impl From<&CompatibilityCell> for CellResponse {
    fn from(cell: &CompatibilityCell) -> Self {
        Self {
            value: cell.value.clone(),
            color: cell.color.clone(),
            classification: cell.classification(),
        }
    }
}

/// Query parameters for the single-pair compatibility endpoint.
#[derive(Debug, Deserialize)]
pub struct CompatibilityQuery {
    /// First service name.
    pub a: String,
    /// Second service name.
    pub b: String,
    /// Mode name: codelivery, splitting, or jumping.
    pub mode: String,
}

/// Single-pair compatibility response.
#[derive(Debug, Serialize)]
pub struct CompatibilityResponse {
    pub service_a: String,
    pub service_b: String,
    pub mode: Mode,
    #[serde(flatten)]
    pub cell: CellResponse,
}

/// Technical requirements for one service.
#[derive(Debug, Serialize)]
pub struct RequirementsResponse {
    pub service: String,
    /// Plain-English service description, when one exists.
    pub description: Option<String>,
    /// Field name to value; empty when the dataset has no record.
    pub requirements: RequirementRecord,
}

/// Request body for the multi-service stacking check.
#[derive(Debug, Deserialize)]
pub struct StackRequest {
    /// Two or more service names.
    pub services: Vec<String>,
}

/// One pair entry in the stacking check response, all three modes.
#[derive(Debug, Serialize)]
pub struct PairResponse {
    pub service_a: String,
    pub service_b: String,
    pub codelivery: CellResponse,
    pub splitting: CellResponse,
    pub jumping: CellResponse,
}

impl From<&PairCompatibility> for PairResponse {
    fn from(pair: &PairCompatibility) -> Self {
        Self {
            service_a: pair.service_a.clone(),
            service_b: pair.service_b.clone(),
            codelivery: CellResponse::from(&pair.codelivery),
            splitting: CellResponse::from(&pair.splitting),
            jumping: CellResponse::from(&pair.jumping),
        }
    }
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
