//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{
    CellResponse, CompatibilityQuery, CompatibilityResponse, ErrorResponse, PairResponse,
    RequirementsResponse, StackRequest,
};
use crate::data::descriptions::service_description;
use crate::data::model::{DatasetMetadata, Mode};
use crate::estimator::{self, EstimatorInput, EstimatorResult};

/// Returns the dataset's service names in source order.
///
/// `GET /services` → 200 + `Vec<String>` JSON
pub async fn get_services(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.store.services().to_vec())
}

/// Returns dataset provenance fields verbatim.
///
/// `GET /metadata` → 200 + `DatasetMetadata` JSON
pub async fn get_metadata(State(state): State<Arc<AppState>>) -> Json<DatasetMetadata> {
    Json(state.store.metadata().clone())
}

/// Returns one pair's compatibility cell for one mode.
///
/// `GET /compatibility?a=X&b=Y&mode=codelivery` → 200 + `CompatibilityResponse`
/// `GET /compatibility?...&mode=bogus` → 400 + `ErrorResponse`
///
/// An unrecognized pair is a 200 "unknown" result, not an error.
pub async fn get_compatibility(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompatibilityQuery>,
) -> impl IntoResponse {
    let mode: Mode = match query.mode.parse() {
        Ok(mode) => mode,
        Err(message) => {
            return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })));
        }
    };

    let cell = state.store.compatibility(&query.a, &query.b, mode);
    Ok(Json(CompatibilityResponse {
        service_a: query.a,
        service_b: query.b,
        mode,
        cell: CellResponse::from(&cell),
    }))
}

/// Returns a service's technical requirements and description.
///
/// `GET /requirements/{service}` → 200 + `RequirementsResponse`
///
/// A service with no record returns an empty requirements map.
pub async fn get_requirements(
    State(state): State<Arc<AppState>>,
    Path(service): Path<String>,
) -> Json<RequirementsResponse> {
    let requirements = state.store.technical_requirements(&service);
    Json(RequirementsResponse {
        description: service_description(&service).map(ToString::to_string),
        service,
        requirements,
    })
}

/// Runs the all-pairs stacking check over the posted service selection.
///
/// `POST /stack` with `{"services": [..]}` → 200 + `Vec<PairResponse>`
/// Fewer than two services → 400 + `ErrorResponse`
pub async fn post_stack(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StackRequest>,
) -> impl IntoResponse {
    if request.services.len() < 2 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!(
                    "need at least 2 services to check stacking, got {}",
                    request.services.len()
                ),
            }),
        ));
    }

    let pairs = state.store.check_multi_compatibility(&request.services);
    let records: Vec<PairResponse> = pairs.iter().map(PairResponse::from).collect();
    Ok(Json(records))
}

/// Runs the value estimator over a posted input record.
///
/// `POST /estimate` with an `EstimatorInput` body → 200 + `EstimatorResult`
pub async fn post_estimate(Json(input): Json<EstimatorInput>) -> Json<EstimatorResult> {
    Json(estimator::estimate(&input))
}
