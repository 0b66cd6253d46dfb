// SPDX-License-Identifier: Apache-2.0

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dogwalk_api::{ApiError, UpdateWalkerRequest, WalkerListParams};
use dogwalk_model::{CityId, WalkerId};
use dogwalk_service::{
    available_dogs_for, delete_walker, get_walker, list_walkers, update_walker,
};
use tracing::{debug, info};

use crate::http::handlers::{api_error_response, domain_error_response, require_json};
use crate::AppState;

pub(crate) async fn list_walkers_handler(
    State(state): State<AppState>,
    params: Result<Query<WalkerListParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return api_error_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation(format!("invalid query string: {}", rejection.body_text())),
            )
        }
    };
    let registry = state.registry.read().await;
    Json(list_walkers(&registry, params.city_id)).into_response()
}

pub(crate) async fn get_walker_handler(
    State(state): State<AppState>,
    Path(id): Path<WalkerId>,
) -> Response {
    let registry = state.registry.read().await;
    match get_walker(&registry, id) {
        Ok(view) => Json(view).into_response(),
        Err(err) => domain_error_response(err),
    }
}

pub(crate) async fn update_walker_handler(
    State(state): State<AppState>,
    Path(id): Path<WalkerId>,
    payload: Result<Json<UpdateWalkerRequest>, JsonRejection>,
) -> Response {
    let payload = match require_json(payload) {
        Ok(payload) => payload,
        Err(resp) => return resp,
    };
    // City refs without an id fall through as id 0, which never exists and
    // is reported back as an invalid city id.
    let city_ids = payload.cities.map(|cities| {
        cities
            .iter()
            .map(|city| city.id.unwrap_or(CityId::new(0)))
            .collect::<Vec<_>>()
    });
    let mut registry = state.registry.write().await;
    match update_walker(&mut registry, id, payload.name.as_deref(), city_ids.as_deref()) {
        Ok(view) => {
            info!(walker_id = id.get(), cities = view.cities.len(), "walker updated");
            Json(view).into_response()
        }
        Err(err) => {
            debug!(walker_id = id.get(), error = %err, "walker update rejected");
            domain_error_response(err)
        }
    }
}

pub(crate) async fn delete_walker_handler(
    State(state): State<AppState>,
    Path(id): Path<WalkerId>,
) -> Response {
    let mut registry = state.registry.write().await;
    match delete_walker(&mut registry, id) {
        Ok(()) => {
            info!(walker_id = id.get(), "walker deleted, assignments cleared");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => domain_error_response(err),
    }
}

pub(crate) async fn available_dogs_handler(
    State(state): State<AppState>,
    Path(id): Path<WalkerId>,
) -> Response {
    let registry = state.registry.read().await;
    match available_dogs_for(&registry, id) {
        Ok(dogs) => Json(dogs).into_response(),
        Err(err) => domain_error_response(err),
    }
}
