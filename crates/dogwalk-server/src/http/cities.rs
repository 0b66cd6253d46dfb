// SPDX-License-Identifier: Apache-2.0

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dogwalk_api::CityPayload;
use dogwalk_model::CityId;
use dogwalk_service::{create_city, get_city, list_cities};
use tracing::{debug, info};

use crate::http::handlers::{created_response, domain_error_response, require_json};
use crate::AppState;

pub(crate) async fn list_cities_handler(State(state): State<AppState>) -> Response {
    let registry = state.registry.read().await;
    Json(list_cities(&registry)).into_response()
}

pub(crate) async fn get_city_handler(
    State(state): State<AppState>,
    Path(id): Path<CityId>,
) -> Response {
    let registry = state.registry.read().await;
    match get_city(&registry, id) {
        Ok(city) => Json(city).into_response(),
        Err(err) => domain_error_response(err),
    }
}

pub(crate) async fn create_city_handler(
    State(state): State<AppState>,
    payload: Result<Json<CityPayload>, JsonRejection>,
) -> Response {
    let payload = match require_json(payload) {
        Ok(payload) => payload,
        Err(resp) => return resp,
    };
    let mut registry = state.registry.write().await;
    match create_city(&mut registry, payload.name.as_deref()) {
        Ok(city) => {
            info!(city_id = city.id.get(), name = %city.name, "city created");
            created_response(format!("/city/{}", city.id), city)
        }
        Err(err) => {
            debug!(error = %err, "city create rejected");
            domain_error_response(err)
        }
    }
}
