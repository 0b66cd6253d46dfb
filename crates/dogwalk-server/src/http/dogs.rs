// SPDX-License-Identifier: Apache-2.0

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dogwalk_api::{AssignWalkerRequest, DogPayload};
use dogwalk_model::DogId;
use dogwalk_service::{
    assign_walker, available_walkers_for, create_dog, delete_dog, get_dog, list_dogs, update_dog,
};
use tracing::{debug, info};

use crate::http::handlers::{created_response, domain_error_response, require_json};
use crate::AppState;

pub(crate) async fn list_dogs_handler(State(state): State<AppState>) -> Response {
    let registry = state.registry.read().await;
    Json(list_dogs(&registry)).into_response()
}

pub(crate) async fn get_dog_handler(
    State(state): State<AppState>,
    Path(id): Path<DogId>,
) -> Response {
    let registry = state.registry.read().await;
    match get_dog(&registry, id) {
        Ok(view) => Json(view).into_response(),
        Err(err) => domain_error_response(err),
    }
}

pub(crate) async fn create_dog_handler(
    State(state): State<AppState>,
    payload: Result<Json<DogPayload>, JsonRejection>,
) -> Response {
    let payload = match require_json(payload) {
        Ok(payload) => payload,
        Err(resp) => return resp,
    };
    let mut registry = state.registry.write().await;
    match create_dog(
        &mut registry,
        payload.name.as_deref(),
        payload.city_id,
        payload.walker_id,
    ) {
        Ok(view) => {
            info!(dog_id = view.id.get(), name = %view.name, "dog created");
            created_response(format!("/dog/{}", view.id), view)
        }
        Err(err) => {
            debug!(error = %err, "dog create rejected");
            domain_error_response(err)
        }
    }
}

pub(crate) async fn update_dog_handler(
    State(state): State<AppState>,
    Path(id): Path<DogId>,
    payload: Result<Json<DogPayload>, JsonRejection>,
) -> Response {
    let payload = match require_json(payload) {
        Ok(payload) => payload,
        Err(resp) => return resp,
    };
    let mut registry = state.registry.write().await;
    match update_dog(
        &mut registry,
        id,
        payload.name.as_deref(),
        payload.city_id,
        payload.walker_id,
    ) {
        Ok(view) => {
            info!(dog_id = id.get(), "dog updated");
            Json(view).into_response()
        }
        Err(err) => {
            debug!(dog_id = id.get(), error = %err, "dog update rejected");
            domain_error_response(err)
        }
    }
}

pub(crate) async fn delete_dog_handler(
    State(state): State<AppState>,
    Path(id): Path<DogId>,
) -> Response {
    let mut registry = state.registry.write().await;
    match delete_dog(&mut registry, id) {
        Ok(()) => {
            info!(dog_id = id.get(), "dog deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => domain_error_response(err),
    }
}

pub(crate) async fn assign_walker_handler(
    State(state): State<AppState>,
    Path(id): Path<DogId>,
    payload: Result<Json<AssignWalkerRequest>, JsonRejection>,
) -> Response {
    let payload = match require_json(payload) {
        Ok(payload) => payload,
        Err(resp) => return resp,
    };
    let mut registry = state.registry.write().await;
    match assign_walker(&mut registry, id, payload.walker_id) {
        Ok(view) => {
            info!(
                dog_id = id.get(),
                walker_id = ?payload.walker_id.map(|walker| walker.get()),
                "walker assignment updated"
            );
            Json(view).into_response()
        }
        Err(err) => {
            debug!(dog_id = id.get(), error = %err, "walker assignment rejected");
            domain_error_response(err)
        }
    }
}

pub(crate) async fn available_walkers_handler(
    State(state): State<AppState>,
    Path(id): Path<DogId>,
) -> Response {
    let registry = state.registry.read().await;
    match available_walkers_for(&registry, id) {
        Ok(walkers) => Json(walkers).into_response(),
        Err(err) => domain_error_response(err),
    }
}
