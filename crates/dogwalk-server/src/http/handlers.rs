// SPDX-License-Identifier: Apache-2.0

use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dogwalk_api::{http_status_for, ApiError};
use dogwalk_model::DomainError;
use serde::Serialize;
use serde_json::json;

#[must_use]
pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(json!({ "error": err }))).into_response()
}

#[must_use]
pub(crate) fn domain_error_response(err: DomainError) -> Response {
    let err = ApiError::from(err);
    let status = StatusCode::from_u16(http_status_for(err.code))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    api_error_response(status, err)
}

#[must_use]
pub(crate) fn created_response<T: Serialize>(location: String, body: T) -> Response {
    let mut resp = (StatusCode::CREATED, Json(body)).into_response();
    if let Ok(value) = HeaderValue::from_str(&location) {
        resp.headers_mut().insert(header::LOCATION, value);
    }
    resp
}

/// Malformed JSON becomes the standard 400 envelope instead of axum's
/// plain-text rejection.
pub(crate) fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(api_error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation(format!("invalid request body: {}", rejection.body_text())),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogwalk_api::ApiErrorCode;

    #[test]
    fn domain_errors_map_onto_envelope_statuses() {
        let resp = domain_error_response(DomainError::validation("City name is required"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = domain_error_response(DomainError::not_found("Dog not found"));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn created_responses_carry_the_location_header() {
        let resp = created_response("/city/4".to_string(), json!({"id": 4}));
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers().get(header::LOCATION).map(|v| v.as_bytes()),
            Some("/city/4".as_bytes())
        );
    }

    #[test]
    fn error_codes_stay_stable_on_the_wire() {
        let err = ApiError::validation("x");
        assert_eq!(err.code, ApiErrorCode::ValidationFailed);
        let encoded = serde_json::to_string(&json!({ "error": err })).expect("encode");
        assert!(encoded.contains(r#""code":"validation_failed""#));
    }
}
