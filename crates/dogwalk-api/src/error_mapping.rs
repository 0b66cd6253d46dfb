// SPDX-License-Identifier: Apache-2.0

use crate::ApiErrorCode;

#[must_use]
pub fn http_status_for(code: ApiErrorCode) -> u16 {
    match code {
        ApiErrorCode::ValidationFailed => 400,
        ApiErrorCode::NotFound => 404,
        _ => 500,
    }
}
