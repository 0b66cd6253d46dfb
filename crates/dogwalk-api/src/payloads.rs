// SPDX-License-Identifier: Apache-2.0

use dogwalk_model::{CityId, WalkerId};
use serde::{Deserialize, Serialize};

// Request payloads stay tolerant on purpose: absent fields become `None` and
// surface as domain validation messages instead of deserializer rejections,
// and unknown fields are ignored so clients may post back whole records.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityPayload {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DogPayload {
    pub name: Option<String>,
    pub city_id: Option<CityId>,
    pub walker_id: Option<WalkerId>,
}

/// City reference inside a walker update. Clients post back full city
/// records; only the id is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityRef {
    pub id: Option<CityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWalkerRequest {
    pub name: Option<String>,
    pub cities: Option<Vec<CityRef>>,
}

/// `{"walkerId": null}` and `{}` both unassign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignWalkerRequest {
    pub walker_id: Option<WalkerId>,
}

/// Query string for walker listings, e.g. `/walker?cityId=2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkerListParams {
    pub city_id: Option<CityId>,
}
