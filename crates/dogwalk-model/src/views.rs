// SPDX-License-Identifier: Apache-2.0

use crate::entities::City;
use crate::ids::{CityId, DogId, WalkerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct WalkerView {
    pub id: WalkerId,
    pub name: String,
    pub cities: Vec<City>,
}

impl WalkerView {
    #[must_use]
    pub fn new(id: WalkerId, name: impl Into<String>, cities: Vec<City>) -> Self {
        Self {
            id,
            name: name.into(),
            cities,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct DogView {
    pub id: DogId,
    pub name: String,
    pub city_id: CityId,
    // None when the dog is unassigned; the embedded records are None only
    // if the referenced row is missing.
    pub walker_id: Option<WalkerId>,
    pub city: Option<City>,
    pub walker: Option<WalkerView>,
}

impl DogView {
    #[must_use]
    pub fn new(
        id: DogId,
        name: impl Into<String>,
        city_id: CityId,
        walker_id: Option<WalkerId>,
        city: Option<City>,
        walker: Option<WalkerView>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city_id,
            walker_id,
            city,
            walker,
        }
    }
}
