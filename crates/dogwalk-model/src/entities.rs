// SPDX-License-Identifier: Apache-2.0

use crate::ids::{CityId, DogId, WalkerCityId, WalkerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct City {
    pub id: CityId,
    pub name: String,
}

impl City {
    #[must_use]
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Walker {
    pub id: WalkerId,
    pub name: String,
}

impl Walker {
    #[must_use]
    pub fn new(id: WalkerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct WalkerCity {
    pub id: WalkerCityId,
    pub walker_id: WalkerId,
    pub city_id: CityId,
}

impl WalkerCity {
    #[must_use]
    pub const fn new(id: WalkerCityId, walker_id: WalkerId, city_id: CityId) -> Self {
        Self {
            id,
            walker_id,
            city_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    pub city_id: CityId,
    pub walker_id: Option<WalkerId>,
}

impl Dog {
    #[must_use]
    pub fn new(
        id: DogId,
        name: impl Into<String>,
        city_id: CityId,
        walker_id: Option<WalkerId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city_id,
            walker_id,
        }
    }
}
