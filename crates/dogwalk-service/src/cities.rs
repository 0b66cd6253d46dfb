// SPDX-License-Identifier: Apache-2.0

use dogwalk_model::{City, CityId, DomainError};
use dogwalk_store::Registry;

#[must_use]
pub fn list_cities(registry: &Registry) -> Vec<City> {
    registry.cities.clone()
}

pub fn get_city(registry: &Registry, id: CityId) -> Result<City, DomainError> {
    registry
        .city(id)
        .cloned()
        .ok_or_else(|| DomainError::not_found("City not found"))
}

/// Names are stored as supplied; uniqueness is checked case-insensitively.
pub fn create_city(registry: &mut Registry, name: Option<&str>) -> Result<City, DomainError> {
    let name = name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(DomainError::validation("City name is required"));
    }
    let lowered = name.to_lowercase();
    if registry
        .cities
        .iter()
        .any(|city| city.name.to_lowercase() == lowered)
    {
        return Err(DomainError::validation("City already exists"));
    }
    let city = City::new(registry.next_city_id(), name);
    registry.cities.push(city.clone());
    Ok(city)
}
