// SPDX-License-Identifier: Apache-2.0

use crate::views::{dog_view, walker_view};
use dogwalk_model::{CityId, DogView, DomainError, WalkerCity, WalkerId, WalkerView};
use dogwalk_store::Registry;

#[must_use]
pub fn list_walkers(registry: &Registry, city_filter: Option<CityId>) -> Vec<WalkerView> {
    let views = registry
        .walkers
        .iter()
        .map(|walker| walker_view(registry, walker));
    match city_filter {
        Some(city_id) => views
            .filter(|view| view.cities.iter().any(|city| city.id == city_id))
            .collect(),
        None => views.collect(),
    }
}

pub fn get_walker(registry: &Registry, id: WalkerId) -> Result<WalkerView, DomainError> {
    let walker = registry
        .walker(id)
        .ok_or_else(|| DomainError::not_found("Walker not found"))?;
    Ok(walker_view(registry, walker))
}

/// Full replacement: the walker's junction rows are dropped and rebuilt from
/// `city_ids`, one row per entry in input order. `None` clears coverage
/// without validating anything.
pub fn update_walker(
    registry: &mut Registry,
    id: WalkerId,
    name: Option<&str>,
    city_ids: Option<&[CityId]>,
) -> Result<WalkerView, DomainError> {
    if !registry.walker_exists(id) {
        return Err(DomainError::not_found("Walker not found"));
    }
    let name = name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(DomainError::validation("Walker name is required"));
    }
    if let Some(city_ids) = city_ids {
        let invalid: Vec<String> = city_ids
            .iter()
            .filter(|city_id| !registry.city_exists(**city_id))
            .map(ToString::to_string)
            .collect();
        if !invalid.is_empty() {
            return Err(DomainError::validation(format!(
                "Invalid city IDs: {}",
                invalid.join(", ")
            )));
        }
    }

    if let Some(walker) = registry.walkers.iter_mut().find(|w| w.id == id) {
        walker.name = name.to_string();
    }
    registry.walker_cities.retain(|wc| wc.walker_id != id);
    if let Some(city_ids) = city_ids {
        for city_id in city_ids {
            let edge = WalkerCity::new(registry.next_walker_city_id(), id, *city_id);
            registry.walker_cities.push(edge);
        }
    }
    get_walker(registry, id)
}

/// Cascade: the walker's junction rows go with it and every dog it was
/// assigned to becomes unassigned. Dogs themselves are kept.
pub fn delete_walker(registry: &mut Registry, id: WalkerId) -> Result<(), DomainError> {
    if !registry.walker_exists(id) {
        return Err(DomainError::not_found("Walker not found"));
    }
    registry.walkers.retain(|walker| walker.id != id);
    registry.walker_cities.retain(|wc| wc.walker_id != id);
    for dog in registry
        .dogs
        .iter_mut()
        .filter(|dog| dog.walker_id == Some(id))
    {
        dog.walker_id = None;
    }
    Ok(())
}

/// Dogs this walker could take on: located in a serviced city and not
/// already walked by this walker. Dogs assigned to someone else count.
pub fn available_dogs_for(registry: &Registry, id: WalkerId) -> Result<Vec<DogView>, DomainError> {
    if !registry.walker_exists(id) {
        return Err(DomainError::not_found("Walker not found"));
    }
    Ok(registry
        .dogs
        .iter()
        .filter(|dog| {
            registry.walker_services_city(id, dog.city_id) && dog.walker_id != Some(id)
        })
        .map(|dog| dog_view(registry, dog))
        .collect())
}
