// SPDX-License-Identifier: Apache-2.0

use crate::views::{dog_view, walker_view};
use dogwalk_model::{CityId, Dog, DogId, DogView, DomainError, WalkerId, WalkerView};
use dogwalk_store::Registry;

#[must_use]
pub fn list_dogs(registry: &Registry) -> Vec<DogView> {
    registry
        .dogs
        .iter()
        .map(|dog| dog_view(registry, dog))
        .collect()
}

pub fn get_dog(registry: &Registry, id: DogId) -> Result<DogView, DomainError> {
    let dog = registry
        .dog(id)
        .ok_or_else(|| DomainError::not_found("Dog not found"))?;
    Ok(dog_view(registry, dog))
}

// Shared by create and update. Referential checks only; whether the walker
// services the dog's city is deliberately not examined here, that rule
// belongs to `assign_walker` alone.
fn validate_dog_fields(
    registry: &Registry,
    name: Option<&str>,
    city_id: Option<CityId>,
    walker_id: Option<WalkerId>,
) -> Result<(String, CityId), DomainError> {
    let name = name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(DomainError::validation("Dog name is required"));
    }
    let city_id = match city_id {
        Some(id) if registry.city_exists(id) => id,
        _ => return Err(DomainError::validation("Invalid city ID")),
    };
    if let Some(walker_id) = walker_id {
        if !registry.walker_exists(walker_id) {
            return Err(DomainError::validation("Invalid walker ID"));
        }
    }
    Ok((name.to_string(), city_id))
}

pub fn create_dog(
    registry: &mut Registry,
    name: Option<&str>,
    city_id: Option<CityId>,
    walker_id: Option<WalkerId>,
) -> Result<DogView, DomainError> {
    let (name, city_id) = validate_dog_fields(registry, name, city_id, walker_id)?;
    let dog = Dog::new(registry.next_dog_id(), name, city_id, walker_id);
    registry.dogs.push(dog.clone());
    Ok(dog_view(registry, &dog))
}

pub fn update_dog(
    registry: &mut Registry,
    id: DogId,
    name: Option<&str>,
    city_id: Option<CityId>,
    walker_id: Option<WalkerId>,
) -> Result<DogView, DomainError> {
    if registry.dog(id).is_none() {
        return Err(DomainError::not_found("Dog not found"));
    }
    let (name, city_id) = validate_dog_fields(registry, name, city_id, walker_id)?;
    if let Some(dog) = registry.dog_mut(id) {
        dog.name = name;
        dog.city_id = city_id;
        dog.walker_id = walker_id;
    }
    get_dog(registry, id)
}

pub fn delete_dog(registry: &mut Registry, id: DogId) -> Result<(), DomainError> {
    if registry.dog(id).is_none() {
        return Err(DomainError::not_found("Dog not found"));
    }
    registry.dogs.retain(|dog| dog.id != id);
    Ok(())
}

/// The one place the coverage rule is enforced: a walker may only be
/// assigned to a dog whose city it services. Passing `None` unassigns and
/// is never rejected.
pub fn assign_walker(
    registry: &mut Registry,
    dog_id: DogId,
    walker_id: Option<WalkerId>,
) -> Result<DogView, DomainError> {
    let dog = registry
        .dog(dog_id)
        .ok_or_else(|| DomainError::not_found("Dog not found"))?;
    let dog_city_id = dog.city_id;
    if let Some(walker_id) = walker_id {
        let walker = registry
            .walker(walker_id)
            .ok_or_else(|| DomainError::validation("Invalid walker ID"))?;
        if !registry.walker_services_city(walker_id, dog_city_id) {
            let city_name = registry
                .city(dog_city_id)
                .map_or_else(|| dog_city_id.to_string(), |city| city.name.clone());
            let serviced = registry.cities_for_walker(walker_id);
            let serviced_names = if serviced.is_empty() {
                "none".to_string()
            } else {
                serviced
                    .iter()
                    .map(|city| city.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            return Err(DomainError::validation(format!(
                "Walker {} does not service {}. Serviced cities: {}",
                walker.name, city_name, serviced_names
            )));
        }
    }
    if let Some(dog) = registry.dog_mut(dog_id) {
        dog.walker_id = walker_id;
    }
    get_dog(registry, dog_id)
}

/// Walkers eligible for this dog: everyone servicing the dog's city,
/// including its current walker.
pub fn available_walkers_for(
    registry: &Registry,
    dog_id: DogId,
) -> Result<Vec<WalkerView>, DomainError> {
    let dog = registry
        .dog(dog_id)
        .ok_or_else(|| DomainError::not_found("Dog not found"))?;
    Ok(registry
        .walkers
        .iter()
        .filter(|walker| registry.walker_services_city(walker.id, dog.city_id))
        .map(|walker| walker_view(registry, walker))
        .collect())
}
