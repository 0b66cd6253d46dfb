// SPDX-License-Identifier: Apache-2.0

use dogwalk_model::{Dog, DogView, Walker, WalkerView};
use dogwalk_store::Registry;

#[must_use]
pub fn walker_view(registry: &Registry, walker: &Walker) -> WalkerView {
    WalkerView::new(
        walker.id,
        walker.name.clone(),
        registry.cities_for_walker(walker.id),
    )
}

#[must_use]
pub fn dog_view(registry: &Registry, dog: &Dog) -> DogView {
    let city = registry.city(dog.city_id).cloned();
    let walker = dog
        .walker_id
        .and_then(|id| registry.walker(id))
        .map(|walker| walker_view(registry, walker));
    DogView::new(
        dog.id,
        dog.name.clone(),
        dog.city_id,
        dog.walker_id,
        city,
        walker,
    )
}
