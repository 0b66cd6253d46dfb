// SPDX-License-Identifier: Apache-2.0

use dogwalk_model::{City, CityId, Dog, DogId, Walker, WalkerCity, WalkerCityId, WalkerId};

/// All four stores in one value. Insertion order is the only order; ids are
/// assigned as `max existing id + 1` (so the max id is reused after a
/// delete, which callers treat as contract, not accident).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pub cities: Vec<City>,
    pub walkers: Vec<Walker>,
    pub walker_cities: Vec<WalkerCity>,
    pub dogs: Vec<Dog>,
}

impl Registry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn next_city_id(&self) -> CityId {
        let max = self.cities.iter().map(|c| c.id.get()).max().unwrap_or(0);
        CityId::new(max + 1)
    }

    #[must_use]
    pub fn next_walker_id(&self) -> WalkerId {
        let max = self.walkers.iter().map(|w| w.id.get()).max().unwrap_or(0);
        WalkerId::new(max + 1)
    }

    #[must_use]
    pub fn next_walker_city_id(&self) -> WalkerCityId {
        let max = self
            .walker_cities
            .iter()
            .map(|wc| wc.id.get())
            .max()
            .unwrap_or(0);
        WalkerCityId::new(max + 1)
    }

    #[must_use]
    pub fn next_dog_id(&self) -> DogId {
        let max = self.dogs.iter().map(|d| d.id.get()).max().unwrap_or(0);
        DogId::new(max + 1)
    }

    #[must_use]
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn walker(&self, id: WalkerId) -> Option<&Walker> {
        self.walkers.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn dog(&self, id: DogId) -> Option<&Dog> {
        self.dogs.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn dog_mut(&mut self, id: DogId) -> Option<&mut Dog> {
        self.dogs.iter_mut().find(|d| d.id == id)
    }

    #[must_use]
    pub fn city_exists(&self, id: CityId) -> bool {
        self.city(id).is_some()
    }

    #[must_use]
    pub fn walker_exists(&self, id: WalkerId) -> bool {
        self.walker(id).is_some()
    }

    /// Cities serviced by a walker, in city-store order. Duplicate junction
    /// rows collapse here because the walk is over `cities`, not the edges.
    #[must_use]
    pub fn cities_for_walker(&self, walker_id: WalkerId) -> Vec<City> {
        self.cities
            .iter()
            .filter(|city| {
                self.walker_cities
                    .iter()
                    .any(|wc| wc.walker_id == walker_id && wc.city_id == city.id)
            })
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn walker_services_city(&self, walker_id: WalkerId, city_id: CityId) -> bool {
        self.walker_cities
            .iter()
            .any(|wc| wc.walker_id == walker_id && wc.city_id == city_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_ids_start_at_one_on_an_empty_registry() {
        let registry = Registry::empty();
        assert_eq!(registry.next_city_id().get(), 1);
        assert_eq!(registry.next_walker_id().get(), 1);
        assert_eq!(registry.next_walker_city_id().get(), 1);
        assert_eq!(registry.next_dog_id().get(), 1);
    }

    #[test]
    fn next_id_is_max_plus_one_not_len_plus_one() {
        let mut registry = Registry::empty();
        registry.cities.push(City::new(CityId::new(10), "Nashville"));
        assert_eq!(registry.next_city_id().get(), 11);
    }

    #[test]
    fn deleting_the_max_id_frees_it_for_reuse() {
        let mut registry = Registry::seeded();
        registry.dogs.retain(|d| d.id != DogId::new(3));
        assert_eq!(registry.next_dog_id().get(), 3);
    }

    #[test]
    fn deleting_below_the_max_does_not_free_anything() {
        let mut registry = Registry::seeded();
        registry.dogs.retain(|d| d.id != DogId::new(1));
        assert_eq!(registry.next_dog_id().get(), 4);
    }
}
