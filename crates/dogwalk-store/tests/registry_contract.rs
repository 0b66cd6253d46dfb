// SPDX-License-Identifier: Apache-2.0

use dogwalk_model::{CityId, WalkerCity, WalkerCityId, WalkerId};
use dogwalk_store::Registry;

#[test]
fn seed_matches_the_documented_fixture() {
    let registry = Registry::seeded();
    assert_eq!(registry.cities.len(), 3);
    assert_eq!(registry.walkers.len(), 3);
    assert_eq!(registry.walker_cities.len(), 6);
    assert_eq!(registry.dogs.len(), 3);

    assert_eq!(registry.city(CityId::new(2)).map(|c| c.name.as_str()), Some("Memphis"));
    assert_eq!(
        registry.walker(WalkerId::new(2)).map(|w| w.name.as_str()),
        Some("Mike Davis")
    );

    let max = &registry.dogs[1];
    assert_eq!(max.name, "Max");
    assert_eq!(max.city_id, CityId::new(2));
    assert_eq!(max.walker_id, None);
}

#[test]
fn seed_next_ids_continue_after_the_fixture() {
    let registry = Registry::seeded();
    assert_eq!(registry.next_city_id().get(), 4);
    assert_eq!(registry.next_walker_id().get(), 4);
    assert_eq!(registry.next_walker_city_id().get(), 7);
    assert_eq!(registry.next_dog_id().get(), 4);
}

#[test]
fn cities_for_walker_follows_city_store_order() {
    let registry = Registry::seeded();
    let cities = registry.cities_for_walker(WalkerId::new(3));
    let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Nashville", "Memphis", "Knoxville"]);
}

#[test]
fn duplicate_junction_rows_are_stored_but_collapse_in_the_join() {
    let mut registry = Registry::seeded();
    // Mike already services Knoxville via edge 3; a second identical edge
    // is allowed to exist.
    registry.walker_cities.push(WalkerCity::new(
        WalkerCityId::new(7),
        WalkerId::new(2),
        CityId::new(3),
    ));
    assert_eq!(registry.walker_cities.len(), 7);
    let cities = registry.cities_for_walker(WalkerId::new(2));
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].name, "Knoxville");
}

#[test]
fn walker_services_city_reads_the_junction() {
    let registry = Registry::seeded();
    assert!(registry.walker_services_city(WalkerId::new(1), CityId::new(2)));
    assert!(!registry.walker_services_city(WalkerId::new(2), CityId::new(2)));
    assert!(!registry.walker_services_city(WalkerId::new(9), CityId::new(1)));
}
