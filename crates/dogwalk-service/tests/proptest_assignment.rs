// SPDX-License-Identifier: Apache-2.0

use dogwalk_model::{City, CityId, Dog, DogId, Walker, WalkerCity, WalkerCityId, WalkerId};
use dogwalk_service::assign_walker;
use dogwalk_store::Registry;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn registry_with_coverage(coverage: &[bool], dog_city: CityId) -> Registry {
    let mut registry = Registry::empty();
    for id in 1..=coverage.len() as i64 {
        registry
            .cities
            .push(City::new(CityId::new(id), format!("city-{id}")));
    }
    registry
        .walkers
        .push(Walker::new(WalkerId::new(1), "walker-1"));
    let mut edge = 0;
    for (idx, covered) in coverage.iter().enumerate() {
        if *covered {
            edge += 1;
            registry.walker_cities.push(WalkerCity::new(
                WalkerCityId::new(edge),
                WalkerId::new(1),
                CityId::new(idx as i64 + 1),
            ));
        }
    }
    registry
        .dogs
        .push(Dog::new(DogId::new(1), "dog-1", dog_city, None));
    registry
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn assignment_succeeds_iff_the_walker_covers_the_dogs_city(
        coverage in proptest::collection::vec(any::<bool>(), 1..8),
        dog_city_seed in 0usize..64,
    ) {
        let dog_city_idx = dog_city_seed % coverage.len();
        let dog_city = CityId::new(dog_city_idx as i64 + 1);
        let mut registry = registry_with_coverage(&coverage, dog_city);

        let result = assign_walker(&mut registry, DogId::new(1), Some(WalkerId::new(1)));
        if coverage[dog_city_idx] {
            let view = result.expect("covered assignment");
            prop_assert_eq!(view.walker_id, Some(WalkerId::new(1)));
        } else {
            let err = result.expect_err("uncovered assignment");
            prop_assert!(err.message.starts_with("Walker walker-1 does not service"));
            prop_assert_eq!(
                registry.dog(DogId::new(1)).and_then(|dog| dog.walker_id),
                None
            );
        }
    }

    #[test]
    fn unassignment_never_fails(
        coverage in proptest::collection::vec(any::<bool>(), 1..8),
        dog_city_seed in 0usize..64,
    ) {
        let dog_city_idx = dog_city_seed % coverage.len();
        let dog_city = CityId::new(dog_city_idx as i64 + 1);
        let mut registry = registry_with_coverage(&coverage, dog_city);
        // A dog may already hold an out-of-coverage walker from a direct
        // create; unassigning must still go through.
        if let Some(dog) = registry.dog_mut(DogId::new(1)) {
            dog.walker_id = Some(WalkerId::new(1));
        }

        let view = assign_walker(&mut registry, DogId::new(1), None).expect("unassign");
        prop_assert_eq!(view.walker_id, None);
        prop_assert_eq!(
            registry.dog(DogId::new(1)).and_then(|dog| dog.walker_id),
            None
        );
    }
}
