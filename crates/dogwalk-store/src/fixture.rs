// SPDX-License-Identifier: Apache-2.0

use crate::registry::Registry;
use dogwalk_model::{City, CityId, Dog, DogId, Walker, WalkerCity, WalkerCityId, WalkerId};

impl Registry {
    /// The development fixture the server boots from: three cities, three
    /// walkers with staggered coverage, three dogs (one unassigned).
    #[must_use]
    pub fn seeded() -> Self {
        let cities = vec![
            City::new(CityId::new(1), "Nashville"),
            City::new(CityId::new(2), "Memphis"),
            City::new(CityId::new(3), "Knoxville"),
        ];
        let walkers = vec![
            Walker::new(WalkerId::new(1), "Sarah Johnson"),
            Walker::new(WalkerId::new(2), "Mike Davis"),
            Walker::new(WalkerId::new(3), "Jessica Lee"),
        ];
        let walker_cities = vec![
            WalkerCity::new(WalkerCityId::new(1), WalkerId::new(1), CityId::new(1)),
            WalkerCity::new(WalkerCityId::new(2), WalkerId::new(1), CityId::new(2)),
            WalkerCity::new(WalkerCityId::new(3), WalkerId::new(2), CityId::new(3)),
            WalkerCity::new(WalkerCityId::new(4), WalkerId::new(3), CityId::new(1)),
            WalkerCity::new(WalkerCityId::new(5), WalkerId::new(3), CityId::new(2)),
            WalkerCity::new(WalkerCityId::new(6), WalkerId::new(3), CityId::new(3)),
        ];
        let dogs = vec![
            Dog::new(DogId::new(1), "Buddy", CityId::new(1), Some(WalkerId::new(1))),
            Dog::new(DogId::new(2), "Max", CityId::new(2), None),
            Dog::new(DogId::new(3), "Luna", CityId::new(3), Some(WalkerId::new(2))),
        ];
        Self {
            cities,
            walkers,
            walker_cities,
            dogs,
        }
    }
}
