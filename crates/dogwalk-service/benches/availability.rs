// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dogwalk_model::{City, CityId, Dog, DogId, Walker, WalkerCity, WalkerCityId, WalkerId};
use dogwalk_service::{available_dogs_for, list_walkers};
use dogwalk_store::Registry;

fn synthetic_registry(cities: i64, walkers: i64, dogs: i64) -> Registry {
    let mut registry = Registry::empty();
    for id in 1..=cities {
        registry
            .cities
            .push(City::new(CityId::new(id), format!("city-{id}")));
    }
    let mut edge = 0;
    for id in 1..=walkers {
        registry
            .walkers
            .push(Walker::new(WalkerId::new(id), format!("walker-{id}")));
        for city in 1..=cities {
            if (id + city) % 3 == 0 {
                edge += 1;
                registry.walker_cities.push(WalkerCity::new(
                    WalkerCityId::new(edge),
                    WalkerId::new(id),
                    CityId::new(city),
                ));
            }
        }
    }
    for id in 1..=dogs {
        let city = CityId::new(1 + (id % cities));
        let walker = if id % 4 == 0 {
            Some(WalkerId::new(1 + (id % walkers)))
        } else {
            None
        };
        registry
            .dogs
            .push(Dog::new(DogId::new(id), format!("dog-{id}"), city, walker));
    }
    registry
}

fn bench_availability(c: &mut Criterion) {
    let registry = synthetic_registry(50, 200, 2_000);
    c.bench_function("available_dogs_for_one_walker", |b| {
        b.iter(|| available_dogs_for(black_box(&registry), WalkerId::new(42)).expect("walker"))
    });
    c.bench_function("list_walkers_filtered_by_city", |b| {
        b.iter(|| list_walkers(black_box(&registry), Some(CityId::new(7))))
    });
}

criterion_group!(benches, bench_availability);
criterion_main!(benches);
