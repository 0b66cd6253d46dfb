#![forbid(unsafe_code)]
//! The operation layer: pure functions over a borrowed [`dogwalk_store::Registry`].
//!
//! Every operation validates before it mutates, so a returned error means the
//! registry is exactly as it was. Derived shapes (a walker's cities, a dog's
//! embedded city and walker) are joined here at read time, never stored.

mod cities;
mod dogs;
mod views;
mod walkers;

pub use cities::{create_city, get_city, list_cities};
pub use dogs::{
    assign_walker, available_walkers_for, create_dog, delete_dog, get_dog, list_dogs, update_dog,
};
pub use views::{dog_view, walker_view};
pub use walkers::{available_dogs_for, delete_walker, get_walker, list_walkers, update_walker};

pub const CRATE_NAME: &str = "dogwalk-service";
