#![forbid(unsafe_code)]
//! Dogwalk model SSOT.
//!
//! Stored records are normalized: a walker's city list and a dog's embedded
//! city/walker are never persisted, only joined into the view types at read
//! time.

mod entities;
mod error;
mod ids;
mod views;

pub use entities::{City, Dog, Walker, WalkerCity};
pub use error::{DomainError, DomainErrorKind};
pub use ids::{CityId, DogId, WalkerCityId, WalkerId};
pub use views::{DogView, WalkerView};

pub const CRATE_NAME: &str = "dogwalk-model";
