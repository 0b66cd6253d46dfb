#![forbid(unsafe_code)]
//! The wire surface: what requests look like coming in and what errors look
//! like going out. Response bodies are the model's view types; this crate
//! only owns the shapes the model does not.

mod error_mapping;
mod errors;
mod payloads;

pub use error_mapping::http_status_for;
pub use errors::{ApiError, ApiErrorCode};
pub use payloads::{
    AssignWalkerRequest, CityPayload, CityRef, DogPayload, UpdateWalkerRequest, WalkerListParams,
};

pub const CRATE_NAME: &str = "dogwalk-api";
