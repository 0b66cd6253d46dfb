#![forbid(unsafe_code)]
//! In-memory registry owning the four dogwalk stores.
//!
//! The registry is plain synchronous data. Callers that share it across
//! tasks wrap it in their own lock; nothing in here blocks or suspends.

mod fixture;
mod registry;

pub use registry::Registry;

pub const CRATE_NAME: &str = "dogwalk-store";
