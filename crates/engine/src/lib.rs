//! `sightings-engine`: signature matching over sensor sightings.
//!
//! Pure engine crate: receives pre-loaded sightings and queries, returns a
//! match count. No CLI or IO dependencies.

pub mod counter;
pub mod error;
pub mod search;
pub mod sighting;
pub mod strategy;

pub use counter::{count_in, count_matches, timed_count, SearchOutcome};
pub use error::SearchError;
pub use search::{binary_contains, linear_contains, LinearScan, SignatureSearch, SortedSightings};
pub use sighting::{search_order, signature, Signature, Sighting};
pub use strategy::SearchStrategy;
