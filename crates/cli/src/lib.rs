//! Interactive and reporting pieces of the `sightings` binary.

pub mod prompt;
pub mod report;
