// File I/O around the search engine

pub mod error;
pub mod loader;
pub mod sink;

pub use error::IoError;
pub use loader::{read_signatures, read_sightings};
pub use sink::ResultSink;
