// Configuration loading

pub mod settings;

pub use settings::{ConfigError, SearchSettings, Settings, CONFIG_ENV, STRATEGY_ENV};
