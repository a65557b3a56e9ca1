//! Persistent user preferences.

pub mod manager;
pub mod model;

pub use manager::{app_data_dir, ConfigManager, HOME_ENV};
pub use model::{Config, CONFIG_KEYS};
