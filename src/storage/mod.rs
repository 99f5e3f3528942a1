//! Storage module for configuration and the saved profile.

pub mod config;
pub mod save_data;

pub use config::{ConfigError, GameConfig, SectorConfig};
pub use save_data::{sanitize_player_name, ProfileStore, SaveData, StorageError};
