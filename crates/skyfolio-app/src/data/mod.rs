//! Data persistence
//!
//! Handles favorites, settings, and the storage they sit on.

pub mod favorites;
pub mod settings;
pub mod storage;
pub mod types;

// Re-export common types
pub use favorites::{find_in_results, FavoritesCollection, Mutation};
pub use settings::Settings;
pub use storage::{config_dir, ensure_dir, FileStore, KeyValueStore, MemoryStore};
pub use types::{FavoriteIntent, ViewMode};
