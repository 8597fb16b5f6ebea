//! Application state and commands
//!
//! `AppCommand` is the unified command type sent by any front end.
//! `AppState` is owned by the controller and read by the renderer.

use std::time::Instant;

use skyfolio::DailyRecord;

use crate::data::{FavoritesCollection, ViewMode};

/// Commands sent by any front end
#[derive(Debug)]
pub enum AppCommand {
    /// Request a new batch (ignored while one is in flight)
    Fetch,
    /// Switch the visible collection
    Show(ViewMode),
    /// Add the batch record matching this identifier
    AddFavorite(String),
    /// Remove the favorite stored under this identifier
    RemoveFavorite(String),
    /// Add if absent, remove if present
    ToggleFavorite(String),
    /// Expire banners
    Tick,
    /// Shutdown the app
    Shutdown,

    // Internal: batch fetched on worker thread (not sent by front ends)
    FetchCompleted {
        generation: u64,
        result: Result<Vec<DailyRecord>, String>,
    },
}

/// Transient confirmation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: &'static str,
    pub expires_at: Instant,
}

/// Everything the renderer needs
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Latest fetched batch, in API order
    pub results: Vec<DailyRecord>,
    /// Favorites as last loaded from (or written to) storage
    pub favorites: FavoritesCollection,
    pub view: ViewMode,
    /// True while a fetch is in flight
    pub is_loading: bool,
    pub banner: Option<Banner>,
    /// Last fetch or storage failure, cleared on the next successful fetch
    pub last_error: Option<String>,
}
