//! Configuration constants for skyfolio

/// Application metadata
pub mod app {
    /// Application name (used for the data directory, log file, etc.)
    pub const NAME: &str = "skyfolio";
}

/// APOD API configuration
pub mod api {
    /// Default APOD endpoint
    pub const DEFAULT_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

    /// Public demo key accepted by api.nasa.gov (heavily rate limited)
    pub const DEMO_API_KEY: &str = "DEMO_KEY";

    /// Number of records requested per batch
    pub const DEFAULT_COUNT: usize = 10;
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Skyfolio/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Durable storage configuration
pub mod storage {
    /// Storage key holding the serialized favorites collection
    pub const FAVORITES_KEY: &str = "nasaFavorites";

    /// Key an unreadable favorites blob is copied to before it is overwritten
    pub const FAVORITES_BACKUP_KEY: &str = "nasaFavorites.corrupt";

    /// Settings file name
    pub const SETTINGS_FILE: &str = "settings.json";

    /// Log file name (interactive mode)
    pub const LOG_FILE: &str = "skyfolio.log";
}

/// UI-related configuration
pub mod ui {
    /// How long a confirmation banner stays visible, in milliseconds
    pub const CONFIRMATION_MS: u64 = 2000;

    /// Banner text after a favorite is added
    pub const MESSAGE_ADDED: &str = "ADDED!";

    /// Banner text after a favorite is removed
    pub const MESSAGE_REMOVED: &str = "DELETED!";

    /// Placeholder shown in an empty favorites view
    pub const NO_FAVORITES: &str = "No favorites yet!";

    /// Toggle tooltip when the record is not a favorite
    pub const ADD_TOOLTIP: &str = "Add to Favorites";

    /// Toggle tooltip when the record is a favorite
    pub const REMOVE_TOOLTIP: &str = "Remove from Favorites";
}
