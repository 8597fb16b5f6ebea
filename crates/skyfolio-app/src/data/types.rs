//! Common data types
//!
//! Small enums shared by state, rendering, and front ends.

use std::fmt;

// =============================================================================
// ViewMode
// =============================================================================

/// Which collection the gallery is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The most recently fetched batch, in API order
    #[default]
    Results,
    /// Saved favorites, in insertion order
    Favorites,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Results => "results",
            ViewMode::Favorites => "favorites",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FavoriteIntent
// =============================================================================

/// What activating a card's heart will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteIntent {
    Add,
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_default_is_results() {
        assert_eq!(ViewMode::default(), ViewMode::Results);
    }

    #[test]
    fn test_view_mode_display() {
        assert_eq!(ViewMode::Results.to_string(), "results");
        assert_eq!(ViewMode::Favorites.to_string(), "favorites");
    }
}
