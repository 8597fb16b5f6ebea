//! Card rendering
//!
//! Turns `AppState` into a `GalleryView`: the cards (or placeholder) of the
//! current view, the navigation affordance, and the loader/banner flags.
//! Front ends only draw what this module produces.

pub mod text;

use skyfolio::config::ui::{ADD_TOOLTIP, NO_FAVORITES, REMOVE_TOOLTIP};
use skyfolio::{DailyRecord, MediaType};

use crate::app::state::{AppCommand, AppState};
use crate::data::{FavoriteIntent, FavoritesCollection, ViewMode};

use self::text::{multi_line, single_line};

// =============================================================================
// View model
// =============================================================================

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub mode: ViewMode,
    pub body: ViewBody,
    pub nav: Nav,
    pub is_loading: bool,
    pub banner: Option<&'static str>,
    pub error: Option<String>,
}

impl GalleryView {
    /// Cards in display order (empty for the placeholder)
    pub fn cards(&self) -> &[Card] {
        match &self.body {
            ViewBody::Cards(cards) => cards,
            ViewBody::Placeholder(_) => &[],
        }
    }
}

/// Content of the card container
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    Cards(Vec<Card>),
    Placeholder(&'static str),
}

/// Navigation affordance visible for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Results,
    Favorites,
}

/// One navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub action: NavAction,
}

/// What a navigation entry triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Show(ViewMode),
    LoadMore,
}

impl NavAction {
    pub fn command(self) -> AppCommand {
        match self {
            NavAction::Show(mode) => AppCommand::Show(mode),
            NavAction::LoadMore => AppCommand::Fetch,
        }
    }
}

impl Nav {
    pub fn items(&self) -> &'static [NavItem] {
        const RESULTS: &[NavItem] = &[
            NavItem {
                key: "v",
                label: "Favorites",
                action: NavAction::Show(ViewMode::Favorites),
            },
            NavItem {
                key: "l",
                label: "Load More",
                action: NavAction::LoadMore,
            },
        ];
        const FAVORITES: &[NavItem] = &[
            NavItem {
                key: "l",
                label: "Load More NASA Images",
                action: NavAction::LoadMore,
            },
            NavItem {
                key: "b",
                label: "Back to Results",
                action: NavAction::Show(ViewMode::Results),
            },
        ];
        match self {
            Nav::Results => RESULTS,
            Nav::Favorites => FAVORITES,
        }
    }
}

/// A single media card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Record identifier the toggle is bound to
    pub id: String,
    /// `None` for media types the gallery cannot show
    pub media: Option<Media>,
    pub title: String,
    pub explanation: String,
    pub footer: Footer,
    pub toggle: Toggle,
}

/// Media region of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// Lazily loaded image, clicking through to the full-resolution link
    Image {
        src: String,
        full_resolution: Option<String>,
    },
    /// Inline frame embedding the record URL
    Video { embed_url: String },
}

/// "date + copyright" line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub date: String,
    pub copyright: String,
}

impl std::fmt::Display for Footer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.copyright.is_empty() {
            f.write_str(&self.date)
        } else {
            write!(f, "{} {}", self.date, self.copyright)
        }
    }
}

/// Favorite heart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    /// Filled heart when the record is a favorite
    pub filled: bool,
    pub intent: FavoriteIntent,
    pub tooltip: &'static str,
}

impl Card {
    /// Command the heart dispatches when activated
    pub fn toggle_command(&self) -> AppCommand {
        match self.toggle.intent {
            FavoriteIntent::Add => AppCommand::AddFavorite(self.id.clone()),
            FavoriteIntent::Remove => AppCommand::RemoveFavorite(self.id.clone()),
        }
    }
}

// =============================================================================
// Building
// =============================================================================

/// Build the view for the state's current mode
pub fn build_view(state: &AppState) -> GalleryView {
    let body = match state.view {
        ViewMode::Favorites if state.favorites.is_empty() => ViewBody::Placeholder(NO_FAVORITES),
        ViewMode::Favorites => ViewBody::Cards(
            state
                .favorites
                .records()
                .map(|r| build_card(r, ViewMode::Favorites, &state.favorites))
                .collect(),
        ),
        ViewMode::Results => ViewBody::Cards(
            state
                .results
                .iter()
                .map(|r| build_card(r, ViewMode::Results, &state.favorites))
                .collect(),
        ),
    };

    GalleryView {
        mode: state.view,
        body,
        nav: match state.view {
            ViewMode::Results => Nav::Results,
            ViewMode::Favorites => Nav::Favorites,
        },
        is_loading: state.is_loading,
        banner: state.banner.as_ref().map(|b| b.message),
        error: state.last_error.clone(),
    }
}

/// Build one card
pub fn build_card(record: &DailyRecord, mode: ViewMode, favorites: &FavoritesCollection) -> Card {
    let filled = favorites.contains(record.id());
    let intent = match mode {
        ViewMode::Favorites => FavoriteIntent::Remove,
        ViewMode::Results if filled => FavoriteIntent::Remove,
        ViewMode::Results => FavoriteIntent::Add,
    };

    Card {
        id: record.id().to_string(),
        media: build_media(record),
        title: single_line(&record.title),
        explanation: multi_line(&record.explanation),
        footer: Footer {
            date: single_line(&record.date),
            copyright: record.copyright.as_deref().map(single_line).unwrap_or_default(),
        },
        toggle: Toggle {
            filled,
            intent,
            tooltip: match intent {
                FavoriteIntent::Add => ADD_TOOLTIP,
                FavoriteIntent::Remove => REMOVE_TOOLTIP,
            },
        },
    }
}

fn build_media(record: &DailyRecord) -> Option<Media> {
    match record.media_type {
        MediaType::Image => Some(Media::Image {
            src: record.url.clone(),
            full_resolution: record.hdurl.clone(),
        }),
        MediaType::Video => Some(Media::Video {
            embed_url: record.url.clone(),
        }),
        MediaType::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Banner;
    use std::time::Instant;

    fn image(url: &str, title: &str) -> DailyRecord {
        DailyRecord::new(url, title, "image")
            .with_explanation("Stars.")
            .with_date("2024-02-02")
            .with_hdurl(format!("{url}-hd"))
    }

    fn state_with_results(results: Vec<DailyRecord>) -> AppState {
        AppState {
            results,
            ..AppState::default()
        }
    }

    #[test]
    fn test_three_results_three_outline_cards() {
        let state = state_with_results(vec![
            image("https://x/1", "One"),
            image("https://x/2", "Two"),
            image("https://x/3", "Three"),
        ]);
        let view = build_view(&state);

        assert_eq!(view.mode, ViewMode::Results);
        assert_eq!(view.cards().len(), 3);
        for card in view.cards() {
            assert!(!card.toggle.filled);
            assert_eq!(card.toggle.intent, FavoriteIntent::Add);
            assert_eq!(card.toggle.tooltip, "Add to Favorites");
        }
    }

    #[test]
    fn test_results_order_preserved() {
        let state = state_with_results(vec![image("https://x/b", "B"), image("https://x/a", "A")]);
        let titles: Vec<_> = build_view(&state)
            .cards()
            .iter()
            .map(|c| c.title.clone())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_empty_favorites_placeholder() {
        let state = AppState {
            view: ViewMode::Favorites,
            ..AppState::default()
        };
        let view = build_view(&state);
        assert_eq!(view.body, ViewBody::Placeholder("No favorites yet!"));
        assert!(view.cards().is_empty());
        assert_eq!(view.nav, Nav::Favorites);
    }

    #[test]
    fn test_empty_results_is_not_placeholder() {
        let view = build_view(&AppState::default());
        assert_eq!(view.body, ViewBody::Cards(Vec::new()));
    }

    #[test]
    fn test_favorites_view_cards_are_filled_remove() {
        let mut state = AppState {
            view: ViewMode::Favorites,
            ..AppState::default()
        };
        state.favorites.insert(image("https://x/1", "One"));

        let view = build_view(&state);
        let card = &view.cards()[0];
        assert!(card.toggle.filled);
        assert_eq!(card.toggle.intent, FavoriteIntent::Remove);
        assert!(matches!(
            card.toggle_command(),
            AppCommand::RemoveFavorite(ref id) if id == "https://x/1"
        ));
    }

    #[test]
    fn test_results_card_reflects_membership() {
        let mut state = state_with_results(vec![image("https://x/1", "One"), image("https://x/2", "Two")]);
        state.favorites.insert(image("https://x/2", "Two"));

        let view = build_view(&state);
        assert!(!view.cards()[0].toggle.filled);
        assert!(view.cards()[1].toggle.filled);
        assert_eq!(view.cards()[1].toggle.tooltip, "Remove from Favorites");
    }

    #[test]
    fn test_image_media() {
        let card = build_card(
            &image("https://x/1", "One"),
            ViewMode::Results,
            &FavoritesCollection::new(),
        );
        assert_eq!(
            card.media,
            Some(Media::Image {
                src: "https://x/1".to_string(),
                full_resolution: Some("https://x/1-hd".to_string()),
            })
        );
    }

    #[test]
    fn test_video_media() {
        let record = DailyRecord::new("https://www.youtube.com/embed/xyz", "Clip", "video");
        let card = build_card(&record, ViewMode::Results, &FavoritesCollection::new());
        assert_eq!(
            card.media,
            Some(Media::Video {
                embed_url: "https://www.youtube.com/embed/xyz".to_string()
            })
        );
    }

    #[test]
    fn test_unsupported_media_has_no_region() {
        let record = DailyRecord::new("https://x/sound", "Song of Saturn", "audio")
            .with_explanation("Radio emissions.")
            .with_date("2024-06-06")
            .with_copyright("Cassini Team");
        let card = build_card(&record, ViewMode::Results, &FavoritesCollection::new());

        assert!(card.media.is_none());
        assert_eq!(card.title, "Song of Saturn");
        assert_eq!(card.explanation, "Radio emissions.");
        assert_eq!(card.footer.to_string(), "2024-06-06 Cassini Team");
    }

    #[test]
    fn test_footer_without_copyright() {
        let card = build_card(
            &image("https://x/1", "One"),
            ViewMode::Results,
            &FavoritesCollection::new(),
        );
        assert_eq!(card.footer.to_string(), "2024-02-02");
    }

    #[test]
    fn test_text_fields_sanitized() {
        let record = DailyRecord::new("https://x/1", "Bad\u{1b}]0;title\u{7}", "image")
            .with_copyright("\nJohn Smith\n");
        let card = build_card(&record, ViewMode::Results, &FavoritesCollection::new());
        assert!(!card.title.chars().any(|c| c.is_control()));
        assert_eq!(card.footer.copyright, "John Smith");
    }

    #[test]
    fn test_nav_items_per_view() {
        assert_eq!(Nav::Results.items()[0].label, "Favorites");
        assert_eq!(Nav::Favorites.items()[0].label, "Load More NASA Images");
        assert!(matches!(
            Nav::Results.items()[1].action.command(),
            AppCommand::Fetch
        ));
    }

    #[test]
    fn test_banner_and_loading_flags() {
        let state = AppState {
            is_loading: true,
            banner: Some(Banner {
                message: "ADDED!",
                expires_at: Instant::now(),
            }),
            ..AppState::default()
        };
        let view = build_view(&state);
        assert!(view.is_loading);
        assert_eq!(view.banner, Some("ADDED!"));
    }
}
