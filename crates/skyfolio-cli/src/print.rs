//! Plain-text gallery output

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use skyfolio::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use skyfolio_app::app::{AppCommand, AppController};
use skyfolio_app::data::ViewMode;
use skyfolio_app::render::{Card, GalleryView, Media, ViewBody};

/// Upper bound on waiting for a batch; the HTTP client gives up before this
const FETCH_WAIT: Duration = Duration::from_secs(CONNECT_TIMEOUT_SECS + READ_TIMEOUT_SECS + 5);

/// Render one view to stdout and exit
pub fn run(mut controller: AppController, favorites: bool) -> Result<(), Box<dyn Error>> {
    if favorites {
        controller.handle_command(AppCommand::Show(ViewMode::Favorites));
    } else {
        controller.handle_command(AppCommand::Fetch);
        if !controller.wait_for_fetch(FETCH_WAIT) {
            return Err("timed out waiting for the APOD batch".into());
        }
    }

    let view = controller.view();
    if let Some(err) = &view.error {
        eprintln!("warning: {err}");
    }

    let mut out = io::stdout().lock();
    out.write_all(format_view(&view).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Format a whole view
pub fn format_view(view: &GalleryView) -> String {
    let nav: Vec<String> = view
        .nav
        .items()
        .iter()
        .map(|item| format!("[{}] {}", item.key, item.label))
        .collect();

    let heading = match view.mode {
        ViewMode::Results => "Results",
        ViewMode::Favorites => "Favorites",
    };
    let mut out = format!("== {} ==  {}\n", heading, nav.join("  "));

    match &view.body {
        ViewBody::Placeholder(message) => {
            out.push('\n');
            out.push_str(message);
            out.push('\n');
        }
        ViewBody::Cards(cards) => {
            for card in cards {
                out.push('\n');
                out.push_str(&format_card(card));
            }
        }
    }
    out
}

/// Format one card
pub fn format_card(card: &Card) -> String {
    let mut out = String::new();

    match &card.media {
        Some(Media::Image {
            src,
            full_resolution,
        }) => {
            out.push_str(&format!("[Image] {src}\n"));
            if let Some(hd) = full_resolution {
                out.push_str(&format!("        View Full Image: {hd}\n"));
            }
        }
        Some(Media::Video { embed_url }) => {
            out.push_str(&format!("[Video] {embed_url}\n"));
        }
        None => {}
    }

    let heart = if card.toggle.filled { "♥" } else { "♡" };
    out.push_str(&format!("{} {}\n", heart, card.title));
    if !card.explanation.is_empty() {
        out.push_str(&card.explanation);
        out.push('\n');
    }
    out.push_str(&card.footer.to_string());
    out.push('\n');
    out
}
