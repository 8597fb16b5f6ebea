//! Interactive terminal gallery

use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::*;

use skyfolio_app::app::{AppCommand, AppController};
use skyfolio_app::data::ViewMode;
use skyfolio_app::render::{Card, GalleryView, Media, ViewBody};

/// Redraw / banner-expiry cadence
const TICK_RATE: Duration = Duration::from_millis(100);

/// Presentation-only state; everything else lives in the controller
struct Ui {
    list_state: ListState,
    mode: ViewMode,
}

impl Ui {
    fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
            mode: ViewMode::Results,
        }
    }

    /// Keep the selection inside the card list, resetting on view switches
    fn sync(&mut self, view: &GalleryView) {
        if view.mode != self.mode {
            self.mode = view.mode;
            self.list_state.select(Some(0));
        }
        let len = view.cards().len();
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(if len == 0 { None } else { Some(selected.min(len - 1)) });
    }

    fn selected_card<'a>(&self, view: &'a GalleryView) -> Option<&'a Card> {
        self.list_state.selected().and_then(|i| view.cards().get(i))
    }

    /// Translate a key press into a command (or a selection move)
    fn handle_key(&mut self, code: KeyCode, view: &GalleryView) -> Option<AppCommand> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Shutdown),
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_state.select_previous();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.selected_card(view).map(Card::toggle_command)
            }
            // 'r' is an alias for load more in either view
            KeyCode::Char('r') => Some(AppCommand::Fetch),
            KeyCode::Char(c) => view
                .nav
                .items()
                .iter()
                .find(|item| item.key.starts_with(c))
                .map(|item| item.action.command()),
            _ => None,
        }
    }
}

/// Run the gallery until the user quits
pub fn run(mut controller: AppController) -> Result<(), Box<dyn Error>> {
    controller.handle_command(AppCommand::Fetch);

    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut controller);

    // Restore terminal even when the loop failed
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut AppController,
) -> Result<(), Box<dyn Error>> {
    let mut ui = Ui::new();

    loop {
        // Fetch results arrive through the controller's channel
        if controller.pump() {
            return Ok(());
        }
        controller.handle_command(AppCommand::Tick);

        let view = controller.view();
        ui.sync(&view);
        terminal.draw(|f| draw_ui(f, &view, &mut ui))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(cmd) = ui.handle_key(key.code, &view) {
                        if controller.handle_command(cmd) {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

// =============================================================================
// Drawing
// =============================================================================

fn draw_ui(f: &mut Frame, view: &GalleryView, ui: &mut Ui) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" Skyfolio v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // nav
        Constraint::Min(3),    // cards
        Constraint::Length(1), // help / status
    ])
    .split(inner);

    draw_nav(f, view, chunks[0]);
    draw_body(f, view, ui, chunks[1]);
    draw_status(f, view, chunks[2]);

    if let Some(message) = view.banner {
        draw_banner(f, message, area);
    }
}

fn draw_nav(f: &mut Frame, view: &GalleryView, area: Rect) {
    let mut spans = Vec::new();
    let heading = match view.mode {
        ViewMode::Results => "  Results",
        ViewMode::Favorites => "  Favorites",
    };
    spans.push(Span::styled(heading, Style::default().fg(Color::White).bold()));
    for item in view.nav.items() {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("'{}' ", item.key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(item.label));
    }
    if view.is_loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Loading...", Style::default().fg(Color::Cyan)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_body(f: &mut Frame, view: &GalleryView, ui: &mut Ui, area: Rect) {
    let cards = match &view.body {
        ViewBody::Placeholder(message) => {
            let text = Paragraph::new(*message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(text, centered_line(area));
            return;
        }
        ViewBody::Cards(cards) => cards,
    };

    if cards.is_empty() {
        let message = if view.is_loading {
            "Loading..."
        } else {
            "Nothing to show. Press 'l' to load images."
        };
        let text = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(text, centered_line(area));
        return;
    }

    let cols = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let (heart, color) = if card.toggle.filled {
                ("♥ ", Color::Red)
            } else {
                ("♡ ", Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(heart, Style::default().fg(color)),
                Span::raw(card.title.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).bold())
        .highlight_symbol("> ");
    f.render_stateful_widget(list, cols[0], &mut ui.list_state);

    if let Some(card) = ui.selected_card(view) {
        draw_card(f, card, cols[1]);
    }
}

fn draw_card(f: &mut Frame, card: &Card, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    match &card.media {
        Some(Media::Image {
            src,
            full_resolution,
        }) => {
            lines.push(Line::from(vec![
                Span::styled("Image: ", label),
                Span::styled(src.as_str(), Style::default().fg(Color::Blue)),
            ]));
            if let Some(hd) = full_resolution {
                lines.push(Line::from(vec![
                    Span::styled("View Full Image: ", label),
                    Span::styled(hd.as_str(), Style::default().fg(Color::Blue)),
                ]));
            }
        }
        Some(Media::Video { embed_url }) => {
            lines.push(Line::from(vec![
                Span::styled("Video: ", label),
                Span::styled(embed_url.as_str(), Style::default().fg(Color::Blue)),
            ]));
        }
        None => {}
    }
    if card.media.is_some() {
        lines.push(Line::default());
    }

    let heart = if card.toggle.filled { "♥" } else { "♡" };
    lines.push(Line::from(vec![
        Span::styled(card.title.as_str(), Style::default().fg(Color::White).bold()),
        Span::raw("  "),
        Span::styled(heart, Style::default().fg(Color::Red)),
        Span::styled(format!(" {}", card.toggle.tooltip), label),
    ]));
    lines.push(Line::default());
    for paragraph in card.explanation.lines() {
        lines.push(Line::raw(paragraph));
    }
    lines.push(Line::default());
    lines.push(Line::styled(card.footer.to_string(), label.italic()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_status(f: &mut Frame, view: &GalleryView, area: Rect) {
    let line = match &view.error {
        Some(err) => Line::styled(format!("  {err}"), Style::default().fg(Color::Red)),
        None => Line::from(vec![
            Span::styled("  'q' ", Style::default().fg(Color::Yellow)),
            Span::raw("quit  |  "),
            Span::styled("'j'/'k' ", Style::default().fg(Color::Yellow)),
            Span::raw("select  |  "),
            Span::styled("space ", Style::default().fg(Color::Yellow)),
            Span::raw("favorite"),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_banner(f: &mut Frame, message: &str, area: Rect) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width + 2),
        y: area.y + 1,
        width,
        height: area.height.min(3),
    };
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).bold())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green)),
            ),
        rect,
    );
}

/// One-line rect in the vertical middle of `area`
fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}
