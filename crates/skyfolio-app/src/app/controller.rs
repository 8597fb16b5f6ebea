//! Application controller
//!
//! Owns the application state, the favorites storage, and the record
//! source. Every front end talks to it through `AppCommand`s; fetches run
//! on a worker thread and report back through the same crossbeam channel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use tracing::{debug, info, warn};

use skyfolio::config::storage::FAVORITES_BACKUP_KEY;
use skyfolio::config::ui::{CONFIRMATION_MS, MESSAGE_ADDED, MESSAGE_REMOVED};
use skyfolio::source::ApodSource;
use skyfolio::DailyRecord;

use crate::data::{FavoritesCollection, KeyValueStore, Mutation, ViewMode};
use crate::render::{build_view, GalleryView};

use super::state::{AppCommand, AppState, Banner};

/// How long a confirmation banner stays up
const CONFIRMATION_DURATION: Duration = Duration::from_millis(CONFIRMATION_MS);

pub struct AppController {
    cmd_rx: Receiver<AppCommand>,
    cmd_tx: Sender<AppCommand>,
    state: AppState,
    source: Arc<dyn ApodSource>,
    store: Box<dyn KeyValueStore>,
    batch_size: usize,
    /// Monotonically increasing counter to discard stale fetch results
    fetch_generation: u64,
    /// Last load found an unreadable blob; it is backed up before the next write
    store_unreadable: bool,
}

impl AppController {
    /// Create a controller and load the stored favorites
    pub fn new(
        source: Arc<dyn ApodSource>,
        store: Box<dyn KeyValueStore>,
        batch_size: usize,
    ) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded();
        let mut controller = Self {
            cmd_rx,
            cmd_tx,
            state: AppState::default(),
            source,
            store,
            batch_size,
            fetch_generation: 0,
            store_unreadable: false,
        };
        controller.reload_favorites();
        controller
    }

    /// Sender for front ends that dispatch from other threads
    pub fn sender(&self) -> Sender<AppCommand> {
        self.cmd_tx.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Render the current state
    pub fn view(&self) -> GalleryView {
        build_view(&self.state)
    }

    /// Handle a single command. Returns true if the front end should exit.
    pub fn handle_command(&mut self, cmd: AppCommand) -> bool {
        self.handle_command_at(cmd, Instant::now())
    }

    /// Handle a command as if it arrived at `now`
    pub fn handle_command_at(&mut self, cmd: AppCommand, now: Instant) -> bool {
        match cmd {
            AppCommand::Shutdown => return true,

            AppCommand::Fetch => self.start_fetch(),
            AppCommand::FetchCompleted { generation, result } => {
                self.handle_fetch_completed(generation, result);
            }
            AppCommand::Show(mode) => self.show(mode),
            AppCommand::AddFavorite(id) => {
                let mutation = self
                    .state
                    .favorites
                    .add_from_results(&self.state.results, &id);
                self.apply_mutation(mutation, &id, now);
            }
            AppCommand::RemoveFavorite(id) => {
                let mutation = self.state.favorites.remove(&id);
                self.apply_mutation(mutation, &id, now);
            }
            AppCommand::ToggleFavorite(id) => {
                let mutation = self.state.favorites.toggle(&self.state.results, &id);
                self.apply_mutation(mutation, &id, now);
            }
            AppCommand::Tick => self.expire_banner(now),
        }
        false
    }

    /// Drain queued commands without blocking. Returns true on shutdown.
    pub fn pump(&mut self) -> bool {
        while let Ok(cmd) = self.cmd_rx.try_recv() {
            if self.handle_command(cmd) {
                return true;
            }
        }
        false
    }

    /// Block until the in-flight fetch completes or `timeout` elapses
    ///
    /// Returns false on timeout.
    pub fn wait_for_fetch(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.is_loading {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.cmd_rx.recv_timeout(remaining) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        true
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Fetch a batch on a worker thread, then send the result back.
    ///
    /// Each call increments `fetch_generation`; results from earlier calls
    /// are discarded in `handle_fetch_completed`.
    fn start_fetch(&mut self) {
        if self.state.is_loading {
            debug!("fetch already in flight, ignoring");
            return;
        }

        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.state.is_loading = true;

        let source = Arc::clone(&self.source);
        let count = self.batch_size;
        let cmd_tx = self.cmd_tx.clone();

        info!(source = source.name(), count, generation, "fetching batch");
        let spawned = std::thread::Builder::new()
            .name("apod-fetch".into())
            .spawn(move || {
                let result = source.fetch_batch(count).map_err(|e| e.to_string());
                let _ = cmd_tx.send(AppCommand::FetchCompleted { generation, result });
            });

        if let Err(e) = spawned {
            warn!(error = %e, "failed to spawn fetch thread");
            self.state.is_loading = false;
            self.state.last_error = Some(format!("Could not start fetch: {e}"));
        }
    }

    /// Replace the results (or log the failure) and render the results view.
    fn handle_fetch_completed(
        &mut self,
        generation: u64,
        result: Result<Vec<DailyRecord>, String>,
    ) {
        if generation != self.fetch_generation {
            debug!(generation, current = self.fetch_generation, "discarding stale fetch");
            return;
        }

        self.state.is_loading = false;
        match result {
            Ok(records) => {
                info!(count = records.len(), "batch loaded");
                self.state.results = records;
                self.state.last_error = None;
                self.show(ViewMode::Results);
            }
            Err(e) => {
                // No retry and no fallback data: the previous results stay on screen
                warn!(error = %e, "fetch failed");
                self.state.last_error = Some(e);
            }
        }
    }

    // =========================================================================
    // Views and favorites
    // =========================================================================

    /// Switch views, re-reading favorites from storage first
    ///
    /// An in-flight fetch keeps the loading flag set.
    fn show(&mut self, mode: ViewMode) {
        self.reload_favorites();
        self.state.view = mode;
    }

    /// Storage is the source of truth. An unreadable blob keeps the
    /// in-memory collection and is copied aside before the next write.
    fn reload_favorites(&mut self) {
        match FavoritesCollection::load(self.store.as_ref()) {
            Ok(favorites) => {
                self.state.favorites = favorites;
                self.store_unreadable = false;
            }
            Err(e) => {
                warn!(error = %e, "could not load favorites, keeping current collection");
                self.state.last_error = Some(e.to_string());
                self.store_unreadable = true;
            }
        }
    }

    /// Write the whole collection. Returns false if nothing was written.
    fn persist(&mut self) -> bool {
        if self.store_unreadable {
            if let Err(e) = FavoritesCollection::back_up(self.store.as_mut()) {
                warn!(error = %e, "could not back up unreadable favorites, not saving");
                self.state.last_error = Some(e.to_string());
                return false;
            }
            warn!(key = FAVORITES_BACKUP_KEY, "unreadable favorites copied aside");
            self.store_unreadable = false;
        }

        match self.state.favorites.save(self.store.as_mut()) {
            Ok(()) => {
                self.state.last_error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "could not persist favorites");
                self.state.last_error = Some(e.to_string());
                false
            }
        }
    }

    fn apply_mutation(&mut self, mutation: Mutation, id: &str, now: Instant) {
        if !mutation.is_change() {
            debug!(id, "favorites unchanged");
            return;
        }

        let removed = matches!(mutation, Mutation::Removed(_));
        match mutation {
            Mutation::Added(key) => {
                info!(id = %key, "favorite added");
                self.confirm(MESSAGE_ADDED, now);
            }
            Mutation::Removed(key) => {
                info!(id = %key, "favorite removed");
                self.confirm(MESSAGE_REMOVED, now);
            }
            Mutation::Unchanged => {}
        }

        // Reloading after a failed write would bring the removed card back
        if self.persist() && removed && self.state.view == ViewMode::Favorites {
            self.show(ViewMode::Favorites);
        }
    }

    fn confirm(&mut self, message: &'static str, now: Instant) {
        self.state.banner = Some(Banner {
            message,
            expires_at: now + CONFIRMATION_DURATION,
        });
    }

    /// Only the latest banner is kept, so an older expiry cannot hide a newer one
    fn expire_banner(&mut self, now: Instant) {
        if self.state.banner.as_ref().is_some_and(|b| b.expires_at <= now) {
            self.state.banner = None;
        }
    }
}
