//! Application core
//!
//! Command dispatch and the state it mutates.

pub mod controller;
pub mod state;

pub use controller::AppController;
pub use state::{AppCommand, AppState, Banner};
