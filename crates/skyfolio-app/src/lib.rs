//! Skyfolio App Services
//!
//! Favorites persistence, the command-driven controller, and card rendering.
//! Depends on the `skyfolio` core crate.

pub mod app;
pub mod data;
pub mod error;
pub mod render;
