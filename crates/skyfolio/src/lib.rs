//! Skyfolio — Astronomy Picture of the Day core
//!
//! Record types, the APOD API source, and shared configuration.
//!
//! ## Quick start
//!
//! ```no_run
//! use skyfolio::source::{ApodProvider, ApodSource};
//!
//! let provider = ApodProvider::new()?;
//! let records = provider.fetch_batch(10)?;
//! # Ok::<(), skyfolio::error::GalleryError>(())
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod record;
pub mod source;

pub use record::{DailyRecord, MediaType};
