//! Record sources
//!
//! The live APOD API plus a file-backed source for offline use.

pub mod apod;
pub mod file;
pub mod traits;

pub use apod::ApodProvider;
pub use file::JsonFileSource;
pub use traits::ApodSource;
