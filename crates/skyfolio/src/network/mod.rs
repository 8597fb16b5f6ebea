//! Network operations
//!
//! HTTP client shared by every record source.

pub mod client;

pub use client::HttpClient;
