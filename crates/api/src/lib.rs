//! Authenticated client for the Ransomware.live Pro API.
//!
//! One method per upstream endpoint; every call issues exactly one GET
//! and returns the JSON payload unmodified or a structured [`ApiError`].

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{RansomClient, RecentOrder, SearchFilters, VictimFilters};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
