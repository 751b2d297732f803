//! Genius API integration
//!
//! Provides song search and song detail lookups (including "samples"
//! relationships) from the Genius web service.
//!
//! # Architecture
//!
//! - **DTOs** (`dto.rs`) - Exact API response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models in `crate::model`
//! - **Client** (`client.rs`) - Authenticated HTTP client
//! - **Traits** (`traits.rs`) - The [`GeniusApi`] seam services depend on
//!
//! API docs: https://docs.genius.com

pub mod adapter;
pub mod client;
pub mod dto;
mod error;
pub mod traits;

pub use client::{DEFAULT_BASE_URL, GeniusClient};
pub use error::GeniusError;
pub use traits::GeniusApi;
