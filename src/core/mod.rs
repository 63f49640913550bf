//! Core components of the `nbu-rates` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`NbuClient`] and its builder.
//! - The primary [`NbuError`] type.
//! - The [`CurrencyRecord`] model shared by every query.
//! - Internal networking and wire decoding.

/// The main client (`NbuClient`), builder, and configuration.
pub mod client;
/// The primary error type (`NbuError`) for the crate.
pub mod error;
/// Data models returned by the API modules.
pub mod models;
pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::NbuClient`
pub use client::{Backoff, NbuClient, NbuClientBuilder, RetryConfig};
pub use error::NbuError;
pub use models::CurrencyRecord;
