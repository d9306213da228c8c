//! Core types and traits for the stock ticker.
//!
//! This crate provides the foundational building blocks including:
//! - The tracked instrument (`Stock`) and provider records (`Snapshot`)
//! - Symbol canonicalization for the quote provider
//! - Reconciliation of provider snapshots into local state
//! - Projection of local state into display instructions
//! - Core traits for quote providers and display sinks

pub mod error;
pub mod reconcile;
pub mod render;
pub mod traits;
pub mod types;

pub use error::{
    ConfigurationError, ProviderError, RenderError, StockbarError, StockbarResult,
};
pub use reconcile::reconcile;
pub use render::{render, DisplayItem, Trend};
pub use traits::*;
pub use types::*;
