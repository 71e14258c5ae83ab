//! Part Insights Module
//!
//! Adapters for the non-price lookups: substitute parts and lifecycle /
//! compliance risk. Both follow the same cache discipline as the price
//! sources and fall back to the [`catalog`] when the remote fails.

mod alternatives;
pub mod catalog;
mod risk;

pub use alternatives::AlternativesAdapter;
pub use catalog::{PartCatalog, SeedCatalog};
pub use risk::RiskAdapter;
