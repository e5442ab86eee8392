//! Domain types for the price calculator.
//!
//! This module provides:
//! - The raw catalog row shape as it travels over the wire (`SheetRow`)
//! - The normalized in-memory catalog item (`CatalogItem`)
//! - Rupiah string handling: normalization and thousands grouping

pub mod item;
pub mod money;

pub use item::{CatalogItem, PriceValue, SheetRow};
pub use money::{format_currency, normalize_number, normalize_price};
