pub mod api;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use datasource::{CatalogSource, CatalogSourceError, GoogleSheetsSource, MockCatalogSource};
pub use domain::{format_currency, normalize_number, CatalogItem, PriceValue, SheetRow};
pub use engine::{compute_margin, search, MarginBand, SessionState};
pub use error::AppError;
