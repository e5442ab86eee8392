//! Search-and-margin engine: pure computation over the in-memory catalog
//! plus the single mutable session a UI shell drives.

pub mod outside_click;
pub mod search;
pub mod session;

pub use outside_click::{OutsideClickGuard, OutsideClickRegistry};
pub use search::search;
pub use session::{compute_margin, MarginBand, SessionState};
