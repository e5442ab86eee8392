//! Session state for one calculator instance: catalog, search query,
//! hidden base price, and the derived margin.

use crate::domain::{format_currency, normalize_number, CatalogItem};

use super::search::search;

/// Margin as a percentage of the base price, clamped to [0, 100].
///
/// No selection (`base_price == 0`) and a below-cost offer both yield 0;
/// the two cases are deliberately indistinguishable. Markups of 100% or
/// more saturate at 100, a display simplification the UI relies on.
pub fn compute_margin(base_price: u64, offer: u64) -> u8 {
    if base_price == 0 || offer < base_price {
        return 0;
    }
    let pct = ((offer - base_price) as f64 / base_price as f64) * 100.0;
    pct.round().min(100.0) as u8
}

/// Display band for the margin slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginBand {
    /// Below 50%.
    Low,
    /// 50% through 74%.
    Mid,
    /// 75% and up.
    High,
}

impl MarginBand {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..=49 => MarginBand::Low,
            50..=74 => MarginBand::Mid,
            _ => MarginBand::High,
        }
    }
}

/// The engine's mutable working set, one per UI session.
///
/// Every mutation recomputes the derived fields (`matches`,
/// `margin_percent`) synchronously; nothing here is observed or lazily
/// evaluated.
#[derive(Debug, Default)]
pub struct SessionState {
    catalog: Vec<CatalogItem>,
    query: String,
    matches: Vec<CatalogItem>,
    dropdown_open: bool,
    selected_base_price: u64,
    offer_raw: String,
    margin_percent: u8,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog wholesale with a fresh snapshot. Current
    /// matches are recomputed against the new catalog; selection and
    /// offer are untouched.
    pub fn load_catalog(&mut self, catalog: Vec<CatalogItem>) {
        self.catalog = catalog;
        self.recompute_matches();
    }

    /// Update the search query from a keystroke. The dropdown is visible
    /// exactly while the query is non-empty.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute_matches();
        self.dropdown_open = !self.query.is_empty();
    }

    /// Pick an item from the result list: record its hidden base price,
    /// mirror its name into the search box, and reset the negotiation.
    /// Re-entrant; switching items always starts the offer over.
    pub fn select_item(&mut self, item: &CatalogItem) {
        self.query = item.name.clone();
        self.selected_base_price = item.base_price;
        self.offer_raw.clear();
        self.margin_percent = 0;
        self.dropdown_open = false;
        self.recompute_matches();
    }

    /// Update the negotiated price from a keystroke: reformat for
    /// display and recompute the margin.
    pub fn edit_offer(&mut self, raw: &str) {
        self.offer_raw = format_currency(raw);
        let offer = normalize_number(raw, 0);
        self.margin_percent = compute_margin(self.selected_base_price, offer);
    }

    /// Close the result dropdown without touching query or selection
    /// (click outside the search box).
    pub fn dismiss_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Re-open the dropdown on focus when a query is already present.
    pub fn refocus(&mut self) {
        if !self.query.is_empty() {
            self.dropdown_open = true;
        }
    }

    fn recompute_matches(&mut self) {
        self.matches = search(&self.catalog, &self.query);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[CatalogItem] {
        &self.matches
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn selected_base_price(&self) -> u64 {
        self.selected_base_price
    }

    /// The offer as typed, already formatted for display.
    pub fn offer_display(&self) -> &str {
        &self.offer_raw
    }

    pub fn margin_percent(&self) -> u8 {
        self.margin_percent
    }

    pub fn margin_band(&self) -> MarginBand {
        MarginBand::for_percent(self.margin_percent)
    }
}
