use crate::domain::CatalogItem;

/// Case-insensitive substring search over item names.
///
/// Returns matches in catalog order; no ranking, no result limit. An
/// empty query returns no matches: the result list is suppressed rather
/// than showing the whole catalog, which is a visibility policy distinct
/// from filtering.
pub fn search(catalog: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
