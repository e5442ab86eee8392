//! Catalog row types: the wire shape and the normalized item.

use serde::{Deserialize, Serialize};

use super::money::normalize_price;

/// A price as it arrives from the spreadsheet boundary: either already
/// numeric or formatted text like "30.000".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(u64),
    Text(String),
}

impl Default for PriceValue {
    fn default() -> Self {
        PriceValue::Text(String::new())
    }
}

/// One catalog row exactly as `/api/items` emits it.
///
/// `hargaNego` is the canonical reference-price field; older catalog
/// exports used `hargaJual` for the same column, accepted here as an
/// input alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    pub nama: String,
    #[serde(default)]
    pub jenis: String,
    #[serde(rename = "hargaPokok", default)]
    pub harga_pokok: PriceValue,
    #[serde(rename = "hargaNego", alias = "hargaJual", default)]
    pub harga_nego: PriceValue,
}

/// A normalized catalog item held by the session engine.
///
/// `base_price` is the internal cost, never shown to the end user.
/// `reference_price` is retained from the sheet but plays no part in
/// margin computation. Both are whole rupiah, 0 when unparseable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: String,
    pub category: String,
    pub base_price: u64,
    pub reference_price: u64,
}

impl CatalogItem {
    pub fn from_row(row: &SheetRow) -> Self {
        CatalogItem {
            name: row.nama.clone(),
            category: row.jenis.clone(),
            base_price: normalize_price(&row.harga_pokok, 0),
            reference_price: normalize_price(&row.harga_nego, 0),
        }
    }
}

impl From<&SheetRow> for CatalogItem {
    fn from(row: &SheetRow) -> Self {
        CatalogItem::from_row(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_normalizes_prices() {
        let row = SheetRow {
            nama: "Kaos Polos".to_string(),
            jenis: "Kaos".to_string(),
            harga_pokok: PriceValue::Text("30.000".to_string()),
            harga_nego: PriceValue::Number(45000),
        };
        let item = CatalogItem::from_row(&row);
        assert_eq!(item.name, "Kaos Polos");
        assert_eq!(item.category, "Kaos");
        assert_eq!(item.base_price, 30000);
        assert_eq!(item.reference_price, 45000);
    }

    #[test]
    fn test_from_row_unparseable_price_falls_back_to_zero() {
        let row = SheetRow {
            nama: "Misc".to_string(),
            jenis: String::new(),
            harga_pokok: PriceValue::Text("t.b.d.".to_string()),
            harga_nego: PriceValue::default(),
        };
        let item = CatalogItem::from_row(&row);
        assert_eq!(item.base_price, 0);
        assert_eq!(item.reference_price, 0);
    }

    #[test]
    fn test_sheet_row_deserializes_string_or_number_prices() {
        let row: SheetRow = serde_json::from_str(
            r#"{"nama":"Topi","jenis":"Aksesoris","hargaPokok":"15.000","hargaNego":20000}"#,
        )
        .unwrap();
        assert_eq!(row.harga_pokok, PriceValue::Text("15.000".to_string()));
        assert_eq!(row.harga_nego, PriceValue::Number(20000));
    }

    #[test]
    fn test_sheet_row_accepts_harga_jual_alias() {
        let row: SheetRow = serde_json::from_str(
            r#"{"nama":"Topi","jenis":"Aksesoris","hargaPokok":"15.000","hargaJual":"20.000"}"#,
        )
        .unwrap();
        assert_eq!(row.harga_nego, PriceValue::Text("20.000".to_string()));
    }

    #[test]
    fn test_sheet_row_serializes_canonical_field_names() {
        let row = SheetRow {
            nama: "Topi".to_string(),
            jenis: "Aksesoris".to_string(),
            harga_pokok: PriceValue::Text("15.000".to_string()),
            harga_nego: PriceValue::Number(20000),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["hargaPokok"], "15.000");
        assert_eq!(json["hargaNego"], 20000);
        assert!(json.get("hargaJual").is_none());
    }
}
