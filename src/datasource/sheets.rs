//! Google Sheets catalog provider.
//!
//! Authenticates with a service account (RS256 JWT assertion exchanged
//! for an OAuth access token), reads the configured value range, and
//! maps the header row onto catalog fields. Every internal failure is
//! logged and surfaces as an empty catalog, never as an error.

use super::{CatalogSource, CatalogSourceError};
use crate::config::SheetsConfig;
use crate::domain::{PriceValue, SheetRow};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Catalog source backed by the Google Sheets values API.
#[derive(Debug, Clone)]
pub struct GoogleSheetsSource {
    client: Client,
    credentials: Option<SheetsConfig>,
    token_url: String,
    api_url: String,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheetsSource {
    /// Create a source against the public Google endpoints. `None`
    /// credentials produce a source that always serves an empty catalog.
    pub fn new(credentials: Option<SheetsConfig>) -> Self {
        Self::with_urls(
            credentials,
            TOKEN_URL.to_string(),
            SHEETS_API_URL.to_string(),
        )
    }

    /// Create a source against custom endpoints.
    pub fn with_urls(
        credentials: Option<SheetsConfig>,
        token_url: String,
        api_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            credentials,
            token_url,
            api_url,
        }
    }

    async fn fetch_rows(&self, creds: &SheetsConfig) -> Result<Vec<SheetRow>, CatalogSourceError> {
        let token = self.access_token(creds).await?;

        let url = format!("{}/{}/values/{}", self.api_url, creds.sheet_id, creds.range);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| CatalogSourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogSourceError::Http {
                status: status.as_u16(),
                message: "Sheets values request failed".to_string(),
            });
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| CatalogSourceError::Parse(e.to_string()))?;

        Ok(map_rows(&range.values))
    }

    async fn access_token(&self, creds: &SheetsConfig) -> Result<String, CatalogSourceError> {
        let key = EncodingKey::from_rsa_pem(creds.private_key.as_bytes())
            .map_err(|e| CatalogSourceError::Auth(format!("Invalid private key: {}", e)))?;

        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &creds.service_account_email,
            scope: SCOPE,
            aud: &self.token_url,
            iat: now,
            exp: now + 3600,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| CatalogSourceError::Auth(format!("Failed to sign assertion: {}", e)))?;

        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", JWT_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CatalogSourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogSourceError::Http {
                status: status.as_u16(),
                message: "Token exchange failed".to_string(),
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CatalogSourceError::Parse(e.to_string()))?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl CatalogSource for GoogleSheetsSource {
    async fn fetch_catalog(&self) -> Result<Vec<SheetRow>, CatalogSourceError> {
        let Some(creds) = &self.credentials else {
            warn!("Sheets credentials missing; serving empty catalog");
            return Ok(Vec::new());
        };

        // Provider boundary: failures are logged and degrade to an empty
        // snapshot, indistinguishable from an empty sheet.
        match self.fetch_rows(creds).await {
            Ok(rows) => {
                debug!("Fetched {} catalog rows", rows.len());
                Ok(rows)
            }
            Err(e) => {
                warn!("Failed to fetch sheet data: {}", e);
                Ok(Vec::new())
            }
        }
    }
}

fn map_rows(values: &[Vec<String>]) -> Vec<SheetRow> {
    let Some((header, data)) = values.split_first() else {
        return Vec::new();
    };

    let nama = column(header, &["Nama Barang"]);
    let jenis = column(header, &["Jenis Barang"]);
    let harga_pokok = column(header, &["Harga Pokok"]);
    // Older sheet exports label the reference-price column "Harga Jual".
    let harga_nego = column(header, &["Harga Negosiasi", "Harga Jual"]);

    data.iter()
        .map(|row| SheetRow {
            nama: cell(row, nama),
            jenis: cell(row, jenis),
            harga_pokok: PriceValue::Text(cell(row, harga_pokok)),
            harga_nego: PriceValue::Text(cell(row, harga_nego)),
        })
        .collect()
}

fn column(header: &[String], names: &[&str]) -> Option<usize> {
    header
        .iter()
        .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
}

fn cell(row: &[String], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
}
