use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::domain::SheetRow;
use crate::error::AppError;

/// Full catalog snapshot, raw row shape. The Sheets-backed source
/// recovers its own failures to an empty array; only a source that
/// reports an error produces the 500 path.
pub async fn get_items(State(state): State<AppState>) -> Result<Json<Vec<SheetRow>>, AppError> {
    let rows = state.catalog.fetch_catalog().await?;
    Ok(Json(rows))
}
