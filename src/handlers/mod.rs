/// HTTP request handlers
use crate::domain::{BoardView, Health, PageSpec, SortDirection, SortField, SortSpec};
use crate::errors::{ApiError, ApiResult};
use crate::services::{board_view, launch_summary};
use crate::store::StoreScope;
use crate::table::TableState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::num::NonZeroUsize;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub scope: StoreScope,
    pub default_page_size: NonZeroUsize,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Table selection carried in the listing query string
#[derive(Debug, Default, Deserialize)]
pub struct TableQuery {
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl TableQuery {
    fn into_table(self, default_page_size: NonZeroUsize) -> ApiResult<TableState> {
        let page_size = match self.page_size {
            Some(n) => NonZeroUsize::new(n)
                .ok_or_else(|| ApiError::InvalidInput("page_size must be positive".into()))?,
            None => default_page_size,
        };

        Ok(TableState::new(
            SortSpec::new(
                self.sort.unwrap_or_default(),
                self.direction.unwrap_or_default(),
            ),
            PageSpec::new(self.page.unwrap_or(0), page_size),
        ))
    }
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Listing view with the requested sort and page
pub async fn list_launches(
    Query(query): Query<TableQuery>,
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<BoardView>>> {
    let store = state.scope.use_store()?;
    let table = query.into_table(state.default_page_size)?;
    let view = board_view(&store.snapshot(), &table);
    Ok(Json(SuccessResponse::new(view)))
}

/// Detail view for one launch
pub async fn get_launch_summary(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let store = state.scope.use_store()?;

    match launch_summary(&store.snapshot(), &id) {
        Some(launch) => Ok(Json(serde_json::json!(SuccessResponse::new(
            serde_json::json!({
                "launch": launch,
                "close_path": "/"
            })
        )))),
        None => Ok(Json(serde_json::json!(SuccessResponse::new(
            serde_json::json!({
                "id": id,
                "message": "no data",
                "close_path": "/"
            })
        )))),
    }
}

/// Re-fetch launches, then report the listing status
pub async fn refresh_launches(
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<BoardView>>> {
    let store = state.scope.use_store()?;
    store.refresh().await;

    let table = TableState::new(SortSpec::default(), PageSpec::new(0, state.default_page_size));
    let view = board_view(&store.snapshot(), &table);
    Ok(Json(SuccessResponse::new(view)))
}

/// Catch-all for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound("404 - Page Not Found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let table = TableQuery::default()
            .into_table(NonZeroUsize::new(5).expect("non-zero"))
            .expect("table");
        assert_eq!(table, TableState::default());
    }

    #[test]
    fn test_query_rejects_zero_page_size() {
        let query = TableQuery {
            page_size: Some(0),
            ..TableQuery::default()
        };
        let err = query
            .into_table(NonZeroUsize::new(5).expect("non-zero"))
            .expect_err("zero page size");
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
