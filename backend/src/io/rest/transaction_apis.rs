//! # REST API for the all-users transaction list

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use shared::{TransactionListRequest, TransactionListResponse};
use tracing::info;

use super::mappers::ListingMapper;
use super::ApiError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_transactions))
}

/// Filtered, paginated transactions with totals over the filtered set
pub async fn list_transactions(
    State(state): State<AppState>,
    query: Result<Query<TransactionListRequest>, QueryRejection>,
) -> Result<Json<TransactionListResponse>, ApiError> {
    let Query(request) = query?;
    info!("GET /api/transactions - request: {:?}", request);

    let query = ListingMapper::to_transaction_query(request)?;
    let result = state.financial_data_service.list_transactions(query).await?;

    Ok(Json(ListingMapper::to_transaction_list_response(result)))
}
