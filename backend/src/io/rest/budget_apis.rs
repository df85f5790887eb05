//! # REST API for the all-users budget list

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use shared::{BudgetListRequest, BudgetListResponse};
use tracing::info;

use super::mappers::ListingMapper;
use super::ApiError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_budgets))
}

pub async fn list_budgets(
    State(state): State<AppState>,
    query: Result<Query<BudgetListRequest>, QueryRejection>,
) -> Result<Json<BudgetListResponse>, ApiError> {
    let Query(request) = query?;
    info!("GET /api/budgets - request: {:?}", request);

    let query = ListingMapper::to_budget_query(request)?;
    let result = state.financial_data_service.list_budgets(query).await?;

    Ok(Json(ListingMapper::to_budget_list_response(result)))
}
