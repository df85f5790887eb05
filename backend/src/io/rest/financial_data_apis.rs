//! # REST API for one user's financial data

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use shared::{FinancialDataRequest, FinancialDataResponse};
use tracing::info;

use super::mappers::{AnalysisMapper, BudgetMapper, GoalMapper, TransactionMapper};
use super::ApiError;
use crate::domain::validation::require_non_blank;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_financial_data))
}

/// Records of one user plus the summary computed from them
pub async fn get_financial_data(
    State(state): State<AppState>,
    query: Result<Query<FinancialDataRequest>, QueryRejection>,
) -> Result<Json<FinancialDataResponse>, ApiError> {
    let Query(request) = query?;
    info!("GET /api/financial-data - request: {:?}", request);

    let user_id = require_non_blank("userId", request.user_id)?;
    let result = state.financial_data_service.get_financial_data(&user_id).await?;

    Ok(Json(FinancialDataResponse {
        transactions: TransactionMapper::to_dto_list(result.financials.transactions),
        budgets: BudgetMapper::to_dto_list(result.financials.budgets),
        goals: GoalMapper::to_dto_list(result.financials.goals),
        analysis: AnalysisMapper::to_dto(result.summary),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_utils::{get_json, TestApp};
    use crate::storage::json::document::{BUDGETS, TRANSACTIONS};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_financial_data_end_to_end_scenario() {
        let app = TestApp::new();
        app.env.seed(
            "u1",
            TRANSACTIONS,
            vec![
                json!({"id": "t1", "amount": 1000, "category": "salary", "isIncome": true, "date": "2024-01-01T00:00:00Z"}),
                json!({"id": "t2", "amount": 200, "category": "food", "isIncome": false, "date": "2024-01-02T00:00:00Z"}),
                json!({"id": "t3", "amount": 100, "category": "food", "isIncome": false, "date": "2024-01-03T00:00:00Z"}),
            ],
        );
        app.env.seed(
            "u1",
            BUDGETS,
            vec![json!({"id": "b1", "category": "fun", "amount": 0, "spent": 0,
                        "startDate": "2024-01-01T00:00:00Z", "endDate": "2024-01-31T00:00:00Z"})],
        );

        let (status, body) = get_json(router().with_state(app.state()), "/?userId=u1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["totalIncome"], json!(1000.0));
        assert_eq!(body["analysis"]["totalExpense"], json!(300.0));
        assert_eq!(body["analysis"]["netIncome"], json!(700.0));
        assert_eq!(body["analysis"]["categoryExpenses"], json!({"food": 300.0}));
        assert_eq!(body["analysis"]["budgetStatus"][0]["percentageUsed"], json!(null));
        assert_eq!(body["transactions"].as_array().unwrap().len(), 3);
        assert_eq!(body["goals"], json!([]));
    }

    #[tokio::test]
    async fn test_missing_user_id_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = get_json(router().with_state(app.state()), "/?userId=%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "userId is required"}));
    }
}
