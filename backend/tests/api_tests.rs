//! Router-level tests: the full `/api` router over a temporary data
//! directory and a stub model.

use std::fs;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot`

use expense_tracker_backend::config::Config;
use expense_tracker_backend::domain::PromptBuilder;
use expense_tracker_backend::genai::{DisabledModel, GenAiError, GenerativeModel};
use expense_tracker_backend::storage::JsonConnection;
use expense_tracker_backend::{create_router, AppState};

#[derive(Default)]
struct StubModel {
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("## Advice\nSpend less on food.".to_string())
    }
}

struct FailingModel;

#[async_trait]
impl GenerativeModel for FailingModel {
    async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
        Err(GenAiError::Upstream {
            status: 500,
            body: "boom".to_string(),
        })
    }
}

struct TestServer {
    _temp_dir: TempDir,
    connection: JsonConnection,
}

impl TestServer {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        seed(&connection);
        Self {
            _temp_dir: temp_dir,
            connection,
        }
    }

    fn router(&self, model: Arc<dyn GenerativeModel>) -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        let state = AppState::from_connection(&self.connection, model, PromptBuilder::default());
        create_router(state, &config).unwrap()
    }
}

fn seed(connection: &JsonConnection) {
    connection
        .write_collection(
            "u1",
            "transactions",
            &[
                json!({"id": "t1", "amount": 1000, "category": "Salary", "isIncome": true,
                       "date": "2024-01-01T09:00:00Z"}),
                json!({"id": "t2", "amount": 200, "category": "Food", "isIncome": false,
                       "date": {"_seconds": 1704362400, "_nanoseconds": 0}, "note": "groceries"}),
                json!({"firebaseId": "t3", "id": 17, "amount": 100, "category": "Food", "isIncome": false,
                       "date": 1705312800000i64, "repeat": true, "repeatType": "monthly"}),
            ],
        )
        .unwrap();
    connection
        .write_collection(
            "u1",
            "budgets",
            &[
                json!({"id": "b1", "category": "Food", "amount": 400, "spent": 300,
                       "startDate": "2024-01-01T00:00:00Z", "endDate": "2024-01-31T00:00:00Z"}),
                json!({"id": "b2", "category": "Fun", "amount": 0, "spent": 0,
                       "startDate": "2024-02-01T00:00:00Z", "endDate": "2024-02-29T00:00:00Z"}),
            ],
        )
        .unwrap();
    connection
        .write_collection(
            "u1",
            "goals",
            &[json!({"id": "g1", "name": "Emergency fund", "targetAmount": 2000, "currentAmount": 500,
                     "startDate": "2024-01-01T00:00:00Z", "endDate": "2024-12-31T00:00:00Z"})],
        )
        .unwrap();
    connection
        .write_collection(
            "u2",
            "transactions",
            &[json!({"id": "x1", "amount": 55, "category": "Transport", "isIncome": false,
                     "date": "2024-02-10T09:00:00Z"})],
        )
        .unwrap();
    fs::write(
        connection.user_directory_file(),
        "- uid: u1\n  email: one@example.com\n  displayName: User One\n- uid: u2\n  email: two@example.com\n",
    )
    .unwrap();
}

async fn call(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::new();

    let (status, body) = call(
        server.router(Arc::new(DisabledModel)),
        Method::GET,
        "/api/health",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_financial_data() {
    let server = TestServer::new();

    let (status, body) = call(
        server.router(Arc::new(DisabledModel)),
        Method::GET,
        "/api/financial-data?userId=u1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let analysis = &body["analysis"];
    assert_eq!(analysis["totalIncome"], json!(1000.0));
    assert_eq!(analysis["totalExpense"], json!(300.0));
    assert_eq!(analysis["netIncome"], json!(700.0));
    assert_eq!(analysis["categoryExpenses"], json!({"Food": 300.0}));
    assert_eq!(
        analysis["budgetStatus"],
        json!([
            {"category": "Food", "amount": 400.0, "spent": 300.0, "remaining": 100.0, "percentageUsed": 75.0},
            {"category": "Fun", "amount": 0.0, "spent": 0.0, "remaining": 0.0, "percentageUsed": null}
        ])
    );

    let third = &body["transactions"][2];
    assert_eq!(third["id"], json!("t3"));
    assert_eq!(third["localId"], json!(17));
    assert_eq!(third["userId"], json!("u1"));
    assert_eq!(third["repeatType"], json!("monthly"));
    assert_eq!(body["goals"][0]["name"], json!("Emergency fund"));
}

#[tokio::test]
async fn test_financial_data_requires_user_id() {
    let server = TestServer::new();

    let (status, body) = call(
        server.router(Arc::new(DisabledModel)),
        Method::GET,
        "/api/financial-data",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "userId is required"}));
}

#[tokio::test]
async fn test_malformed_record_is_internal_error() {
    let server = TestServer::new();
    server
        .connection
        .write_collection("u3", "budgets", &[json!({"id": "bad", "category": "Food"})])
        .unwrap();

    let (status, body) = call(
        server.router(Arc::new(DisabledModel)),
        Method::GET,
        "/api/financial-data?userId=u3",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal Server Error"}));
}

#[tokio::test]
async fn test_transaction_listing_across_users() {
    let server = TestServer::new();

    let (status, body) = call(
        server.router(Arc::new(DisabledModel)),
        Method::GET,
        "/api/transactions?type=expense&perPage=2",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["transactions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["x1", "t3"]);
    assert_eq!(
        body["pagination"],
        json!({"page": 1, "perPage": 2, "totalItems": 3, "totalPages": 2})
    );
    assert_eq!(
        body["totals"],
        json!({"totalIncome": 0.0, "totalExpense": 355.0, "netIncome": -355.0})
    );
}

#[tokio::test]
async fn test_budget_listing_null_average() {
    let server = TestServer::new();

    let (status, body) = call(
        server.router(Arc::new(DisabledModel)),
        Method::GET,
        "/api/budgets?userId=u1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["budgets"][0]["id"], json!("b2"));
    assert_eq!(body["budgets"][0]["percentageUsed"], json!(null));
    assert_eq!(body["budgets"][1]["percentageUsed"], json!(75.0));
    assert_eq!(body["totals"]["averagePercentageUsed"], json!(null));
}

#[tokio::test]
async fn test_users_list_and_toggle() {
    let server = TestServer::new();
    let router = server.router(Arc::new(DisabledModel));

    let (status, body) = call(
        router.clone(),
        Method::PATCH,
        "/api/users",
        Some(json!({"uid": "u2", "disabled": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, body) = call(router.clone(), Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["users"][1],
        json!({"uid": "u2", "email": "two@example.com", "displayName": null, "disabled": true})
    );

    let (status, _) = call(
        router,
        Method::PATCH,
        "/api/users",
        Some(json!({"uid": "u404", "disabled": false})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_financial_advice_prompt_and_response() {
    let server = TestServer::new();
    let model = Arc::new(StubModel::default());

    let (status, body) = call(
        server.router(model.clone()),
        Method::POST,
        "/api/ai",
        Some(json!({"type": "financial-advice", "content": {"userId": "u1", "message": "Am I saving enough?"}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "## Advice\nSpend less on food."}));

    let prompts = model.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];
    assert!(prompt.contains("- **Total income**: 1000"));
    assert!(prompt.contains("- **Net income**: 700"));
    assert!(prompt.contains("- **Food**: 75.0% used (300/400)"));
    assert!(prompt.contains("- **Fun**: n/a used (0/0)"));
    assert!(prompt.contains("- **Emergency fund**: 500/2000 (25.0%)"));
    assert!(prompt.contains("Am I saving enough?"));
}

#[tokio::test]
async fn test_ai_errors() {
    let server = TestServer::new();

    let (status, body) = call(
        server.router(Arc::new(DisabledModel)),
        Method::POST,
        "/api/ai",
        Some(json!({"type": "chat", "content": "hello"})),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "The AI advisor is not configured"}));

    let (status, _) = call(
        server.router(Arc::new(FailingModel)),
        Method::POST,
        "/api/ai",
        Some(json!({"type": "analyze", "content": "rent 900"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (status, _) = call(
        server.router(Arc::new(StubModel::default())),
        Method::POST,
        "/api/ai",
        Some(json!({"type": "haiku", "content": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
