//! # REST API for the AI advisor
//!
//! `POST /api/ai` with `{"type": ..., "content": ...}`:
//!
//! - `chat`: content is the message
//! - `financial-advice`: content is `{"userId", "message"}`
//! - `analyze`: content is free-form expense data

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use shared::{AiRequest, AiResponse};
use tracing::info;

use super::ApiError;
use crate::domain::commands::advisor::FinancialAdviceCommand;
use crate::domain::validation::{require_non_blank, ValidationError};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(handle_ai_request))
}

fn parse_request(body: Value) -> Result<AiRequest, ValidationError> {
    let kind = body
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ValidationError::MissingField("type"))?;

    serde_json::from_value(body).map_err(|e| {
        if matches!(kind.as_str(), "chat" | "financial-advice" | "analyze") {
            ValidationError::InvalidRequest(e.to_string())
        } else {
            ValidationError::InvalidRequest(format!("unknown request type '{}'", kind))
        }
    })
}

pub async fn handle_ai_request(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AiResponse>, ApiError> {
    let Json(body) = body?;
    let request = parse_request(body)?;
    info!("POST /api/ai - type: {}", request.kind());

    let advisor = &state.advisor_service;
    let response = match request {
        AiRequest::Chat(message) => {
            let message = require_non_blank("content", Some(message))?;
            advisor.chat(&message).await?
        }
        AiRequest::FinancialAdvice(content) => {
            let command = FinancialAdviceCommand {
                user_id: require_non_blank("userId", content.user_id)?,
                message: require_non_blank("message", content.message)?,
            };
            advisor.financial_advice(command).await?
        }
        AiRequest::Analyze(expense_data) => {
            let expense_data = require_non_blank("content", Some(expense_data))?;
            advisor.analyze_expenses(&expense_data).await?
        }
    };

    Ok(Json(AiResponse { response }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_utils::{send_json, TestApp};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[test]
    fn test_parse_request_variants() {
        assert_eq!(
            parse_request(json!({"type": "chat", "content": "hi"})).unwrap(),
            AiRequest::Chat("hi".to_string())
        );
        assert_eq!(
            parse_request(json!({"type": "translate", "content": "hi"})).unwrap_err(),
            ValidationError::InvalidRequest("unknown request type 'translate'".to_string())
        );
        assert_eq!(
            parse_request(json!({"content": "hi"})).unwrap_err(),
            ValidationError::MissingField("type")
        );
        assert!(parse_request(json!({"type": "chat", "content": 42})).is_err());
    }

    #[tokio::test]
    async fn test_chat_returns_model_text() {
        let app = TestApp::new();

        let (status, body) = send_json(
            router().with_state(app.state()),
            Method::POST,
            "/",
            json!({"type": "chat", "content": "How do I budget?"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "generated advice"}));
        assert!(app.model.last_prompt().unwrap().starts_with("How do I budget?"));
    }

    #[tokio::test]
    async fn test_financial_advice_requires_user_id() {
        let app = TestApp::new();

        let (status, body) = send_json(
            router().with_state(app.state()),
            Method::POST,
            "/",
            json!({"type": "financial-advice", "content": {"message": "help"}}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "userId is required"}));
        assert!(app.model.last_prompt().is_none());
    }

    #[tokio::test]
    async fn test_unknown_type_is_bad_request() {
        let app = TestApp::new();

        let (status, _) = send_json(
            router().with_state(app.state()),
            Method::POST,
            "/",
            json!({"type": "poem", "content": "roses"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
