//! # Expense Tracker Admin Backend
//!
//! JSON-over-HTTP service behind the admin dashboard of the expense
//! tracker.
//!
//! ## Architecture
//!
//! ```text
//! Dashboard (external)
//!     ↓
//! IO Layer (axum handlers, DTO mappers)
//!     ↓
//! Domain Layer (summary, listing, advisor services)
//!     ↓                          ↓
//! Storage Layer (JSON snapshot)  Generative model (Gemini)
//! ```
//!
//! Services are built once by [`initialize_backend`] and shared by every
//! handler through [`AppState`].

pub mod config;
pub mod domain;
pub mod genai;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::domain::{AdvisorService, FinancialDataService, PromptBuilder, UserService};
use crate::genai::{DisabledModel, GeminiClient, GenerativeModel};
use crate::io::rest::{
    ai_apis, budget_apis, financial_data_apis, health_apis, transaction_apis, user_apis,
};
use crate::storage::{Connection, JsonConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub financial_data_service: FinancialDataService,
    pub user_service: UserService,
    pub advisor_service: AdvisorService,
}

impl AppState {
    /// Wire the services on top of one storage connection
    pub fn from_connection<C: Connection>(
        connection: &C,
        model: Arc<dyn GenerativeModel>,
        prompts: PromptBuilder,
    ) -> Self {
        let financial_data_service =
            FinancialDataService::new(Arc::new(connection.create_financial_repository()));
        let user_service = UserService::new(Arc::new(connection.create_user_repository()));
        let advisor_service = AdvisorService::new(financial_data_service.clone(), model, prompts);

        Self {
            financial_data_service,
            user_service,
            advisor_service,
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json().with_current_span(false)).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Opening data directory {}", config.data_dir.display());
    let connection = JsonConnection::new(&config.data_dir)
        .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;

    let model: Arc<dyn GenerativeModel> = match &config.gemini {
        Some(gemini) => {
            info!("AI advisor uses model {}", gemini.model);
            Arc::new(GeminiClient::new(
                gemini.base_url.clone(),
                gemini.model.clone(),
                gemini.api_key.clone(),
            ))
        }
        None => {
            warn!("GEMINI_API_KEY is not set; AI requests will be refused");
            Arc::new(DisabledModel)
        }
    };

    Ok(AppState::from_connection(
        &connection,
        model,
        PromptBuilder::new(config.advisor_language.clone()),
    ))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS origin '{}'", config.cors_origin))?;

    // CORS setup to allow the dashboard to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/health", health_apis::router())
        .nest("/financial-data", financial_data_apis::router())
        .nest("/transactions", transaction_apis::router())
        .nest("/budgets", budget_apis::router())
        .nest("/users", user_apis::router())
        .nest("/ai", ai_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
