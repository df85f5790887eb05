//! AI advisor: builds prompts from a user's finances and forwards them to
//! the generative model.

use std::sync::Arc;

use tracing::{error, info};

use super::commands::advisor::FinancialAdviceCommand;
use super::financial_data_service::FinancialDataService;
use super::prompt::PromptBuilder;
use crate::genai::{GenAiError, GenerativeModel};
use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Model(#[from] GenAiError),
}

#[derive(Clone)]
pub struct AdvisorService {
    financial_data: FinancialDataService,
    model: Arc<dyn GenerativeModel>,
    prompts: PromptBuilder,
}

impl AdvisorService {
    pub fn new(
        financial_data: FinancialDataService,
        model: Arc<dyn GenerativeModel>,
        prompts: PromptBuilder,
    ) -> Self {
        Self {
            financial_data,
            model,
            prompts,
        }
    }

    async fn generate(&self, kind: &str, prompt: String) -> Result<String, AdvisorError> {
        self.model.generate(&prompt).await.map_err(|e| {
            error!("{} request to the model failed: {}", kind, e);
            AdvisorError::Model(e)
        })
    }

    pub async fn chat(&self, message: &str) -> Result<String, AdvisorError> {
        info!("Chat request ({} chars)", message.len());
        let prompt = self.prompts.build_chat_prompt(message);
        self.generate("chat", prompt).await
    }

    /// Advice grounded in the summary of the user's own records
    pub async fn financial_advice(
        &self,
        command: FinancialAdviceCommand,
    ) -> Result<String, AdvisorError> {
        info!("Financial advice request for user {}", command.user_id);
        let data = self.financial_data.get_financial_data(&command.user_id).await?;
        let prompt = self.prompts.build_advice_prompt(
            &data.summary,
            &data.financials.goals,
            &command.message,
        );
        self.generate("financial-advice", prompt).await
    }

    pub async fn analyze_expenses(&self, expense_data: &str) -> Result<String, AdvisorError> {
        info!("Expense analysis request ({} chars)", expense_data.len());
        let prompt = self.prompts.build_analysis_prompt(expense_data);
        self.generate("analyze", prompt).await
    }
}
