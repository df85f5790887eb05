//! Prompt text for the financial advisor.
//!
//! Every figure in the advice prompt comes from a [`FinancialSummary`];
//! nothing here recomputes totals.

use std::fmt::Write;

use super::models::FinancialGoal;
use super::summary::FinancialSummary;

pub const DEFAULT_LANGUAGE: &str = "English";

const MARKDOWN_GUIDANCE: &str = "Please format the response with markdown: \
**headings**, *italics*, **bold** text, ordered lists and bullet lists.";

/// One decimal place; the NaN sentinel renders as `n/a`
pub fn format_percentage(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.1}%", value)
    }
}

#[derive(Debug, Clone)]
pub struct PromptBuilder {
    language: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl PromptBuilder {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn answer_in(&self) -> String {
        format!("Answer in {}, in detail and easy to understand.", self.language)
    }

    /// Free chat: the message followed by formatting guidance
    pub fn build_chat_prompt(&self, message: &str) -> String {
        format!(
            "{}\n\nPlease use markdown formatting in your response, including:\n\
             - Headings with # or ##\n\
             - Bold with **word**\n\
             - Italics with *word*\n\
             - Ordered lists (1. 2. 3. ...)\n\
             - Bullet lists (-)\n\
             - Tables where useful\n\n{}",
            message,
            self.answer_in()
        )
    }

    /// Advice on one user's finances
    pub fn build_advice_prompt(
        &self,
        summary: &FinancialSummary,
        goals: &[FinancialGoal],
        question: &str,
    ) -> String {
        let mut prompt = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(
            prompt,
            "Based on the following financial data of the user and their question, \
             give detailed advice and analysis:\n"
        );
        let _ = writeln!(prompt, "## FINANCIAL OVERVIEW");
        let _ = writeln!(prompt, "- **Total income**: {}", summary.total_income);
        let _ = writeln!(prompt, "- **Total expense**: {}", summary.total_expense);
        let _ = writeln!(prompt, "- **Net income**: {}", summary.net_income);

        let _ = writeln!(prompt, "\n## EXPENSES BY CATEGORY");
        for (category, amount) in &summary.category_expenses {
            let _ = writeln!(prompt, "- **{}**: {}", category, amount);
        }

        let _ = writeln!(prompt, "\n## BUDGET STATUS");
        for status in &summary.budget_status {
            let _ = writeln!(
                prompt,
                "- **{}**: {} used ({}/{})",
                status.category,
                format_percentage(status.percentage_used),
                status.spent,
                status.amount
            );
        }

        if !goals.is_empty() {
            let _ = writeln!(prompt, "\n## FINANCIAL GOALS");
            for goal in goals {
                let _ = writeln!(
                    prompt,
                    "- **{}**: {}/{} ({})",
                    goal.name,
                    goal.current_amount,
                    goal.target_amount,
                    format_percentage(goal.progress_percentage())
                );
            }
        }

        let _ = writeln!(prompt, "\n**User question**: {}\n", question);
        let _ = writeln!(
            prompt,
            "Give a concise but complete analysis with the following sections:\n\n\
             ### 1. Current financial situation\n\
             ### 2. Points to watch or improve\n\
             ### 3. Concrete advice and action plan\n\
             ### 4. Outlook and suggestions for the future\n"
        );
        let _ = writeln!(prompt, "{}\n", MARKDOWN_GUIDANCE);
        let _ = write!(prompt, "{}", self.answer_in());
        prompt
    }

    /// Analysis of free-form expense data
    pub fn build_analysis_prompt(&self, expense_data: &str) -> String {
        format!(
            "Analyze the following expenses and give comments and suggestions:\n\n\
             ```\n{}\n```\n\n\
             Give a detailed analysis with the following sections:\n\n\
             ### 1. Overview of the expenses\n\
             ### 2. Unusual or unusually high expenses\n\
             ### 3. Suggestions to optimize spending\n\n\
             {}\n\n{}",
            expense_data,
            MARKDOWN_GUIDANCE,
            self.answer_in()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::summarize;
    use crate::domain::test_utils::{budget, expense, goal, income};

    fn sample_summary() -> FinancialSummary {
        summarize(
            &[
                income(1000.0, "Salary"),
                expense(200.0, "Food"),
                expense(100.0, "Food"),
                expense(50.0, "Transport"),
            ],
            &[budget("Food", 400.0, 300.0), budget("Gifts", 0.0, 0.0)],
            &[],
        )
    }

    #[test]
    fn test_advice_prompt_embeds_every_summary_figure() {
        let prompt = PromptBuilder::default().build_advice_prompt(
            &sample_summary(),
            &[],
            "Can I afford a holiday?",
        );

        assert!(prompt.contains("- **Total income**: 1000"));
        assert!(prompt.contains("- **Total expense**: 350"));
        assert!(prompt.contains("- **Net income**: 650"));
        assert!(prompt.contains("- **Food**: 300\n"));
        assert!(prompt.contains("- **Transport**: 50\n"));
        assert!(prompt.contains("- **Food**: 75.0% used (300/400)"));
        assert!(prompt.contains("- **Gifts**: n/a used (0/0)"));
        assert!(prompt.contains("**User question**: Can I afford a holiday?"));
        assert!(prompt.contains("### 4. Outlook"));
        assert!(prompt.ends_with("Answer in English, in detail and easy to understand."));
    }

    #[test]
    fn test_goals_section_only_when_goals_exist() {
        let builder = PromptBuilder::default();
        let summary = sample_summary();

        let without = builder.build_advice_prompt(&summary, &[], "?");
        assert!(!without.contains("FINANCIAL GOALS"));

        let with = builder.build_advice_prompt(
            &summary,
            &[goal("Bike", 300.0, 75.0), goal("Someday", 0.0, 10.0)],
            "?",
        );
        assert!(with.contains("## FINANCIAL GOALS"));
        assert!(with.contains("- **Bike**: 75/300 (25.0%)"));
        assert!(with.contains("- **Someday**: 10/0 (n/a)"));
    }

    #[test]
    fn test_language_is_configurable() {
        let builder = PromptBuilder::new("Vietnamese");
        assert!(builder
            .build_chat_prompt("hi")
            .ends_with("Answer in Vietnamese, in detail and easy to understand."));
        assert!(builder.build_analysis_prompt("x").contains("Answer in Vietnamese"));
    }

    #[test]
    fn test_chat_and_analysis_prompts() {
        let builder = PromptBuilder::default();

        let chat = builder.build_chat_prompt("How do I save more?");
        assert!(chat.starts_with("How do I save more?\n\n"));
        assert!(chat.contains("Tables where useful"));

        let analysis = builder.build_analysis_prompt("coffee 5\ncoffee 5\nrent 900");
        assert!(analysis.contains("```\ncoffee 5\ncoffee 5\nrent 900\n```"));
        assert!(analysis.contains("### 3. Suggestions to optimize spending"));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(120.0), "120.0%");
        assert_eq!(format_percentage(33.333), "33.3%");
        assert_eq!(format_percentage(f64::NAN), "n/a");
    }
}
