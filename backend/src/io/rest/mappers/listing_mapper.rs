//! Query-string DTOs to listing queries, and listing results back to
//! response DTOs.

use shared::{
    BudgetListRequest, BudgetListResponse, BudgetTotals as SharedBudgetTotals, PaginationInfo,
    TransactionListRequest, TransactionListResponse,
    TransactionTotals as SharedTransactionTotals,
};

use super::analysis_mapper::AnalysisMapper;
use super::budget_mapper::BudgetMapper;
use super::transaction_mapper::TransactionMapper;
use crate::domain::commands::listing::{
    BudgetListQuery, BudgetListResult, PageInfo, TransactionListQuery, TransactionListResult,
};
use crate::domain::validation::{
    non_blank, page_request, parse_date_range, parse_type_filter, ValidationError,
};

pub struct ListingMapper;

impl ListingMapper {
    pub fn to_transaction_query(
        request: TransactionListRequest,
    ) -> Result<TransactionListQuery, ValidationError> {
        Ok(TransactionListQuery {
            type_filter: parse_type_filter(request.transaction_type.as_deref())?,
            date_range: parse_date_range(
                request.start_date.as_deref(),
                request.end_date.as_deref(),
            )?,
            page: page_request(request.page, request.per_page)?,
            user_id: non_blank(request.user_id),
            search: non_blank(request.search),
        })
    }

    pub fn to_budget_query(request: BudgetListRequest) -> Result<BudgetListQuery, ValidationError> {
        Ok(BudgetListQuery {
            date_range: parse_date_range(
                request.start_date.as_deref(),
                request.end_date.as_deref(),
            )?,
            page: page_request(request.page, request.per_page)?,
            user_id: non_blank(request.user_id),
            category: non_blank(request.category),
            search: non_blank(request.search),
        })
    }

    pub fn pagination_to_dto(info: PageInfo) -> PaginationInfo {
        PaginationInfo {
            page: info.page,
            per_page: info.per_page,
            total_items: info.total_items,
            total_pages: info.total_pages,
        }
    }

    pub fn to_transaction_list_response(result: TransactionListResult) -> TransactionListResponse {
        TransactionListResponse {
            transactions: TransactionMapper::to_dto_list(result.transactions),
            pagination: Self::pagination_to_dto(result.pagination),
            totals: SharedTransactionTotals {
                total_income: result.totals.total_income,
                total_expense: result.totals.total_expense,
                net_income: result.totals.net_income,
            },
        }
    }

    pub fn to_budget_list_response(result: BudgetListResult) -> BudgetListResponse {
        BudgetListResponse {
            budgets: result
                .budgets
                .into_iter()
                .map(|(budget, status)| BudgetMapper::to_dto_with_status(budget, status))
                .collect(),
            pagination: Self::pagination_to_dto(result.pagination),
            totals: SharedBudgetTotals {
                total_amount: result.totals.total_amount,
                total_spent: result.totals.total_spent,
                total_remaining: result.totals.total_remaining,
                average_percentage_used: AnalysisMapper::percentage_to_dto(
                    result.totals.average_percentage_used,
                ),
            },
        }
    }
}
