//! Request validation shared by the REST mappers.
//!
//! Everything here runs before any storage access, so a malformed request
//! is rejected without doing work.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use shared::TransactionTypeFilter;

use super::commands::listing::{DateRange, PageRequest, MAX_PER_PAGE};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid {field} '{value}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("startDate must not be after endDate")]
    InvertedDateRange,
    #[error("page must be at least 1")]
    InvalidPage,
    #[error("perPage must be between 1 and {}", MAX_PER_PAGE)]
    InvalidPerPage,
    #[error("Invalid transaction type '{0}': expected all, income or expense")]
    InvalidTransactionType(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Which end of a range a date-only value stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// Return the trimmed value, or `MissingField` if it is absent or blank.
pub fn require_non_blank(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Blank strings count as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a filter date. A bare `YYYY-MM-DD` covers the whole day: it
/// maps to midnight for a start bound and to the last millisecond of the
/// day for an end bound.
pub fn parse_date_bound(
    field: &'static str,
    value: Option<&str>,
    bound: DateBound,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    let raw = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        }
    })?;
    let time = match bound {
        DateBound::Start => NaiveTime::MIN,
        DateBound::End => NaiveTime::from_hms_milli_opt(23, 59, 59, 999).ok_or_else(|| {
            ValidationError::InvalidDate {
                field,
                value: raw.to_string(),
            }
        })?,
    };
    Ok(Some(Utc.from_utc_datetime(&date.and_time(time))))
}

pub fn parse_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<DateRange, ValidationError> {
    let range = DateRange {
        start: parse_date_bound("startDate", start, DateBound::Start)?,
        end: parse_date_bound("endDate", end, DateBound::End)?,
    };
    if let (Some(start), Some(end)) = (range.start, range.end) {
        if start > end {
            return Err(ValidationError::InvertedDateRange);
        }
    }
    Ok(range)
}

pub fn parse_type_filter(value: Option<&str>) -> Result<TransactionTypeFilter, ValidationError> {
    match value {
        None => Ok(TransactionTypeFilter::All),
        Some(raw) => raw
            .parse()
            .map_err(|_| ValidationError::InvalidTransactionType(raw.to_string())),
    }
}

pub fn page_request(
    page: Option<u32>,
    per_page: Option<u32>,
) -> Result<PageRequest, ValidationError> {
    let defaults = PageRequest::default();
    let page = page.unwrap_or(defaults.page);
    let per_page = per_page.unwrap_or(defaults.per_page);

    if page == 0 {
        return Err(ValidationError::InvalidPage);
    }
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(ValidationError::InvalidPerPage);
    }
    Ok(PageRequest { page, per_page })
}
