//! Query and body payloads accepted by the admin API.

use thiserror::Error;
use validator::ValidationErrors;

pub mod calendar;
pub mod financials;
pub mod installments;
pub mod users;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid class id")]
    InvalidClassId,

    #[error("invalid payment id")]
    InvalidPaymentId,

    #[error("cancellation reason is required")]
    InvalidReason,
}

/// Highest page number a listing request may ask for.
pub(crate) const MAX_PAGE: usize = 10_000;

/// Reads a requested page number, defaulting to the first page.
pub(crate) fn page_number(page: Option<usize>) -> usize {
    page.unwrap_or(1).clamp(1, MAX_PAGE)
}

/// Trims a free-text filter, treating blank input and `all` as no filter.
pub(crate) fn filter_text(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_all_filters_are_dropped() {
        assert_eq!(filter_text(None), None);
        assert_eq!(filter_text(Some("   ".into())), None);
        assert_eq!(filter_text(Some("All".into())), None);
        assert_eq!(filter_text(Some(" ava ".into())), Some("ava".to_string()));
    }

    #[test]
    fn page_number_is_bounded() {
        assert_eq!(page_number(None), 1);
        assert_eq!(page_number(Some(0)), 1);
        assert_eq!(page_number(Some(7)), 7);
        assert_eq!(page_number(Some(usize::MAX)), MAX_PAGE);
    }
}
