use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::beverage::DrinkType;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
    #[error("invalid request field `{field}`: {reason}")]
    InvalidRequest { field: &'static str, reason: String },
}

/// Client-visible outcomes at the engine boundary. `NotFound` and `NoMatches`
/// are distinct conditions: the first names a missing catalog id, the second
/// an empty filter result for an otherwise valid request.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("beverage `{0}` not found")]
    NotFound(String),
    #[error("no {drink_type} found in {state} within budget ₹{budget}")]
    NoMatches { drink_type: DrinkType, state: String, budget: Decimal },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ServiceError {
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(id) => format!("Drink with ID '{id}' not found."),
            Self::NoMatches { budget, .. } => format!(
                "No drinks found matching your criteria. Try adjusting your budget (₹{budget}) or preferences."
            ),
            Self::Domain(_) => {
                "The request could not be processed. Check inputs and try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{DomainError, ServiceError};
    use crate::domain::beverage::DrinkType;

    #[test]
    fn no_matches_message_includes_budget_guidance() {
        let error = ServiceError::NoMatches {
            drink_type: DrinkType::Whiskey,
            state: "Gujarat".to_string(),
            budget: Decimal::from(2000),
        };

        assert!(error.user_message().contains("₹2000"));
        assert!(error.to_string().contains("whiskey"));
        assert!(error.to_string().contains("Gujarat"));
    }

    #[test]
    fn not_found_and_no_matches_are_distinct() {
        let not_found = ServiceError::NotFound("whiskey_404".to_string());
        let no_matches = ServiceError::NoMatches {
            drink_type: DrinkType::Gin,
            state: "Goa".to_string(),
            budget: Decimal::from(900),
        };

        assert_ne!(not_found, no_matches);
        assert!(not_found.user_message().contains("whiskey_404"));
    }

    #[test]
    fn domain_error_maps_to_user_safe_message() {
        let error = ServiceError::from(DomainError::InvalidRequest {
            field: "budget",
            reason: "below contract minimum".to_string(),
        });

        assert_eq!(
            error.user_message(),
            "The request could not be processed. Check inputs and try again."
        );
    }
}
