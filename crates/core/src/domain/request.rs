use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::beverage::{DrinkType, FlavorProfile, Occasion};
use crate::errors::DomainError;

/// Contract bounds for the request budget, in INR.
pub const MIN_BUDGET_INR: i64 = 100;
pub const MAX_BUDGET_INR: i64 = 50_000;

/// Per-call search input. Immutable once constructed; echoed back in the
/// response for traceability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Budget ceiling in INR, bounded [100, 50000] by contract.
    pub budget: Decimal,
    pub drink_type: DrinkType,
    /// Indian state used for the availability check.
    pub state: String,
    pub occasion: Occasion,
    #[serde(default)]
    pub flavor_preferences: BTreeSet<FlavorProfile>,
    #[serde(default)]
    pub min_abv: Option<f64>,
    #[serde(default)]
    pub max_abv: Option<f64>,
}

impl RecommendationRequest {
    /// Minimal-input request used by the quick-recommendation path.
    pub fn quick(budget: Decimal, drink_type: DrinkType, state: impl Into<String>) -> Self {
        Self {
            budget,
            drink_type,
            state: state.into(),
            occasion: Occasion::Casual,
            flavor_preferences: BTreeSet::new(),
            min_abv: None,
            max_abv: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.budget < Decimal::from(MIN_BUDGET_INR) || self.budget > Decimal::from(MAX_BUDGET_INR)
        {
            return Err(DomainError::InvalidRequest {
                field: "budget",
                reason: format!(
                    "budget must be within ₹{MIN_BUDGET_INR}..=₹{MAX_BUDGET_INR}, got ₹{}",
                    self.budget
                ),
            });
        }
        if self.state.trim().is_empty() {
            return Err(DomainError::InvalidRequest {
                field: "state",
                reason: "state must not be empty".to_string(),
            });
        }
        for (field, bound) in [("min_abv", self.min_abv), ("max_abv", self.max_abv)] {
            if let Some(value) = bound {
                if !(0.0..=100.0).contains(&value) {
                    return Err(DomainError::InvalidRequest {
                        field,
                        reason: format!("abv bound must be within 0..=100, got {value}"),
                    });
                }
            }
        }
        if let (Some(min_abv), Some(max_abv)) = (self.min_abv, self.max_abv) {
            if min_abv > max_abv {
                return Err(DomainError::InvalidRequest {
                    field: "min_abv",
                    reason: format!("min_abv {min_abv} exceeds max_abv {max_abv}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::RecommendationRequest;
    use crate::domain::beverage::{DrinkType, Occasion};

    fn request(budget: i64) -> RecommendationRequest {
        RecommendationRequest::quick(Decimal::from(budget), DrinkType::Whiskey, "Delhi")
    }

    #[test]
    fn quick_request_defaults_to_casual_occasion() {
        let quick = request(2000);
        assert_eq!(quick.occasion, Occasion::Casual);
        assert!(quick.flavor_preferences.is_empty());
        quick.validate().expect("valid request");
    }

    #[test]
    fn enforces_budget_contract_bounds() {
        assert!(request(99).validate().is_err());
        assert!(request(100).validate().is_ok());
        assert!(request(50_000).validate().is_ok());
        assert!(request(50_001).validate().is_err());
    }

    #[test]
    fn rejects_inverted_or_out_of_range_abv_bounds() {
        let mut inverted = request(1500);
        inverted.min_abv = Some(45.0);
        inverted.max_abv = Some(40.0);
        assert!(inverted.validate().is_err());

        let mut out_of_range = request(1500);
        out_of_range.max_abv = Some(150.0);
        assert!(out_of_range.validate().is_err());
    }

    #[test]
    fn rejects_blank_state() {
        let mut blank = request(1500);
        blank.state = "  ".to_string();
        assert!(blank.validate().is_err());
    }
}
