use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::domain::beverage::Beverage;
use crate::domain::request::RecommendationRequest;

/// Floor below which a candidate is considered too cheap to be a meaningful
/// recommendation, as a percentage of the request budget. Policy constant,
/// not derived from data.
pub const MIN_PRICE_BUDGET_PERCENT: u32 = 25;

pub fn min_meaningful_price(budget: Decimal) -> Decimal {
    budget * Decimal::from(MIN_PRICE_BUDGET_PERCENT) / Decimal::from(100)
}

/// Applies the request's hard constraints to the catalog. Stable: survivors
/// keep catalog order. An empty result is not an error at this layer.
pub fn filter<'a>(catalog: &'a Catalog, request: &RecommendationRequest) -> Vec<&'a Beverage> {
    catalog.iter().filter(|beverage| matches(beverage, request)).collect()
}

/// Predicate conjunction, short-circuiting per item. Ordering only affects
/// efficiency, not the result set.
pub fn matches(beverage: &Beverage, request: &RecommendationRequest) -> bool {
    if beverage.drink_type != request.drink_type {
        return false;
    }
    if beverage.price > request.budget {
        return false;
    }
    if beverage.price < min_meaningful_price(request.budget) {
        return false;
    }
    if !beverage.available_states.contains(&request.state) {
        return false;
    }
    // A beverage with no stated ABV is never excluded by ABV bounds.
    if let (Some(min_abv), Some(abv)) = (request.min_abv, beverage.abv) {
        if abv < min_abv {
            return false;
        }
    }
    if let (Some(max_abv), Some(abv)) = (request.max_abv, beverage.abv) {
        if abv > max_abv {
            return false;
        }
    }
    if !request.flavor_preferences.is_empty()
        && !request.flavor_preferences.iter().any(|flavor| beverage.flavors.contains(flavor))
    {
        return false;
    }
    true
}
