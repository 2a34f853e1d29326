use rust_decimal::Decimal;

use crate::domain::response::Recommendation;
use crate::engine::filter::min_meaningful_price;

/// Maximum recommendations returned by the full path.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Recommendations returned by the quick path.
pub const QUICK_RECOMMENDATIONS: usize = 3;

/// Sorts by score descending and truncates. The sort is stable, so ties keep
/// filter-stage (catalog) order.
pub fn rank(mut recommendations: Vec<Recommendation>, limit: usize) -> Vec<Recommendation> {
    recommendations.sort_by(|left, right| {
        right.score.partial_cmp(&left.score).unwrap_or(std::cmp::Ordering::Equal)
    });
    recommendations.truncate(limit);
    recommendations
}

/// Budget bracket label derived purely from the request budget, including the
/// meaningful price range [0.25×budget, budget].
pub fn budget_bracket(budget: Decimal) -> String {
    let label = if budget <= Decimal::from(500) {
        "Budget-friendly"
    } else if budget <= Decimal::from(1500) {
        "Mid-range"
    } else if budget <= Decimal::from(5000) {
        "Premium"
    } else if budget <= Decimal::from(20_000) {
        "Luxury"
    } else {
        "Ultra-Premium"
    };

    let floor = min_meaningful_price(budget).round_dp(0).normalize();
    format!("{label} (₹{floor}-₹{})", budget.normalize())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rust_decimal::Decimal;

    use super::{budget_bracket, rank, MAX_RECOMMENDATIONS};
    use crate::domain::beverage::{Beverage, BeverageId, DrinkType};
    use crate::domain::response::Recommendation;

    fn recommendation(id: &str, score: f64) -> Recommendation {
        Recommendation {
            beverage: Beverage {
                id: BeverageId(id.to_string()),
                name: id.to_string(),
                brand: "brand".to_string(),
                drink_type: DrinkType::Whiskey,
                price: Decimal::from(1000),
                abv: None,
                description: String::new(),
                flavors: BTreeSet::new(),
                available_states: BTreeSet::new(),
                image_url: None,
                category: None,
                region: None,
                age_statement: None,
            },
            score,
            pairings: Vec::new(),
            why_recommended: String::new(),
        }
    }

    #[test]
    fn sorts_descending_and_truncates_to_limit() {
        let input = vec![
            recommendation("a", 0.3),
            recommendation("b", 0.9),
            recommendation("c", 0.5),
            recommendation("d", 0.7),
            recommendation("e", 0.1),
            recommendation("f", 0.8),
        ];

        let ranked = rank(input, MAX_RECOMMENDATIONS);
        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
        let ids: Vec<_> = ranked.iter().map(|r| r.beverage.id.0.as_str()).collect();
        assert_eq!(ids, vec!["b", "f", "d", "c", "a"]);
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn ties_keep_input_order() {
        let input = vec![
            recommendation("first", 0.5),
            recommendation("second", 0.5),
            recommendation("third", 0.5),
        ];
        let ranked = rank(input, MAX_RECOMMENDATIONS);
        let ids: Vec<_> = ranked.iter().map(|r| r.beverage.id.0.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn output_never_exceeds_input_length() {
        let ranked = rank(vec![recommendation("only", 0.4)], MAX_RECOMMENDATIONS);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn budget_brackets_use_fixed_thresholds() {
        assert_eq!(budget_bracket(Decimal::from(400)), "Budget-friendly (₹100-₹400)");
        assert_eq!(budget_bracket(Decimal::from(500)), "Budget-friendly (₹125-₹500)");
        assert_eq!(budget_bracket(Decimal::from(1500)), "Mid-range (₹375-₹1500)");
        assert_eq!(budget_bracket(Decimal::from(2000)), "Premium (₹500-₹2000)");
        assert_eq!(budget_bracket(Decimal::from(20_000)), "Luxury (₹5000-₹20000)");
        assert_eq!(budget_bracket(Decimal::from(30_000)), "Ultra-Premium (₹7500-₹30000)");
    }
}
