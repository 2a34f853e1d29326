//! Weighted multi-factor scoring of filtered candidates.

use std::collections::BTreeSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::beverage::Beverage;
use crate::domain::request::RecommendationRequest;

/// Weights for the five scoring factors. Policy constants embedded in source,
/// worth revisiting with product owners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Domestic brand / region affinity (default: 0.25)
    pub origin_affinity: f64,
    /// Preference for spending close to, but not over, budget (default: 0.30)
    pub budget_fit: f64,
    /// Fraction of the user's requested flavors satisfied (default: 0.25)
    pub flavor_match: f64,
    /// ABV inside the requested range (default: 0.15)
    pub abv_fit: f64,
    /// Availability in the requested state (default: 0.05)
    pub state_availability: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.origin_affinity
            + self.budget_fit
            + self.flavor_match
            + self.abv_fit
            + self.state_availability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Default factor weights; sum to 1.0.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    origin_affinity: 0.25,
    budget_fit: 0.30,
    flavor_match: 0.25,
    abv_fit: 0.15,
    state_availability: 0.05,
};

/// Imported beverages earn this fraction of the origin weight; deliberately
/// nonzero so they are discounted, never zeroed out.
pub const IMPORTED_ORIGIN_CREDIT: f64 = 0.3;

/// Credit earned when the beverage ABV falls outside the requested range.
pub const OUT_OF_RANGE_ABV_CREDIT: f64 = 0.3;

/// Known domestically-owned brands. Static allow-list, injectable so it can
/// be updated independently of the scoring logic.
pub const DOMESTIC_BRANDS: &[&str] = &[
    "United Breweries",
    "Bira 91",
    "United Spirits",
    "Radico Khaitan",
    "Allied Blenders",
    "Pernod Ricard",
    "Carlsberg",
    "Nao Spirits",
    "Third Eye Distillery",
    "Mohan Meakin",
    "Sula",
    "Grover Zampa",
    "Fratelli",
];

/// Score calculator over (beverage, request) pairs. Pure: no hidden state, no
/// catalog access, safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    weights: ScoringWeights,
    domestic_brands: BTreeSet<String>,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self::with_weights(ScoringWeights::default())
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            domestic_brands: DOMESTIC_BRANDS.iter().map(|brand| brand.to_string()).collect(),
        }
    }

    /// Replaces the domestic-brand allow-list (e.g. from configuration).
    pub fn with_domestic_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domestic_brands = brands.into_iter().map(Into::into).collect();
        self
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Normalized score in [0,1]. Every factor's weight always enters the
    /// denominator; only the earned numerator varies.
    pub fn score(&self, beverage: &Beverage, request: &RecommendationRequest) -> f64 {
        let total_weight = self.weights.total();
        if total_weight <= 0.0 {
            return 0.0;
        }

        let earned = self.weights.origin_affinity * self.origin_affinity(beverage)
            + self.weights.budget_fit * self.budget_fit(beverage.price, request.budget)
            + self.weights.flavor_match * self.flavor_match(beverage, request)
            + self.weights.abv_fit * self.abv_fit(beverage, request)
            + self.weights.state_availability * self.state_availability(beverage, request);

        earned / total_weight
    }

    /// Full credit for domestically-produced items, determined by the brand
    /// allow-list or `region == "India"`.
    fn origin_affinity(&self, beverage: &Beverage) -> f64 {
        let domestic = self.domestic_brands.contains(&beverage.brand)
            || beverage.region.as_deref() == Some("India");
        if domestic {
            1.0
        } else {
            IMPORTED_ORIGIN_CREDIT
        }
    }

    /// Monotonic preference for spending closer to budget: ratio ≥0.70 earns
    /// full credit, ≥0.50 earns 0.8, anything cheaper 0.6. Over-budget items
    /// earn nothing so the scorer stays correct outside the filtered path.
    fn budget_fit(&self, price: Decimal, budget: Decimal) -> f64 {
        if budget <= Decimal::ZERO || price > budget {
            return 0.0;
        }
        let ratio = (price / budget).to_f64().unwrap_or(0.0);
        if ratio >= 0.7 {
            1.0
        } else if ratio >= 0.5 {
            0.8
        } else {
            0.6
        }
    }

    /// Fraction of the user's requested flavors the drink satisfies. Divides
    /// by the preference-set size, so extra irrelevant drink flavors are not
    /// penalized. Neutral (full credit) when no preferences were given.
    fn flavor_match(&self, beverage: &Beverage, request: &RecommendationRequest) -> f64 {
        if request.flavor_preferences.is_empty() {
            return 1.0;
        }
        let overlap = request.flavor_preferences.intersection(&beverage.flavors).count();
        overlap as f64 / request.flavor_preferences.len() as f64
    }

    /// Neutral unless both bounds were given: then full credit inside the
    /// range, a fixed discount outside it, and nothing for an unknown ABV.
    fn abv_fit(&self, beverage: &Beverage, request: &RecommendationRequest) -> f64 {
        let (Some(min_abv), Some(max_abv)) = (request.min_abv, request.max_abv) else {
            return 1.0;
        };
        match beverage.abv {
            Some(abv) if (min_abv..=max_abv).contains(&abv) => 1.0,
            Some(_) => OUT_OF_RANGE_ABV_CREDIT,
            None => 0.0,
        }
    }

    /// Always true post-filter; computed anyway for compositional reuse of
    /// the scorer outside the filtered path.
    fn state_availability(&self, beverage: &Beverage, request: &RecommendationRequest) -> f64 {
        if beverage.available_states.contains(&request.state) {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}
