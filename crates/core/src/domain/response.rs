use serde::{Deserialize, Serialize};

use crate::domain::beverage::Beverage;
use crate::domain::pairing::Pairing;
use crate::domain::request::RecommendationRequest;

/// A scored candidate surfaced to the caller: the beverage plus its score in
/// [0,1], pairing suggestions, and a short justification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub beverage: Beverage,
    pub score: f64,
    pub pairings: Vec<Pairing>,
    pub why_recommended: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    /// Count of candidates that survived filtering, before truncation.
    pub total_found: usize,
    /// Human-readable budget bracket, e.g. `Premium (₹500-₹2000)`.
    pub budget_range: String,
    /// Echo of the request for traceability.
    pub search_criteria: RecommendationRequest,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityInfo {
    pub available_states: Vec<String>,
    pub total_states: usize,
    pub price_display: String,
    pub abv_display: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeverageDetail {
    pub beverage: Beverage,
    pub pairings: Vec<Pairing>,
    pub similar: Vec<Beverage>,
    pub availability: AvailabilityInfo,
}
