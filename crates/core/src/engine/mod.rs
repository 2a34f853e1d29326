//! Recommendation pipeline: filter the catalog, score survivors, rank,
//! attach pairings and a justification, assemble the response.

pub mod filter;
pub mod ranking;
pub mod scoring;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::collab::{fallback_explanation, TextGenerator};
use crate::domain::beverage::{Beverage, BeverageId, DrinkType, Occasion};
use crate::domain::pairing::Pairing;
use crate::domain::request::RecommendationRequest;
use crate::domain::response::{
    AvailabilityInfo, BeverageDetail, Recommendation, RecommendationResponse,
};
use crate::errors::ServiceError;
use crate::pairings::default_pairings;

pub use ranking::{MAX_RECOMMENDATIONS, QUICK_RECOMMENDATIONS};
pub use scoring::{ScoreCalculator, ScoringWeights, DEFAULT_WEIGHTS};

/// Similar-items returned by the detail lookup.
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;

/// Stateless per call; the only shared state is the immutable catalog
/// snapshot, so concurrent requests need no locking.
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    scorer: ScoreCalculator,
    generator: Option<Arc<dyn TextGenerator>>,
    max_recommendations: usize,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            scorer: ScoreCalculator::new(),
            generator: None,
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }

    pub fn with_scorer(mut self, scorer: ScoreCalculator) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_max_recommendations(mut self, max_recommendations: usize) -> Self {
        self.max_recommendations = max_recommendations;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Full recommendation path. An empty filter result surfaces as
    /// `NoMatches`, distinct from an unknown id (`NotFound`).
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ServiceError> {
        request.validate()?;

        let candidates = filter::filter(&self.catalog, request);
        let total_found = candidates.len();
        if candidates.is_empty() {
            tracing::debug!(
                drink_type = %request.drink_type,
                state = %request.state,
                budget = %request.budget,
                "no candidates survived filtering"
            );
            return Err(ServiceError::NoMatches {
                drink_type: request.drink_type,
                state: request.state.clone(),
                budget: request.budget,
            });
        }

        let mut recommendations = Vec::with_capacity(candidates.len());
        for beverage in candidates {
            let score = self.scorer.score(beverage, request);
            let (why_recommended, pairings) = self.enrich(beverage, request).await;
            recommendations.push(Recommendation {
                beverage: beverage.clone(),
                score,
                pairings,
                why_recommended,
            });
        }

        let recommendations = ranking::rank(recommendations, self.max_recommendations);
        tracing::info!(
            drink_type = %request.drink_type,
            state = %request.state,
            total_found,
            returned = recommendations.len(),
            "recommendations assembled"
        );

        Ok(RecommendationResponse {
            recommendations,
            total_found,
            budget_range: ranking::budget_bracket(request.budget),
            search_criteria: request.clone(),
        })
    }

    /// Minimal-input path: casual occasion, no flavor or ABV constraints,
    /// top 3 only.
    pub async fn recommend_quick(
        &self,
        budget: Decimal,
        drink_type: DrinkType,
        state: impl Into<String>,
    ) -> Result<Vec<Recommendation>, ServiceError> {
        let request = RecommendationRequest::quick(budget, drink_type, state);
        let mut response = self.recommend(&request).await?;
        response.recommendations.truncate(QUICK_RECOMMENDATIONS);
        Ok(response.recommendations)
    }

    /// Detail lookup: deterministic casual-occasion pairings, similar items,
    /// availability metadata.
    pub fn beverage_detail(&self, id: &BeverageId) -> Result<BeverageDetail, ServiceError> {
        let beverage =
            self.catalog.find(id).ok_or_else(|| ServiceError::NotFound(id.0.clone()))?;

        let similar =
            self.similar(beverage, DEFAULT_SIMILAR_LIMIT).into_iter().cloned().collect::<Vec<_>>();
        let availability = AvailabilityInfo {
            available_states: beverage.available_states.iter().cloned().collect(),
            total_states: beverage.available_states.len(),
            price_display: format!("₹{}", beverage.price.normalize()),
            abv_display: beverage
                .abv
                .map(|abv| format!("{abv}%"))
                .unwrap_or_else(|| "Not specified".to_string()),
        };

        Ok(BeverageDetail {
            beverage: beverage.clone(),
            pairings: default_pairings(beverage.drink_type, Occasion::Casual),
            similar,
            availability,
        })
    }

    /// Same type and price within [0.7×, 1.3×] of the reference, excluding
    /// the item itself. Scan stops at `limit`: first-found wins, preserving
    /// catalog order.
    pub fn similar(&self, beverage: &Beverage, limit: usize) -> Vec<&Beverage> {
        let low = beverage.price * Decimal::new(70, 2);
        let high = beverage.price * Decimal::new(130, 2);

        let mut similar = Vec::new();
        for other in self.catalog.iter() {
            if similar.len() >= limit {
                break;
            }
            if other.id == beverage.id || other.drink_type != beverage.drink_type {
                continue;
            }
            if other.price >= low && other.price <= high {
                similar.push(other);
            }
        }
        similar
    }

    async fn enrich(
        &self,
        beverage: &Beverage,
        request: &RecommendationRequest,
    ) -> (String, Vec<Pairing>) {
        let Some(generator) = &self.generator else {
            return (
                fallback_explanation(beverage, request),
                default_pairings(beverage.drink_type, request.occasion),
            );
        };

        let why_recommended = match generator.explain(beverage, request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => fallback_explanation(beverage, request),
            Err(error) => {
                tracing::warn!(
                    beverage_id = %beverage.id,
                    error = %error,
                    "explanation generation failed, using template"
                );
                fallback_explanation(beverage, request)
            }
        };

        let pairings = match generator.suggest_pairings(beverage, request.occasion).await {
            Ok(pairings) => pairings,
            Err(error) => {
                tracing::warn!(
                    beverage_id = %beverage.id,
                    error = %error,
                    "pairing generation failed, using curated defaults"
                );
                default_pairings(beverage.drink_type, request.occasion)
            }
        };

        (why_recommended, pairings)
    }
}
