//! Boundary to the external text-generation collaborator.
//!
//! The collaborator is treated as unreliable: any failure, timeout, or
//! malformed structured response degrades to the deterministic pairing
//! tables and the templated explanation. Failures are logged by the engine,
//! never surfaced to the caller.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::beverage::{Beverage, Occasion};
use crate::domain::pairing::{Pairing, PairingKind};
use crate::domain::request::RecommendationRequest;

#[derive(Debug, Error)]
pub enum CollabError {
    #[error("text generation request failed: {0}")]
    Failed(String),
    #[error("text generation timed out")]
    Timeout,
    #[error("malformed collaborator response: {0}")]
    Malformed(String),
}

/// Natural-language enrichment provider. Implementations must bound their
/// own wait (a few seconds); the engine treats every error identically.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short explanation of why the beverage suits the request.
    async fn explain(
        &self,
        beverage: &Beverage,
        request: &RecommendationRequest,
    ) -> Result<String, CollabError>;

    /// Structured pairing suggestions for the beverage and occasion.
    async fn suggest_pairings(
        &self,
        beverage: &Beverage,
        occasion: Occasion,
    ) -> Result<Vec<Pairing>, CollabError>;
}

/// Templated justification used whenever no collaborator text is available.
pub fn fallback_explanation(beverage: &Beverage, request: &RecommendationRequest) -> String {
    let flavors =
        beverage.flavors.iter().map(|flavor| flavor.as_str()).collect::<Vec<_>>().join(", ");
    format!(
        "Perfect match for your {} occasion with {flavors} flavors within your budget.",
        request.occasion
    )
}

#[derive(Deserialize)]
struct PairingsEnvelope {
    pairings: Vec<Pairing>,
}

/// Strict parse of the collaborator's structured pairings payload: a JSON
/// object `{"pairings": [{type, name, description, ingredients?}]}`. Any
/// deviation is `Malformed` so the caller can degrade.
pub fn parse_structured_pairings(raw: &str) -> Result<Vec<Pairing>, CollabError> {
    let envelope: PairingsEnvelope =
        serde_json::from_str(raw).map_err(|error| CollabError::Malformed(error.to_string()))?;

    if envelope.pairings.is_empty() {
        return Err(CollabError::Malformed("empty pairings list".to_string()));
    }
    for pairing in &envelope.pairings {
        if pairing.name.trim().is_empty() {
            return Err(CollabError::Malformed("pairing with empty name".to_string()));
        }
        if pairing.kind == PairingKind::Cocktail
            && pairing.ingredients.as_deref().unwrap_or_default().is_empty()
        {
            return Err(CollabError::Malformed(format!(
                "cocktail pairing `{}` missing ingredients",
                pairing.name
            )));
        }
    }
    Ok(envelope.pairings)
}
