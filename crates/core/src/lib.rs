pub mod catalog;
pub mod collab;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod pairings;

pub use catalog::{Catalog, CatalogError};
pub use collab::{fallback_explanation, parse_structured_pairings, CollabError, TextGenerator};
pub use config::{
    AppConfig, ConfigError, ConfigOverrides, LlmConfig, LlmProvider, LoadOptions, LogFormat,
    LoggingConfig,
};
pub use domain::beverage::{Beverage, BeverageId, DrinkType, FlavorProfile, Occasion};
pub use domain::pairing::{Pairing, PairingKind};
pub use domain::request::RecommendationRequest;
pub use domain::response::{
    AvailabilityInfo, BeverageDetail, Recommendation, RecommendationResponse,
};
pub use engine::{
    RecommendationEngine, ScoreCalculator, ScoringWeights, DEFAULT_WEIGHTS, MAX_RECOMMENDATIONS,
    QUICK_RECOMMENDATIONS,
};
pub use errors::{DomainError, ServiceError};
pub use pairings::default_pairings;
