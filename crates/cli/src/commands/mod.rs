pub mod catalog;
pub mod config;
pub mod drink;
pub mod recommend;

use std::sync::Arc;

use barkeep_core::config::AppConfig;
use barkeep_core::{Catalog, RecommendationEngine, ScoreCalculator, ServiceError};
use serde::Serialize;
use serde_json::Value;

pub const EXIT_OK: u8 = 0;
pub const EXIT_INTERNAL: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_INVALID_REQUEST: u8 = 3;
pub const EXIT_NO_RESULTS: u8 = 4;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>, data: Option<Value>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: EXIT_OK, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn from_service_error(command: &str, error: &ServiceError) -> Self {
        let (error_class, exit_code) = match error {
            ServiceError::NotFound(_) => ("not_found", EXIT_NO_RESULTS),
            ServiceError::NoMatches { .. } => ("no_matches", EXIT_NO_RESULTS),
            ServiceError::Domain(_) => ("invalid_request", EXIT_INVALID_REQUEST),
        };
        Self::failure(command, error_class, error.user_message(), exit_code)
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Builds the engine from configuration: catalog snapshot, scorer overrides,
/// and the text-generation collaborator when one is enabled.
pub fn build_engine(config: &AppConfig) -> RecommendationEngine {
    let catalog = Arc::new(Catalog::load_or_empty(config.catalog.path.as_deref()));

    let scorer = match &config.engine.domestic_brands {
        Some(brands) => ScoreCalculator::new().with_domestic_brands(brands.clone()),
        None => ScoreCalculator::new(),
    };

    let mut engine = RecommendationEngine::new(catalog)
        .with_scorer(scorer)
        .with_max_recommendations(config.engine.max_recommendations);

    if config.llm.enabled {
        match barkeep_agent::LlmTextGenerator::from_config(&config.llm) {
            Ok(generator) => engine = engine.with_generator(Arc::new(generator)),
            Err(error) => {
                tracing::warn!(error = %error, "collaborator unavailable, using curated output");
            }
        }
    }

    engine
}
