use std::env;
use std::sync::{Mutex, OnceLock};

use barkeep_cli::commands::{catalog, config, drink, recommend};
use barkeep_core::config::AppConfig;
use barkeep_core::{DrinkType, Occasion};
use rust_decimal::Decimal;
use serde_json::Value;

fn recommend_args(budget: i64, drink_type: DrinkType, state: &str) -> recommend::RecommendArgs {
    recommend::RecommendArgs {
        budget: Decimal::from(budget),
        drink_type,
        state: state.to_string(),
        occasion: Occasion::Casual,
        flavors: Vec::new(),
        min_abv: None,
        max_abv: None,
        quick: false,
    }
}

#[tokio::test]
async fn recommend_returns_ranked_picks_from_bundled_catalog() {
    let config = AppConfig::default();
    let result =
        recommend::run(&config, recommend_args(2000, DrinkType::Whiskey, "Delhi")).await;
    assert_eq!(result.exit_code, 0, "expected successful recommendation run");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "recommend");
    assert_eq!(payload["status"], "ok");

    let recommendations = payload["data"]["recommendations"].as_array().expect("data array");
    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 5);
    for recommendation in recommendations {
        assert_eq!(recommendation["beverage"]["type"], "whiskey");
        assert!(recommendation["score"].as_f64().expect("score") > 0.0);
        assert!(!recommendation["pairings"].as_array().expect("pairings").is_empty());
    }
}

#[tokio::test]
async fn recommend_reports_no_matches_for_unavailable_state() {
    let config = AppConfig::default();
    let result =
        recommend::run(&config, recommend_args(2000, DrinkType::Whiskey, "Gujarat")).await;
    assert_eq!(result.exit_code, 4, "expected no-results exit code");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "no_matches");
    assert!(payload["message"].as_str().unwrap_or("").contains("₹2000"));
}

#[tokio::test]
async fn recommend_rejects_out_of_contract_budget() {
    let config = AppConfig::default();
    let result = recommend::run(&config, recommend_args(50, DrinkType::Whiskey, "Delhi")).await;
    assert_eq!(result.exit_code, 3, "expected invalid-request exit code");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["error_class"], "invalid_request");
}

#[tokio::test]
async fn quick_recommend_caps_at_three_picks() {
    let config = AppConfig::default();
    let mut args = recommend_args(5000, DrinkType::Whiskey, "Delhi");
    args.quick = true;

    let result = recommend::run(&config, args).await;
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let picks = payload["data"].as_array().expect("quick picks array");
    assert!(!picks.is_empty());
    assert!(picks.len() <= 3);
}

#[test]
fn drink_returns_detail_with_similar_items() {
    let config = AppConfig::default();
    let result = drink::run(&config, drink::DrinkArgs { id: "whiskey_001".to_string() });
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "drink");
    assert_eq!(payload["data"]["beverage"]["id"], "whiskey_001");
    assert!(payload["data"]["availability"]["total_states"].as_u64().unwrap_or(0) >= 1);
}

#[test]
fn drink_reports_not_found_for_unknown_id() {
    let config = AppConfig::default();
    let result = drink::run(&config, drink::DrinkArgs { id: "whiskey_404".to_string() });
    assert_eq!(result.exit_code, 4);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["error_class"], "not_found");
    assert!(payload["message"].as_str().unwrap_or("").contains("whiskey_404"));
}

#[test]
fn catalog_applies_type_and_price_filters() {
    let config = AppConfig::default();
    let result = catalog::run(
        &config,
        catalog::CatalogArgs {
            drink_type: Some(DrinkType::Gin),
            state: None,
            min_price: None,
            max_price: Some(Decimal::from(2000)),
            facets: false,
        },
    );
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let entries = payload["data"].as_array().expect("entries array");
    assert!(!entries.is_empty());
    for entry in entries {
        assert_eq!(entry["type"], "gin");
        // Decimal serializes as a string.
        let price: f64 = entry["price"].as_str().expect("price string").parse().expect("numeric");
        assert!(price <= 2000.0);
    }
}

#[test]
fn catalog_facets_list_supported_enumerations() {
    let config = AppConfig::default();
    let result = catalog::run(
        &config,
        catalog::CatalogArgs {
            drink_type: None,
            state: None,
            min_price: None,
            max_price: None,
            facets: true,
        },
    );
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let types = payload["data"]["drink_types"].as_array().expect("drink types");
    assert_eq!(types.len(), 6);
    assert!(types.iter().any(|t| t == "whiskey"));

    let flavors = payload["data"]["flavors"].as_array().expect("flavors");
    assert!(flavors.iter().any(|f| f == "smoky"));
    assert!(payload["data"]["occasions"].as_array().is_some_and(|o| o.len() == 6));
}

#[test]
fn config_renders_defaults_with_source_attribution() {
    with_env(&[], || {
        let output = config::run(None);
        assert!(output.contains("catalog.path = <bundled>"));
        assert!(output.contains("llm.enabled = false"));
        assert!(output.contains("(source: default)"));
    });
}

#[test]
fn config_redacts_api_key_and_attributes_env_source() {
    with_env(&[("BARKEEP_LLM_API_KEY", "sk-very-secret")], || {
        let output = config::run(None);
        assert!(!output.contains("sk-very-secret"));
        assert!(output.contains("llm.api_key = <redacted> (source: env (BARKEEP_LLM_API_KEY))"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "BARKEEP_CATALOG_PATH",
        "BARKEEP_ENGINE_MAX_RECOMMENDATIONS",
        "BARKEEP_LLM_ENABLED",
        "BARKEEP_LLM_PROVIDER",
        "BARKEEP_LLM_API_KEY",
        "BARKEEP_LLM_BASE_URL",
        "BARKEEP_LLM_MODEL",
        "BARKEEP_LLM_TIMEOUT_SECS",
        "BARKEEP_LLM_MAX_RETRIES",
        "BARKEEP_LOGGING_LEVEL",
        "BARKEEP_LOGGING_FORMAT",
        "BARKEEP_LOG_LEVEL",
        "BARKEEP_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
