use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::ranking::MAX_RECOMMENDATIONS;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub engine: EngineConfig,
    pub llm: LlmConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file. Unset means the bundled seed catalog.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub max_recommendations: usize,
    /// Overrides the built-in domestic-brand allow-list used by the origin
    /// affinity factor.
    pub domestic_brands: Option<Vec<String>>,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    /// When false the engine runs purely on deterministic fallbacks.
    pub enabled: bool,
    pub provider: LlmProvider,
    pub api_key: Option<SecretString>,
    pub base_url: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Anthropic,
    Ollama,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub llm_enabled: Option<bool>,
    pub llm_provider: Option<LlmProvider>,
    pub llm_model: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig { path: None },
            engine: EngineConfig {
                max_recommendations: MAX_RECOMMENDATIONS,
                domestic_brands: None,
            },
            llm: LlmConfig {
                enabled: false,
                provider: LlmProvider::OpenAi,
                api_key: None,
                base_url: None,
                model: "gpt-3.5-turbo".to_string(),
                timeout_secs: 10,
                max_retries: 2,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

fn secret_value(value: String) -> SecretString {
    value.into()
}

impl std::str::FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            "ollama" => Ok(Self::Ollama),
            other => Err(ConfigError::Validation(format!(
                "unsupported llm provider `{other}` (expected openai|anthropic|ollama)"
            ))),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    catalog: Option<CatalogPatch>,
    engine: Option<EnginePatch>,
    llm: Option<LlmPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPatch {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct EnginePatch {
    max_recommendations: Option<usize>,
    domestic_brands: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct LlmPatch {
    enabled: Option<bool>,
    provider: Option<LlmProvider>,
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
    max_retries: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("barkeep.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(catalog) = patch.catalog {
            if let Some(path) = catalog.path {
                self.catalog.path = Some(path);
            }
        }

        if let Some(engine) = patch.engine {
            if let Some(max_recommendations) = engine.max_recommendations {
                self.engine.max_recommendations = max_recommendations;
            }
            if let Some(domestic_brands) = engine.domestic_brands {
                self.engine.domestic_brands = Some(domestic_brands);
            }
        }

        if let Some(llm) = patch.llm {
            if let Some(enabled) = llm.enabled {
                self.llm.enabled = enabled;
            }
            if let Some(provider) = llm.provider {
                self.llm.provider = provider;
            }
            if let Some(api_key) = llm.api_key {
                self.llm.api_key = Some(secret_value(api_key));
            }
            if let Some(base_url) = llm.base_url {
                self.llm.base_url = Some(base_url);
            }
            if let Some(model) = llm.model {
                self.llm.model = model;
            }
            if let Some(timeout_secs) = llm.timeout_secs {
                self.llm.timeout_secs = timeout_secs;
            }
            if let Some(max_retries) = llm.max_retries {
                self.llm.max_retries = max_retries;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("BARKEEP_CATALOG_PATH") {
            self.catalog.path = Some(PathBuf::from(value));
        }

        if let Some(value) = read_env("BARKEEP_ENGINE_MAX_RECOMMENDATIONS") {
            self.engine.max_recommendations =
                parse_usize("BARKEEP_ENGINE_MAX_RECOMMENDATIONS", &value)?;
        }

        if let Some(value) = read_env("BARKEEP_LLM_ENABLED") {
            self.llm.enabled = parse_bool("BARKEEP_LLM_ENABLED", &value)?;
        }
        if let Some(value) = read_env("BARKEEP_LLM_PROVIDER") {
            self.llm.provider = value.parse()?;
        }
        if let Some(value) = read_env("BARKEEP_LLM_API_KEY") {
            self.llm.api_key = Some(secret_value(value));
        }
        if let Some(value) = read_env("BARKEEP_LLM_BASE_URL") {
            self.llm.base_url = Some(value);
        }
        if let Some(value) = read_env("BARKEEP_LLM_MODEL") {
            self.llm.model = value;
        }
        if let Some(value) = read_env("BARKEEP_LLM_TIMEOUT_SECS") {
            self.llm.timeout_secs = parse_u64("BARKEEP_LLM_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = read_env("BARKEEP_LLM_MAX_RETRIES") {
            self.llm.max_retries = parse_u32("BARKEEP_LLM_MAX_RETRIES", &value)?;
        }

        let log_level = read_env("BARKEEP_LOGGING_LEVEL").or_else(|| read_env("BARKEEP_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("BARKEEP_LOGGING_FORMAT").or_else(|| read_env("BARKEEP_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(catalog_path) = overrides.catalog_path {
            self.catalog.path = Some(catalog_path);
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(llm_enabled) = overrides.llm_enabled {
            self.llm.enabled = llm_enabled;
        }
        if let Some(llm_provider) = overrides.llm_provider {
            self.llm.provider = llm_provider;
        }
        if let Some(llm_model) = overrides.llm_model {
            self.llm.model = llm_model;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.max_recommendations == 0 {
            return Err(ConfigError::Validation(
                "engine.max_recommendations must be greater than zero".to_string(),
            ));
        }

        if self.llm.enabled {
            if self.llm.timeout_secs == 0 {
                return Err(ConfigError::Validation(
                    "llm.timeout_secs must be greater than zero".to_string(),
                ));
            }
            let needs_key = !matches!(self.llm.provider, LlmProvider::Ollama);
            if needs_key && self.llm.api_key.is_none() {
                return Err(ConfigError::Validation(format!(
                    "llm.api_key is required when llm.enabled = true and provider is {:?}",
                    self.llm.provider
                )));
            }
            if self.llm.model.trim().is_empty() {
                return Err(ConfigError::Validation("llm.model must not be empty".to_string()));
            }
        }

        let level = self.logging.level.trim().to_ascii_lowercase();
        if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of trace|debug|info|warn|error, got `{}`",
                self.logging.level
            )));
        }

        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("barkeep.toml"), PathBuf::from("config/barkeep.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvOverride { key: key.to_string(), value: value.to_string() }),
    }
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::{AppConfig, ConfigOverrides, LlmProvider, LoadOptions, LogFormat};

    fn load_from(contents: &str) -> Result<AppConfig, super::ConfigError> {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{contents}").expect("write config");
        AppConfig::load(LoadOptions {
            config_path: Some(file.path().to_path_buf()),
            require_file: true,
            overrides: ConfigOverrides::default(),
        })
    }

    #[test]
    fn defaults_are_valid_and_llm_disabled() {
        let config = AppConfig::default();
        config.validate().expect("defaults valid");
        assert!(!config.llm.enabled);
        assert_eq!(config.engine.max_recommendations, 5);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn file_patch_overrides_defaults() {
        let config = load_from(
            r#"
            [catalog]
            path = "data/spirits.json"

            [engine]
            max_recommendations = 10
            domestic_brands = ["Amrut", "Paul John"]

            [llm]
            enabled = true
            provider = "openai"
            api_key = "sk-test"
            model = "gpt-4o-mini"
            timeout_secs = 5

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .expect("loads");

        assert_eq!(config.catalog.path, Some(PathBuf::from("data/spirits.json")));
        assert_eq!(config.engine.max_recommendations, 10);
        assert_eq!(config.engine.domestic_brands.as_deref().map(|b| b.len()), Some(2));
        assert!(config.llm.enabled);
        assert_eq!(config.llm.provider, LlmProvider::OpenAi);
        assert_eq!(config.llm.timeout_secs, 5);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = AppConfig::load(LoadOptions {
            config_path: Some(PathBuf::from("/no/such/barkeep.toml")),
            require_file: true,
            overrides: ConfigOverrides::default(),
        });
        assert!(matches!(result, Err(super::ConfigError::MissingConfigFile(_))));
    }

    #[test]
    fn enabled_llm_without_api_key_fails_validation() {
        let result = load_from(
            r#"
            [llm]
            enabled = true
            provider = "openai"
            "#,
        );
        assert!(matches!(result, Err(super::ConfigError::Validation(_))));
    }

    #[test]
    fn ollama_provider_needs_no_api_key() {
        let config = load_from(
            r#"
            [llm]
            enabled = true
            provider = "ollama"
            base_url = "http://localhost:11434"
            model = "llama3.1"
            "#,
        )
        .expect("loads");
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = load_from(
            r#"
            [logging]
            level = "loud"
            "#,
        );
        assert!(matches!(result, Err(super::ConfigError::Validation(_))));
    }

    #[test]
    fn explicit_overrides_win_over_file_values() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[logging]\nlevel = \"warn\"\n").expect("write config");

        let config = AppConfig::load(LoadOptions {
            config_path: Some(file.path().to_path_buf()),
            require_file: true,
            overrides: ConfigOverrides {
                log_level: Some("error".to_string()),
                llm_model: Some("gpt-4o".to_string()),
                ..ConfigOverrides::default()
            },
        })
        .expect("loads");

        assert_eq!(config.logging.level, "error");
        assert_eq!(config.llm.model, "gpt-4o");
    }

    #[test]
    fn interpolation_reports_missing_variables() {
        let result = load_from(
            r#"
            [llm]
            api_key = "${BARKEEP_TEST_UNSET_VARIABLE}"
            "#,
        );
        assert!(matches!(result, Err(super::ConfigError::MissingEnvInterpolation { .. })));
    }
}
