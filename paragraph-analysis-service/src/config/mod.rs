use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Origin list entry meaning "any origin".
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "test" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => Err(format!("Unknown environment '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![ANY_ORIGIN.to_string()],
        }
    }
}

impl AnalysisConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let env_str = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let environment: Environment = env_str
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;

        let is_prod = environment == Environment::Prod;

        Ok(AnalysisConfig {
            common: common_config,
            environment,
            service_name: get_env("SERVICE_NAME", Some("paragraph-analysis-service"), is_prod)?,
            service_version: get_env(
                "SERVICE_VERSION",
                Some(env!("CARGO_PKG_VERSION")),
                is_prod,
            )?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env(
                    "CORS_ALLOWED_ORIGINS",
                    Some(ANY_ORIGIN),
                    is_prod,
                )?),
            },
        })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            environment: Environment::Dev,
            service_name: "paragraph-analysis-service".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
            cors: CorsConfig::default(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![ANY_ORIGIN.to_string()]
    } else {
        origins
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
