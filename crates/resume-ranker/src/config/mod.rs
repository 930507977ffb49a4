use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::matching::{EngineConfig, KeywordVocabulary, MatchStrategy, UnknownMatchStrategy};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub ranking: RankingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let strategy = match env::var("RANKER_MATCH_STRATEGY") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .parse::<MatchStrategy>()
                .map_err(|source| ConfigError::InvalidMatchStrategy { source })?,
            _ => MatchStrategy::default(),
        };
        let vocabulary = env::var("RANKER_VOCABULARY")
            .ok()
            .map(|raw| KeywordVocabulary::new(raw.split(',')))
            .filter(|vocabulary| !vocabulary.is_empty());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            ranking: RankingConfig {
                strategy,
                vocabulary,
            },
        })
    }

    pub fn engine_config(&self) -> EngineConfig {
        self.ranking.engine_config()
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Engine tunables exposed through the environment.
#[derive(Debug, Clone, Default)]
pub struct RankingConfig {
    pub strategy: MatchStrategy,
    /// Replacement keyword list; `None` keeps the built-in vocabulary.
    pub vocabulary: Option<KeywordVocabulary>,
}

impl RankingConfig {
    pub fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::default().with_strategy(self.strategy);
        match &self.vocabulary {
            Some(vocabulary) => config.with_vocabulary(vocabulary.clone()),
            None => config,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMatchStrategy { source: UnknownMatchStrategy },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMatchStrategy { source } => {
                write!(f, "RANKER_MATCH_STRATEGY is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidMatchStrategy { source } => Some(source),
        }
    }
}
