//! Client configuration: which endpoint to talk to and how long to wait.
//!
//! Each setting resolves in order: explicit CLI value, environment variable,
//! built-in default.

use std::{fmt, str::FromStr, time::Duration};

use crate::error::{KardsError, Result};

pub const ENVIRONMENT_ENV_VAR: &str = "KARDS_STATS_ENV";
pub const ENDPOINT_ENV_VAR: &str = "KARDS_STATS_ENDPOINT";
pub const TIMEOUT_ENV_VAR: &str = "KARDS_STATS_TIMEOUT_SECS";

pub const PRODUCTION_ENDPOINT: &str = "https://kards-public-stats.herokuapp.com/";
pub const LOCAL_ENDPOINT: &str = "http://localhost:4848/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Environment {
    /// Public hosted stats service
    Production,
    /// Stats service running on this machine
    Local,
}

impl Environment {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_ENDPOINT,
            Environment::Local => LOCAL_ENDPOINT,
        }
    }
}

/// Debug builds talk to a local server, release builds to production.
impl Default for Environment {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Environment::Local
        } else {
            Environment::Production
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Environment::Production => "production",
            Environment::Local => "local",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Environment {
    type Err = KardsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "local" | "development" | "dev" => Ok(Environment::Local),
            _ => Err(KardsError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

/// Settings values supplied on the command line; `None` falls through to env/defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub environment: Option<Environment>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub endpoint: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            environment: Environment::default(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Resolve against the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn resolve_with<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match overrides.environment {
            Some(env) => env,
            None => match lookup(ENVIRONMENT_ENV_VAR) {
                Some(raw) => raw.parse()?,
                None => Environment::default(),
            },
        };

        let endpoint = overrides
            .endpoint
            .or_else(|| lookup(ENDPOINT_ENV_VAR).filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| environment.endpoint().to_string());

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => validate_timeout(secs, &secs.to_string())?,
            None => match lookup(TIMEOUT_ENV_VAR) {
                Some(raw) => parse_timeout(&raw)?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Ok(Self {
            environment,
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| KardsError::InvalidTimeout {
            value: raw.to_string(),
        })?;
    validate_timeout(secs, raw)
}

fn validate_timeout(secs: u64, raw: &str) -> Result<u64> {
    if secs == 0 {
        Err(KardsError::InvalidTimeout {
            value: raw.to_string(),
        })
    } else {
        Ok(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_follow_build_mode() {
        let config = ClientConfig::resolve_with(ConfigOverrides::default(), lookup_from(&[])).unwrap();

        assert_eq!(config.environment, Environment::default());
        assert_eq!(config.endpoint, Environment::default().endpoint());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_environment_from_env_var() {
        let config = ClientConfig::resolve_with(
            ConfigOverrides::default(),
            lookup_from(&[(ENVIRONMENT_ENV_VAR, "production")]),
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.endpoint, PRODUCTION_ENDPOINT);
    }

    #[test]
    fn test_cli_overrides_env() {
        let overrides = ConfigOverrides {
            environment: Some(Environment::Local),
            endpoint: None,
            timeout_secs: Some(5),
        };
        let config = ClientConfig::resolve_with(
            overrides,
            lookup_from(&[
                (ENVIRONMENT_ENV_VAR, "production"),
                (TIMEOUT_ENV_VAR, "60"),
            ]),
        )
        .unwrap();

        assert_eq!(config.endpoint, LOCAL_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_endpoint_env_var_overrides_environment() {
        let config = ClientConfig::resolve_with(
            ConfigOverrides {
                environment: Some(Environment::Production),
                ..Default::default()
            },
            lookup_from(&[(ENDPOINT_ENV_VAR, "http://stats.internal:9000/")]),
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.endpoint, "http://stats.internal:9000/");
    }

    #[test]
    fn test_blank_endpoint_env_var_is_ignored() {
        let config = ClientConfig::resolve_with(
            ConfigOverrides {
                environment: Some(Environment::Local),
                ..Default::default()
            },
            lookup_from(&[(ENDPOINT_ENV_VAR, "  ")]),
        )
        .unwrap();

        assert_eq!(config.endpoint, LOCAL_ENDPOINT);
    }

    #[test]
    fn test_invalid_environment_env_var() {
        let result = ClientConfig::resolve_with(
            ConfigOverrides::default(),
            lookup_from(&[(ENVIRONMENT_ENV_VAR, "staging")]),
        );

        match result {
            Err(KardsError::InvalidEnvironment { value }) => assert_eq!(value, "staging"),
            other => panic!("Expected InvalidEnvironment, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_timeouts() {
        for raw in ["0", "-1", "soon", ""] {
            let result = ClientConfig::resolve_with(
                ConfigOverrides::default(),
                lookup_from(&[(TIMEOUT_ENV_VAR, raw)]),
            );
            assert!(
                matches!(result, Err(KardsError::InvalidTimeout { .. })),
                "accepted {raw:?}"
            );
        }

        let result = ClientConfig::resolve_with(
            ConfigOverrides {
                timeout_secs: Some(0),
                ..Default::default()
            },
            lookup_from(&[]),
        );
        assert!(matches!(result, Err(KardsError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" local ".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
