use super::{CacheConfig, ClassifierConfig, ConfigError, LoggingConfig, ServerConfig, UpstreamConfig};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_DNS_PORT: u16 = 53;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub fast: Option<String>,
    pub clean: Option<String>,
    pub listen: Option<String>,
    pub cache_capacity: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    /// Read the optional TOML file, apply CLI overrides, then normalise
    /// every address to `host:port` form.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        config.normalize();
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    pub fn from_toml(origin: &str, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(fast) = overrides.fast {
            self.upstream.fast = fast;
        }
        if let Some(clean) = overrides.clean {
            self.upstream.clean = clean;
        }
        if let Some(listen) = overrides.listen {
            self.server.listen = listen;
        }
        if let Some(capacity) = overrides.cache_capacity {
            self.cache.capacity = capacity;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    fn normalize(&mut self) {
        self.upstream.fast = normalize_address(&self.upstream.fast);
        self.upstream.clean = normalize_address(&self.upstream.clean);
        self.server.listen = normalize_address(&self.server.listen);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fast_addr()?;
        self.clean_addr()?;
        self.listen_addr()?;

        if self.cache.capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "cache.capacity",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.upstream.query_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "upstream.query_timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: format!("'{}' is not one of {}", self.logging.level, LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    pub fn fast_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_socket_addr("upstream.fast", &self.upstream.fast)
    }

    pub fn clean_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_socket_addr("upstream.clean", &self.upstream.clean)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_socket_addr("server.listen", &self.server.listen)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream.query_timeout_ms)
    }

    pub fn min_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.min_ttl_secs)
    }
}

/// Append the default DNS port to a bare IP literal. Anything else is
/// returned trimmed and left for validation to judge.
pub fn normalize_address(address: &str) -> String {
    let address = address.trim();
    if address.parse::<SocketAddr>().is_ok() {
        return address.to_string();
    }
    match address.parse::<IpAddr>() {
        Ok(ip) => SocketAddr::new(ip, DEFAULT_DNS_PORT).to_string(),
        Err(_) => address.to_string(),
    }
}

fn parse_socket_addr(field: &'static str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        field,
        reason: format!("'{}' is not an ip:port address", value),
    })
}
