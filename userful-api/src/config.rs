//! Connection configuration for the Userful management API
//!
//! The client itself only ever takes an explicit [`ClientConfig`];
//! [`ClientConfig::from_env`] exists for process boundaries that want the
//! conventional `USERFUL_*` environment variables.

use std::env;
use thiserror::Error;

/// Default port of the Userful management API
pub const DEFAULT_PORT: u16 = 9000;

const ENV_HOST: &str = "USERFUL_HOST";
const ENV_USER: &str = "USERFUL_USER";
const ENV_PASS: &str = "USERFUL_PASS";
const ENV_PORT: &str = "USERFUL_PORT";

/// Configuration error when reading from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid port value {0:?}")]
    InvalidPort(String),
}

/// Connection parameters for a Userful installation
///
/// Immutable once constructed; owned by the client instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl ClientConfig {
    /// Create a configuration with the default port
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            port: DEFAULT_PORT,
        }
    }

    /// Override the API port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Read configuration from `USERFUL_HOST`, `USERFUL_USER`,
    /// `USERFUL_PASS` and `USERFUL_PORT`
    ///
    /// The port variable is optional and defaults to 9000; the other three
    /// are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var(ENV_HOST).map_err(|_| ConfigError::MissingVar(ENV_HOST))?;
        let user = env::var(ENV_USER).map_err(|_| ConfigError::MissingVar(ENV_USER))?;
        let password = env::var(ENV_PASS).map_err(|_| ConfigError::MissingVar(ENV_PASS))?;
        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            user,
            password,
            port,
        })
    }

    /// Base URL of the management API, fixed path prefix `/api`
    pub fn api_url(&self) -> String {
        format!("http://{}:{}/api", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_port() {
        let config = ClientConfig::new("10.0.0.5", "admin", "hunter2");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_url(), "http://10.0.0.5:9000/api");
    }

    #[test]
    fn test_with_port_overrides_default() {
        let config = ClientConfig::new("signage.local", "admin", "hunter2").with_port(8080);
        assert_eq!(config.api_url(), "http://signage.local:8080/api");
    }

    // Environment manipulation is process-global; all from_env cases run
    // sequentially in one test so parallel tests never observe a partial
    // environment.
    #[test]
    fn test_from_env() {
        env::remove_var(ENV_HOST);
        env::remove_var(ENV_USER);
        env::remove_var(ENV_PASS);
        env::remove_var(ENV_PORT);

        match ClientConfig::from_env() {
            Err(ConfigError::MissingVar(var)) => assert_eq!(var, ENV_HOST),
            other => panic!("expected MissingVar, got {:?}", other),
        }

        env::set_var(ENV_HOST, "10.0.0.5");
        env::set_var(ENV_USER, "admin");
        env::set_var(ENV_PASS, "hunter2");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.port, DEFAULT_PORT);

        env::set_var(ENV_PORT, "9100");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.port, 9100);

        env::set_var(ENV_PORT, "not-a-port");
        match ClientConfig::from_env() {
            Err(ConfigError::InvalidPort(raw)) => assert_eq!(raw, "not-a-port"),
            other => panic!("expected InvalidPort, got {:?}", other),
        }

        env::remove_var(ENV_HOST);
        env::remove_var(ENV_USER);
        env::remove_var(ENV_PASS);
        env::remove_var(ENV_PORT);
    }
}
