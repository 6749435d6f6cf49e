//! Process configuration loaded from the environment via OrthoConfig.
//!
//! Each concern has its own prefix: `DB_*` for the database and pool, `API_*`
//! for the HTTP server and `LOG_*` for logging. Every field carries its
//! default into the merge, so a group with nothing set still loads; accessors
//! fall back to the same defaults for hand-built values. [`AppConfig::load`] reads all
//! three and validates them; an optional `.env` file should be applied to the
//! environment beforehand.

use std::ffi::OsString;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::persistence::PoolConfig;

const PROGRAM_NAME: &str = "dealership";

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_NAME: &str = "goodschain";
const DEFAULT_SSL_MODE: &str = "disable";
const DEFAULT_MAX_OPEN_CONNS: u32 = 25;
const DEFAULT_MAX_IDLE_CONNS: u32 = 5;
const DEFAULT_CONN_MAX_LIFE_SECS: u64 = 300;

const DEFAULT_API_PORT: u16 = 3000;
const DEFAULT_READ_TIMEOUT_SECS: u64 = 15;
const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 15;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 60;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
const DEFAULT_API_VERSION: &str = "v1";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Startup configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A settings group could not be read or parsed.
    #[error("failed to load {group} settings: {message}")]
    Load {
        group: &'static str,
        message: String,
    },
    /// A value was read but is not acceptable.
    #[error("invalid {variable}: {reason}")]
    Invalid {
        variable: &'static str,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(variable: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            variable,
            reason: reason.into(),
        }
    }
}

/// Database connection and pool settings (`DB_*`).
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    #[ortho_config(default = String::from(DEFAULT_DB_HOST))]
    pub host: Option<String>,
    #[ortho_config(default = DEFAULT_DB_PORT)]
    pub port: Option<u16>,
    #[ortho_config(default = String::from(DEFAULT_DB_USER))]
    pub user: Option<String>,
    #[ortho_config(default = String::new())]
    pub password: Option<String>,
    #[ortho_config(default = String::from(DEFAULT_DB_NAME))]
    pub name: Option<String>,
    #[ortho_config(default = String::from(DEFAULT_SSL_MODE))]
    pub ssl_mode: Option<String>,
    /// Pool maximum size.
    #[ortho_config(default = DEFAULT_MAX_OPEN_CONNS)]
    pub max_open_conns: Option<u32>,
    /// Pool idle floor.
    #[ortho_config(default = DEFAULT_MAX_IDLE_CONNS)]
    pub max_idle_conns: Option<u32>,
    /// Connection lifetime in seconds.
    #[ortho_config(default = DEFAULT_CONN_MAX_LIFE_SECS)]
    pub conn_max_life: Option<u64>,
}

impl DatabaseSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_DB_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_DB_PORT)
    }

    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_DB_USER)
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DB_NAME)
    }

    pub fn ssl_mode(&self) -> &str {
        self.ssl_mode.as_deref().unwrap_or(DEFAULT_SSL_MODE)
    }

    pub fn max_open_conns(&self) -> u32 {
        self.max_open_conns.unwrap_or(DEFAULT_MAX_OPEN_CONNS)
    }

    pub fn max_idle_conns(&self) -> u32 {
        self.max_idle_conns.unwrap_or(DEFAULT_MAX_IDLE_CONNS)
    }

    pub fn conn_max_life(&self) -> Duration {
        Duration::from_secs(self.conn_max_life.unwrap_or(DEFAULT_CONN_MAX_LIFE_SECS))
    }

    /// Reject settings that cannot produce a working pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name().trim().is_empty() {
            return Err(ConfigError::invalid("DB_NAME", "must not be empty"));
        }
        if self.host().trim().is_empty() {
            return Err(ConfigError::invalid("DB_HOST", "must not be empty"));
        }
        if self.port() == 0 {
            return Err(ConfigError::invalid("DB_PORT", "must be between 1 and 65535"));
        }
        if self.max_open_conns() == 0 {
            return Err(ConfigError::invalid("DB_MAX_OPEN_CONNS", "must be positive"));
        }
        Ok(())
    }

    /// An empty password is only expected against a local database.
    pub fn password_warning(&self) -> Option<&'static str> {
        let local = matches!(self.host(), "localhost" | "127.0.0.1" | "::1");
        (self.password().is_empty() && !local)
            .then_some("DB_PASSWORD is empty for a non-local database host")
    }

    /// Connection URL with credentials percent-encoded.
    pub fn database_url(&self) -> Result<String, ConfigError> {
        let mut url = Url::parse("postgres://localhost")
            .map_err(|err| ConfigError::invalid("DB_HOST", err.to_string()))?;
        url.set_host(Some(self.host()))
            .map_err(|err| ConfigError::invalid("DB_HOST", err.to_string()))?;
        url.set_port(Some(self.port()))
            .map_err(|()| ConfigError::invalid("DB_PORT", "cannot be applied to the URL"))?;
        url.set_username(self.user())
            .map_err(|()| ConfigError::invalid("DB_USER", "cannot be applied to the URL"))?;
        if !self.password().is_empty() {
            url.set_password(Some(self.password()))
                .map_err(|()| ConfigError::invalid("DB_PASSWORD", "cannot be applied to the URL"))?;
        }
        url.set_path(self.name());
        url.query_pairs_mut().append_pair("sslmode", self.ssl_mode());
        Ok(url.into())
    }

    /// Pool configuration derived from these settings.
    pub fn pool_config(&self) -> Result<PoolConfig, ConfigError> {
        Ok(PoolConfig::new(self.database_url()?)
            .with_max_size(self.max_open_conns())
            .with_min_idle(Some(self.max_idle_conns().min(self.max_open_conns())))
            .with_max_lifetime(Some(self.conn_max_life())))
    }
}

/// HTTP server settings (`API_*`).
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "API")]
pub struct ApiSettings {
    #[ortho_config(default = DEFAULT_API_PORT)]
    pub port: Option<u16>,
    /// Client request timeout in seconds.
    #[ortho_config(default = DEFAULT_READ_TIMEOUT_SECS)]
    pub read_timeout: Option<u64>,
    /// Client disconnect timeout in seconds.
    #[ortho_config(default = DEFAULT_WRITE_TIMEOUT_SECS)]
    pub write_timeout: Option<u64>,
    /// Keep-alive in seconds.
    #[ortho_config(default = DEFAULT_IDLE_TIMEOUT_SECS)]
    pub idle_timeout: Option<u64>,
    /// Graceful shutdown deadline in seconds.
    #[ortho_config(default = DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    pub shutdown_timeout: Option<u64>,
    /// Reported in the startup log. `--version` belongs to clap.
    #[ortho_config(default = String::from(DEFAULT_API_VERSION), cli_long = "api-version")]
    pub version: Option<String>,
}

impl ApiSettings {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_API_PORT)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT_SECS))
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout.unwrap_or(DEFAULT_WRITE_TIMEOUT_SECS))
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout.unwrap_or(DEFAULT_IDLE_TIMEOUT_SECS))
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(
            self.shutdown_timeout
                .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
        )
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port() == 0 {
            return Err(ConfigError::invalid("API_PORT", "must be between 1 and 65535"));
        }
        Ok(())
    }
}

/// Logging settings (`LOG_*`).
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOG")]
pub struct LogSettings {
    /// One of debug, info, warn, error, fatal, panic.
    #[ortho_config(default = String::from(DEFAULT_LOG_LEVEL))]
    pub level: Option<String>,
}

impl LogSettings {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// All process settings.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub api: ApiSettings,
    pub log: LogSettings,
}

impl AppConfig {
    /// Read every settings group from the environment and validate it.
    pub fn load() -> Result<Self, ConfigError> {
        let database = DatabaseSettings::load_from_iter(program_args()).map_err(|err| {
            ConfigError::Load {
                group: "database",
                message: err.to_string(),
            }
        })?;
        let api = ApiSettings::load_from_iter(program_args()).map_err(|err| ConfigError::Load {
            group: "api",
            message: err.to_string(),
        })?;
        let log = LogSettings::load_from_iter(program_args()).map_err(|err| ConfigError::Load {
            group: "log",
            message: err.to_string(),
        })?;

        let config = Self { database, api, log };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.api.validate()?;
        crate::logging::parse_level(self.log.level())?;
        Ok(())
    }

    /// Non-fatal findings to log once logging is up.
    pub fn warnings(&self) -> Vec<&'static str> {
        self.database.password_warning().into_iter().collect()
    }
}

fn program_args() -> [OsString; 1] {
    [OsString::from(PROGRAM_NAME)]
}
