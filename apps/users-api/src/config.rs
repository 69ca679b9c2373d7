use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig};
use std::time::Duration;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Settings for the users resource.
///
/// - `USERS_COLLECTION` (default: users)
/// - `USERS_STORE_DEADLINE_SECS` (default: 10), budget for the store calls of one request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersConfig {
    pub collection: String,
    pub store_deadline: Duration,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            collection: domain_users::mongodb::DEFAULT_COLLECTION.to_string(),
            store_deadline: domain_users::DEFAULT_DEADLINE,
        }
    }
}

impl FromEnv for UsersConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let deadline_secs = env_parse("USERS_STORE_DEADLINE_SECS", defaults.store_deadline.as_secs())?;
        if deadline_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "USERS_STORE_DEADLINE_SECS".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            collection: env_or_default("USERS_COLLECTION", &defaults.collection),
            store_deadline: Duration::from_secs(deadline_secs),
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub users: UsersConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let users = UsersConfig::from_env()?;

        // Identify ourselves in the server logs unless MONGODB_APP_NAME says otherwise
        let mongodb = if mongodb.app_name.is_some() {
            mongodb
        } else {
            mongodb.with_app_name(env!("CARGO_PKG_NAME"))
        };

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            users,
            environment,
        })
    }
}
