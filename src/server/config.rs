use std::{fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    service::order::code::OrderCodeScheme,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CLOSED_INTERVAL_HOURS: u32 = 5;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_EXPIRY_CRON: &str = "0 * * * * *";

/// Settings consumed by the order service.
#[derive(Debug, Clone)]
pub struct OrderSettings {
    /// Hours after submission until an unpaid order expires.
    pub closed_interval_hours: u32,
    pub code_scheme: OrderCodeScheme,
    /// Upper bound for a single service call against the store.
    pub store_timeout: Duration,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            closed_interval_hours: DEFAULT_CLOSED_INTERVAL_HOURS,
            code_scheme: OrderCodeScheme::default(),
            store_timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    pub order: OrderSettings,

    /// Cron expression for the order expiry sweep.
    pub expiry_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let store_timeout_secs: u64 = parse_or(
            "STORE_TIMEOUT_SECS",
            env_var("STORE_TIMEOUT_SECS"),
            DEFAULT_STORE_TIMEOUT_SECS,
        )?;
        if store_timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "STORE_TIMEOUT_SECS".to_string(),
                value: store_timeout_secs.to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: parse_value(
                "BIND_ADDR",
                env_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            )?,
            order: OrderSettings {
                closed_interval_hours: parse_or(
                    "ORDER_CLOSED_INTERVAL_HOURS",
                    env_var("ORDER_CLOSED_INTERVAL_HOURS"),
                    DEFAULT_CLOSED_INTERVAL_HOURS,
                )?,
                code_scheme: parse_or(
                    "ORDER_CODE_SCHEME",
                    env_var("ORDER_CODE_SCHEME"),
                    OrderCodeScheme::default(),
                )?,
                store_timeout: Duration::from_secs(store_timeout_secs),
            },
            expiry_schedule: env_var("ORDER_EXPIRY_CRON")
                .unwrap_or_else(|| DEFAULT_EXPIRY_CRON.to_string()),
        })
    }
}

/// Reads an optional environment variable, treating an empty value as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Parses `raw` into `T`, falling back to `default` when the variable is unset.
fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(value) => parse_value(name, value),
        None => Ok(default),
    }
}

fn parse_value<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let parsed = value.trim().parse::<T>();

    match parsed {
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: err.to_string(),
            value,
        }),
    }
}
