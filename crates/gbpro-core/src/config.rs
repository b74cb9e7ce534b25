use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Empty strings count as unset so `.env` templates can leave keys blank.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let database_url = require("DATABASE_URL")?;
    let env = parse_environment(&or_default("GBPRO_ENV", "development"))?;
    let bind_addr = parse_addr("GBPRO_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("GBPRO_LOG_LEVEL", "info");

    let db_max_connections = parse_u32("GBPRO_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("GBPRO_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("GBPRO_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let google_places_api_key = optional("GOOGLE_PLACES_API_KEY");
    let places_base_url = optional("GBPRO_PLACES_BASE_URL");
    let openai_api_key = optional("OPENAI_API_KEY");
    let openai_base_url = or_default("GBPRO_OPENAI_BASE_URL", "https://api.openai.com");
    let openai_model = or_default("GBPRO_OPENAI_MODEL", "gpt-4o-mini");

    let upstream_timeout_secs = parse_u64("GBPRO_UPSTREAM_TIMEOUT_SECS", "8")?;
    if upstream_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GBPRO_UPSTREAM_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let supabase_url = optional("SUPABASE_URL");
    let supabase_anon_key = optional("SUPABASE_ANON_KEY");
    let rate_limit_per_minute = parse_usize("GBPRO_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        google_places_api_key,
        places_base_url,
        openai_api_key,
        openai_base_url,
        openai_model,
        upstream_timeout_secs,
        supabase_url,
        supabase_anon_key,
        rate_limit_per_minute,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GBPRO_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
