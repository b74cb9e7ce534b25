//! Shared types and configuration for the gbpro workspace.

mod app_config;
mod caller;
mod config;
mod listing;
mod signals;
mod subscription;

pub use app_config::{AppConfig, Environment};
pub use caller::Caller;
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::Listing;
pub use signals::ProfileSignals;
pub use subscription::{Subscription, SubscriptionState, SubscriptionTier};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
