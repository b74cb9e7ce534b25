//! Bearer-token resolution against the hosted auth service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

const USER_PATH: &str = "auth/v1/user";

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth service returned {status}")]
    Api { status: u16 },

    #[error("invalid auth service URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Maps a bearer token to a user id.
///
/// `Ok(None)` means the token was rejected; callers treat it as anonymous.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn user_id(&self, token: &str) -> Result<Option<Uuid>, IdentityError>;
}

#[derive(Deserialize)]
struct AuthUser {
    id: Uuid,
}

pub struct SupabaseIdentity {
    client: Client,
    endpoint: Url,
    anon_key: String,
}

impl SupabaseIdentity {
    /// # Errors
    ///
    /// Returns [`IdentityError::Http`] if the client cannot be built or
    /// [`IdentityError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, anon_key: &str, timeout_secs: u64) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(USER_PATH))
            .map_err(|_| IdentityError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            anon_key: anon_key.to_owned(),
        })
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    async fn user_id(&self, token: &str) -> Result<Option<Uuid>, IdentityError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let user: AuthUser = response.json().await?;
                Ok(Some(user.id))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => Err(IdentityError::Api {
                status: status.as_u16(),
            }),
        }
    }
}
