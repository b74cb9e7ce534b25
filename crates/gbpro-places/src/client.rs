//! HTTP client for the Google Places API (New) Text Search endpoint.

use std::time::Duration;

use async_trait::async_trait;
use gbpro_audit::{PlacesLookup, UpstreamError};
use gbpro_core::Listing;
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::normalize::normalize_place;
use crate::types::{ErrorEnvelope, SearchTextRequest, SearchTextResponse};

pub const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/";
const SEARCH_TEXT_PATH: &str = "v1/places:searchText";

const SEARCH_RESULT_COUNT: u32 = 5;
const NEARBY_RESULT_COUNT: u32 = 10;

const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,\
places.rating,places.userRatingCount,places.types,places.nationalPhoneNumber,\
places.internationalPhoneNumber,places.websiteUri,places.regularOpeningHours,\
places.photos,places.editorialSummary,places.businessStatus";

/// Competitor rows only need identity and the compared metrics.
const NEARBY_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,\
places.rating,places.userRatingCount,places.types,places.photos";

/// Client for `places:searchText`.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl PlacesClient {
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("gbpro/0.1 (profile-audit)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(SEARCH_TEXT_PATH))
            .map_err(|_| PlacesError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Free-text search returning up to five fully described listings.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Api`] on a non-2xx status.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search_text(&self, query: &str) -> Result<Vec<Listing>, PlacesError> {
        self.search_with(query, SEARCH_RESULT_COUNT, SEARCH_FIELD_MASK)
            .await
    }

    /// Up to ten `category` listings near `address`, in API order.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::search_text`].
    pub async fn search_category_near(
        &self,
        category: &str,
        address: &str,
    ) -> Result<Vec<Listing>, PlacesError> {
        let query = nearby_query(category, address);
        self.search_with(&query, NEARBY_RESULT_COUNT, NEARBY_FIELD_MASK)
            .await
    }

    async fn search_with(
        &self,
        query: &str,
        max_result_count: u32,
        field_mask: &str,
    ) -> Result<Vec<Listing>, PlacesError> {
        let request = SearchTextRequest {
            text_query: query,
            language_code: "en",
            max_result_count,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", field_mask)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "places search rejected");
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchTextResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: format!("searchText(query={query})"),
                source: e,
            })?;

        tracing::debug!(%query, results = parsed.places.len(), "places search");
        Ok(parsed.places.into_iter().map(normalize_place).collect())
    }
}

fn nearby_query(category: &str, address: &str) -> String {
    let category = if category.trim().is_empty() {
        "business"
    } else {
        category
    };
    format!("{category} near {address}")
}

#[async_trait]
impl PlacesLookup for PlacesClient {
    async fn search(&self, query: &str) -> Result<Vec<Listing>, UpstreamError> {
        Ok(self.search_text(query).await?)
    }

    async fn search_nearby(
        &self,
        category: &str,
        address: &str,
    ) -> Result<Vec<Listing>, UpstreamError> {
        Ok(self.search_category_near(category, address).await?)
    }
}
