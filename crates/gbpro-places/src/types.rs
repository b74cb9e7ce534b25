//! Places API (New) wire types for `places:searchText`.

use serde::{Deserialize, Serialize};

/// Request body for `POST v1/places:searchText`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest<'a> {
    pub text_query: &'a str,
    pub language_code: &'a str,
    pub max_result_count: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchTextResponse {
    pub places: Vec<Place>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Place {
    pub id: String,
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<u32>,
    pub types: Vec<String>,
    pub national_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website_uri: Option<String>,
    pub regular_opening_hours: Option<OpeningHours>,
    /// Only the count is used; photo payloads are kept opaque.
    pub photos: Vec<serde_json::Value>,
    pub editorial_summary: Option<LocalizedText>,
    pub business_status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub periods: Vec<serde_json::Value>,
}

/// Error envelope: `{"error": {"code": 403, "message": "...", "status": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
