use serde::{Deserialize, Serialize};

/// A business's external profile record as returned by a places lookup.
///
/// The wire names follow the listing payload the search endpoint returns and
/// clients post back with an audit request (`place_id`, `types`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(rename = "place_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub review_count: u32,
    /// Ordered place categories; the first entry is the primary category.
    #[serde(rename = "types")]
    pub categories: Vec<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub has_hours: bool,
    pub photo_count: u32,
    pub description: Option<String>,
    pub business_status: Option<String>,
}

impl Listing {
    /// Primary category, if the listing has one.
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_place_details_payload() {
        let json = serde_json::json!({
            "place_id": "abc123",
            "name": "Sharma's Kitchen",
            "address": "12 MG Road, Indiranagar, Bengaluru, Karnataka 560038, India",
            "rating": 4.3,
            "review_count": 212,
            "types": ["indian_restaurant", "restaurant"],
            "phone": "080 1234 5678",
            "website": null,
            "has_hours": true,
            "photo_count": 10,
            "description": null,
            "business_status": "OPERATIONAL"
        });
        let listing: Listing = serde_json::from_value(json).expect("listing");
        assert_eq!(listing.id, "abc123");
        assert_eq!(listing.review_count, 212);
        assert_eq!(listing.primary_category(), Some("indian_restaurant"));
        assert!(listing.website.is_none());
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let listing: Listing = serde_json::from_value(serde_json::json!({ "name": "Joe's Cafe" }))
            .expect("listing");
        assert_eq!(listing.name, "Joe's Cafe");
        assert!(listing.categories.is_empty());
        assert_eq!(listing.photo_count, 0);
        assert!(listing.rating.is_none());
        assert!(listing.primary_category().is_none());
    }
}
