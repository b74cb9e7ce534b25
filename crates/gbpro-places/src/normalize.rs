//! Conversion of Places API results into [`Listing`]s.

use gbpro_core::Listing;

use crate::types::Place;

/// Map one API place onto the listing shape the audit engine consumes.
///
/// Phone prefers the national format. Hours count as set when at least one
/// opening period exists.
#[must_use]
pub fn normalize_place(place: Place) -> Listing {
    let has_hours = place
        .regular_opening_hours
        .as_ref()
        .is_some_and(|h| !h.periods.is_empty());

    Listing {
        id: place.id,
        name: place.display_name.map(|t| t.text).unwrap_or_default(),
        address: place.formatted_address.unwrap_or_default(),
        rating: place.rating.filter(|r| *r > 0.0),
        review_count: place.user_rating_count.unwrap_or(0),
        categories: place.types,
        phone: place
            .national_phone_number
            .or(place.international_phone_number)
            .filter(|p| !p.is_empty()),
        website: place.website_uri.filter(|w| !w.is_empty()),
        has_hours,
        photo_count: u32::try_from(place.photos.len()).unwrap_or(u32::MAX),
        description: place
            .editorial_summary
            .map(|s| s.text)
            .filter(|t| !t.is_empty()),
        business_status: place.business_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchTextResponse;

    #[test]
    fn full_place_maps_every_field() {
        let body = serde_json::json!({
            "places": [{
                "id": "ChIJ123",
                "displayName": { "text": "Sharma's Kitchen", "languageCode": "en" },
                "formattedAddress": "12 MG Road, Indiranagar, Bengaluru, India",
                "rating": 4.4,
                "userRatingCount": 87,
                "types": ["indian_restaurant", "restaurant"],
                "nationalPhoneNumber": "080 1234 5678",
                "internationalPhoneNumber": "+91 80 1234 5678",
                "websiteUri": "https://sharmaskitchen.in",
                "regularOpeningHours": { "periods": [{ "open": { "day": 1 } }] },
                "photos": [{ "name": "a" }, { "name": "b" }],
                "editorialSummary": { "text": "Homestyle North Indian cooking." },
                "businessStatus": "OPERATIONAL"
            }]
        });
        let parsed: SearchTextResponse = serde_json::from_value(body).unwrap();
        let listing = normalize_place(parsed.places.into_iter().next().unwrap());

        assert_eq!(listing.id, "ChIJ123");
        assert_eq!(listing.name, "Sharma's Kitchen");
        assert_eq!(listing.review_count, 87);
        assert_eq!(listing.phone.as_deref(), Some("080 1234 5678"));
        assert!(listing.has_hours);
        assert_eq!(listing.photo_count, 2);
        assert_eq!(listing.primary_category(), Some("indian_restaurant"));
        assert_eq!(
            listing.description.as_deref(),
            Some("Homestyle North Indian cooking.")
        );
    }

    #[test]
    fn sparse_place_defaults() {
        let parsed: SearchTextResponse = serde_json::from_value(serde_json::json!({
            "places": [{
                "id": "x",
                "internationalPhoneNumber": "+1 555 0100",
                "regularOpeningHours": { "periods": [] }
            }]
        }))
        .unwrap();
        let listing = normalize_place(parsed.places.into_iter().next().unwrap());
        assert_eq!(listing.name, "");
        assert!(listing.rating.is_none());
        assert_eq!(listing.phone.as_deref(), Some("+1 555 0100"));
        assert!(!listing.has_hours);
        assert_eq!(listing.photo_count, 0);
        assert!(listing.business_status.is_none());
    }

    #[test]
    fn empty_response_has_no_places() {
        let parsed: SearchTextResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.places.is_empty());
    }
}
