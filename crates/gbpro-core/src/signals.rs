use crate::listing::Listing;

/// Review count above which the response rate is estimated as moderate.
const RESPONSE_RATE_REVIEW_THRESHOLD: u32 = 10;
const ESTIMATED_RESPONSE_RATE_ACTIVE: u8 = 50;
const ESTIMATED_RESPONSE_RATE_QUIET: u8 = 20;

/// Observable attributes of one listing, fixed for the duration of an audit.
///
/// Empty strings are normalised to `None` on construction so every engine
/// can treat "absent" uniformly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSignals {
    pub place_id: Option<String>,
    pub business_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub categories: Vec<String>,
    pub description: Option<String>,
    pub photo_count: u32,
    pub has_hours: bool,
    pub business_status: Option<String>,
    /// 0.0-5.0, `None` when the listing has no rating yet.
    pub rating: Option<f64>,
    pub review_count: u32,
    /// Estimated share of reviews that received a reply, 0-100.
    pub response_rate: u8,
    /// Posts in the last 30 days. `None` when the source cannot observe posts.
    pub recent_post_count: Option<u32>,
}

impl ProfileSignals {
    /// Build signals from a places listing.
    ///
    /// The listing name wins over `requested_name` unless it is blank. The
    /// places API does not expose reply data, so the response rate is
    /// estimated from the review volume.
    #[must_use]
    pub fn from_listing(listing: &Listing, requested_name: &str) -> Self {
        let business_name = non_empty(&listing.name)
            .unwrap_or_else(|| requested_name.trim().to_string());
        let response_rate = if listing.review_count > RESPONSE_RATE_REVIEW_THRESHOLD {
            ESTIMATED_RESPONSE_RATE_ACTIVE
        } else {
            ESTIMATED_RESPONSE_RATE_QUIET
        };

        Self {
            place_id: non_empty(&listing.id),
            business_name,
            address: non_empty(&listing.address),
            phone: listing.phone.as_deref().and_then(non_empty),
            website: listing.website.as_deref().and_then(non_empty),
            categories: listing
                .categories
                .iter()
                .filter(|c| !c.trim().is_empty())
                .cloned()
                .collect(),
            description: listing.description.as_deref().and_then(non_empty),
            photo_count: listing.photo_count,
            has_hours: listing.has_hours,
            business_status: listing.business_status.as_deref().and_then(non_empty),
            rating: listing.rating.filter(|r| r.is_finite() && *r > 0.0),
            review_count: listing.review_count,
            response_rate,
            recent_post_count: None,
        }
    }

    /// Signals known when only a name (and maybe an address) was supplied.
    #[must_use]
    pub fn named(business_name: &str, address: Option<&str>) -> Self {
        Self {
            business_name: business_name.trim().to_string(),
            address: address.and_then(non_empty),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Rating with "no rating" read as zero, the worst case for every band.
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
