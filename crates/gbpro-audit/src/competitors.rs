//! Nearby competitor comparison.

use std::cmp::Ordering;
use std::time::Duration;

use gbpro_core::{Listing, ProfileSignals};
use serde::Serialize;

use crate::ports::PlacesLookup;
use crate::upstream::with_deadline;

const MAX_COMPETITORS: usize = 5;
const DEFAULT_CATEGORY: &str = "business";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorData {
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub photo_count: u32,
    pub place_id: String,
}

impl CompetitorData {
    fn from_listing(listing: &Listing) -> Self {
        let name = listing.name.trim();
        Self {
            name: if name.is_empty() { "Unknown" } else { name }.to_string(),
            address: listing.address.clone(),
            rating: listing.rating.filter(|r| *r > 0.0),
            review_count: listing.review_count,
            photo_count: listing.photo_count,
            place_id: listing.id.clone(),
        }
    }

    fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub your_rating: f64,
    pub avg_rating: f64,
    pub your_reviews: u32,
    pub avg_reviews: u32,
    pub your_photos: u32,
    pub avg_photos: u32,
    /// 1 = best.
    pub rating_rank: usize,
    pub review_rank: usize,
    pub photo_rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorSet {
    pub competitors: Vec<CompetitorData>,
    pub comparison: Comparison,
    pub insights: Vec<String>,
}

/// The business being compared.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub place_id: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub rating: f64,
    pub review_count: u32,
    pub photo_count: u32,
}

impl From<&ProfileSignals> for Subject {
    fn from(signals: &ProfileSignals) -> Self {
        Self {
            place_id: signals.place_id.clone(),
            category: signals.primary_category().map(ToString::to_string),
            address: signals.address.clone(),
            rating: signals.rating_or_zero(),
            review_count: signals.review_count,
            photo_count: signals.photo_count,
        }
    }
}

/// Compare the subject against nearby same-category listings.
///
/// Falls back to [`mock_competitors`] when no places collaborator is
/// configured, the lookup fails or times out, or nothing usable comes back.
pub async fn analyze_competitors(
    places: Option<&dyn PlacesLookup>,
    subject: &Subject,
    deadline: Duration,
) -> CompetitorSet {
    let competitors = match places {
        Some(places) => {
            let category = subject.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
            let address = subject.address.as_deref().unwrap_or_default();
            match with_deadline(deadline, places.search_nearby(category, address)).await {
                Ok(listings) => select_competitors(&listings, subject.place_id.as_deref()),
                Err(e) => {
                    tracing::warn!(error = %e, "competitor search failed, using mock competitors");
                    Vec::new()
                }
            }
        }
        None => Vec::new(),
    };

    let competitors = if competitors.is_empty() {
        mock_competitors()
    } else {
        competitors
    };

    build_comparison(
        competitors,
        subject.rating,
        subject.review_count,
        subject.photo_count,
    )
}

/// Drop the subject itself and keep the first five, in provider order.
fn select_competitors(listings: &[Listing], subject_id: Option<&str>) -> Vec<CompetitorData> {
    listings
        .iter()
        .filter(|l| subject_id != Some(l.id.as_str()))
        .take(MAX_COMPETITORS)
        .map(CompetitorData::from_listing)
        .collect()
}

/// Fixed comparison set used when no live competitors are available.
#[must_use]
pub fn mock_competitors() -> Vec<CompetitorData> {
    [
        ("Competitor A", 4.2, 85, 15),
        ("Competitor B", 3.8, 42, 8),
        ("Competitor C", 4.5, 120, 22),
        ("Competitor D", 4.0, 30, 12),
        ("Competitor E", 3.5, 18, 5),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, rating, review_count, photo_count))| CompetitorData {
        name: name.to_string(),
        address: "Nearby location".to_string(),
        rating: Some(rating),
        review_count,
        photo_count,
        place_id: format!("mock-{}", i + 1),
    })
    .collect()
}

/// 1-based position of `yours` in the descending sort of all values.
///
/// Equal values are not tie-broken: the first matching position wins, so a
/// subject tied with a competitor shares that competitor's rank.
#[must_use]
pub fn rank_of<T: PartialOrd + Copy>(yours: T, others: impl IntoIterator<Item = T>) -> usize {
    let mut all: Vec<T> = others.into_iter().collect();
    all.push(yours);
    all.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    all.iter()
        .position(|v| *v == yours)
        .map_or(all.len(), |i| i + 1)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rounded_mean(values: impl Iterator<Item = u32>, count: usize) -> u32 {
    let total: u64 = values.map(u64::from).sum();
    (total as f64 / count as f64).round() as u32
}

/// Averages, ranks and insights for a fixed competitor set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_comparison(
    competitors: Vec<CompetitorData>,
    your_rating: f64,
    your_reviews: u32,
    your_photos: u32,
) -> CompetitorSet {
    if competitors.is_empty() {
        return CompetitorSet {
            competitors,
            comparison: Comparison {
                your_rating,
                avg_rating: 0.0,
                your_reviews,
                avg_reviews: 0,
                your_photos,
                avg_photos: 0,
                rating_rank: 1,
                review_rank: 1,
                photo_rank: 1,
            },
            insights: vec!["No nearby competitors found for comparison.".to_string()],
        };
    }

    let n = competitors.len();
    let avg_rating = competitors.iter().map(CompetitorData::rating_or_zero).sum::<f64>() / n as f64;
    let avg_reviews = rounded_mean(competitors.iter().map(|c| c.review_count), n);
    let avg_photos = rounded_mean(competitors.iter().map(|c| c.photo_count), n);

    let rating_rank = rank_of(your_rating, competitors.iter().map(CompetitorData::rating_or_zero));
    let review_rank = rank_of(your_reviews, competitors.iter().map(|c| c.review_count));
    let photo_rank = rank_of(your_photos, competitors.iter().map(|c| c.photo_count));

    let mut insights = Vec::with_capacity(5);

    insights.push(if your_rating >= avg_rating {
        format!(
            "Your rating ({your_rating:.1}) is above the competitor average ({avg_rating:.1}) — great!"
        )
    } else {
        format!(
            "Your rating ({your_rating:.1}) is below the competitor average ({avg_rating:.1}). Focus on improving customer experience."
        )
    });

    insights.push(if your_reviews >= avg_reviews {
        format!(
            "You have more reviews ({your_reviews}) than the competitor average ({avg_reviews}). Keep up the momentum!"
        )
    } else {
        format!(
            "Competitors average {avg_reviews} reviews vs your {your_reviews}. Run a review campaign to close the gap."
        )
    });

    insights.push(if your_photos >= avg_photos {
        format!(
            "Your photo count ({your_photos}) beats the average ({avg_photos}). Visual content drives clicks."
        )
    } else {
        format!(
            "Competitors average {avg_photos} photos vs your {your_photos}. Add more photos to improve click-through rate."
        )
    });

    if rating_rank == 1 {
        insights.push(
            "🏆 You have the highest rating in your area — maintain this advantage!".to_string(),
        );
    }
    if review_rank == 1 {
        insights.push(
            "🏆 You have the most reviews in your area — social proof is your strength!"
                .to_string(),
        );
    }

    CompetitorSet {
        competitors,
        comparison: Comparison {
            your_rating,
            avg_rating,
            your_reviews,
            avg_reviews,
            your_photos,
            avg_photos,
            rating_rank,
            review_rank,
            photo_rank,
        },
        insights,
    }
}
