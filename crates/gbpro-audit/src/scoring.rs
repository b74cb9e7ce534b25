//! Weighted 0-100 profile health score.
//!
//! Three sub-scores (profile completeness, content activity, engagement) are
//! built from banded signals. Every missing or weak signal that costs points
//! also appends an [`Issue`] explaining what to fix.

use gbpro_core::ProfileSignals;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Section maxima (must sum to exactly 100)
// ---------------------------------------------------------------------------

pub const PROFILE_MAX: u8 = 35;
pub const CONTENT_MAX: u8 = 35;
pub const ENGAGEMENT_MAX: u8 = 30;

/// Points for each of the seven profile fields.
const PROFILE_FIELD_POINTS: u8 = 5;
/// Flat bonus when the listing has any photo at all.
const HAS_PHOTOS_BONUS: u8 = 10;

const _: () = assert!(
    PROFILE_MAX as u16 + CONTENT_MAX as u16 + ENGAGEMENT_MAX as u16 == 100,
    "section maxima must sum to exactly 100"
);
const _: () = assert!(PROFILE_FIELD_POINTS * 7 == PROFILE_MAX);
const _: () = assert!(15 + 10 + HAS_PHOTOS_BONUS == CONTENT_MAX);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Profile,
    Content,
    Engagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub category: IssueCategory,
    pub severity: Severity,
    pub message: String,
    pub recommendation: String,
}

impl Issue {
    pub(crate) fn new(
        category: IssueCategory,
        severity: Severity,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Scoring inputs. Every field defaults to "absent / zero", which scores as
/// the worst case for its band.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScoringInput {
    pub business_name: Option<String>,
    pub has_address: bool,
    pub has_phone: bool,
    pub has_website: bool,
    pub has_category: bool,
    pub has_description: bool,
    pub has_photos: bool,
    pub photo_count: u32,
    pub has_business_hours: bool,
    pub recent_post_count: u32,
    pub total_reviews: u32,
    pub average_rating: f64,
    pub response_rate: u32,
}

impl From<&ProfileSignals> for ScoringInput {
    fn from(signals: &ProfileSignals) -> Self {
        Self {
            business_name: Some(signals.business_name.clone()).filter(|n| !n.is_empty()),
            has_address: signals.address.is_some(),
            has_phone: signals.phone.is_some(),
            has_website: signals.website.is_some(),
            has_category: !signals.categories.is_empty(),
            has_description: signals.description.is_some(),
            has_photos: signals.photo_count > 0,
            photo_count: signals.photo_count,
            has_business_hours: signals.has_hours,
            recent_post_count: signals.recent_post_count.unwrap_or(0),
            total_reviews: signals.review_count,
            average_rating: signals.rating_or_zero(),
            response_rate: u32::from(signals.response_rate),
        }
    }
}

/// Score and issues for one audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub score: u8,
    pub profile_complete: u8,
    pub content_activity: u8,
    pub engagement: u8,
    pub issues: Vec<Issue>,
}

/// Compute the weighted audit score.
///
/// Total: never fails, and `score == profile_complete + content_activity +
/// engagement` with each part within its section maximum.
#[must_use]
pub fn calculate_audit_score(input: &ScoringInput) -> ScoreBreakdown {
    let mut issues = Vec::new();
    let profile_complete = score_profile(input, &mut issues);
    let content_activity = score_content(input, &mut issues);
    let engagement = score_engagement(input, &mut issues);

    ScoreBreakdown {
        score: profile_complete + content_activity + engagement,
        profile_complete,
        content_activity,
        engagement,
        issues,
    }
}

fn score_profile(input: &ScoringInput, issues: &mut Vec<Issue>) -> u8 {
    let has_name = input
        .business_name
        .as_deref()
        .is_some_and(|n| !n.trim().is_empty());

    let fields: [(bool, Severity, &str, &str); 7] = [
        (
            has_name,
            Severity::High,
            "Business name is missing",
            "Add a clear, accurate business name",
        ),
        (
            input.has_address,
            Severity::High,
            "Business address is missing",
            "Add your complete business address for local SEO",
        ),
        (
            input.has_phone,
            Severity::Medium,
            "Phone number is missing",
            "Add a phone number so customers can contact you",
        ),
        (
            input.has_website,
            Severity::Medium,
            "Website URL is missing",
            "Add your website to drive traffic from Google",
        ),
        (
            input.has_category,
            Severity::High,
            "Business category is not set",
            "Set a primary category to appear in relevant searches",
        ),
        (
            input.has_description,
            Severity::Medium,
            "Business description is missing",
            "Add a 750-character description with relevant keywords",
        ),
        (
            input.has_business_hours,
            Severity::Medium,
            "Business hours are not set",
            "Add business hours so customers know when you're open",
        ),
    ];

    let mut points = 0;
    for (present, severity, message, recommendation) in fields {
        if present {
            points += PROFILE_FIELD_POINTS;
        } else {
            issues.push(Issue::new(
                IssueCategory::Profile,
                severity,
                message,
                recommendation,
            ));
        }
    }
    points
}

fn score_content(input: &ScoringInput, issues: &mut Vec<Issue>) -> u8 {
    let posts = match input.recent_post_count {
        n if n >= 12 => 15,
        n if n >= 8 => 12,
        n if n >= 4 => 8,
        n if n >= 1 => 4,
        _ => {
            issues.push(Issue::new(
                IssueCategory::Content,
                Severity::High,
                "No posts in the last 30 days",
                "Post at least 3-4 times per month to stay active",
            ));
            0
        }
    };

    let photos = match input.photo_count {
        n if n >= 20 => 10,
        n if n >= 10 => 8,
        n if n >= 5 => 5,
        n if n >= 1 => 2,
        _ => {
            issues.push(Issue::new(
                IssueCategory::Content,
                Severity::Medium,
                "No photos on your profile",
                "Add at least 10 high-quality photos of your business",
            ));
            0
        }
    };

    // No issue here: a photo-less profile was already flagged above.
    let bonus = if input.has_photos { HAS_PHOTOS_BONUS } else { 0 };

    posts + photos + bonus
}

fn score_engagement(input: &ScoringInput, issues: &mut Vec<Issue>) -> u8 {
    let reviews = match input.total_reviews {
        n if n >= 50 => 10,
        n if n >= 20 => 8,
        n if n >= 10 => 5,
        n if n >= 1 => 3,
        _ => {
            issues.push(Issue::new(
                IssueCategory::Engagement,
                Severity::Medium,
                "Very few or no reviews",
                "Encourage happy customers to leave reviews",
            ));
            0
        }
    };

    let rating = input.average_rating;
    let rating_points = if rating >= 4.5 {
        10
    } else if rating >= 4.0 {
        8
    } else if rating >= 3.5 {
        5
    } else if rating > 0.0 {
        issues.push(Issue::new(
            IssueCategory::Engagement,
            Severity::High,
            format!("Average rating is {rating:.1} — below 4.0"),
            "Focus on service quality and respond professionally to negative reviews",
        ));
        2
    } else {
        0
    };

    let response = match input.response_rate {
        n if n >= 90 => 10,
        n if n >= 70 => 7,
        n if n >= 40 => 4,
        n => {
            issues.push(Issue::new(
                IssueCategory::Engagement,
                Severity::High,
                format!("Review response rate is only {n}%"),
                "Respond to all reviews within 24 hours — GBP Pro can help with AI responses!",
            ));
            0
        }
    };

    reviews + rating_points + response
}

/// Recommendation list for a report: each issue's recommendation in issue
/// order, without duplicates.
#[must_use]
pub fn generate_recommendations(issues: &[Issue]) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::with_capacity(issues.len());
    for issue in issues {
        if !recommendations.contains(&issue.recommendation) {
            recommendations.push(issue.recommendation.clone());
        }
    }
    if recommendations.is_empty() {
        recommendations
            .push("Keep posting regularly and responding to reviews to hold your score".to_string());
    }
    recommendations
}
