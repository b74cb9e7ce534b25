use gbpro_core::{Listing, ProfileSignals};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::checklist::ChecklistResult;
use crate::competitors::CompetitorSet;
use crate::fix_guide::FixStep;
use crate::keywords::KeywordSuggestions;
use crate::scoring::{Issue, ScoreBreakdown};
use crate::sentiment::SentimentAnalysis;

/// Body of an audit request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditRequest {
    pub business_name: String,
    pub email: Option<String>,
    pub place_id: Option<String>,
    pub address: Option<String>,
    /// Listing the client already selected from a search result.
    pub place_details: Option<Listing>,
    pub premium: bool,
}

impl AuditRequest {
    #[must_use]
    pub fn named(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            ..Self::default()
        }
    }

    /// Trimmed contact email, if one was supplied.
    #[must_use]
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

/// Where the scored signals came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    /// Live listing from the places collaborator or the client.
    Places,
    /// Randomised demo report; excluded from report history.
    Mock,
}

impl ReportSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Places => "places",
            Self::Mock => "mock",
        }
    }

    /// Parse a stored source. Unknown values read as `Mock` so they never
    /// count as real history.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "places" => Self::Places,
            _ => Self::Mock,
        }
    }
}

/// Sections only present on premium reports.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumSections {
    pub is_premium: bool,
    pub checklist: ChecklistResult,
    pub competitors: CompetitorSet,
    pub keyword_suggestions: KeywordSuggestions,
    pub review_sentiment: SentimentAnalysis,
    pub fix_guide: Vec<FixStep>,
}

/// Audit result returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub id: Uuid,
    pub score: u8,
    pub profile_complete: u8,
    pub content_activity: u8,
    pub engagement: u8,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub business_name: String,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub photo_count: u32,
    pub has_website: bool,
    pub has_phone: bool,
    pub has_hours: bool,
    pub source: ReportSource,
    #[serde(flatten)]
    pub premium: Option<PremiumSections>,
}

impl AuditReport {
    pub(crate) fn assemble(
        id: Uuid,
        breakdown: ScoreBreakdown,
        recommendations: Vec<String>,
        signals: &ProfileSignals,
        source: ReportSource,
    ) -> Self {
        Self {
            id,
            score: breakdown.score,
            profile_complete: breakdown.profile_complete,
            content_activity: breakdown.content_activity,
            engagement: breakdown.engagement,
            issues: breakdown.issues,
            recommendations,
            business_name: signals.business_name.clone(),
            address: signals.address.clone(),
            rating: signals.rating,
            review_count: signals.review_count,
            photo_count: signals.photo_count,
            has_website: signals.website.is_some(),
            has_phone: signals.phone.is_some(),
            has_hours: signals.has_hours,
            source,
            premium: None,
        }
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.premium.is_some()
    }
}
