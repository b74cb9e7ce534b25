//! Report history: latest audit, trend and improvement suggestions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::ports::AuditRecord;
use crate::report::ReportSource;
use crate::scoring::{Issue, CONTENT_MAX, ENGAGEMENT_MAX, PROFILE_MAX};

/// Audits considered for one history view.
pub const HISTORY_LIMIT: i64 = 20;

const IMPROVE_BELOW_PCT: u32 = 80;
const HIGH_PRIORITY_BELOW_PCT: u32 = 50;
const HIGH_PRIORITY_TIPS: usize = 6;
const MEDIUM_PRIORITY_TIPS: usize = 3;

const EMPTY_MESSAGE: &str =
    "No audit reports yet. Run your first audit to see improvement suggestions.";

const PROFILE_TIPS: [&str; 6] = [
    "Add a detailed business description with relevant keywords",
    "Upload at least 10 high-quality photos of your business",
    "Ensure your business hours are accurate and up-to-date",
    "Add all relevant business categories (primary + secondary)",
    "Include your website URL and appointment links",
    "Add service areas if you serve customers at their location",
];

const CONTENT_TIPS: [&str; 6] = [
    "Post updates at least 2-3 times per week on your GBP",
    "Share photos of your work, products, or team regularly",
    "Create Google Offers to attract new customers",
    "Announce events or seasonal promotions",
    "Respond to questions in the Q&A section promptly",
    "Add new products or services to your profile",
];

const ENGAGEMENT_TIPS: [&str; 6] = [
    "Respond to every review within 24 hours",
    "Thank customers for positive reviews with personalized messages",
    "Address negative reviews professionally and offer solutions",
    "Encourage happy customers to leave reviews",
    "Enable messaging and respond to inquiries quickly",
    "Use the Q&A feature to answer common questions proactively",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    pub area: &'static str,
    pub score: u8,
    pub max_score: u8,
    pub priority: Priority,
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallStatus {
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestAudit {
    pub id: Uuid,
    pub business_name: String,
    pub overall_score: u8,
    pub profile_complete: u8,
    pub content_activity: u8,
    pub engagement: u8,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub overall_score: u8,
    pub profile_complete: u8,
    pub content_activity: u8,
    pub engagement: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub score: u8,
    pub business_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub latest: LatestAudit,
    pub previous: Option<ScoreSnapshot>,
    pub status: OverallStatus,
    pub improvements: Vec<Improvement>,
    pub issues: Vec<Issue>,
    /// Oldest first.
    pub history: Vec<TrendPoint>,
    pub total_audits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHistory {
    pub has_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(flatten)]
    pub summary: Option<HistorySummary>,
}

#[must_use]
pub fn overall_status(score: u8) -> OverallStatus {
    let (label, description) = match score {
        85.. => (
            "Excellent",
            "Your GBP is well-optimized. Keep up the great work and maintain consistency!",
        ),
        70..=84 => (
            "Good",
            "Your GBP is in good shape but has room for improvement. Focus on the suggestions below.",
        ),
        50..=69 => (
            "Needs Work",
            "Your GBP has several areas that need attention. Prioritize the high-priority items below.",
        ),
        _ => (
            "Critical",
            "Your GBP needs significant improvement. Start with the high-priority suggestions immediately.",
        ),
    };
    OverallStatus { label, description }
}

fn improvement(
    area: &'static str,
    score: u8,
    max_score: u8,
    tips: &[&'static str; 6],
) -> Option<Improvement> {
    let scaled = u32::from(score) * 100;
    let max = u32::from(max_score);
    if scaled >= IMPROVE_BELOW_PCT * max {
        return None;
    }
    let (priority, tip_count) = if scaled < HIGH_PRIORITY_BELOW_PCT * max {
        (Priority::High, HIGH_PRIORITY_TIPS)
    } else {
        (Priority::Medium, MEDIUM_PRIORITY_TIPS)
    };
    Some(Improvement {
        area,
        score,
        max_score,
        priority,
        tips: tips[..tip_count].to_vec(),
    })
}

/// Suggestions for every area scoring below 80% of its maximum, high
/// priority first.
#[must_use]
pub fn improvements(profile_complete: u8, content_activity: u8, engagement: u8) -> Vec<Improvement> {
    let mut out: Vec<Improvement> = [
        improvement("Profile Completeness", profile_complete, PROFILE_MAX, &PROFILE_TIPS),
        improvement("Content Activity", content_activity, CONTENT_MAX, &CONTENT_TIPS),
        improvement("Customer Engagement", engagement, ENGAGEMENT_MAX, &ENGAGEMENT_TIPS),
    ]
    .into_iter()
    .flatten()
    .collect();
    out.sort_by_key(|i| i.priority);
    out
}

/// Summarise a caller's audits, given newest first. Mock reports are
/// ignored.
#[must_use]
pub fn summarize_history(records: &[AuditRecord]) -> ReportHistory {
    let live: Vec<&AuditRecord> = records
        .iter()
        .filter(|r| r.source == ReportSource::Places)
        .collect();

    let Some(latest) = live.first() else {
        return ReportHistory {
            has_data: false,
            message: Some(EMPTY_MESSAGE),
            summary: None,
        };
    };

    let previous = live.get(1).map(|p| ScoreSnapshot {
        overall_score: p.overall_score,
        profile_complete: p.profile_complete,
        content_activity: p.content_activity,
        engagement: p.engagement,
    });

    let history = live
        .iter()
        .rev()
        .map(|r| TrendPoint {
            date: r.created_at,
            score: r.overall_score,
            business_name: r.business_name.clone(),
        })
        .collect();

    ReportHistory {
        has_data: true,
        message: None,
        summary: Some(HistorySummary {
            latest: LatestAudit {
                id: latest.id,
                business_name: latest.business_name.clone(),
                overall_score: latest.overall_score,
                profile_complete: latest.profile_complete,
                content_activity: latest.content_activity,
                engagement: latest.engagement,
                created_at: latest.created_at,
            },
            previous,
            status: overall_status(latest.overall_score),
            improvements: improvements(
                latest.profile_complete,
                latest.content_activity,
                latest.engagement,
            ),
            issues: latest.issues.clone(),
            history,
            total_audits: live.len(),
        }),
    }
}
