//! Database operations for the append-only `audits` table.

use chrono::{DateTime, Utc};
use gbpro_audit::{AuditRecord, Issue, ReportSource};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// A row from the `audits` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuditRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub business_name: String,
    pub email: Option<String>,
    pub overall_score: i16,
    pub profile_complete: i16,
    pub content_activity: i16,
    pub engagement: i16,
    /// JSONB array of `{category, severity, message, recommendation}`.
    pub issues: serde_json::Value,
    /// JSONB array of strings.
    pub recommendations: serde_json::Value,
    pub is_premium: bool,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AuditRow> for AuditRecord {
    type Error = DbError;

    fn try_from(row: AuditRow) -> Result<Self, Self::Error> {
        let issues: Vec<Issue> =
            serde_json::from_value(row.issues).map_err(|source| DbError::MalformedJson {
                column: "issues",
                source,
            })?;
        let recommendations: Vec<String> = serde_json::from_value(row.recommendations)
            .map_err(|source| DbError::MalformedJson {
                column: "recommendations",
                source,
            })?;

        Ok(AuditRecord {
            id: row.id,
            user_id: row.user_id,
            business_name: row.business_name,
            email: row.email,
            overall_score: score_column("overall_score", row.overall_score)?,
            profile_complete: score_column("profile_complete", row.profile_complete)?,
            content_activity: score_column("content_activity", row.content_activity)?,
            engagement: score_column("engagement", row.engagement)?,
            issues,
            recommendations,
            is_premium: row.is_premium,
            source: ReportSource::parse(&row.source),
            created_at: row.created_at,
        })
    }
}

fn score_column(column: &'static str, value: i16) -> Result<u8, DbError> {
    u8::try_from(value).map_err(|_| DbError::OutOfRange {
        column,
        value: i64::from(value),
    })
}

/// Inserts one audit history row.
///
/// The row id and timestamp come from the record; nothing is generated here.
///
/// # Errors
///
/// Returns [`DbError::MalformedJson`] if the issue list cannot be encoded, or
/// [`DbError::Sqlx`] if the insert fails.
pub async fn insert_audit(pool: &PgPool, record: &AuditRecord) -> Result<(), DbError> {
    let issues = serde_json::to_value(&record.issues).map_err(|source| {
        DbError::MalformedJson {
            column: "issues",
            source,
        }
    })?;
    let recommendations =
        serde_json::to_value(&record.recommendations).map_err(|source| DbError::MalformedJson {
            column: "recommendations",
            source,
        })?;

    sqlx::query(
        "INSERT INTO audits (id, user_id, business_name, email, overall_score, \
                             profile_complete, content_activity, engagement, issues, \
                             recommendations, is_premium, source, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(record.id)
    .bind(record.user_id)
    .bind(&record.business_name)
    .bind(record.email.as_deref())
    .bind(i16::from(record.overall_score))
    .bind(i16::from(record.profile_complete))
    .bind(i16::from(record.content_activity))
    .bind(i16::from(record.engagement))
    .bind(issues)
    .bind(recommendations)
    .bind(record.is_premium)
    .bind(record.source.as_str())
    .bind(record.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Returns a user's most recent audits from `source`, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_audits_for_user(
    pool: &PgPool,
    user_id: Uuid,
    source: ReportSource,
    limit: i64,
) -> Result<Vec<AuditRow>, DbError> {
    let rows = sqlx::query_as::<_, AuditRow>(
        "SELECT id, user_id, business_name, email, overall_score, profile_complete, \
                content_activity, engagement, issues, recommendations, is_premium, \
                source, created_at \
         FROM audits \
         WHERE user_id = $1 AND source = $2 \
         ORDER BY created_at DESC \
         LIMIT $3",
    )
    .bind(user_id)
    .bind(source.as_str())
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
