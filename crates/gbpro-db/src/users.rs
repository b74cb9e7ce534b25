//! Read-only access to billing fields on `users`.

use chrono::{DateTime, Utc};
use gbpro_core::{Subscription, SubscriptionState, SubscriptionTier};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserSubscriptionRow {
    pub id: Uuid,
    pub subscription_tier: String,
    pub subscription_status: String,
    pub subscription_end_date: Option<DateTime<Utc>>,
}

impl From<UserSubscriptionRow> for Subscription {
    fn from(row: UserSubscriptionRow) -> Self {
        Self {
            tier: SubscriptionTier::parse(&row.subscription_tier),
            state: SubscriptionState::parse(&row.subscription_status),
            end_date: row.subscription_end_date,
        }
    }
}

/// Fetches a user's subscription fields. Returns `None` when no row exists.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_user_subscription(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<UserSubscriptionRow>, DbError> {
    let row = sqlx::query_as::<_, UserSubscriptionRow>(
        "SELECT id, subscription_tier, subscription_status, subscription_end_date \
         FROM users \
         WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
