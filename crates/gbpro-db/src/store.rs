//! Postgres-backed implementations of the audit engine's store traits.

use async_trait::async_trait;
use gbpro_audit::{AuditRecord, AuditStore, PersistenceError, ReportSource, SubscriptionStatus};
use gbpro_core::Subscription;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{audits, users, DbError};

impl From<DbError> for PersistenceError {
    fn from(e: DbError) -> Self {
        PersistenceError(e.to_string())
    }
}

#[derive(Clone)]
pub struct PgAuditStore {
    pool: PgPool,
}

impl PgAuditStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditStore for PgAuditStore {
    async fn insert_audit_record(&self, record: &AuditRecord) -> Result<(), PersistenceError> {
        audits::insert_audit(&self.pool, record).await?;
        Ok(())
    }

    async fn list_recent_audits(
        &self,
        user_id: Uuid,
        source: ReportSource,
        limit: i64,
    ) -> Result<Vec<AuditRecord>, PersistenceError> {
        let rows = audits::list_audits_for_user(&self.pool, user_id, source, limit).await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.id;
            match AuditRecord::try_from(row) {
                Ok(record) => records.push(record),
                // Corrupt rows are skipped, not fatal.
                Err(e) => tracing::warn!(audit_id = %id, error = %e, "skipping unreadable audit row"),
            }
        }
        Ok(records)
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgSubscriptions {
    pool: PgPool,
}

impl PgSubscriptions {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionStatus for PgSubscriptions {
    async fn is_active_paid_tier(&self, user_id: Uuid) -> Result<bool, PersistenceError> {
        let row = users::get_user_subscription(&self.pool, user_id).await?;
        Ok(row.is_some_and(|row| Subscription::from(row).is_active_paid_tier()))
    }
}
