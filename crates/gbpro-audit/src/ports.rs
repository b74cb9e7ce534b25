//! Collaborator interfaces the audit engine consumes.
//!
//! Implementations live in the adapter crates (`gbpro-places`, `gbpro-llm`,
//! `gbpro-db`); the orchestrator only ever sees these traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gbpro_core::Listing;
use uuid::Uuid;

use crate::error::{PersistenceError, UpstreamError};
use crate::report::ReportSource;
use crate::scoring::Issue;

/// Places search provider.
#[async_trait]
pub trait PlacesLookup: Send + Sync {
    /// Free-text search, used to find the listing being audited.
    async fn search(&self, query: &str) -> Result<Vec<Listing>, UpstreamError>;

    /// Same-category listings near `address`, in provider order.
    async fn search_nearby(
        &self,
        category: &str,
        address: &str,
    ) -> Result<Vec<Listing>, UpstreamError>;
}

/// One prompt for the text-generation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    /// Ask the provider to reply with a single JSON object.
    pub expect_json: bool,
    pub max_tokens: u32,
}

/// Generative text provider.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError>;
}

/// Immutable history row written once per audit.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub business_name: String,
    pub email: Option<String>,
    pub overall_score: u8,
    pub profile_complete: u8,
    pub content_activity: u8,
    pub engagement: u8,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub is_premium: bool,
    pub source: ReportSource,
    pub created_at: DateTime<Utc>,
}

/// Append-only audit history.
#[async_trait]
pub trait AuditStore: Send + Sync {
    async fn insert_audit_record(&self, record: &AuditRecord) -> Result<(), PersistenceError>;

    /// Most recent audits for a user from `source`, newest first. The source
    /// filter applies before `limit`.
    async fn list_recent_audits(
        &self,
        user_id: Uuid,
        source: ReportSource,
        limit: i64,
    ) -> Result<Vec<AuditRecord>, PersistenceError>;

    /// Liveness check used by the health endpoint.
    async fn ping(&self) -> Result<(), PersistenceError>;
}

/// Billing state lookup, consulted once per premium request.
#[async_trait]
pub trait SubscriptionStatus: Send + Sync {
    async fn is_active_paid_tier(&self, user_id: Uuid) -> Result<bool, PersistenceError>;
}
