use thiserror::Error;

/// Caller-visible audit failures. Only the orchestrator produces these.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("{0}")]
    Validation(String),

    #[error("sign in to run a premium audit")]
    AuthRequired,

    #[error("an active Pro or Lifetime subscription is required for premium audits")]
    SubscriptionRequired,

    #[error("subscription status is unavailable: {0}")]
    SubscriptionLookup(String),

    #[error("audit history is unavailable: {0}")]
    HistoryUnavailable(String),
}

/// Failure of an external collaborator (places search, text generation).
///
/// Never surfaced to callers: every advisor absorbs it into a fallback.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Unavailable(String),

    #[error("upstream call exceeded {0} ms")]
    Timeout(u128),

    #[error("unusable upstream response: {0}")]
    InvalidResponse(String),
}

/// Failure of the audit store. Logged, never fails a computed report.
#[derive(Debug, Error)]
#[error("audit store error: {0}")]
pub struct PersistenceError(pub String);
