//! Audit scoring and premium checklist engine.
//!
//! Scoring, checklist, fix guide and comparison math are pure functions over
//! [`gbpro_core::ProfileSignals`]. The keyword, sentiment and competitor
//! advisors talk to injected collaborators (see [`ports`]) and fall back to
//! deterministic templates whenever those are missing or failing.
//! [`Auditor`] composes everything per request.

pub mod checklist;
pub mod competitors;
pub mod dispatch;
pub mod error;
pub mod fix_guide;
pub mod history;
pub mod keywords;
pub mod mock;
pub mod ports;
pub mod report;
pub mod scoring;
pub mod sentiment;

mod orchestrator;
mod upstream;

pub use checklist::{run_premium_checklist, ChecklistCategory, ChecklistItem, ChecklistResult};
pub use dispatch::{run_email_dispatcher, EmailDispatch, EmailIntent, EMAIL_QUEUE_CAPACITY};
pub use error::{AuditError, PersistenceError, UpstreamError};
pub use fix_guide::{generate_fix_guide, FixStep};
pub use history::ReportHistory;
pub use orchestrator::{Auditor, ListingSearch};
pub use ports::{
    AuditRecord, AuditStore, CompletionRequest, PlacesLookup, SubscriptionStatus, TextGenerator,
};
pub use report::{AuditReport, AuditRequest, ReportSource};
pub use scoring::{calculate_audit_score, generate_recommendations, Issue, ScoreBreakdown};
pub use upstream::DEFAULT_UPSTREAM_TIMEOUT;
