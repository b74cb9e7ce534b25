//! Per-request audit pipeline.
//!
//! The [`Auditor`] owns the injected collaborators and is the only layer that
//! returns caller-visible errors. Engines are pure; collaborator failures are
//! absorbed by their fallbacks; a failed history write is logged.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use gbpro_core::{Caller, Listing, ProfileSignals};
use serde::Serialize;
use uuid::Uuid;

use crate::checklist::run_premium_checklist;
use crate::competitors::{analyze_competitors, Subject};
use crate::dispatch::{EmailDispatch, EmailIntent};
use crate::error::{AuditError, PersistenceError};
use crate::fix_guide::generate_fix_guide;
use crate::history::{summarize_history, ReportHistory, HISTORY_LIMIT};
use crate::keywords::{suggest_keywords, KeywordInput};
use crate::mock::{generate_mock_audit, mock_recommendations};
use crate::ports::{AuditRecord, AuditStore, PlacesLookup, SubscriptionStatus, TextGenerator};
use crate::report::{AuditReport, AuditRequest, PremiumSections, ReportSource};
use crate::scoring::{calculate_audit_score, generate_recommendations, ScoringInput};
use crate::sentiment::{analyze_review_sentiment, SentimentInput};
use crate::upstream::{with_deadline, DEFAULT_UPSTREAM_TIMEOUT};

const MIN_NAME_CHARS: usize = 2;
const MIN_QUERY_CHARS: usize = 2;
const DEFAULT_CATEGORY: &str = "business";

const SEARCH_UNCONFIGURED: &str =
    "Google Places API not configured. Enter business name manually.";
const SEARCH_FAILED: &str = "Search failed. Enter business name manually.";

/// Places search result for the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSearch {
    pub results: Vec<Listing>,
    /// `true` when the client should fall back to manual entry.
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub struct Auditor {
    store: Arc<dyn AuditStore>,
    subscriptions: Arc<dyn SubscriptionStatus>,
    places: Option<Arc<dyn PlacesLookup>>,
    generator: Option<Arc<dyn TextGenerator>>,
    email: Option<EmailDispatch>,
    upstream_timeout: Duration,
}

impl Auditor {
    #[must_use]
    pub fn new(store: Arc<dyn AuditStore>, subscriptions: Arc<dyn SubscriptionStatus>) -> Self {
        Self {
            store,
            subscriptions,
            places: None,
            generator: None,
            email: None,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_places(mut self, places: Arc<dyn PlacesLookup>) -> Self {
        self.places = Some(places);
        self
    }

    #[must_use]
    pub fn with_text_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    #[must_use]
    pub fn with_email_dispatch(mut self, email: EmailDispatch) -> Self {
        self.email = Some(email);
        self
    }

    #[must_use]
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    /// Run one audit.
    ///
    /// # Errors
    ///
    /// - [`AuditError::Validation`] if the business name is shorter than two
    ///   characters after trimming.
    /// - [`AuditError::AuthRequired`] for a premium request from an anonymous
    ///   caller.
    /// - [`AuditError::SubscriptionRequired`] for a premium request without an
    ///   active Pro or Lifetime plan.
    /// - [`AuditError::SubscriptionLookup`] if the plan could not be read.
    ///
    /// All three gate checks happen before any lookup or write.
    pub async fn run_audit(
        &self,
        caller: &Caller,
        request: AuditRequest,
    ) -> Result<AuditReport, AuditError> {
        let name = request.business_name.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            return Err(AuditError::Validation(
                "Please enter a valid business name".to_string(),
            ));
        }

        if request.premium {
            self.require_paid_tier(caller).await?;
        }

        let id = Uuid::new_v4();
        let live = self.resolve_signals(&request, name).await;

        let (signals, breakdown, recommendations, source) = match live {
            Some(signals) => {
                let breakdown = calculate_audit_score(&ScoringInput::from(&signals));
                let recommendations = generate_recommendations(&breakdown.issues);
                (signals, breakdown, recommendations, ReportSource::Places)
            }
            None => {
                let signals = ProfileSignals::named(name, request.address.as_deref());
                let breakdown = generate_mock_audit(name, &mut rand::rng());
                (signals, breakdown, mock_recommendations(), ReportSource::Mock)
            }
        };

        let mut report = AuditReport::assemble(id, breakdown, recommendations, &signals, source);
        if request.premium {
            report.premium = Some(self.premium_sections(&signals).await);
        }

        self.persist(caller, &request, name, &report).await;

        if let (Some(email), Some(dispatch)) = (request.contact_email(), &self.email) {
            dispatch.submit(EmailIntent {
                audit_id: id,
                email: email.to_string(),
                business_name: report.business_name.clone(),
                score: report.score,
            });
        }

        tracing::info!(
            audit_id = %id,
            score = report.score,
            source = source.as_str(),
            premium = request.premium,
            "audit completed"
        );

        Ok(report)
    }

    async fn require_paid_tier(&self, caller: &Caller) -> Result<(), AuditError> {
        let user_id = caller.user_id().ok_or(AuditError::AuthRequired)?;
        match self.subscriptions.is_active_paid_tier(user_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(AuditError::SubscriptionRequired),
            Err(e) => {
                tracing::error!(error = %e, %user_id, "subscription lookup failed");
                Err(AuditError::SubscriptionLookup(e.to_string()))
            }
        }
    }

    /// Live signals from the request's listing, else from a places search by
    /// name. `None` means the mock path.
    async fn resolve_signals(&self, request: &AuditRequest, name: &str) -> Option<ProfileSignals> {
        if let Some(details) = &request.place_details {
            let mut signals = ProfileSignals::from_listing(details, name);
            if signals.place_id.is_none() {
                signals.place_id.clone_from(&request.place_id);
            }
            if signals.address.is_none() {
                signals.address = request
                    .address
                    .as_deref()
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(ToString::to_string);
            }
            return Some(signals);
        }

        let places = self.places.as_deref()?;
        let query = match request.address.as_deref().map(str::trim) {
            Some(address) if !address.is_empty() => format!("{name} {address}"),
            _ => name.to_string(),
        };

        match with_deadline(self.upstream_timeout, places.search(&query)).await {
            Ok(listings) => {
                let first = listings.first();
                if first.is_none() {
                    tracing::debug!(%query, "no places match, using mock audit");
                }
                first.map(|l| ProfileSignals::from_listing(l, name))
            }
            Err(e) => {
                tracing::warn!(error = %e, %query, "places lookup failed, using mock audit");
                None
            }
        }
    }

    /// Checklist and fix guide, plus the three advisors issued concurrently.
    async fn premium_sections(&self, signals: &ProfileSignals) -> PremiumSections {
        let checklist = run_premium_checklist(signals);
        let fix_guide = generate_fix_guide(&checklist.items);

        let category = signals.primary_category().unwrap_or(DEFAULT_CATEGORY);
        let address = signals.address.as_deref().unwrap_or_default();
        let subject = Subject::from(signals);
        let keyword_input = KeywordInput {
            business_name: &signals.business_name,
            category,
            description: signals.description.as_deref(),
            address,
        };
        let sentiment_input = SentimentInput {
            business_name: &signals.business_name,
            category,
            rating: signals.rating_or_zero(),
            review_count: signals.review_count,
            address,
        };

        let timeout = self.upstream_timeout;
        let (competitors, keyword_suggestions, review_sentiment) = tokio::join!(
            analyze_competitors(self.places.as_deref(), &subject, timeout),
            suggest_keywords(self.generator.as_deref(), &keyword_input, timeout),
            analyze_review_sentiment(self.generator.as_deref(), &sentiment_input, timeout),
        );

        PremiumSections {
            is_premium: true,
            checklist,
            competitors,
            keyword_suggestions,
            review_sentiment,
            fix_guide,
        }
    }

    async fn persist(&self, caller: &Caller, request: &AuditRequest, name: &str, report: &AuditReport) {
        let record = AuditRecord {
            id: report.id,
            user_id: caller.user_id(),
            business_name: name.to_string(),
            email: request.contact_email().map(ToString::to_string),
            overall_score: report.score,
            profile_complete: report.profile_complete,
            content_activity: report.content_activity,
            engagement: report.engagement,
            issues: report.issues.clone(),
            recommendations: report.recommendations.clone(),
            is_premium: report.is_premium(),
            source: report.source,
            created_at: Utc::now(),
        };

        if let Err(e) = self.store.insert_audit_record(&record).await {
            tracing::error!(error = %e, audit_id = %record.id, "failed to persist audit record");
        }
    }

    /// History view for the caller's live audits.
    ///
    /// # Errors
    ///
    /// [`AuditError::AuthRequired`] for anonymous callers;
    /// [`AuditError::HistoryUnavailable`] if the store cannot be read.
    pub async fn report_history(&self, caller: &Caller) -> Result<ReportHistory, AuditError> {
        let user_id = caller.user_id().ok_or(AuditError::AuthRequired)?;
        let records = self
            .store
            .list_recent_audits(user_id, ReportSource::Places, HISTORY_LIMIT)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %user_id, "failed to load audit history");
                AuditError::HistoryUnavailable(e.to_string())
            })?;
        Ok(summarize_history(&records))
    }

    /// Free-text listing search with a manual-entry fallback.
    ///
    /// # Errors
    ///
    /// [`AuditError::Validation`] if the query is shorter than two characters.
    pub async fn search_listings(&self, query: &str) -> Result<ListingSearch, AuditError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Err(AuditError::Validation(
                "Search query must be at least 2 characters".to_string(),
            ));
        }

        let Some(places) = self.places.as_deref() else {
            return Ok(ListingSearch {
                results: Vec::new(),
                fallback: true,
                message: Some(SEARCH_UNCONFIGURED),
            });
        };

        match with_deadline(self.upstream_timeout, places.search(query)).await {
            Ok(results) => Ok(ListingSearch {
                results,
                fallback: false,
                message: None,
            }),
            Err(e) => {
                tracing::warn!(error = %e, %query, "places search failed");
                Ok(ListingSearch {
                    results: Vec::new(),
                    fallback: true,
                    message: Some(SEARCH_FAILED),
                })
            }
        }
    }

    /// Liveness of the audit store.
    ///
    /// # Errors
    ///
    /// Propagates the store's ping failure.
    pub async fn health(&self) -> Result<(), PersistenceError> {
        self.store.ping().await
    }
}
