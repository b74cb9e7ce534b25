use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gbpro_audit::{
    AuditError, AuditRecord, AuditRequest, AuditStore, Auditor, CompletionRequest, EmailDispatch,
    PersistenceError, PlacesLookup, ReportSource, SubscriptionStatus, TextGenerator,
    UpstreamError,
};
use gbpro_core::{Caller, Listing};
use uuid::Uuid;

#[derive(Default)]
struct MemoryStore {
    records: Mutex<Vec<AuditRecord>>,
    fail_writes: bool,
}

impl MemoryStore {
    fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditStore for MemoryStore {
    async fn insert_audit_record(&self, record: &AuditRecord) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError("connection refused".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list_recent_audits(
        &self,
        user_id: Uuid,
        source: ReportSource,
        limit: i64,
    ) -> Result<Vec<AuditRecord>, PersistenceError> {
        let mut rows: Vec<AuditRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == Some(user_id) && r.source == source)
            .cloned()
            .collect();
        rows.reverse();
        rows.truncate(usize::try_from(limit).unwrap());
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        Ok(())
    }
}

struct Plans {
    paid: Result<bool, ()>,
    lookups: AtomicUsize,
}

impl Plans {
    fn new(paid: Result<bool, ()>) -> Self {
        Self {
            paid,
            lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SubscriptionStatus for Plans {
    async fn is_active_paid_tier(&self, _user_id: Uuid) -> Result<bool, PersistenceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.paid
            .map_err(|()| PersistenceError("timeout".to_string()))
    }
}

struct Places {
    listings: Vec<Listing>,
    searches: AtomicUsize,
}

#[async_trait]
impl PlacesLookup for Places {
    async fn search(&self, _query: &str) -> Result<Vec<Listing>, UpstreamError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        Ok(self.listings.clone())
    }

    async fn search_nearby(
        &self,
        _category: &str,
        _address: &str,
    ) -> Result<Vec<Listing>, UpstreamError> {
        Err(UpstreamError::Unavailable("quota exceeded".to_string()))
    }
}

struct SlowPlaces;

#[async_trait]
impl PlacesLookup for SlowPlaces {
    async fn search(&self, _query: &str) -> Result<Vec<Listing>, UpstreamError> {
        Ok(vec![listing()])
    }

    async fn search_nearby(
        &self,
        _category: &str,
        _address: &str,
    ) -> Result<Vec<Listing>, UpstreamError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Vec::new())
    }
}

struct SlowGenerator;

#[async_trait]
impl TextGenerator for SlowGenerator {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, UpstreamError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("{}".to_string())
    }
}

fn listing() -> Listing {
    Listing {
        id: "place-1".to_string(),
        name: "Joe's Cafe".to_string(),
        address: "1 Main St, Springfield, IL, USA".to_string(),
        rating: Some(4.6),
        review_count: 64,
        categories: vec!["cafe".to_string()],
        phone: Some("555-0100".to_string()),
        website: Some("https://joes.example".to_string()),
        has_hours: true,
        photo_count: 12,
        description: Some("Neighbourhood coffee and pastries.".to_string()),
        business_status: Some("OPERATIONAL".to_string()),
    }
}

fn auditor(store: Arc<MemoryStore>, plans: Arc<Plans>) -> Auditor {
    Auditor::new(store, plans).with_upstream_timeout(Duration::from_secs(2))
}

fn user() -> Caller {
    Caller::Authenticated(Uuid::from_u128(7))
}

#[tokio::test]
async fn short_name_is_rejected_without_side_effects() {
    let store = Arc::new(MemoryStore::default());
    let auditor = auditor(store.clone(), Arc::new(Plans::new(Ok(true))));

    for name in ["", " ", " a "] {
        let err = auditor
            .run_audit(&Caller::Anonymous, AuditRequest::named(name))
            .await
            .unwrap_err();
        assert!(matches!(err, AuditError::Validation(_)));
    }
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn premium_from_anonymous_requires_auth_and_writes_nothing() {
    let store = Arc::new(MemoryStore::default());
    let plans = Arc::new(Plans::new(Ok(true)));
    let auditor = auditor(store.clone(), plans.clone());

    let mut request = AuditRequest::named("Joe's Cafe");
    request.premium = true;
    let err = auditor
        .run_audit(&Caller::Anonymous, request)
        .await
        .unwrap_err();

    assert!(matches!(err, AuditError::AuthRequired));
    assert!(store.records().is_empty());
    assert_eq!(plans.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn premium_without_paid_tier_is_refused_before_lookup() {
    let store = Arc::new(MemoryStore::default());
    let places = Arc::new(Places {
        listings: vec![listing()],
        searches: AtomicUsize::new(0),
    });
    let auditor = auditor(store.clone(), Arc::new(Plans::new(Ok(false))))
        .with_places(places.clone());

    let mut request = AuditRequest::named("Joe's Cafe");
    request.premium = true;
    let err = auditor.run_audit(&user(), request).await.unwrap_err();

    assert!(matches!(err, AuditError::SubscriptionRequired));
    assert!(store.records().is_empty());
    assert_eq!(places.searches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn subscription_lookup_failure_is_reported() {
    let store = Arc::new(MemoryStore::default());
    let auditor = auditor(store.clone(), Arc::new(Plans::new(Err(()))));
    let mut request = AuditRequest::named("Joe's Cafe");
    request.premium = true;

    let err = auditor.run_audit(&user(), request).await.unwrap_err();
    assert!(matches!(err, AuditError::SubscriptionLookup(_)));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn place_details_are_scored_and_persisted() {
    let store = Arc::new(MemoryStore::default());
    let auditor = auditor(store.clone(), Arc::new(Plans::new(Ok(false))));

    let mut request = AuditRequest::named("  joes cafe ");
    request.place_details = Some(listing());
    request.email = Some("joe@example.com".to_string());
    let report = auditor.run_audit(&user(), request).await.unwrap();

    assert_eq!(report.source, ReportSource::Places);
    assert_eq!(report.business_name, "Joe's Cafe");
    assert_eq!(
        report.score,
        report.profile_complete + report.content_activity + report.engagement
    );
    // All seven profile fields present.
    assert_eq!(report.profile_complete, 35);
    assert!(!report.is_premium());

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, report.id);
    assert_eq!(records[0].business_name, "joes cafe");
    assert_eq!(records[0].user_id, Some(Uuid::from_u128(7)));
    assert_eq!(records[0].email.as_deref(), Some("joe@example.com"));
    assert_eq!(records[0].overall_score, report.score);
    assert!(!records[0].is_premium);
}

#[tokio::test]
async fn no_places_collaborator_means_mock_report() {
    let store = Arc::new(MemoryStore::default());
    let auditor = auditor(store.clone(), Arc::new(Plans::new(Ok(false))));

    let report = auditor
        .run_audit(&Caller::Anonymous, AuditRequest::named("Joe's Cafe"))
        .await
        .unwrap();

    assert_eq!(report.source, ReportSource::Mock);
    assert!((18..=32).contains(&report.profile_complete));
    assert_eq!(report.recommendations.len(), 5);
    let records = store.records();
    assert_eq!(records[0].source, ReportSource::Mock);
    assert_eq!(records[0].user_id, None);
}

#[tokio::test]
async fn places_search_supplies_listing_when_request_has_none() {
    let store = Arc::new(MemoryStore::default());
    let places = Arc::new(Places {
        listings: vec![listing()],
        searches: AtomicUsize::new(0),
    });
    let auditor = auditor(store, Arc::new(Plans::new(Ok(false)))).with_places(places.clone());

    let report = auditor
        .run_audit(&Caller::Anonymous, AuditRequest::named("Joe's Cafe"))
        .await
        .unwrap();
    assert_eq!(report.source, ReportSource::Places);
    assert_eq!(report.review_count, 64);
    assert_eq!(places.searches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn persistence_failure_does_not_fail_the_audit() {
    let store = Arc::new(MemoryStore::failing());
    let auditor = auditor(store, Arc::new(Plans::new(Ok(false))));
    let mut request = AuditRequest::named("Joe's Cafe");
    request.place_details = Some(listing());
    assert!(auditor.run_audit(&Caller::Anonymous, request).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn premium_report_degrades_every_advisor_to_fallbacks() {
    let store = Arc::new(MemoryStore::default());
    let places = Arc::new(Places {
        listings: vec![listing()],
        searches: AtomicUsize::new(0),
    });
    let auditor = auditor(store.clone(), Arc::new(Plans::new(Ok(true))))
        .with_places(places)
        .with_text_generator(Arc::new(SlowGenerator));

    let mut request = AuditRequest::named("Joe's Cafe");
    request.premium = true;
    request.place_details = Some(listing());
    let report = auditor.run_audit(&user(), request).await.unwrap();

    let premium = report.premium.as_ref().expect("premium sections");
    assert_eq!(premium.checklist.items.len(), 47);
    assert_eq!(
        premium.fix_guide.len(),
        premium.checklist.total_count - premium.checklist.passed_count
    );
    // Nearby search failed: fixed mock competitors.
    assert_eq!(premium.competitors.competitors[0].place_id, "mock-1");
    // Generator timed out: templates.
    assert_eq!(
        premium.keyword_suggestions.primary_keywords[3],
        "cafe in IL"
    );
    assert!(premium.review_sentiment.summary.starts_with("Based on 64 reviews"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["isPremium"], true);
    assert_eq!(json["checklist"]["totalCount"], 47);
    assert!(json["fixGuide"].is_array());

    assert!(store.records()[0].is_premium);
}

#[tokio::test(start_paused = true)]
async fn premium_advisors_share_one_timeout_window() {
    let store = Arc::new(MemoryStore::default());
    let auditor = auditor(store, Arc::new(Plans::new(Ok(true))))
        .with_places(Arc::new(SlowPlaces))
        .with_text_generator(Arc::new(SlowGenerator));

    let mut request = AuditRequest::named("Joe's Cafe");
    request.premium = true;
    request.place_details = Some(listing());

    let started = tokio::time::Instant::now();
    let report = auditor.run_audit(&user(), request).await.unwrap();
    let elapsed = started.elapsed();

    // Three advisors each hit the 2s timeout; sequential calls would take 6s.
    assert!(elapsed >= Duration::from_secs(2), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_secs(4), "elapsed {elapsed:?}");

    let premium = report.premium.as_ref().expect("premium sections");
    assert_eq!(premium.competitors.competitors[0].place_id, "mock-1");
    assert_eq!(
        premium.keyword_suggestions.primary_keywords[3],
        "cafe in IL"
    );
    assert!(premium.review_sentiment.summary.starts_with("Based on 64 reviews"));
}

#[tokio::test]
async fn email_intent_is_queued_when_address_supplied() {
    let (dispatch, mut rx) = EmailDispatch::channel(4);
    let auditor = auditor(
        Arc::new(MemoryStore::default()),
        Arc::new(Plans::new(Ok(false))),
    )
    .with_email_dispatch(dispatch);

    let mut request = AuditRequest::named("Joe's Cafe");
    request.email = Some("joe@example.com".to_string());
    let report = auditor.run_audit(&Caller::Anonymous, request).await.unwrap();

    let intent = rx.try_recv().expect("intent queued");
    assert_eq!(intent.audit_id, report.id);
    assert_eq!(intent.email, "joe@example.com");

    auditor
        .run_audit(&Caller::Anonymous, AuditRequest::named("Joe's Cafe"))
        .await
        .unwrap();
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn history_requires_auth_and_skips_mock_reports() {
    let store = Arc::new(MemoryStore::default());
    let auditor = auditor(store, Arc::new(Plans::new(Ok(false))));

    assert!(matches!(
        auditor.report_history(&Caller::Anonymous).await,
        Err(AuditError::AuthRequired)
    ));

    auditor
        .run_audit(&user(), AuditRequest::named("Joe's Cafe"))
        .await
        .unwrap();
    let empty = auditor.report_history(&user()).await.unwrap();
    assert!(!empty.has_data);

    let mut request = AuditRequest::named("Joe's Cafe");
    request.place_details = Some(listing());
    auditor.run_audit(&user(), request).await.unwrap();
    let history = auditor.report_history(&user()).await.unwrap();
    assert!(history.has_data);
    assert_eq!(history.summary.unwrap().total_audits, 1);
}

#[tokio::test]
async fn history_finds_live_audits_behind_many_mock_reports() {
    let store = Arc::new(MemoryStore::default());
    let auditor = auditor(store.clone(), Arc::new(Plans::new(Ok(false))));

    let mut request = AuditRequest::named("Joe's Cafe");
    request.place_details = Some(listing());
    auditor.run_audit(&user(), request).await.unwrap();
    for _ in 0..20 {
        auditor
            .run_audit(&user(), AuditRequest::named("Joe's Cafe"))
            .await
            .unwrap();
    }
    assert_eq!(store.records().len(), 21);

    let history = auditor.report_history(&user()).await.unwrap();
    assert!(history.has_data);
    assert!(history.message.is_none());
    let summary = history.summary.expect("summary");
    assert_eq!(summary.total_audits, 1);
    assert_eq!(summary.history.len(), 1);
}

#[tokio::test]
async fn search_validates_and_reports_fallback() {
    let auditor = auditor(
        Arc::new(MemoryStore::default()),
        Arc::new(Plans::new(Ok(false))),
    );
    assert!(matches!(
        auditor.search_listings("a").await,
        Err(AuditError::Validation(_))
    ));
    let result = auditor.search_listings("Joe's").await.unwrap();
    assert!(result.fallback);
    assert!(result.results.is_empty());
}
