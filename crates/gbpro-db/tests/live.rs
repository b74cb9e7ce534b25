//! Live integration tests for gbpro-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/gbpro-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory. Run with `cargo test -- --ignored` and `DATABASE_URL`
//! pointing at a server the tests may create databases on.

use chrono::{Duration, Utc};
use gbpro_audit::{AuditRecord, ReportSource};
use gbpro_db::{insert_audit, list_audits_for_user};
use uuid::Uuid;

fn record(user_id: Uuid, source: ReportSource, minutes_ago: i64) -> AuditRecord {
    AuditRecord {
        id: Uuid::new_v4(),
        user_id: Some(user_id),
        business_name: "Joe's Cafe".to_string(),
        email: None,
        overall_score: 60,
        profile_complete: 30,
        content_activity: 15,
        engagement: 15,
        issues: Vec::new(),
        recommendations: vec!["Post weekly updates".to_string()],
        is_premium: false,
        source,
        created_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn audit_for_identity_without_users_row_is_stored(pool: sqlx::PgPool) {
    let user_id = Uuid::new_v4();
    let live = record(user_id, ReportSource::Places, 0);

    insert_audit(&pool, &live)
        .await
        .expect("insert without a users row should succeed");

    let rows = list_audits_for_user(&pool, user_id, ReportSource::Places, 20)
        .await
        .expect("list audits");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, live.id);
    assert_eq!(rows[0].user_id, Some(user_id));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn source_filter_applies_before_limit(pool: sqlx::PgPool) {
    let user_id = Uuid::new_v4();
    let live = record(user_id, ReportSource::Places, 60);
    insert_audit(&pool, &live).await.expect("insert live audit");
    for minutes_ago in 0..20 {
        insert_audit(&pool, &record(user_id, ReportSource::Mock, minutes_ago))
            .await
            .expect("insert mock audit");
    }

    let rows = list_audits_for_user(&pool, user_id, ReportSource::Places, 20)
        .await
        .expect("list audits");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, live.id);
}
