mod api;
mod identity;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use gbpro_audit::{run_email_dispatcher, Auditor, EmailDispatch, EMAIL_QUEUE_CAPACITY};
use gbpro_core::AppConfig;
use gbpro_db::{PgAuditStore, PgSubscriptions};
use gbpro_llm::OpenAiClient;
use gbpro_places::PlacesClient;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, rate_limit_state, AppState},
    identity::{IdentityProvider, SupabaseIdentity},
    middleware::IdentityState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Arc::new(gbpro_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = gbpro_db::PoolConfig::from_app_config(&config);
    let pool = gbpro_db::connect_pool(&config.database_url, pool_config).await?;
    let applied = gbpro_db::run_migrations(&pool).await?;
    tracing::info!(applied, "migrations up to date");

    let (email, email_rx) = EmailDispatch::channel(EMAIL_QUEUE_CAPACITY);
    let dispatcher = tokio::spawn(run_email_dispatcher(email_rx));

    let auditor = build_auditor(&config, pool, email)?;
    let identity = IdentityState::new(build_identity(&config)?);
    let app = build_app(
        AppState {
            auditor: Arc::new(auditor),
        },
        identity,
        rate_limit_state(config.rate_limit_per_minute),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "gbpro-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router owned the last EmailDispatch; the dispatcher drains and exits.
    if let Err(e) = dispatcher.await {
        tracing::warn!(error = %e, "email dispatcher ended abnormally");
    }
    Ok(())
}

fn build_auditor(
    config: &AppConfig,
    pool: sqlx::PgPool,
    email: EmailDispatch,
) -> anyhow::Result<Auditor> {
    let mut auditor = Auditor::new(
        Arc::new(PgAuditStore::new(pool.clone())),
        Arc::new(PgSubscriptions::new(pool)),
    )
    .with_email_dispatch(email)
    .with_upstream_timeout(Duration::from_secs(config.upstream_timeout_secs));

    if let Some(key) = config.google_places_api_key.as_deref() {
        let base_url = config
            .places_base_url
            .as_deref()
            .unwrap_or(gbpro_places::client::DEFAULT_BASE_URL);
        let places = PlacesClient::with_base_url(key, config.upstream_timeout_secs, base_url)?;
        auditor = auditor.with_places(Arc::new(places));
    } else {
        tracing::warn!("GOOGLE_PLACES_API_KEY not set; audits without place details use mock data");
    }

    if let Some(key) = config.openai_api_key.as_deref() {
        let generator = OpenAiClient::new(
            key,
            &config.openai_model,
            &config.openai_base_url,
            config.upstream_timeout_secs,
        )?;
        auditor = auditor.with_text_generator(Arc::new(generator));
    } else {
        tracing::warn!("OPENAI_API_KEY not set; keyword and sentiment sections use templates");
    }

    Ok(auditor)
}

fn build_identity(config: &AppConfig) -> anyhow::Result<Option<Arc<dyn IdentityProvider>>> {
    match (
        config.supabase_url.as_deref(),
        config.supabase_anon_key.as_deref(),
    ) {
        (Some(url), Some(anon_key)) => {
            let identity = SupabaseIdentity::new(url, anon_key, config.upstream_timeout_secs)?;
            Ok(Some(Arc::new(identity)))
        }
        _ => {
            tracing::warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set; all callers are anonymous");
            Ok(None)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
