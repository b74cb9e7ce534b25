mod audit;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gbpro-cli")]
#[command(about = "Operator tools for the gbpro audit service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fallback tracing filter when `RUST_LOG` is unset
    #[arg(long, global = true, env = "GBPRO_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(flatten)]
    places: audit::PlacesArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Search the places API and print matching listings
    Search {
        /// Free-text query, e.g. "Joe's Cafe Springfield"
        query: String,
    },
    /// Score a business without saving anything
    Audit {
        /// Business name to look up
        name: String,
        /// Address or city to narrow the lookup
        #[arg(long)]
        address: Option<String>,
        /// Also print the 47-point checklist and fix guide
        #[arg(long)]
        checklist: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Only `migrate` loads AppConfig; search and audit run without DATABASE_URL.
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Migrate => run_migrate().await,
        Commands::Search { query } => audit::run_search(&cli.places, &query).await,
        Commands::Audit {
            name,
            address,
            checklist,
        } => audit::run_audit(&cli.places, &name, address.as_deref(), checklist).await,
    }
}

async fn run_migrate() -> anyhow::Result<()> {
    let config = gbpro_core::load_app_config()?;
    let pool_config = gbpro_db::PoolConfig::from_app_config(&config);
    let pool = gbpro_db::connect_pool(&config.database_url, pool_config).await?;
    let applied = gbpro_db::run_migrations(&pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}
