//! Offline `search` and `audit` commands.
//!
//! Both call the places API directly when a places key is supplied and never
//! touch the database or the subscription gate.

use gbpro_audit::{
    calculate_audit_score, generate_fix_guide, generate_recommendations, mock, run_premium_checklist,
    scoring::ScoringInput, ChecklistResult, ScoreBreakdown,
};
use gbpro_core::{Listing, ProfileSignals};
use gbpro_places::PlacesClient;

/// Places connection settings shared by `search` and `audit`.
#[derive(Debug, clap::Args)]
pub(crate) struct PlacesArgs {
    /// Google Places API key; without one, `audit` falls back to mock data
    #[arg(long, global = true, env = "GOOGLE_PLACES_API_KEY", hide_env_values = true)]
    pub(crate) places_api_key: Option<String>,

    #[arg(
        long,
        global = true,
        env = "GBPRO_PLACES_BASE_URL",
        default_value = gbpro_places::client::DEFAULT_BASE_URL
    )]
    pub(crate) places_base_url: String,

    /// Per-request places timeout in seconds
    #[arg(long, global = true, env = "GBPRO_UPSTREAM_TIMEOUT_SECS", default_value_t = 8)]
    pub(crate) upstream_timeout_secs: u64,
}

fn places_client(args: &PlacesArgs) -> anyhow::Result<Option<PlacesClient>> {
    let Some(key) = args
        .places_api_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
    else {
        return Ok(None);
    };

    let client = PlacesClient::with_base_url(key, args.upstream_timeout_secs, &args.places_base_url)
        .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))?;
    Ok(Some(client))
}

/// Print up to five listings matching `query`.
///
/// # Errors
///
/// Returns an error if the API key is missing or the search fails.
pub(crate) async fn run_search(args: &PlacesArgs, query: &str) -> anyhow::Result<()> {
    let client = places_client(args)?
        .ok_or_else(|| anyhow::anyhow!("GOOGLE_PLACES_API_KEY is not set; cannot search"))?;

    let listings = client.search_text(query).await?;
    if listings.is_empty() {
        println!("no listings found for \"{query}\"");
        return Ok(());
    }

    println!(
        "{:<32}{:<8}{:<9}{:<8}ADDRESS",
        "NAME", "RATING", "REVIEWS", "PHOTOS"
    );
    for listing in &listings {
        println!(
            "{:<32}{:<8}{:<9}{:<8}{}",
            truncate(&listing.name, 30),
            listing
                .rating
                .map_or_else(|| "\u{2014}".to_string(), |r| format!("{r:.1}")),
            listing.review_count,
            listing.photo_count,
            listing.address
        );
    }
    Ok(())
}

/// Score `name` against the first places match, or a mock report when no
/// listing is available.
///
/// # Errors
///
/// Returns an error only if the places client cannot be constructed; a
/// failed lookup falls back to the mock generator.
pub(crate) async fn run_audit(
    args: &PlacesArgs,
    name: &str,
    address: Option<&str>,
    with_checklist: bool,
) -> anyhow::Result<()> {
    let listing = match places_client(args)? {
        Some(client) => lookup(&client, name, address).await,
        None => None,
    };

    match listing {
        Some(listing) => {
            let signals = ProfileSignals::from_listing(&listing, name);
            let breakdown = calculate_audit_score(&ScoringInput::from(&signals));
            let recommendations = generate_recommendations(&breakdown.issues);
            println!("{} ({})", signals.business_name, listing.address);
            print_breakdown(&breakdown, &recommendations);

            if with_checklist {
                print_checklist(&run_premium_checklist(&signals));
            }
        }
        None => {
            println!("{name} (mock data: no live listing available)");
            let breakdown = mock::generate_mock_audit(name, &mut rand::rng());
            print_breakdown(&breakdown, &mock::mock_recommendations());

            if with_checklist {
                let signals = ProfileSignals::named(name, address);
                print_checklist(&run_premium_checklist(&signals));
            }
        }
    }
    Ok(())
}

async fn lookup(client: &PlacesClient, name: &str, address: Option<&str>) -> Option<Listing> {
    let query = match address {
        Some(address) => format!("{name} {address}"),
        None => name.to_string(),
    };
    match client.search_text(&query).await {
        Ok(listings) => listings.into_iter().next(),
        Err(e) => {
            tracing::warn!(error = %e, %query, "places lookup failed; using mock data");
            None
        }
    }
}

fn print_breakdown(breakdown: &ScoreBreakdown, recommendations: &[String]) {
    println!();
    println!("score             {:>3}/100", breakdown.score);
    println!("profile complete  {:>3}/35", breakdown.profile_complete);
    println!("content activity  {:>3}/35", breakdown.content_activity);
    println!("engagement        {:>3}/30", breakdown.engagement);

    if !breakdown.issues.is_empty() {
        println!();
        println!("issues:");
        for issue in &breakdown.issues {
            println!("  [{:<6}] {}", issue.severity.as_str(), issue.message);
        }
    }

    println!();
    println!("recommendations:");
    for line in recommendations {
        println!("  - {line}");
    }
}

fn print_checklist(result: &ChecklistResult) {
    println!();
    println!(
        "checklist: {}/{} passed",
        result.passed_count, result.total_count
    );
    for (category, score) in &result.category_scores {
        println!("  {:<20}{}/{}", category.label(), score.passed, score.total);
    }

    let steps = generate_fix_guide(&result.items);
    if steps.is_empty() {
        return;
    }
    println!();
    println!("fix guide:");
    for (n, step) in steps.iter().enumerate() {
        println!(
            "  {:>2}. [{}] {} ({})",
            n + 1,
            step.impact.as_str(),
            step.label,
            step.estimated_time
        );
        println!("      {}", step.fix_guide);
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
