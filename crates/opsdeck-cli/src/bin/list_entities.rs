use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::sync::Arc;

use opsdeck_client::{ApiClient, FeatureFlagSource, OrganizationSource, ReviewSource, UserSource};
use opsdeck_core::models::EntityKind;
use opsdeck_engine::{Collection, EntitySource, FilterValue, ListView, LoadState, Queryable, ViewLoader};

#[derive(Parser, Debug)]
#[command(name = "list_entities")]
#[command(about = "Browse an admin collection: search, filter, paginate")]
struct Args {
    /// Collection to browse: organizations, users, feature-flags, reviews
    kind: String,

    /// Case-insensitive substring search
    #[arg(long, default_value = "")]
    search: String,

    /// Filter as key=value, repeatable (e.g. --filter status=Active)
    #[arg(long, value_name = "KEY=VALUE")]
    filter: Vec<String>,

    /// Page to display (1-indexed)
    #[arg(long, default_value = "1")]
    page: usize,

    /// Rows per page (must be at least 1)
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    page_size: u64,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let kind: EntityKind = args.kind.parse()?;
    let client = ApiClient::from_env()?;

    match kind {
        EntityKind::Organizations => {
            render(
                Arc::new(OrganizationSource::new(client)),
                &args,
                |org| format!("{:<4} {:<24} {:<20} {:>6}  {}", org.id, org.name, org.domain, org.users_count, org.status),
            )
            .await
        }
        EntityKind::Users => {
            render(
                Arc::new(UserSource::new(client)),
                &args,
                |user| format!("{:<4} {:<20} {:<32} {:<8} {}", user.id, user.name, user.email, user.role, user.status),
            )
            .await
        }
        EntityKind::FeatureFlags => {
            render(
                Arc::new(FeatureFlagSource::new(client)),
                &args,
                |flag| format!("{:<4} {:<30} {:<24} {}", flag.id, flag.name, flag.key, flag.status),
            )
            .await
        }
        EntityKind::Reviews => {
            render(
                Arc::new(ReviewSource::new(client)),
                &args,
                |review| {
                    format!(
                        "{:<6} {} {:<20} {:<12} {}",
                        review.id,
                        review.stars(),
                        review.display_name(),
                        review.source,
                        review.date_label()
                    )
                },
            )
            .await
        }
    }
}

async fn render<E, F>(source: Arc<dyn EntitySource<E>>, args: &Args, row: F) -> Result<()>
where
    E: Queryable + Serialize,
    F: Fn(&E) -> String,
{
    let mut loader = ViewLoader::new(source);
    loader.load().await;

    let collection: Collection<E> = match loader.state() {
        LoadState::Loaded(collection) => collection.clone(),
        LoadState::Failed(message) => return Err(anyhow::anyhow!("load failed: {message}")),
        other => return Err(anyhow::anyhow!("unexpected load state: {}", other.name())),
    };

    let mut view = ListView::with_page_size(args.page_size as usize);
    view.set_search(&args.search);
    for pair in &args.filter {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("filter must be key=value, got: {pair}"))?;
        view.set_filter(key, FilterValue::Is(value.to_string()));
    }
    view.go_to(&collection, args.page);

    let page = view.visible(&collection);
    match args.format.as_str() {
        "json" => {
            let rows: Vec<&E> = page.items.iter().map(|item| item.as_ref()).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            for item in &page.items {
                println!("{}", row(item));
            }
            println!("{}", page.range_label());
        }
    }

    Ok(())
}
