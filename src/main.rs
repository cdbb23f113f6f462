use actix_web::web;
use anyhow::Context;
use review_analyzer::api;
use review_analyzer::config::Config;
use review_analyzer::loader::load_reviews_from_path;
use review_analyzer::sentiment::VaderScorer;
use review_analyzer::service::ReviewService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to load configuration from environment")?;

    // Load the dataset before the first request is served
    let reviews = load_reviews_from_path(&config.reviews_csv)
        .with_context(|| format!("Failed to load reviews from {}", config.reviews_csv.display()))?;

    // One service for the whole process, shared by every worker
    let service = web::Data::new(ReviewService::new(reviews, Arc::new(VaderScorer::new())));

    api::serve(service, (config.host.clone(), config.port))
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
        .await?;

    info!("Server shut down");
    Ok(())
}
