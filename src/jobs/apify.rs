use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::info;

use super::listing::normalize_listings;
use super::types::Job;
use crate::config::Config;

const API_BASE: &str = "https://api.apify.com/v2/acts";
pub const DEFAULT_ACTOR: &str = "curious_coder~linkedin-jobs-scraper";
pub const DEFAULT_MAX_ITEMS: u64 = 100;

/// Synchronous run endpoint that returns the dataset items in the response body
fn run_url(actor: &str, token: &str) -> String {
    format!(
        "{}/{}/run-sync-get-dataset-items?token={}",
        API_BASE, actor, token
    )
}

/// Actor input built from `job_queries` and the `apify` section
pub fn build_payload(config: &Config) -> Value {
    json!({
        "count": config.apify.max_items.unwrap_or(DEFAULT_MAX_ITEMS),
        "scrapeCompany": config.apify.scrape_company.unwrap_or(true),
        "urls": config.job_queries,
    })
}

/// Run the scraper actor and return the raw dataset items.
/// The caller checks that `job_queries` is non-empty.
pub async fn fetch_listings(config: &Config, token: &str) -> Result<Vec<Value>> {
    let actor = config.apify.actor.as_deref().unwrap_or(DEFAULT_ACTOR);
    info!(actor, queries = config.job_queries.len(), "fetching jobs from Apify");

    let client = reqwest::Client::new();
    let response = client
        .post(run_url(actor, token))
        .header("User-Agent", "job-bro")
        .json(&build_payload(config))
        .send()
        .await
        .context("Failed to reach the Apify API")?;

    let status = response.status();
    if status != StatusCode::OK && status != StatusCode::CREATED {
        let body = response.text().await.unwrap_or_default();
        bail!("Apify run failed with status {}: {}", status, body.trim());
    }

    let items: Vec<Value> = response
        .json()
        .await
        .context("Failed to parse Apify dataset items")?;

    info!(count = items.len(), "fetched raw listings");
    Ok(items)
}

/// Fetch and normalize listings into jobs.
pub async fn fetch_jobs(config: &Config, token: &str) -> Result<Vec<Job>> {
    let items = fetch_listings(config, token).await?;
    Ok(normalize_listings(&items))
}
