// src/pipeline/collect.rs

//! The collection run.
//!
//! A fixed six-step sequence: site info, endpoint probe, categories, latest
//! topics, top topics, search. Step 1 is the only gate; a failure there
//! aborts the run. Steps 3-6 guard on their own result, log, and continue.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::{Config, SiteSummary, TopicSummary, project_topics};
use crate::services::ForumClient;
use crate::storage::LocalStorage;

/// Output file names, overwritten on every run.
pub const SITE_INFO_FILE: &str = "linux_do_site_info.json";
pub const CATEGORIES_FILE: &str = "linux_do_categories.json";
pub const LATEST_TOPICS_FILE: &str = "linux_do_latest_topics.json";
pub const LATEST_TOPICS_CSV_FILE: &str = "linux_do_latest_topics.csv";
pub const TOP_TOPICS_FILE: &str = "linux_do_top_topics.json";
pub const SEARCH_RESULTS_FILE: &str = "linux_do_search_results.json";

/// Run the full collection pipeline.
pub async fn run_collector(
    config: &Config,
    client: &ForumClient,
    storage: &LocalStorage,
) -> Result<()> {
    log::info!("linux.do data collection starting");

    // 1. Site metadata - the one gate of the run.
    log::info!("Step 1/6: Fetching site info...");
    let site_info = match client.get_site_info().await {
        Ok(raw) => raw,
        Err(error) => {
            log::error!("Unable to fetch site info: {error}");
            return Err(error);
        }
    };
    let summary = SiteSummary::from_raw(&site_info);
    save_json(storage, SITE_INFO_FILE, &summary).await;
    log::info!("    Title: {}", show(&summary.title));
    log::info!("    Topics: {}", show(&summary.topics_count));
    log::info!("    Posts: {}", show(&summary.posts_count));
    log::info!("    Users: {}", show(&summary.users_count));

    // 2. Endpoint probe
    log::info!("Step 2/6: Exploring available API endpoints...");
    let available = client.explore_available_apis().await;
    log::info!("Found {} available endpoints", available.len());

    // 3. Categories, stored verbatim
    log::info!("Step 3/6: Fetching categories...");
    match client.get_categories().await {
        Ok(categories) if categories.is_empty() => log::info!("No categories returned"),
        Ok(categories) => {
            save_json(storage, CATEGORIES_FILE, &categories).await;
            log::info!("Found {} categories", categories.len());
            for category in categories.iter().take(5) {
                log::info!(
                    "    {} (ID: {})",
                    category.get("name").and_then(Value::as_str).unwrap_or("-"),
                    show(&category.get("id").and_then(Value::as_i64)),
                );
            }
        }
        Err(error) => log::warn!("Skipping categories: {error}"),
    }

    // 4. Latest topics
    log::info!("Step 4/6: Fetching latest topics...");
    match client.get_latest_topics(config.collect.latest_page).await {
        Ok(raw) if raw.is_empty() => log::info!("No latest topics returned"),
        Ok(raw) => {
            let topics = project_topics(&raw);
            save_json(storage, LATEST_TOPICS_FILE, &topics).await;
            save_csv(storage, LATEST_TOPICS_CSV_FILE, &topics).await;
            log::info!("Fetched {} latest topics", topics.len());
            for topic in topics.iter().take(5) {
                log::info!(
                    "    {} (views: {})",
                    topic.title.as_deref().unwrap_or("-"),
                    show(&topic.views),
                );
            }
        }
        Err(error) => log::warn!("Skipping latest topics: {error}"),
    }

    // 5. Top topics
    log::info!(
        "Step 5/6: Fetching top topics ({})...",
        config.collect.top_period
    );
    match client.get_top_topics(&config.collect.top_period).await {
        Ok(raw) if raw.is_empty() => log::info!("No top topics returned"),
        Ok(raw) => {
            let topics = project_topics(&raw);
            save_json(storage, TOP_TOPICS_FILE, &topics).await;
            log::info!("Fetched {} top topics", topics.len());
        }
        Err(error) => log::warn!("Skipping top topics: {error}"),
    }

    // 6. Search
    log::info!(
        "Step 6/6: Searching for '{}'...",
        config.collect.search_query
    );
    match client.search_topics(&config.collect.search_query, 0).await {
        Ok(results) => {
            save_json(storage, SEARCH_RESULTS_FILE, &results).await;
            // The search response shape is service-defined; report a posts
            // count only when such an array actually exists.
            if let Some(posts) = results.get("posts").and_then(Value::as_array) {
                log::info!("Search returned {} posts", posts.len());
            }
        }
        Err(error) => log::warn!("Skipping search: {error}"),
    }

    log::info!("Collection complete. Output files:");
    for name in [
        SITE_INFO_FILE,
        CATEGORIES_FILE,
        LATEST_TOPICS_FILE,
        LATEST_TOPICS_CSV_FILE,
        TOP_TOPICS_FILE,
        SEARCH_RESULTS_FILE,
    ] {
        log::info!("    {name}");
    }
    log::info!("Collected data may only be used for building search indexes.");
    log::info!("Not for AI model training (content signals: search=yes, ai-train=no).");
    log::info!("Respect the forum's API usage limits.");

    Ok(())
}

/// Write a JSON file, absorbing I/O failures into a warning.
async fn save_json<T: Serialize + ?Sized>(storage: &LocalStorage, name: &str, value: &T) {
    match storage.write_json(name, value).await {
        Ok(()) => log::info!("Saved {name}"),
        Err(error) => log::warn!("Failed to save {name}: {error}"),
    }
}

/// Write the topics CSV file, absorbing I/O failures into a warning.
async fn save_csv(storage: &LocalStorage, name: &str, topics: &[TopicSummary]) {
    match storage.write_topics_csv(name, topics).await {
        Ok(()) => log::info!("Saved {name}"),
        Err(error) => log::warn!("Failed to save {name}: {error}"),
    }
}

fn show<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "-".to_string(), T::to_string)
}
