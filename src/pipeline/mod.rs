// src/pipeline/mod.rs

//! Collection pipeline.

mod collect;

pub use collect::{
    CATEGORIES_FILE, LATEST_TOPICS_CSV_FILE, LATEST_TOPICS_FILE, SEARCH_RESULTS_FILE,
    SITE_INFO_FILE, TOP_TOPICS_FILE, run_collector,
};
