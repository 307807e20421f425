use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// On-disk configuration document. Every field is optional; defaults are
/// resolved once when the matcher config is built from it.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub settings: Settings,
    /// Title substrings that rule a job out (e.g. "intern", "sales")
    pub exclude_keywords: Vec<String>,
    /// Title substrings that mark a role as too senior (e.g. "senior", "staff")
    pub seniority_keywords: Vec<String>,
    /// Entry-level signals anywhere in the posting (e.g. "new grad")
    pub fresh_grad_keywords: Vec<String>,
    /// Skills that must appear as whole words in both the posting and the resume
    pub keywords: Vec<String>,
    /// Search URLs handed to the Apify scraper
    pub job_queries: Vec<String>,
    pub apify: ApifyConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub resume_path: Option<PathBuf>,
    /// Jobs asking for this many years or more are ruled out (default: 2)
    pub max_experience_years: Option<u64>,
    /// Flat bonus for entry-level postings (default: 10)
    pub fresh_grad_boost_score: Option<f64>,
    /// Bonus per shared keyword (default: 5)
    pub keyword_match_score: Option<f64>,
    /// Number of jobs in the HTML digest (default: 10)
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ApifyConfig {
    /// Actor id in `user~name` form
    pub actor: Option<String>,
    /// Maximum number of listings to scrape (default: 100)
    pub max_items: Option<u64>,
    /// Ask the scraper for company details (default: true)
    pub scrape_company: Option<bool>,
}
