use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Starter config written by `job-bro init`
pub const STARTER_CONFIG: &str = r#"# job-bro configuration

settings:
  # Plain text or PDF (PDF needs `pdftotext` from poppler-utils)
  resume_path: resume.pdf
  # Postings asking for this many years or more are scored 0
  max_experience_years: 2
  fresh_grad_boost_score: 10
  keyword_match_score: 5
  # Jobs listed in the HTML digest
  top_n: 10

# Title substrings that rule a posting out
exclude_keywords:
  - intern
  - sales

# Title substrings that mark a posting as too senior
seniority_keywords:
  - senior
  - staff
  - principal
  - lead
  - manager

# Entry-level signals; letters, digits and spaces only
fresh_grad_keywords:
  - new grad
  - graduate
  - entry level
  - junior

# Skills matched as whole words in both the posting and your resume
keywords:
  - python
  - rust
  - sql

# LinkedIn search URLs scraped through Apify (token from APIFY_TOKEN)
job_queries:
  - "https://www.linkedin.com/jobs/search/?keywords=software%20engineer&f_E=2"

apify:
  actor: curious_coder~linkedin-jobs-scraper
  max_items: 100
  scrape_company: true
"#;

/// Write the starter config to `path`, creating parent directories.
/// Refuses to overwrite an existing file.
pub fn write_starter_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    fs::write(path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write config file at {}", path.display()))?;
    Ok(())
}
