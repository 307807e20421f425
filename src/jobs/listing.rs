use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::Job;

/// URL used when a listing carries no link at all
pub const MISSING_URL: &str = "#";

/// Non-empty string value of `key`. Nulls, non-strings and "" count as missing.
fn text_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}

/// Map one raw scraper item onto a [`Job`].
///
/// Scrapers disagree on field names, so the description falls back to
/// `descriptionText` and the URL is the first of `jobUrl`, `url`, `link` and
/// `applyUrl` that is present.
pub fn normalize_listing(item: &Value) -> Job {
    let url = ["jobUrl", "url", "link", "applyUrl"]
        .iter()
        .find_map(|key| text_field(item, key))
        .unwrap_or(MISSING_URL);

    Job {
        title: text_field(item, "title").unwrap_or_default().to_string(),
        company: text_field(item, "companyName")
            .unwrap_or_default()
            .to_string(),
        description: text_field(item, "description")
            .or_else(|| text_field(item, "descriptionText"))
            .unwrap_or_default()
            .to_string(),
        location: text_field(item, "location").unwrap_or_default().to_string(),
        url: url.to_string(),
    }
}

pub fn normalize_listings(items: &[Value]) -> Vec<Job> {
    items.iter().map(normalize_listing).collect()
}

/// Read one dataset export: a JSON array of scraper items.
pub fn read_listing_file(path: &Path) -> Result<Vec<Job>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings file at {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse listings: invalid JSON in {}", path.display()))?;

    let Value::Array(items) = value else {
        bail!("Listings file {} must contain a JSON array", path.display());
    };

    debug!(path = %path.display(), count = items.len(), "read listings file");
    Ok(normalize_listings(&items))
}

/// Expand glob patterns into concrete paths, in pattern order.
/// A pattern that matches nothing is an error.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let before = paths.len();
        let entries =
            glob::glob(pattern).with_context(|| format!("Invalid listings pattern '{}'", pattern))?;
        for entry in entries {
            let path = entry.with_context(|| format!("Failed to read path matched by '{}'", pattern))?;
            paths.push(path);
        }
        if paths.len() == before {
            bail!("No listings files match '{}'", pattern);
        }
    }
    Ok(paths)
}

/// Load and normalize every listing from the files matching `patterns`.
pub fn load_listing_files(patterns: &[String]) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();
    for path in expand_patterns(patterns)? {
        jobs.extend(read_listing_file(&path)?);
    }
    info!(count = jobs.len(), "loaded listings from files");
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_item() {
        let item = json!({
            "title": "Junior Rust Developer",
            "companyName": "Ferris Inc",
            "description": "Write Rust",
            "location": "Berlin",
            "jobUrl": "https://example.com/jobs/1"
        });
        let job = normalize_listing(&item);
        assert_eq!(job.title, "Junior Rust Developer");
        assert_eq!(job.company, "Ferris Inc");
        assert_eq!(job.description, "Write Rust");
        assert_eq!(job.location, "Berlin");
        assert_eq!(job.url, "https://example.com/jobs/1");
    }

    #[test]
    fn test_description_falls_back_to_text() {
        let item = json!({ "description": "", "descriptionText": "Plain text" });
        assert_eq!(normalize_listing(&item).description, "Plain text");

        let item = json!({ "description": null, "descriptionText": "Plain text" });
        assert_eq!(normalize_listing(&item).description, "Plain text");
    }

    #[test]
    fn test_url_fallback_order() {
        let item = json!({ "url": "u", "link": "l", "applyUrl": "a" });
        assert_eq!(normalize_listing(&item).url, "u");

        let item = json!({ "jobUrl": "", "applyUrl": "a" });
        assert_eq!(normalize_listing(&item).url, "a");
    }

    #[test]
    fn test_missing_everything() {
        let job = normalize_listing(&json!({}));
        assert_eq!(job.title, "");
        assert_eq!(job.company, "");
        assert_eq!(job.url, MISSING_URL);
    }

    #[test]
    fn test_non_string_values_count_as_missing() {
        let item = json!({ "title": 42, "location": ["Remote"] });
        let job = normalize_listing(&item);
        assert_eq!(job.title, "");
        assert_eq!(job.location, "");
    }

    #[test]
    fn test_unmatched_pattern_is_error() {
        let patterns = vec!["/definitely/not/here/*.json".to_string()];
        let err = expand_patterns(&patterns).unwrap_err();
        assert!(err.to_string().contains("No listings files match"));
    }

    #[test]
    fn test_read_listing_file_roundtrip() {
        let dir = std::env::temp_dir().join(format!("job-bro-listing-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dataset.json");
        fs::write(
            &path,
            r#"[{"title": "A", "companyName": "B"}, {"title": "C", "link": "https://c"}]"#,
        )
        .unwrap();

        let jobs = load_listing_files(&[dir.join("*.json").display().to_string()]).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].company, "B");
        assert_eq!(jobs[1].url, "https://c");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_listing_file_rejects_object() {
        let dir = std::env::temp_dir().join(format!("job-bro-object-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dataset.json");
        fs::write(&path, r#"{"items": []}"#).unwrap();

        let err = read_listing_file(&path).unwrap_err();
        assert!(err.to_string().contains("must contain a JSON array"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
