use anyhow::{bail, Context, Result};

/// Open a URL in the user's default browser
///
/// # Arguments
/// * `url` - The URL to open (e.g., a job posting link)
///
/// # Errors
/// Returns error if the job has no link, or the browser cannot be opened
pub fn open_url(url: &str) -> Result<()> {
    if url.is_empty() || url == crate::jobs::listing::MISSING_URL {
        bail!("This job has no link to open");
    }
    webbrowser::open(url).with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_link_is_error() {
        assert!(open_url("#").is_err());
        assert!(open_url("").is_err());
    }
}
