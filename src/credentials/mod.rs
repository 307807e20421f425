use anyhow::{bail, Result};
use tracing::debug;

/// Environment variable holding the Apify API token
pub const ENV_TOKEN_VAR: &str = "APIFY_TOKEN";

/// Load a `.env` file from the working directory, if there is one.
/// Variables already set in the real environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => debug!(error = %e, "ignoring unreadable .env"),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Check for an Apify token in the APIFY_TOKEN environment variable.
/// Returns Some(token) if the env var is set and non-empty, None otherwise.
pub fn get_token_from_env() -> Option<String> {
    non_empty(std::env::var(ENV_TOKEN_VAR).ok())
}

/// Like [`get_token_from_env`], but a missing token is an error.
pub fn require_token() -> Result<String> {
    match get_token_from_env() {
        Some(token) => Ok(token),
        None => bail!(
            "{} is not set. Add it to your environment or a .env file, or pass --jobs to rank saved listings",
            ENV_TOKEN_VAR
        ),
    }
}
