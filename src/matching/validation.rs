use crate::config::Config;

fn check_score(errors: &mut Vec<String>, field: &str, value: Option<f64>) {
    if let Some(v) = value {
        if !v.is_finite() {
            errors.push(format!("settings.{}: must be a finite number", field));
        } else if v < 0.0 {
            errors.push(format!("settings.{}: must be non-negative", field));
        }
    }
}

fn check_blank(errors: &mut Vec<String>, field: &str, values: &[String]) {
    for (i, value) in values.iter().enumerate() {
        if value.trim().is_empty() {
            errors.push(format!("{}[{}]: must not be blank", field, i));
        }
    }
}

/// Validate the matching configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_matching(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_score(
        &mut errors,
        "fresh_grad_boost_score",
        config.settings.fresh_grad_boost_score,
    );
    check_score(
        &mut errors,
        "keyword_match_score",
        config.settings.keyword_match_score,
    );

    if config.settings.top_n == Some(0) {
        errors.push("settings.top_n: must be at least 1".to_string());
    }
    if config.apify.max_items == Some(0) {
        errors.push("apify.max_items: must be at least 1".to_string());
    }

    check_blank(&mut errors, "exclude_keywords", &config.exclude_keywords);
    check_blank(&mut errors, "seniority_keywords", &config.seniority_keywords);
    check_blank(&mut errors, "fresh_grad_keywords", &config.fresh_grad_keywords);
    check_blank(&mut errors, "keywords", &config.keywords);
    check_blank(&mut errors, "job_queries", &config.job_queries);

    // Fresh grad keywords are matched against normalized text, which only
    // keeps ASCII letters, digits and spaces
    for (i, kw) in config.fresh_grad_keywords.iter().enumerate() {
        if kw.chars().any(|c| !(c.is_ascii_alphanumeric() || c == ' ')) {
            errors.push(format!(
                "fresh_grad_keywords[{}]: '{}' can never match - use only letters, digits and spaces (e.g. 'entry level' instead of 'entry-level')",
                i, kw
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
