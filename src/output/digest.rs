use chrono::NaiveDate;

use super::formatter::{format_score, STRONG_MATCH_SCORE};
use crate::jobs::ScoredJob;

/// Default number of jobs in the digest
pub const DEFAULT_DIGEST_SIZE: usize = 10;

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Subject line for the digest, e.g. "Your Daily Top 10 Job Matches"
pub fn digest_subject(top_n: usize) -> String {
    format!("Your Daily Top {} Job Matches", top_n)
}

/// Render the top `top_n` jobs as an HTML document, ready to be mailed by an
/// external sender. Scores above 10 are green, the rest orange.
pub fn render_digest(jobs: &[ScoredJob], top_n: usize, date: NaiveDate) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&digest_subject(top_n))));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!(
        "<h2>Top matches for you today ({})</h2>\n",
        date.format("%Y-%m-%d")
    ));

    if jobs.is_empty() {
        html.push_str("<p>No jobs found.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for job in jobs.iter().take(top_n) {
            let color = if job.match_score > STRONG_MATCH_SCORE {
                "green"
            } else {
                "orange"
            };
            html.push_str(&format!(
                concat!(
                    "<li style=\"margin-bottom: 20px;\">\n",
                    "  <strong style=\"font-size: 16px;\"><a href=\"{url}\">{title}</a> at {company}</strong><br>\n",
                    "  <span style=\"color: {color}; font-weight: bold;\">Score: {score}</span> | {location}<br>\n",
                    "</li>\n"
                ),
                url = escape_html(&job.url),
                title = escape_html(&job.title),
                company = escape_html(&job.company),
                color = color,
                score = format_score(job.match_score),
                location = escape_html(&job.location),
            ));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(title: &str, score: f64) -> ScoredJob {
        ScoredJob {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            url: "https://jobs.example.com/1?a=1&b=2".to_string(),
            match_score: score,
            disqualified: None,
            input_index: 0,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">R&D</a>"), "&lt;a href=&quot;x&quot;&gt;R&amp;D&lt;/a&gt;");
    }

    #[test]
    fn test_digest_limits_to_top_n() {
        let jobs: Vec<ScoredJob> = (0..15).map(|i| scored(&format!("Job {}", i), 1.0)).collect();
        let html = render_digest(&jobs, 10, date());
        assert_eq!(html.matches("<li ").count(), 10);
        assert!(html.contains("Job 9"));
        assert!(!html.contains("Job 10"));
    }

    #[test]
    fn test_digest_colors() {
        let jobs = vec![scored("Strong", 15.2), scored("Weak", 10.0)];
        let html = render_digest(&jobs, 10, date());
        assert!(html.contains("color: green; font-weight: bold;\">Score: 15.2"));
        assert!(html.contains("color: orange; font-weight: bold;\">Score: 10.0"));
    }

    #[test]
    fn test_digest_escapes_fields() {
        let html = render_digest(&[scored("C++ <Systems> Dev", 1.0)], 10, date());
        assert!(html.contains("C++ &lt;Systems&gt; Dev"));
        assert!(html.contains("href=\"https://jobs.example.com/1?a=1&amp;b=2\""));
    }

    #[test]
    fn test_digest_header_and_empty() {
        let html = render_digest(&[], 10, date());
        assert!(html.contains("<title>Your Daily Top 10 Job Matches</title>"));
        assert!(html.contains("Top matches for you today (2024-05-01)"));
        assert!(html.contains("No jobs found."));
    }
}
