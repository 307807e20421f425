use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::jobs::{Job, ScoredJob};
use crate::matching::ScoreResult;

/// Scores above this are highlighted as strong matches
pub const STRONG_MATCH_SCORE: f64 = 10.0;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal place ("15.3", "0.0")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// "Acme · Remote", leaving out whichever part is empty
fn company_and_location(job: &ScoredJob) -> String {
    match (job.company.is_empty(), job.location.is_empty()) {
        (false, false) => format!("{} · {}", job.company, job.location),
        (false, true) => job.company.clone(),
        (true, false) => job.location.clone(),
        (true, true) => String::new(),
    }
}

/// Format ranked jobs as a table: index, score, title, company and location.
/// No headers. Disqualified rows are dimmed when colors are on.
pub fn format_scored_table(jobs: &[ScoredJob], use_colors: bool) -> String {
    if jobs.is_empty() {
        return "No jobs found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 6;
    let separator = "  ";

    jobs.iter()
        .enumerate()
        .map(|(idx, job)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!(
                "{:>width$}",
                format_score(job.match_score),
                width = score_width
            );
            let where_str = company_and_location(job);

            let fixed_width =
                index_width + 1 + score_width + separator.len() * 2 + where_str.chars().count();
            let title = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_title(&job.title, width - fixed_width)
                }
                // Very narrow terminal, show truncated
                Some(_) => truncate_title(&job.title, 20),
                // No terminal (pipe), don't truncate
                None => job.title.clone(),
            };

            if !use_colors {
                return format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, title, separator, where_str
                );
            }

            if job.is_disqualified() {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, title, separator, where_str
                )
                .dimmed()
                .to_string()
            } else {
                let score_colored = if job.match_score > STRONG_MATCH_SCORE {
                    score_padded.green().bold().to_string()
                } else {
                    score_padded.yellow().bold().to_string()
                };
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_colored,
                    separator,
                    title.bold(),
                    separator,
                    where_str.cyan()
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format jobs as tab-separated values for scripting
/// Columns: score, title, company, location, url (no headers, no colors)
pub fn format_tsv(jobs: &[ScoredJob]) -> String {
    jobs.iter()
        .map(|job| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                format_score(job.match_score),
                job.title,
                job.company,
                job.location,
                job.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array of ranked jobs
pub fn format_json(jobs: &[ScoredJob]) -> Result<String> {
    serde_json::to_string_pretty(jobs).context("Failed to serialize ranked jobs")
}

/// Multi-line explanation of how a job got its score
pub fn format_job_detail(job: &Job, result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(job.title.bold().to_string());
        lines.push(format!("  Company: {}", job.company.cyan()));
        lines.push(format!("  Location: {}", job.location));
        lines.push(format!("  URL: {}", job.url.underline()));
    } else {
        lines.push(job.title.clone());
        lines.push(format!("  Company: {}", job.company));
        lines.push(format!("  Location: {}", job.location));
        lines.push(format!("  URL: {}", job.url));
    }

    lines.push(format!("  Score: {}", format_score(result.score)));

    match &result.disqualified {
        Some(reason) => {
            let line = format!("  Disqualified: {}", reason);
            if use_colors {
                lines.push(line.red().to_string());
            } else {
                lines.push(line);
            }
        }
        None => {
            for c in &result.contributions {
                lines.push(format!(
                    "    {:>5}  {}: {}",
                    format!("+{}", format_score(c.points)),
                    c.label,
                    c.description
                ));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{Contribution, Disqualification};

    fn sample_scored(title: &str, score: f64) -> ScoredJob {
        ScoredJob {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            url: "https://jobs.example.com/1".to_string(),
            match_score: score,
            disqualified: None,
            input_index: 0,
        }
    }

    fn sample_job() -> Job {
        Job {
            title: "Junior Python Developer".to_string(),
            company: "Acme".to_string(),
            description: "new grad welcome".to_string(),
            location: "Remote".to_string(),
            url: "https://jobs.example.com/1".to_string(),
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(15.3), "15.3");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(10.0), "10.0");
    }

    #[test]
    fn test_truncate_title_short() {
        assert_eq!(truncate_title("Short title", 20), "Short title");
    }

    #[test]
    fn test_truncate_title_long() {
        assert_eq!(truncate_title("This is a very long title", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_title_very_narrow() {
        assert_eq!(truncate_title("Hello world", 3), "Hel");
    }

    #[test]
    fn test_company_and_location_parts() {
        let mut job = sample_scored("Dev", 1.0);
        assert_eq!(company_and_location(&job), "Acme · Remote");
        job.location.clear();
        assert_eq!(company_and_location(&job), "Acme");
        job.company.clear();
        assert_eq!(company_and_location(&job), "");
    }

    #[test]
    fn test_format_scored_table_empty() {
        assert_eq!(format_scored_table(&[], false), "No jobs found.");
    }

    #[test]
    fn test_format_scored_table_multiple() {
        let jobs = vec![
            sample_scored("Junior Python Developer", 15.3),
            sample_scored("Data Analyst", 0.4),
        ];
        let result = format_scored_table(&jobs, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("15.3"));
        assert!(lines[0].contains("Junior Python Developer"));
        assert!(lines[0].contains("Acme · Remote"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("0.4"));
    }

    #[test]
    fn test_format_tsv() {
        let jobs = vec![sample_scored("Dev", 5.3)];
        assert_eq!(
            format_tsv(&jobs),
            "5.3\tDev\tAcme\tRemote\thttps://jobs.example.com/1"
        );
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_json() {
        let mut job = sample_scored("Senior Dev", 0.0);
        job.disqualified = Some(Disqualification::SeniorTitle {
            keyword: "senior".to_string(),
        });
        let json = format_json(&[job]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "Senior Dev");
        assert_eq!(value[0]["disqualified"]["reason"], "senior_title");
        assert_eq!(value[0]["disqualified"]["keyword"], "senior");
    }

    #[test]
    fn test_format_job_detail_breakdown() {
        let result = ScoreResult {
            score: 15.3,
            disqualified: None,
            contributions: vec![
                Contribution {
                    label: "Fresh grad".to_string(),
                    description: "matched 'new grad'".to_string(),
                    points: 10.0,
                },
                Contribution {
                    label: "Overlap".to_string(),
                    description: "3 shared words / 10".to_string(),
                    points: 0.3,
                },
            ],
        };
        let detail = format_job_detail(&sample_job(), &result, false);
        assert!(detail.starts_with("Junior Python Developer"));
        assert!(detail.contains("Company: Acme"));
        assert!(detail.contains("Score: 15.3"));
        assert!(detail.contains("+10.0  Fresh grad: matched 'new grad'"));
        assert!(detail.contains("+0.3  Overlap"));
    }

    #[test]
    fn test_format_job_detail_disqualified() {
        let result = ScoreResult {
            score: 0.0,
            disqualified: Some(Disqualification::ExperienceRequired {
                years: 5,
                phrase: "5 years".to_string(),
            }),
            contributions: vec![],
        };
        let detail = format_job_detail(&sample_job(), &result, false);
        assert!(detail.contains("Disqualified: requires 5 years of experience ('5 years')"));
    }
}
