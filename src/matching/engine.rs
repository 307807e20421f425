use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use super::config::MatchConfig;
use super::filters::{check_experience, check_title, Disqualification};
use super::normalize::{normalize, tokens};
use crate::jobs::{Job, ScoredJob};

/// Scaling divisor for the lexical overlap term
const OVERLAP_DIVISOR: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub label: String,       // e.g. "Fresh grad", "Keyword", "Overlap"
    pub description: String, // e.g. "matched 'new grad'", "12 shared words"
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub disqualified: Option<Disqualification>,
    pub contributions: Vec<Contribution>,
}

impl ScoreResult {
    fn disqualified(reason: Disqualification) -> Self {
        Self {
            score: 0.0,
            disqualified: Some(reason),
            contributions: Vec::new(),
        }
    }
}

/// Normalized resume text, prepared once per ranking run.
#[derive(Debug, Clone)]
pub struct ResumeProfile {
    text: String,
    tokens: HashSet<String>,
}

impl ResumeProfile {
    pub fn new(resume_text: &str) -> Self {
        let text = normalize(resume_text);
        let tokens = tokens(&text).into_iter().map(str::to_string).collect();
        Self { text, tokens }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of distinct resume tokens that also appear in `other`
    fn shared_tokens(&self, other: &HashSet<&str>) -> usize {
        other.iter().filter(|t| self.tokens.contains(**t)).count()
    }
}

struct KeywordMatcher {
    keyword: String,
    pattern: Regex,
}

/// Scores and ranks jobs against a resume. Keyword patterns are compiled once
/// here and reused for every job in the batch.
pub struct Matcher {
    config: MatchConfig,
    keywords: Vec<KeywordMatcher>,
}

impl Matcher {
    pub fn new(config: &MatchConfig) -> Result<Self> {
        if !config.fresh_grad_boost_score.is_finite() {
            bail!("fresh_grad_boost_score must be a finite number");
        }
        if !config.keyword_match_score.is_finite() {
            bail!("keyword_match_score must be a finite number");
        }

        let keywords = config
            .keywords
            .iter()
            .map(|kw| -> Result<KeywordMatcher> {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(kw)))
                    .with_context(|| format!("Failed to build matcher for keyword '{}'", kw))?;
                Ok(KeywordMatcher {
                    keyword: kw.clone(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config: config.clone(),
            keywords,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run both gates, then the relevance score if the job survives.
    pub fn score_job(&self, resume: &ResumeProfile, job: &Job) -> ScoreResult {
        if let Some(reason) = check_title(&job.title, &self.config) {
            return ScoreResult::disqualified(reason);
        }
        if let Some(reason) = check_experience(&job.description, &self.config) {
            return ScoreResult::disqualified(reason);
        }
        self.relevance(resume, job)
    }

    fn relevance(&self, resume: &ResumeProfile, job: &Job) -> ScoreResult {
        let job_text = normalize(&job.combined_text());
        let mut score = 0.0;
        let mut contributions = Vec::new();

        // Fresh grad boost applies once, whichever keyword hits first
        if let Some(kw) = self
            .config
            .fresh_grad_keywords
            .iter()
            .find(|kw| job_text.contains(kw.as_str()))
        {
            score += self.config.fresh_grad_boost_score;
            contributions.push(Contribution {
                label: "Fresh grad".to_string(),
                description: format!("matched '{}'", kw),
                points: self.config.fresh_grad_boost_score,
            });
        }

        for matcher in &self.keywords {
            if matcher.pattern.is_match(&job_text) && matcher.pattern.is_match(resume.text()) {
                score += self.config.keyword_match_score;
                contributions.push(Contribution {
                    label: "Keyword".to_string(),
                    description: format!("'{}' in resume and posting", matcher.keyword),
                    points: self.config.keyword_match_score,
                });
            }
        }

        let job_tokens = tokens(&job_text);
        let overlap = resume.shared_tokens(&job_tokens);
        let overlap_points = overlap as f64 / OVERLAP_DIVISOR;
        score += overlap_points;
        contributions.push(Contribution {
            label: "Overlap".to_string(),
            description: format!("{} shared words / {}", overlap, OVERLAP_DIVISOR),
            points: overlap_points,
        });

        ScoreResult {
            score,
            disqualified: None,
            contributions,
        }
    }

    /// Score every job and sort by score descending. The sort is stable, so
    /// equal scores keep their input order. Disqualified jobs stay in the
    /// output with a score of zero.
    pub fn rank(&self, resume_text: &str, jobs: &[Job]) -> Vec<ScoredJob> {
        let resume = ResumeProfile::new(resume_text);

        let mut scored: Vec<ScoredJob> = jobs
            .iter()
            .enumerate()
            .map(|(input_index, job)| {
                let result = self.score_job(&resume, job);
                if let Some(ref reason) = result.disqualified {
                    debug!(title = %job.title, company = %job.company, %reason, "disqualified");
                }
                ScoredJob {
                    title: job.title.clone(),
                    company: job.company.clone(),
                    location: job.location.clone(),
                    url: job.url.clone(),
                    match_score: result.score,
                    disqualified: result.disqualified,
                    input_index,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        scored
    }
}

/// Rank `jobs` against `resume_text` with a one-off [`Matcher`].
pub fn rank(resume_text: &str, jobs: &[Job], config: &MatchConfig) -> Result<Vec<ScoredJob>> {
    Ok(Matcher::new(config)?.rank(resume_text, jobs))
}
