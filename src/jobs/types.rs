use serde::{Deserialize, Serialize};

use crate::matching::Disqualification;

/// A single job posting, already normalized from whatever source produced it.
///
/// Missing fields are empty strings; the matcher never has to re-default them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub url: String,
}

impl Job {
    /// Title, company, description and location joined by single spaces.
    /// This is the raw surface the relevance score is computed over.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.company, self.description, self.location
        )
    }
}

/// A job with its final match score, as returned by the ranker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub match_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disqualified: Option<Disqualification>,
    /// Position of the job in the batch handed to the ranker
    #[serde(skip)]
    pub input_index: usize,
}

impl ScoredJob {
    pub fn is_disqualified(&self) -> bool {
        self.disqualified.is_some()
    }
}
