use crate::config::Config;

pub const DEFAULT_MAX_EXPERIENCE_YEARS: u64 = 2;
pub const DEFAULT_FRESH_GRAD_BOOST_SCORE: f64 = 10.0;
pub const DEFAULT_KEYWORD_MATCH_SCORE: f64 = 5.0;

/// Resolved matching rules, read-only for the duration of a ranking run.
///
/// Keyword lists are lowercased and de-duplicated (first occurrence wins) when
/// built from a [`Config`]; numeric settings fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    pub exclude_keywords: Vec<String>,
    pub seniority_keywords: Vec<String>,
    pub fresh_grad_keywords: Vec<String>,
    pub keywords: Vec<String>,
    pub max_experience_years: u64,
    pub fresh_grad_boost_score: f64,
    pub keyword_match_score: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            exclude_keywords: Vec::new(),
            seniority_keywords: Vec::new(),
            fresh_grad_keywords: Vec::new(),
            keywords: Vec::new(),
            max_experience_years: DEFAULT_MAX_EXPERIENCE_YEARS,
            fresh_grad_boost_score: DEFAULT_FRESH_GRAD_BOOST_SCORE,
            keyword_match_score: DEFAULT_KEYWORD_MATCH_SCORE,
        }
    }
}

fn keyword_set(keywords: &[String]) -> Vec<String> {
    let mut set: Vec<String> = Vec::with_capacity(keywords.len());
    for kw in keywords {
        let kw = kw.to_lowercase();
        if !set.contains(&kw) {
            set.push(kw);
        }
    }
    set
}

impl From<&Config> for MatchConfig {
    fn from(config: &Config) -> Self {
        let settings = &config.settings;
        Self {
            exclude_keywords: keyword_set(&config.exclude_keywords),
            seniority_keywords: keyword_set(&config.seniority_keywords),
            fresh_grad_keywords: keyword_set(&config.fresh_grad_keywords),
            keywords: keyword_set(&config.keywords),
            max_experience_years: settings
                .max_experience_years
                .unwrap_or(DEFAULT_MAX_EXPERIENCE_YEARS),
            fresh_grad_boost_score: settings
                .fresh_grad_boost_score
                .unwrap_or(DEFAULT_FRESH_GRAD_BOOST_SCORE),
            keyword_match_score: settings
                .keyword_match_score
                .unwrap_or(DEFAULT_KEYWORD_MATCH_SCORE),
        }
    }
}
