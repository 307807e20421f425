use serde::Serialize;
use std::fmt;

use super::config::MatchConfig;
use super::experience::blocking_requirement;

/// Why a job was forced to a score of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Disqualification {
    /// Title contains an exclude keyword
    ExcludedTitle { keyword: String },
    /// Title contains a seniority keyword
    SeniorTitle { keyword: String },
    /// Description asks for at least `years` of experience
    ExperienceRequired { years: u64, phrase: String },
}

impl fmt::Display for Disqualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disqualification::ExcludedTitle { keyword } => {
                write!(f, "title contains excluded keyword '{}'", keyword)
            }
            Disqualification::SeniorTitle { keyword } => {
                write!(f, "title contains seniority keyword '{}'", keyword)
            }
            Disqualification::ExperienceRequired { years, phrase } => {
                write!(f, "requires {} years of experience ('{}')", years, phrase)
            }
        }
    }
}

/// Title gate. Exclude keywords are checked before seniority keywords so the
/// reported reason is stable; either one is enough to disqualify.
pub fn check_title(title: &str, config: &MatchConfig) -> Option<Disqualification> {
    let title_lower = title.to_lowercase();

    if let Some(kw) = config
        .exclude_keywords
        .iter()
        .find(|kw| title_lower.contains(kw.as_str()))
    {
        return Some(Disqualification::ExcludedTitle {
            keyword: kw.clone(),
        });
    }

    config
        .seniority_keywords
        .iter()
        .find(|kw| title_lower.contains(kw.as_str()))
        .map(|kw| Disqualification::SeniorTitle {
            keyword: kw.clone(),
        })
}

/// Experience gate over the job description
pub fn check_experience(description: &str, config: &MatchConfig) -> Option<Disqualification> {
    let description_lower = description.to_lowercase();
    blocking_requirement(&description_lower, config.max_experience_years).map(|phrase| {
        Disqualification::ExperienceRequired {
            years: phrase.min_years,
            phrase: phrase.text,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MatchConfig {
        MatchConfig {
            exclude_keywords: vec!["intern".to_string(), "sales".to_string()],
            seniority_keywords: vec!["senior".to_string(), "lead".to_string()],
            ..MatchConfig::default()
        }
    }

    #[test]
    fn test_senior_title_disqualified() {
        let result = check_title("Senior Software Engineer", &config());
        assert_eq!(
            result,
            Some(Disqualification::SeniorTitle {
                keyword: "senior".to_string()
            })
        );
    }

    #[test]
    fn test_excluded_title_case_insensitive() {
        let result = check_title("SALES Engineer", &config());
        assert_eq!(
            result,
            Some(Disqualification::ExcludedTitle {
                keyword: "sales".to_string()
            })
        );
    }

    #[test]
    fn test_exclude_reported_before_seniority() {
        let result = check_title("Senior Sales Lead", &config());
        assert!(matches!(result, Some(Disqualification::ExcludedTitle { .. })));
    }

    #[test]
    fn test_substring_match_inside_word() {
        // Plain substring, so "intern" also catches "internal"
        assert!(check_title("Internal Tools Developer", &config()).is_some());
    }

    #[test]
    fn test_clean_title_passes() {
        assert_eq!(check_title("Junior Python Developer", &config()), None);
    }

    #[test]
    fn test_empty_keyword_sets_never_disqualify() {
        assert_eq!(check_title("Senior Anything", &MatchConfig::default()), None);
    }

    #[test]
    fn test_experience_gate_uses_threshold() {
        let cfg = MatchConfig::default();
        let result = check_experience("5 Years Experience Required", &cfg);
        assert_eq!(
            result,
            Some(Disqualification::ExperienceRequired {
                years: 5,
                phrase: "5 years".to_string()
            })
        );
        assert_eq!(check_experience("1 year experience", &cfg), None);
    }

    #[test]
    fn test_display_messages() {
        let reason = Disqualification::ExperienceRequired {
            years: 3,
            phrase: "3+ years".to_string(),
        };
        assert_eq!(reason.to_string(), "requires 3 years of experience ('3+ years')");
    }
}
