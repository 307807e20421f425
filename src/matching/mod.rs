pub mod config;
pub mod engine;
pub mod experience;
pub mod filters;
pub mod normalize;
pub mod validation;

pub use config::MatchConfig;
pub use engine::{rank, Contribution, Matcher, ResumeProfile, ScoreResult};
pub use experience::{blocking_requirement, year_phrases, YearPhrase};
pub use filters::{check_experience, check_title, Disqualification};
pub use normalize::normalize;
pub use validation::validate_matching;
