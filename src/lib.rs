//! Rank job postings against a resume.
//!
//! The matching core lives in [`matching`]; everything else loads its inputs
//! (config, resume, listings) or renders its output.

pub mod browser;
pub mod config;
pub mod credentials;
pub mod jobs;
pub mod matching;
pub mod output;
pub mod resume;
pub mod telemetry;

pub use jobs::{Job, ScoredJob};
pub use matching::{rank, MatchConfig, Matcher};
