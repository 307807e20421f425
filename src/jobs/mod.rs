pub mod apify;
pub mod listing;
pub mod types;

pub use apify::fetch_jobs;
pub use listing::{load_listing_files, normalize_listing};
pub use types::{Job, ScoredJob};
