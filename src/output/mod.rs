pub mod digest;
pub mod formatter;
pub mod writer;

pub use digest::{digest_subject, render_digest, DEFAULT_DIGEST_SIZE};
pub use formatter::{
    format_job_detail, format_json, format_score, format_scored_table, format_tsv,
    should_use_colors,
};
pub use writer::write_output;
