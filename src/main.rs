use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use job_bro::jobs::{self, Job};
use job_bro::matching::{self, MatchConfig, Matcher, ResumeProfile};
use job_bro::{config, credentials, output, resume, telemetry};

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
enum Format {
    /// Ranked table for the terminal
    #[default]
    Table,
    /// Tab-separated: score, title, company, location, url
    Tsv,
    /// JSON array of scored jobs
    Json,
    /// HTML digest of the top matches, ready to email
    Html,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank jobs against your resume (default if no subcommand)
    Rank {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Only show the N best matches (html defaults to settings.top_n)
        #[arg(short, long)]
        top: Option<usize>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show how the job at an index got its score
    Explain {
        /// Index number of the job (1-based, as shown in the ranking)
        index: usize,
    },
    /// Open a job posting in the browser by its index number
    Open {
        /// Index number of the job (1-based, as shown in the ranking)
        index: usize,
    },
    /// Write a starter config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "job-bro")]
#[command(about = "Rank job postings against your resume", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/job-bro/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Resume file, overrides settings.resume_path (.txt, or .pdf via pdftotext)
    #[arg(short, long, global = true)]
    resume: Option<PathBuf>,

    /// Rank listings from Apify dataset JSON files (glob patterns) instead of fetching
    #[arg(short, long, global = true)]
    jobs: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn fail(code: i32, message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

/// Resolve the 1-based index given on the command line
fn ranked_position(index: usize, len: usize) -> Option<usize> {
    if index < 1 || index > len {
        None
    } else {
        Some(index - 1)
    }
}

fn ranked_position_or_exit(index: usize, len: usize) -> usize {
    ranked_position(index, len).unwrap_or_else(|| {
        fail(
            EXIT_INPUT,
            format!("Invalid index {}. Must be between 1 and {}.", index, len),
        )
    })
}

/// Live fetching needs at least one search URL
fn require_job_queries(config: &config::Config) -> Result<(), &'static str> {
    if config.job_queries.is_empty() {
        Err("No job_queries configured. Add LinkedIn search URLs to the config or pass --jobs.")
    } else {
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        fail(EXIT_NETWORK, "Failed to install rustls crypto provider");
    }

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Rank {
        format: Format::Table,
        top: None,
        output: None,
    });
    let start_time = Instant::now();

    if let Err(e) = telemetry::init(cli.verbose) {
        eprintln!("Logging disabled: {}", e);
    }
    credentials::load_dotenv();

    if let Commands::Init = command {
        let path = match cli.config.clone() {
            Some(p) => p,
            None => config::get_config_path().unwrap_or_else(|e| fail(EXIT_CONFIG, e)),
        };
        if let Err(e) = config::write_starter_config(&path) {
            fail(EXIT_CONFIG, format!("Init failed: {:#}", e));
        }
        println!("Wrote starter config to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    // Load and validate config
    let file_config = match config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    if let Err(errors) = matching::validate_matching(&file_config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let match_config = MatchConfig::from(&file_config);
    let matcher = match Matcher::new(&match_config) {
        Ok(m) => m,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };
    info!(
        keywords = match_config.keywords.len(),
        max_experience_years = match_config.max_experience_years,
        "loaded config"
    );

    // Resume
    let resume_path = match cli.resume.clone().or(file_config.settings.resume_path.clone()) {
        Some(p) => p,
        None => fail(
            EXIT_CONFIG,
            "No resume configured. Set settings.resume_path or pass --resume.",
        ),
    };
    let resume_text = match resume::load_resume_text(&resume_path) {
        Ok(t) => t,
        Err(e) => fail(EXIT_INPUT, format!("Resume error: {:#}", e)),
    };

    // Listings
    let all_jobs: Vec<Job> = if !cli.jobs.is_empty() {
        match jobs::load_listing_files(&cli.jobs) {
            Ok(j) => j,
            Err(e) => fail(EXIT_INPUT, format!("Listings error: {:#}", e)),
        }
    } else {
        if let Err(e) = require_job_queries(&file_config) {
            fail(EXIT_CONFIG, e);
        }
        let token = match credentials::require_token() {
            Ok(t) => t,
            Err(e) => fail(EXIT_AUTH, format!("Credential error: {:#}", e)),
        };
        match jobs::fetch_jobs(&file_config, &token).await {
            Ok(j) => j,
            Err(e) => fail(EXIT_NETWORK, format!("Fetch error: {:#}", e)),
        }
    };

    if all_jobs.is_empty() {
        println!("No jobs fetched. Nothing to rank.");
        std::process::exit(EXIT_SUCCESS);
    }

    let ranked = matcher.rank(&resume_text, &all_jobs);
    let disqualified = ranked.iter().filter(|j| j.is_disqualified()).count();
    info!(
        total = ranked.len(),
        disqualified,
        elapsed = %humantime::format_duration(start_time.elapsed()),
        "ranked jobs"
    );

    match command {
        Commands::Rank {
            format,
            top,
            output: output_path,
        } => {
            let limit = match format {
                Format::Html => top
                    .or(file_config.settings.top_n)
                    .unwrap_or(output::DEFAULT_DIGEST_SIZE),
                _ => top.unwrap_or(ranked.len()),
            };
            let shown = &ranked[..limit.min(ranked.len())];
            let use_colors = output_path.is_none() && output::should_use_colors();

            let rendered = match format {
                Format::Table => output::format_scored_table(shown, use_colors),
                Format::Tsv => output::format_tsv(shown),
                Format::Json => match output::format_json(shown) {
                    Ok(s) => s,
                    Err(e) => fail(EXIT_INPUT, format!("{:#}", e)),
                },
                Format::Html => {
                    output::render_digest(shown, limit, chrono::Local::now().date_naive())
                }
            };

            match output_path {
                Some(path) => {
                    if let Err(e) = output::write_output(&path, &rendered) {
                        fail(EXIT_INPUT, format!("Output error: {:#}", e));
                    }
                    info!(path = %path.display(), "wrote output");
                }
                None => println!("{}", rendered),
            }

            if shown.iter().all(|j| j.is_disqualified()) {
                warn!("every shown job was disqualified; check seniority_keywords and max_experience_years");
            }
        }
        Commands::Explain { index } => {
            let scored = &ranked[ranked_position_or_exit(index, ranked.len())];
            let job = &all_jobs[scored.input_index];
            let result = matcher.score_job(&ResumeProfile::new(&resume_text), job);
            println!(
                "{}",
                output::format_job_detail(job, &result, output::should_use_colors())
            );
        }
        Commands::Open { index } => {
            let scored = &ranked[ranked_position_or_exit(index, ranked.len())];
            if let Err(e) = job_bro::browser::open_url(&scored.url) {
                fail(EXIT_NETWORK, format!("{:#}", e));
            }
            println!("Opening '{}' in browser: {}", scored.title, scored.url);
        }
        // Handled before the config is loaded
        Commands::Init => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
