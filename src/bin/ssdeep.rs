use anyhow::Context;
use clap::Parser;
use ctph::{digest_path, log_error, CtphError, FuzzyHash, HashConfig, HashOutcome};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "ssdeep",
    about = "Compute a fuzzy hash of a file, or compare the fuzzy hashes of two files"
)]
struct Cli {
    /// File to hash
    path: PathBuf,
    /// Second file; when given, both files are hashed and compared
    other: Option<PathBuf>,
    /// Keep going on unreadable or too-small inputs
    #[arg(long, short)]
    force: bool,
    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,
    /// Load hashing configuration from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Serialize)]
struct HashReport<'a> {
    path: &'a Path,
    hash: Option<&'a FuzzyHash>,
    error: Option<String>,
}

#[derive(Serialize)]
struct CompareReport<'a> {
    first: HashReport<'a>,
    second: HashReport<'a>,
    score: u32,
}

/// Result of hashing one path: the hash if one was produced, and the error
/// or diagnostic that accompanied it.
struct Hashed {
    hash: Option<FuzzyHash>,
    error: Option<CtphError>,
}

impl Hashed {
    fn report<'a>(&'a self, path: &'a Path) -> HashReport<'a> {
        HashReport {
            path,
            hash: self.hash.as_ref(),
            error: self.error.as_ref().map(ToString::to_string),
        }
    }
}

fn hash_one(path: &Path, config: &HashConfig) -> Hashed {
    match digest_path(path, config) {
        Ok(HashOutcome { hash, diagnostic }) => Hashed {
            hash: Some(hash),
            error: diagnostic,
        },
        Err(e) => Hashed {
            hash: None,
            error: Some(log_error!(e, path.display())),
        },
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<HashConfig> {
    let mut config = match &cli.config {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            HashConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", p.display()))?
        }
        None => HashConfig::default(),
    };
    if cli.force {
        config.strict = false;
    }
    Ok(config)
}

/// Any error is fatal unless the run was forced.
fn is_fatal(h: &Hashed, config: &HashConfig) -> bool {
    config.strict && h.error.is_some()
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli)?;

    let Some(other) = cli.other.as_deref() else {
        let h = hash_one(&cli.path, &config);
        if is_fatal(&h, &config) {
            if let Some(e) = &h.error {
                println!("{e}");
            }
            return Ok(ExitCode::FAILURE);
        }
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&h.report(&cli.path))?);
        } else {
            let hash = h.hash.as_ref().map(ToString::to_string).unwrap_or_default();
            println!("{} {}", hash, cli.path.display());
            if let Some(e) = &h.error {
                println!("{e}");
            }
        }
        return Ok(ExitCode::SUCCESS);
    };

    let (h1, h2) = rayon::join(
        || hash_one(&cli.path, &config),
        || hash_one(other, &config),
    );
    for h in [&h1, &h2] {
        if is_fatal(h, &config) {
            if let Some(e) = &h.error {
                println!("{e}");
            }
            return Ok(ExitCode::FAILURE);
        }
    }

    let score = match (&h1.hash, &h2.hash) {
        (Some(a), Some(b)) => a.compare(b),
        _ => 0,
    };

    if cli.json {
        let report = CompareReport {
            first: h1.report(&cli.path),
            second: h2.report(other),
            score,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if score != 0 {
        println!(
            "{} matches {} ({})",
            cli.path.display(),
            other.display(),
            score
        );
    } else if let Some(e) = h1.error.as_ref().or(h2.error.as_ref()) {
        println!("{e}");
    } else {
        println!("The files don't match");
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.log_json {
        ctph::logging::init_tracing_json("warn");
    } else {
        ctph::logging::init_tracing("warn");
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
