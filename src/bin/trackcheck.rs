use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use usps_tracking::tools::{init_logging, load_codes, summarize, summary_json};
use usps_tracking::{Rejection, Symbology, Validator, complete};

#[derive(Parser)]
#[command(name = "trackcheck", version, about = "USPS tracking code checker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one or more tracking codes
    Validate {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Validate a file with one code per line
    File {
        #[arg(long)]
        path: PathBuf,
        /// Print only a JSON summary
        #[arg(long)]
        json: bool,
    },
    /// Show how each symbology judged a code
    Explain { code: String },
    /// Append the check digit to a partial code
    Complete {
        #[arg(long)]
        symbology: Symbology,
        partial: String,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let validator = Validator::from_env();

    let ok = match cli.command {
        Command::Validate { codes } => validate_cmd(&validator, &codes),
        Command::File { path, json } => file_cmd(&validator, &path, json),
        Command::Explain { code } => explain_cmd(&validator, &code),
        Command::Complete { symbology, partial } => complete_cmd(symbology, &partial),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn validate_cmd(validator: &Validator, codes: &[String]) -> bool {
    let mut all_valid = true;
    for raw in codes {
        match validator.validate(raw) {
            Ok(code) => println!("VALID {} {} {}", code, code.symbology(), code.rule()),
            Err(err) => {
                println!("INVALID {}", err);
                all_valid = false;
            }
        }
    }
    all_valid
}

fn file_cmd(validator: &Validator, path: &Path, json: bool) -> bool {
    let codes = match load_codes(path) {
        Ok(codes) => codes,
        Err(err) => {
            eprintln!("{}", err);
            return false;
        }
    };

    let start = Instant::now();
    let results = validator.validate_batch(codes.as_slice());
    let elapsed = start.elapsed();
    let summary = summarize(&results);

    if json {
        match summary_json(&summary) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("{}", err);
                return false;
            }
        }
    } else {
        for (line, result) in results.iter().enumerate() {
            match result {
                Ok(code) => println!("{:>5}: VALID {} {}", line + 1, code, code.symbology()),
                Err(err) => println!("{:>5}: INVALID {}", line + 1, err),
            }
        }
        println!(
            "Checked {} codes in {:.2?}: {} valid ({} USS128, {} USS39), {} invalid",
            summary.total, elapsed, summary.valid, summary.uss128, summary.uss39, summary.invalid
        );
    }

    summary.invalid == 0
}

fn explain_cmd(validator: &Validator, raw: &str) -> bool {
    let report = validator.explain(raw);
    println!("Input: {:?}", report.input);
    println!(
        "Normalized: {:?} (length {}, {:?})",
        report.normalized.as_str(),
        report.normalized.len(),
        report.normalized.shape()
    );
    for attempt in &report.attempts {
        match &attempt.outcome {
            Ok(rule) => println!("  {}: accepted by {}", attempt.symbology, rule),
            Err(Rejection::ShapeMismatch) => println!("  {}: shape mismatch", attempt.symbology),
            Err(Rejection::ChecksumMismatch { declared, computed }) => {
                let computed: Vec<String> = computed
                    .iter()
                    .map(|(rule, check)| format!("{}={}", rule, check))
                    .collect();
                println!(
                    "  {}: declared check digit {}, computed {}",
                    attempt.symbology,
                    declared,
                    computed.join(", ")
                );
            }
        }
    }
    match report.accepted() {
        Some((symbology, rule)) => println!("Result: valid ({} {})", symbology, rule),
        None => println!("Result: invalid"),
    }
    report.is_valid()
}

fn complete_cmd(symbology: Symbology, partial: &str) -> bool {
    match complete(symbology, partial) {
        Ok(code) => {
            println!("{}", code);
            true
        }
        Err(err) => {
            eprintln!("{}", err);
            false
        }
    }
}
