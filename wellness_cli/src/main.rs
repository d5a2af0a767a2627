use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use wellness_core::*;

#[derive(Parser)]
#[command(name = "wellness")]
#[command(about = "Interactive wellness calculator: BMI, BMR, calories and advice", long_about = None)]
struct Cli {
    /// Load alternative multipliers, ratios and thresholds from a TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        wellness_core::logging::init_with_level("debug");
    } else {
        wellness_core::logging::init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Run failed");
            eprintln!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    let format = OutputFormat::from(cli.format);
    let stdin = io::stdin();

    match format {
        OutputFormat::Text => {
            let mut out = io::stdout().lock();
            let report = interview(stdin.lock(), &mut out, &config)?;
            report.write_to(format, &mut out)?;
            farewell(&mut out)
        }
        OutputFormat::Json => {
            // stdout carries the JSON document only
            let mut conversation = io::stderr().lock();
            let report = interview(stdin.lock(), &mut conversation, &config)?;
            report.write_to(format, &mut io::stdout().lock())?;
            farewell(&mut conversation)
        }
    }
}

/// Greet, ask every question, and compute the report
fn interview<R: BufRead, W: Write>(input: R, out: &mut W, config: &Config) -> Result<Report> {
    writeln!(out, "Welcome to the Wellness Bot!")?;
    writeln!(out, "============================\n")?;

    let mut prompter = Prompter::new(input, &mut *out);
    let profile = collect_profile(&mut prompter)?;

    let metrics = calculate_metrics(&profile, config);
    Ok(Report::build(&Assessment { profile, metrics }, config))
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nThank you for using Wellness Bot! Stay healthy!")?;
    out.flush()?;
    Ok(())
}
