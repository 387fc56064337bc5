use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use sjcheck::parser::classify_source;
use sjcheck::{Config, Outcome};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sjcheck")]
#[command(about = "Static checker for a small Java-like teaching language")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a source file; prints 0 (valid), 1 (invalid) or 2 (I/O error)
    Check {
        /// Input source file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Log both passes to stderr
        #[arg(short, long)]
        verbose: bool,

        /// Refuse files larger than this many bytes
        #[arg(long, value_name = "BYTES")]
        max_bytes: Option<u64>,
    },

    /// Show the category of every line
    Classify {
        /// Input source file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { input, verbose, max_bytes } => {
            let mut config = Config::from_env();
            config.debug |= *verbose;
            if let Some(limit) = max_bytes {
                config = config.with_max_source_bytes(*limit);
            }
            init_logging(config.debug)?;
            let code = check_file(input, &config);
            std::process::exit(code);
        }
        Commands::Classify { input } => {
            init_logging(Config::from_env().debug)?;
            classify_file(input)?;
        }
    }

    Ok(())
}

fn init_logging(debug: bool) -> Result<()> {
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to install logger")
}

fn check_file(input: &Path, config: &Config) -> i32 {
    let result = sjcheck::verify_file(input, config);
    let outcome = Outcome::from_result(&result);
    println!("{}", outcome.code());
    if let Err(e) = &result {
        eprintln!("{}: {}", input.display(), e);
    }
    outcome.code()
}

fn classify_file(input: &Path) -> Result<()> {
    let source = fs::read_to_string(input).with_context(|| format!("cannot read {}", input.display()))?;
    for (number, line) in classify_source(&source) {
        println!("{:>4}  {}", number, line.category());
    }
    Ok(())
}
