//! calc - command line front end for the calculator library
//!
//! ```text
//! calc eval add 1 2            # 3
//! calc --stringify eval sqrt 30
//! calc --json eval divide 15 6 # {"operation":"divide","result":2.5}
//! printf 'store 6\nrecall\n' | calc batch
//! ```

mod batch;
mod config;
mod report;

use anyhow::{Context, Result};
use calculator::{Calculator, Number, Operation, OutputMode};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::CalcConfig;

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Calculator with integer/float aware results and a single memory slot")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Return every result as text
    #[arg(long, global = true)]
    stringify: bool,

    /// Print results as JSON objects
    #[arg(long, global = true)]
    json: bool,

    /// Config file (.toml, .yaml or .yml); defaults to ./calc.toml if present
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single operation
    #[command(about = "Run a single operation: add, subtract, multiply, divide, pow, sqrt")]
    Eval {
        /// Operation name
        operation: String,

        /// Operands
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Run commands from stdin, sharing memory between lines
    #[command(about = "Read commands from stdin: '<op> <args...>', 'store <n>', 'recall'")]
    Batch,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = CalcConfig::load(cli.config.as_deref())?;
    if cli.stringify {
        config.mode = OutputMode::Stringify;
    }
    if cli.json {
        config.json = true;
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }

    init_logging(&config.log_level)?;
    debug!(mode = %config.mode, json = config.json, "configuration loaded");

    let mut calc = Calculator::with_mode(config.mode);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Eval { operation, args } => {
            let op: Operation = operation.parse()?;
            let numbers = args
                .iter()
                .map(|arg| arg.parse::<Number>())
                .collect::<Result<Vec<_>, _>>()?;
            let output = calc.apply(op, &numbers)?;
            writeln!(
                out,
                "{}",
                report::format_result(op.name(), Some(&output), config.json)
            )?;
            Ok(ExitCode::SUCCESS)
        },
        Commands::Batch => {
            let stdin = io::stdin();
            let summary = batch::run(&mut calc, stdin.lock(), &mut out, config.json)?;
            for (line, error) in &summary.failures {
                eprintln!("{} line {}: {}", "Error:".red().bold(), line, error);
            }
            Ok(if summary.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        },
    }
}

/// Install the fmt subscriber on stderr so stdout only carries results
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level '{}'", level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
