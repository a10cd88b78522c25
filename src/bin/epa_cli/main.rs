// ABOUTME: EPA CLI - evaluates session requests and inspects limits and intent permissions
// ABOUTME: Prints exactly one JSON document to stdout; logs and operator errors go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Evaluate a request read from a file against the configured catalog
//! epa-cli evaluate --input data/sample_request.json
//!
//! # Evaluate a request piped on stdin, compact output
//! cat request.json | epa-cli evaluate --compact
//!
//! # Resolve limits without a session
//! epa-cli limits --population Adult --session-type MICROSESSION --readiness GREEN --season OFF_SEASON
//!
//! # Check whether a role may issue an intent
//! epa-cli authz --role Coach --intent REQUEST_SESSION_GENERATION
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use efl_program_architect::errors::AppResult;
use efl_program_architect::logging::LoggingConfig;
use epa_core::models::{Population, Readiness, SeasonPhase, SessionType};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "epa-cli",
    about = "EFL Program Architect session-legality CLI",
    long_about = "Decides whether a proposed training session is legal for an athlete and explains why."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate one request and print the response
    Evaluate {
        /// Request file; `-` or omitted reads stdin
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Exercise catalog CSV (overrides `EPA_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Single-line JSON output (overrides `EPA_OUTPUT_FORMAT`)
        #[arg(long)]
        compact: bool,
    },

    /// Print the limits resolved for a client profile
    Limits {
        /// Population, e.g. `Youth_13_17`
        #[arg(long)]
        population: Population,

        /// `FULL_SESSION` or `MICROSESSION`
        #[arg(long)]
        session_type: SessionType,

        /// `GREEN`, `YELLOW`, or `RED`
        #[arg(long)]
        readiness: Readiness,

        /// Season phase, e.g. `IN_SEASON_TIER_1`
        #[arg(long)]
        season: SeasonPhase,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Check whether a role may issue an intent
    Authz {
        /// Role name, e.g. `SeniorCoach`
        #[arg(long)]
        role: String,

        /// Intent name, e.g. `APPROVE_OVERRIDE`
        #[arg(long)]
        intent: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    if let Err(e) = logging.init() {
        eprintln!("logging disabled: {e}");
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            let code = error.exit_code();
            helpers::display::print_error(error);
            ExitCode::from(code)
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Evaluate {
            input,
            catalog,
            compact,
        } => commands::evaluate::run(input.as_deref(), catalog, compact),
        Command::Limits {
            population,
            session_type,
            readiness,
            season,
            compact,
        } => commands::limits::run(population, session_type, readiness, season, compact),
        Command::Authz { role, intent } => Ok(commands::authz::run(&role, &intent)),
    }
}
