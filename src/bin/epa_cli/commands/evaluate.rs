// ABOUTME: Evaluate subcommand running one request through the architect
// ABOUTME: Every domain outcome exits 0; only catalog, config, or I/O faults exit non-zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use efl_program_architect::config::{EpaConfig, OutputFormat};
use efl_program_architect::ProgramArchitect;
use tracing::debug;

use crate::helpers::{display, input};
use crate::Result;

/// Evaluate the request at `input` (stdin when absent or `-`)
pub fn run(input: Option<&Path>, catalog: Option<PathBuf>, compact: bool) -> Result<ExitCode> {
    let mut config = EpaConfig::from_env()?;
    if let Some(path) = catalog {
        config = config.with_catalog_path(path);
    }
    if compact {
        config = config.with_output_format(OutputFormat::Compact);
    }
    debug!(catalog = %config.catalog_path.display(), "evaluating request");

    let architect = ProgramArchitect::from_config(&config)?;
    let payload = input::read_payload(input)?;
    let response = architect.process(&payload);

    display::print_line(&ProgramArchitect::render(&response, config.output_format)?);
    Ok(ExitCode::SUCCESS)
}
