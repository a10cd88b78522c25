// ABOUTME: Limits subcommand printing the resolved session, weekly, and seasonal ceilings
// ABOUTME: Needs no catalog; the limit tables are compiled in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;

use efl_program_architect::config::OutputFormat;
use epa_core::models::{Population, Readiness, SeasonPhase, SessionType};
use epa_engine::LimitResolver;

use crate::helpers::display;
use crate::Result;

/// Print the limits for one client profile
pub fn run(
    population: Population,
    session_type: SessionType,
    readiness: Readiness,
    season: SeasonPhase,
    compact: bool,
) -> Result<ExitCode> {
    let limits = LimitResolver::resolve(population, session_type, readiness, season);
    let format = if compact {
        OutputFormat::Compact
    } else {
        OutputFormat::Pretty
    };
    display::print_json(&limits, format)?;
    Ok(ExitCode::SUCCESS)
}
