// ABOUTME: Output formatting helpers for epa-cli
// ABOUTME: JSON documents go to stdout, operator error reports go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use efl_program_architect::config::OutputFormat;
use efl_program_architect::errors::{AppError, ErrorResponse};
use serde::Serialize;
use tracing::error;

use crate::Result;

/// Print one line to stdout
pub fn print_line(line: &str) {
    println!("{line}");
}

/// Serialize `value` and print it to stdout
pub fn print_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let json = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Compact => serde_json::to_string(value)?,
    };
    print_line(&json);
    Ok(())
}

/// Report an operator fault on stderr as a JSON error document
pub fn print_error(app_error: AppError) {
    error!(code = ?app_error.code, "{app_error}");
    let report = ErrorResponse::from(app_error);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}", report.error.message),
    }
}
