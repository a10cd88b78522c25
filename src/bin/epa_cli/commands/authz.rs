// ABOUTME: Authz subcommand checking one role against one intent
// ABOUTME: Prints ALLOWED or DENIED; unknown roles and intents are denied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;

use efl_program_architect::permissions::{is_authorized, AuthorizationVerdict};
use tracing::info;

use crate::helpers::display;

/// Check `role` against `intent`; exit 0 when allowed, 1 when denied
pub fn run(role: &str, intent: &str) -> ExitCode {
    match is_authorized(role, intent) {
        AuthorizationVerdict::Allowed => {
            display::print_line("ALLOWED");
            ExitCode::SUCCESS
        }
        AuthorizationVerdict::Denied(cause) => {
            info!(role, intent, cause = ?cause, "intent denied");
            display::print_line("DENIED");
            ExitCode::FAILURE
        }
    }
}
