// ABOUTME: Request input helpers for epa-cli
// ABOUTME: Reads the request payload from a file or from stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use efl_program_architect::errors::AppError;

use crate::Result;

/// Read the payload from `path`, or stdin when `path` is absent or `-`
pub fn read_payload(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string())),
        _ => {
            let mut payload = String::new();
            io::stdin().read_to_string(&mut payload)?;
            Ok(payload)
        }
    }
}
