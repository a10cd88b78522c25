// ABOUTME: CSV reader for the exercise library, one ExerciseRecord per row
// ABOUTME: Parses bands, nodes, E-node difficulty labels, contact rates, and contraindication tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use csv::{Position, ReaderBuilder, Trim};
use epa_core::models::{Band, ENode, ExerciseRecord, Node, Population};
use epa_engine::ExerciseCatalog;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult, ErrorCode};

/// Contraindication tag that stands for both youth brackets
pub const YOUTH_ALIAS: &str = "Youth";

/// Row-level problems in the catalog file
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogLoadError {
    /// `load_standard_band` is not `Band_0`..`Band_4`
    #[error("line {line}: unknown load_standard_band '{value}'")]
    InvalidBand {
        /// 1-based line in the file
        line: u64,
        /// Offending value
        value: String,
    },
    /// `plyo_contacts` is not a non-negative number
    #[error("line {line}: plyo_contacts '{value}' is not a non-negative number")]
    InvalidContactRate {
        /// 1-based line in the file
        line: u64,
        /// Offending value
        value: String,
    },
    /// A boolean column holds something other than true/false
    #[error("line {line}: {column} '{value}' is not a boolean")]
    InvalidBool {
        /// 1-based line in the file
        line: u64,
        /// Column name
        column: &'static str,
        /// Offending value
        value: String,
    },
}

impl From<CatalogLoadError> for AppError {
    fn from(error: CatalogLoadError) -> Self {
        Self::new(ErrorCode::CatalogLoadFailed, error.to_string()).with_source(error)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    exercise_id: String,
    exercise_name: String,
    #[serde(default)]
    movement_pattern: Option<String>,
    load_standard_band: String,
    #[serde(default)]
    aether_node: Option<String>,
    #[serde(default)]
    aether_difficulty: Option<String>,
    #[serde(default)]
    plyo_contacts: Option<String>,
    #[serde(default)]
    is_plyometric: Option<String>,
    #[serde(default)]
    is_sprint: Option<String>,
    #[serde(default)]
    contraindicated_populations: Option<String>,
}

/// Load the catalog at `path` and wrap it for sharing
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a row is malformed, or the
/// records violate catalog invariants (duplicate ids, negative rates).
pub fn load_catalog(path: &Path) -> AppResult<Arc<ExerciseCatalog>> {
    let file = File::open(path).map_err(|e| attach_path(AppError::from(e), path))?;
    let catalog = read_catalog(file).map_err(|e| attach_path(e, path))?;

    info!(
        path = %path.display(),
        exercises = catalog.len(),
        "exercise catalog loaded"
    );
    Ok(catalog.into_shared())
}

fn attach_path(error: AppError, path: &Path) -> AppError {
    if error.context.resource_id.is_some() {
        return error;
    }
    error.with_resource_id(path.display().to_string())
}

/// Build a catalog from CSV text
///
/// # Errors
///
/// Returns an error if a row is malformed or the records violate catalog
/// invariants.
pub fn read_catalog<R: Read>(reader: R) -> AppResult<ExerciseCatalog> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let raw = result?;
        let line = raw.position().map_or(0, Position::line);
        let row: CatalogRow = raw.deserialize(Some(&headers))?;
        records.push(parse_row(row, line)?);
    }

    Ok(ExerciseCatalog::from_records(records)?)
}

fn parse_row(row: CatalogRow, line: u64) -> Result<ExerciseRecord, CatalogLoadError> {
    let band = parse_band(&row.load_standard_band).ok_or_else(|| CatalogLoadError::InvalidBand {
        line,
        value: row.load_standard_band.clone(),
    })?;

    let contacts_per_rep = non_empty(row.plyo_contacts.as_deref())
        .map(|raw| {
            raw.parse::<f64>()
                .ok()
                .filter(|rate| rate.is_finite() && *rate >= 0.0)
                .ok_or_else(|| CatalogLoadError::InvalidContactRate {
                    line,
                    value: raw.to_owned(),
                })
        })
        .transpose()?;

    let is_plyometric = match non_empty(row.is_plyometric.as_deref()) {
        Some(raw) => parse_bool(raw).ok_or_else(|| CatalogLoadError::InvalidBool {
            line,
            column: "is_plyometric",
            value: raw.to_owned(),
        })?,
        None => contacts_per_rep.is_some_and(|rate| rate > 0.0),
    };

    let is_sprint = match non_empty(row.is_sprint.as_deref()) {
        Some(raw) => parse_bool(raw).ok_or_else(|| CatalogLoadError::InvalidBool {
            line,
            column: "is_sprint",
            value: raw.to_owned(),
        })?,
        None => false,
    };

    let mut record = ExerciseRecord::new(row.exercise_id, row.exercise_name, band);
    record.movement_pattern = row.movement_pattern.unwrap_or_default();
    record.contacts_per_rep = contacts_per_rep;
    record.is_plyometric = is_plyometric;
    record.is_sprint = is_sprint;
    record.node = non_empty(row.aether_node.as_deref()).and_then(|raw| {
        let node = Node::parse(raw);
        if node.is_none() {
            warn!(line, exercise_id = %record.exercise_id, value = raw, "unrecognized aether_node ignored");
        }
        node
    });
    record.e_node = non_empty(row.aether_difficulty.as_deref()).and_then(|raw| {
        let e_node = ENode::from_difficulty(raw);
        if e_node.is_none() {
            warn!(line, exercise_id = %record.exercise_id, value = raw, "unrecognized aether_difficulty ignored");
        }
        e_node
    });

    if let Some(tags) = non_empty(row.contraindicated_populations.as_deref()) {
        record = apply_contraindications(record, tags);
    }

    Ok(record)
}

/// Split a comma-separated tag list into population and injury-flag contraindications
fn apply_contraindications(mut record: ExerciseRecord, tags: &str) -> ExerciseRecord {
    for tag in tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if tag.eq_ignore_ascii_case(YOUTH_ALIAS) {
            record = record
                .contraindicated_for(Population::Youth8To12)
                .contraindicated_for(Population::Youth13To17);
        } else if let Some(population) = Population::parse(tag) {
            record = record.contraindicated_for(population);
        } else {
            record = record.contraindicated_with_flag(tag);
        }
    }
    record
}

/// `Band_2` or a bare `2`
fn parse_band(raw: &str) -> Option<Band> {
    Band::parse(raw).or_else(|| Band::parse(&format!("Band_{raw}")))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
