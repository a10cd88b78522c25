// ABOUTME: Unit tests for the CSV exercise catalog loader
// ABOUTME: Validates column parsing, contraindication tags, defaults, and load-time errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use std::io::Write;
use std::path::Path;

use efl_program_architect::catalog::{load_catalog, read_catalog};
use efl_program_architect::errors::ErrorCode;
use epa_core::models::{Band, ENode, Node, Population};
use epa_engine::ExerciseLookup;
use tempfile::NamedTempFile;

const HEADER: &str = "exercise_id,exercise_name,movement_pattern,load_standard_band,aether_node,aether_difficulty,plyo_contacts,is_plyometric,is_sprint,contraindicated_populations\n";

fn catalog_file(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(HEADER.as_bytes()).unwrap();
    file.write_all(rows.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_reference_catalog_loads() {
    let catalog = common::reference_catalog();
    assert_eq!(catalog.len(), 18);

    let depth_jump = catalog.lookup("DEPTH_JUMP").unwrap();
    assert_eq!(depth_jump.band, Band::Band3);
    assert_eq!(depth_jump.e_node, Some(ENode::E4));
    assert!(depth_jump
        .contraindicated_populations
        .contains(&Population::Youth8To12));
    assert!(depth_jump
        .contraindicated_populations
        .contains(&Population::Youth13To17));
    assert!(depth_jump
        .contraindicated_populations
        .contains(&Population::R2pStage2));
}

#[test]
fn test_load_from_disk() {
    let file = catalog_file("HOP,Hop,Plyometric,Band_1,B,E2-Reactive,1.5,,,\n");
    let catalog = load_catalog(file.path()).unwrap();

    let hop = catalog.lookup("HOP").unwrap();
    assert_eq!(hop.node, Some(Node::N2));
    assert_eq!(hop.e_node, Some(ENode::E2));
    assert_eq!(hop.contacts_per_rep, Some(1.5));
    assert!(hop.is_plyometric);
    assert!(!hop.is_sprint);
}

#[test]
fn test_unknown_tags_become_injury_flags() {
    let csv = format!("{HEADER}SQUAT,Squat,Squat,2,,,,false,false,\"low_back, Adult\"\n");
    let catalog = read_catalog(csv.as_bytes()).unwrap();

    let squat = catalog.lookup("SQUAT").unwrap();
    assert_eq!(squat.band, Band::Band2);
    assert!(squat.contraindicated_flags.contains("LOW_BACK"));
    assert!(squat.contraindicated_populations.contains(&Population::Adult));
    assert_eq!(squat.contacts_per_rep, None);
}

#[test]
fn test_unrecognized_node_is_ignored() {
    let csv = format!("{HEADER}ROW,Row,Pull,Band_1,Z9,Hard,,,,\n");
    let catalog = read_catalog(csv.as_bytes()).unwrap();

    let row = catalog.lookup("ROW").unwrap();
    assert_eq!(row.node, None);
    assert_eq!(row.e_node, None);
}

#[test]
fn test_invalid_band_reports_line() {
    let csv = format!("{HEADER}OK,Ok,Squat,Band_1,,,,,,\nBAD,Bad,Squat,Band_9,,,,,,\n");
    let error = read_catalog(csv.as_bytes()).unwrap_err();

    assert_eq!(error.code, ErrorCode::CatalogLoadFailed);
    assert!(error.message.contains("line 3"), "{}", error.message);
    assert!(error.message.contains("Band_9"));
}

#[test]
fn test_negative_contact_rate_is_rejected() {
    let csv = format!("{HEADER}HOP,Hop,Plyometric,Band_1,,,-2,,,\n");
    let error = read_catalog(csv.as_bytes()).unwrap_err();
    assert_eq!(error.code, ErrorCode::CatalogLoadFailed);
}

#[test]
fn test_duplicate_id_is_rejected() {
    let file = catalog_file("HOP,Hop,Plyometric,Band_1,,,1,,,\nHOP,Hop Again,Plyometric,Band_1,,,1,,,\n");
    let error = load_catalog(file.path()).unwrap_err();

    assert_eq!(error.code, ErrorCode::CatalogLoadFailed);
    assert_eq!(error.context.resource_id.as_deref(), Some("HOP"));
}

#[test]
fn test_missing_file_is_not_found() {
    let error = load_catalog(Path::new("/nonexistent/epa/catalog.csv")).unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.exit_code(), 66);
    assert_eq!(
        error.context.resource_id.as_deref(),
        Some("/nonexistent/epa/catalog.csv")
    );
}
