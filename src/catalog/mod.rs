// ABOUTME: Exercise catalog adapter that turns the flat-file library into an immutable ExerciseCatalog
// ABOUTME: Re-exports the CSV loader and its row-level error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog Loading
//!
//! The engine only sees [`ExerciseLookup`](epa_engine::ExerciseLookup). This
//! module is the thin adapter that builds one from the exercise library CSV
//! at startup.

/// CSV exercise library reader
pub mod csv_loader;

pub use csv_loader::{load_catalog, read_catalog, CatalogLoadError, YOUTH_ALIAS};
