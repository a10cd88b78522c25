// ABOUTME: Orchestrator owning the shared catalog snapshot and running request -> engine -> response
// ABOUTME: Every JSON payload produces exactly one response; only operator faults surface as errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Program Architect
//!
//! The catalog snapshot is an `Arc` behind a lock so a host can swap in a
//! refreshed catalog while evaluations keep reading the old one.

use std::sync::{Arc, PoisonError, RwLock};

use epa_engine::{DecisionEngine, ExerciseCatalog};
use serde_json::Value;
use tracing::info;

use crate::catalog::load_catalog;
use crate::config::{EpaConfig, OutputFormat};
use crate::errors::AppResult;
use crate::protocol::{EpaResponse, EvaluationRequest, ResponseAssembler};

/// Session-legality service over one catalog snapshot
#[derive(Debug)]
pub struct ProgramArchitect {
    catalog: RwLock<Arc<ExerciseCatalog>>,
    engine: DecisionEngine,
}

impl ProgramArchitect {
    /// Architect over an already loaded catalog
    #[must_use]
    pub fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            engine: DecisionEngine::new(),
        }
    }

    /// Architect over the catalog named by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or parsed
    pub fn from_config(config: &EpaConfig) -> AppResult<Self> {
        load_catalog(&config.catalog_path).map(Self::new)
    }

    /// Current catalog snapshot
    #[must_use]
    pub fn catalog(&self) -> Arc<ExerciseCatalog> {
        Arc::clone(&self.catalog.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swap in a new catalog; in-flight evaluations keep the old snapshot
    pub fn replace_catalog(&self, catalog: Arc<ExerciseCatalog>) {
        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        info!(exercises = catalog.len(), "exercise catalog replaced");
        *guard = catalog;
    }

    /// Evaluate a raw JSON payload
    #[must_use]
    pub fn process(&self, payload: &str) -> EpaResponse {
        match EvaluationRequest::from_json(payload) {
            Ok(request) => self.evaluate_request(&request),
            Err(violation) => ResponseAssembler::contract_violation(&violation),
        }
    }

    /// Evaluate an already parsed JSON value
    #[must_use]
    pub fn evaluate(&self, payload: &Value) -> EpaResponse {
        match EvaluationRequest::from_value(payload) {
            Ok(request) => self.evaluate_request(&request),
            Err(violation) => ResponseAssembler::contract_violation(&violation),
        }
    }

    /// Evaluate a request that already satisfies the input contract
    #[must_use]
    pub fn evaluate_request(&self, request: &EvaluationRequest) -> EpaResponse {
        let catalog = self.catalog();
        let evaluation =
            self.engine
                .evaluate(catalog.as_ref(), &request.client, request.session.as_ref());
        let gates = evaluation.report.len();
        let response = ResponseAssembler::assemble(request, evaluation);

        info!(
            status = %response.status(),
            client_id = %request.client.client_id,
            session_id = %request.session_id,
            gates,
            "evaluation complete"
        );
        response
    }

    /// Serialize a response in the requested layout
    ///
    /// # Errors
    ///
    /// Returns an error if the response cannot be serialized
    pub fn render(response: &EpaResponse, format: OutputFormat) -> AppResult<String> {
        let json = match format {
            OutputFormat::Pretty => serde_json::to_string_pretty(response)?,
            OutputFormat::Compact => serde_json::to_string(response)?,
        };
        Ok(json)
    }
}
