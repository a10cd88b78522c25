// ABOUTME: Decision engine composing limit resolution, aggregation, weekly projection, and the gate chain
// ABOUTME: One synchronous pass per request against an immutable catalog snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use epa_core::models::{ClientContext, ProposedSession};
use tracing::debug;

use crate::aggregator::{SessionAggregator, SessionTotals};
use crate::catalog::ExerciseLookup;
use crate::gates::{ChainVerdict, GateChain, GateContext, GateReport, SkipReason};
use crate::limits::{ComputedLimits, LimitResolver};
use crate::weekly::WeeklyAggregation;

/// Result of evaluating one request
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    /// Resolved limits
    pub limits: ComputedLimits,
    /// Session totals, `None` when no session was proposed
    pub totals: Option<SessionTotals<'a>>,
    /// Weekly projection including this session
    pub weekly: WeeklyAggregation,
    /// Gate audit trail
    pub report: GateReport,
}

impl Evaluation<'_> {
    /// Overall verdict of the gate chain
    #[must_use]
    pub fn verdict(&self) -> ChainVerdict {
        self.report.verdict()
    }
}

/// Stateless evaluator; holds only the gate chain
#[derive(Debug, Default)]
pub struct DecisionEngine {
    chain: GateChain,
}

impl DecisionEngine {
    /// Engine with the standard gate chain
    #[must_use]
    pub fn new() -> Self {
        Self::with_chain(GateChain::standard())
    }

    /// Engine with a custom gate chain
    #[must_use]
    pub const fn with_chain(chain: GateChain) -> Self {
        Self { chain }
    }

    /// Gate chain in use
    #[must_use]
    pub const fn chain(&self) -> &GateChain {
        &self.chain
    }

    /// Evaluate a request
    ///
    /// A missing session is a limits-only query: every gate reports SKIP and
    /// the weekly snapshot is built from an empty session. A session with an
    /// empty block list still runs the chain.
    #[must_use]
    pub fn evaluate<'a, L>(
        &self,
        catalog: &'a L,
        client: &ClientContext,
        session: Option<&'a ProposedSession>,
    ) -> Evaluation<'a>
    where
        L: ExerciseLookup + ?Sized,
    {
        let limits = LimitResolver::for_client(client);

        let Some(session) = session else {
            debug!(client_id = %client.client_id, "no session plan, limits-only evaluation");
            return Evaluation {
                weekly: WeeklyAggregation::project(client, &limits, &SessionTotals::empty()),
                report: self.chain.skip_all(SkipReason::NoSessionPlan),
                limits,
                totals: None,
            };
        };

        let totals = SessionAggregator::aggregate(session, catalog);
        let weekly = WeeklyAggregation::project(client, &limits, &totals);
        debug!(
            client_id = %client.client_id,
            exercises = totals.exposures.len(),
            total_contacts = totals.total_contacts,
            total_sprint_meters = totals.total_sprint_meters,
            cns = totals.cns_category.as_str(),
            "session aggregated"
        );

        let report = self.chain.run(&GateContext {
            client,
            limits: &limits,
            totals: &totals,
            weekly: &weekly,
        });

        Evaluation {
            limits,
            totals: Some(totals),
            weekly,
            report,
        }
    }
}
