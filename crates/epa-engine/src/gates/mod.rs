// ABOUTME: Fail-fast legality gate chain with typed results, reason codes, and skip reasons
// ABOUTME: Each gate implements one trait; the chain runs them in fixed order and stops at the first FAIL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gate Chain
//!
//! Seven gates, IDs 0 through 6, run in order:
//!
//! | ID | Gate | Fails on |
//! |----|------|----------|
//! | 0 | Exercise library metadata | unknown ids, missing contact rate or sprint intensity |
//! | 1 | Population ceiling | band or E-node above the population ceiling, contraindications |
//! | 2 | Season legality | E-nodes the season forbids outright |
//! | 3 | Readiness modifiers | RED with any load, YELLOW with an over-tier exercise |
//! | 4 | Session-type rules | adult micro-session rules, resolved session caps |
//! | 5 | Weekly projection | projected weekly contacts, sprint meters, sprint sessions |
//! | 6 | Tier-3 percentage | E3/E4 share of contacts above 40% (Youth 13-17 only) |
//!
//! The chain is prefix fail-fast: if gate *k* fails, the report holds exactly
//! *k + 1* results. A SKIP never stops the chain.

mod catalog_metadata;
mod population_ceiling;
mod readiness;
mod season;
mod session_type;
mod tier_three;
mod weekly_projection;

use std::fmt;

use epa_core::constants::gates as names;
use epa_core::models::ClientContext;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::aggregator::SessionTotals;
use crate::limits::ComputedLimits;
use crate::weekly::WeeklyAggregation;

pub use catalog_metadata::CatalogMetadataGate;
pub use population_ceiling::PopulationCeilingGate;
pub use readiness::ReadinessGate;
pub use season::SeasonLegalityGate;
pub use session_type::SessionTypeGate;
pub use tier_three::TierThreeGate;
pub use weekly_projection::WeeklyProjectionGate;

// ============================================================================
// Gate identity
// ============================================================================

/// Identity of a gate in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GateId {
    /// Gate 0
    CatalogMetadata,
    /// Gate 1
    PopulationCeiling,
    /// Gate 2
    SeasonLegality,
    /// Gate 3
    ReadinessModifiers,
    /// Gate 4
    SessionTypeRules,
    /// Gate 5
    WeeklyProjection,
    /// Gate 6
    TierThreePercentage,
}

impl GateId {
    /// Every gate, in chain order
    pub const ALL: [Self; 7] = [
        Self::CatalogMetadata,
        Self::PopulationCeiling,
        Self::SeasonLegality,
        Self::ReadinessModifiers,
        Self::SessionTypeRules,
        Self::WeeklyProjection,
        Self::TierThreePercentage,
    ];

    /// Position in the chain
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Wire identifier ("0" through "6")
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CatalogMetadata => "0",
            Self::PopulationCeiling => "1",
            Self::SeasonLegality => "2",
            Self::ReadinessModifiers => "3",
            Self::SessionTypeRules => "4",
            Self::WeeklyProjection => "5",
            Self::TierThreePercentage => "6",
        }
    }

    /// Display name used in the audit trail
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CatalogMetadata => names::EXERCISE_LIBRARY_METADATA,
            Self::PopulationCeiling => names::POPULATION_BAND_NODE_CEILING,
            Self::SeasonLegality => names::SEASON_FIXTURE_LEGALITY,
            Self::ReadinessModifiers => names::READINESS_MODIFIERS,
            Self::SessionTypeRules => names::SESSION_TYPE_RULES,
            Self::WeeklyProjection => names::WEEKLY_CAPS_PROJECTION,
            Self::TierThreePercentage => names::TIER_3_PERCENTAGE_CAP,
        }
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Status of one gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateStatus {
    /// Checked and satisfied
    Pass,
    /// Checked and violated
    Fail,
    /// Precondition does not hold for this request
    Skip,
}

/// Why a gate did not run its check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// The request carries no session blocks
    NoSessionPlan,
    /// The gate applies to a different population
    PopulationNotApplicable,
    /// The session has zero contacts, so a share cannot be exceeded
    NoContacts,
}

// ============================================================================
// Violations
// ============================================================================

/// Machine-readable violation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    /// Exercise id not found in the catalog
    MissingExercise,
    /// Plyometric record without a positive contact rate
    MissingPlyoContacts,
    /// Sprint record prescribed without an intensity
    MissingIntensityVmax,
    /// Band above the population ceiling
    BandExceeded,
    /// E-node above the population ceiling
    ENodeExceeded,
    /// Exercise contraindicated for the population
    ContraindicatedPopulation,
    /// Exercise contraindicated for an active injury flag
    ContraindicatedInjuryFlag,
    /// E-node forbidden in the most restrictive in-season tier
    IllegalTier1ENode,
    /// Contacts prescribed under RED readiness
    RedReadinessPlyoViolation,
    /// Sprint meters prescribed under RED readiness
    RedReadinessSprintViolation,
    /// Exercise above the YELLOW readiness E-node ceiling
    YellowReadinessTierViolation,
    /// Adult micro-session contacts above the fixed cap
    AdultMsContactsExceeded,
    /// Adult micro-session E-node outside the allowed set
    AdultMsENodeViolation,
    /// Adult micro-session with true sprinting
    AdultMsSprintViolation,
    /// Session contacts above the resolved session cap
    SessionContactsCapExceeded,
    /// Session sprint meters above the resolved session cap
    SessionSprintMetersCapExceeded,
    /// Projected weekly contacts above the weekly cap
    WeeklyPlyoCapExceeded,
    /// Projected weekly sprint meters above the weekly cap
    WeeklySprintMetersCapExceeded,
    /// Projected sprint sessions above the weekly cap
    SprintSessionCapExceeded,
    /// E3/E4 share of contacts above the cap
    Tier3PercentageExceeded,
}

impl ReasonCode {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingExercise => "MISSING_EXERCISE",
            Self::MissingPlyoContacts => "MISSING_PLYO_CONTACTS",
            Self::MissingIntensityVmax => "MISSING_INTENSITY_VMAX",
            Self::BandExceeded => "BAND_EXCEEDED",
            Self::ENodeExceeded => "E_NODE_EXCEEDED",
            Self::ContraindicatedPopulation => "CONTRAINDICATED_POPULATION",
            Self::ContraindicatedInjuryFlag => "CONTRAINDICATED_INJURY_FLAG",
            Self::IllegalTier1ENode => "ILLEGAL_TIER_1_E_NODE",
            Self::RedReadinessPlyoViolation => "RED_READINESS_PLYO_VIOLATION",
            Self::RedReadinessSprintViolation => "RED_READINESS_SPRINT_VIOLATION",
            Self::YellowReadinessTierViolation => "YELLOW_READINESS_TIER_VIOLATION",
            Self::AdultMsContactsExceeded => "ADULT_MS_CONTACTS_EXCEEDED",
            Self::AdultMsENodeViolation => "ADULT_MS_E_NODE_VIOLATION",
            Self::AdultMsSprintViolation => "ADULT_MS_SPRINT_VIOLATION",
            Self::SessionContactsCapExceeded => "SESSION_CONTACTS_CAP_EXCEEDED",
            Self::SessionSprintMetersCapExceeded => "SESSION_SPRINT_METERS_CAP_EXCEEDED",
            Self::WeeklyPlyoCapExceeded => "WEEKLY_PLYO_CAP_EXCEEDED",
            Self::WeeklySprintMetersCapExceeded => "WEEKLY_SPRINT_METERS_CAP_EXCEEDED",
            Self::SprintSessionCapExceeded => "SPRINT_SESSION_CAP_EXCEEDED",
            Self::Tier3PercentageExceeded => "TIER_3_PERCENTAGE_EXCEEDED",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReasonCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One structured violation reported by a failing gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Violation code
    pub code: ReasonCode,
    /// Exercise the violation is attributed to, for per-exercise checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    /// Observed value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<String>,
    /// Limit the observed value was checked against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

impl Violation {
    /// Session-level violation
    #[must_use]
    pub const fn new(code: ReasonCode) -> Self {
        Self {
            code,
            exercise_id: None,
            observed: None,
            limit: None,
        }
    }

    /// Violation attributed to one exercise
    #[must_use]
    pub fn for_exercise(code: ReasonCode, exercise_id: &str) -> Self {
        Self {
            exercise_id: Some(exercise_id.to_owned()),
            ..Self::new(code)
        }
    }

    /// Attach the observed value and the limit it broke
    #[must_use]
    pub fn with_values(mut self, observed: impl fmt::Display, limit: impl fmt::Display) -> Self {
        self.observed = Some(observed.to_string());
        self.limit = Some(limit.to_string());
        self
    }

    /// Attach only the observed value
    #[must_use]
    pub fn with_observed(mut self, observed: impl fmt::Display) -> Self {
        self.observed = Some(observed.to_string());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exercise_id {
            Some(id) => write!(f, "{}:{id}", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}

// ============================================================================
// Gate trait and results
// ============================================================================

/// What a gate decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// No violations
    Pass,
    /// One or more violations
    Fail(Vec<Violation>),
    /// Not applicable to this request
    Skip(SkipReason),
}

impl GateOutcome {
    /// `Pass` when `violations` is empty, `Fail` otherwise
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::Pass
        } else {
            Self::Fail(violations)
        }
    }
}

/// Everything a gate may read
#[derive(Debug, Clone, Copy)]
pub struct GateContext<'a> {
    /// Request facts
    pub client: &'a ClientContext,
    /// Resolved limits
    pub limits: &'a ComputedLimits,
    /// Session totals
    pub totals: &'a SessionTotals<'a>,
    /// Weekly projection including this session
    pub weekly: &'a WeeklyAggregation,
}

/// One legality check
pub trait Gate: Send + Sync {
    /// Which gate this is
    fn id(&self) -> GateId;

    /// Evaluate against the request
    fn evaluate(&self, ctx: &GateContext<'_>) -> GateOutcome;
}

/// Audit-trail entry for one gate that ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateResult {
    /// Gate identifier
    pub gate_id: GateId,
    /// Gate display name
    pub gate_name: &'static str,
    /// Outcome status
    pub status: GateStatus,
    /// Flattened violation codes, in report order
    pub reasons: Vec<String>,
    /// Structured violations
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    /// Reason for a SKIP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
}

impl GateResult {
    /// Build the audit entry for `gate` from its outcome
    #[must_use]
    pub fn from_outcome(gate: GateId, outcome: GateOutcome) -> Self {
        let (status, violations, skip_reason) = match outcome {
            GateOutcome::Pass => (GateStatus::Pass, Vec::new(), None),
            GateOutcome::Fail(violations) => (GateStatus::Fail, violations, None),
            GateOutcome::Skip(reason) => (GateStatus::Skip, Vec::new(), Some(reason)),
        };
        Self {
            gate_id: gate,
            gate_name: gate.name(),
            status,
            reasons: violations.iter().map(ToString::to_string).collect(),
            violations,
            skip_reason,
        }
    }

    /// Whether this gate failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status == GateStatus::Fail
    }
}

/// Overall verdict of a chain run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainVerdict {
    /// Every gate passed or skipped
    Approved,
    /// The catalog metadata gate failed
    Quarantined,
    /// A legality gate failed
    Rejected(GateId),
}

/// Ordered gate results, truncated after the first failure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct GateReport {
    /// Results in chain order
    pub results: Vec<GateResult>,
}

impl GateReport {
    /// The failing gate, if any
    #[must_use]
    pub fn first_failure(&self) -> Option<&GateResult> {
        self.results.iter().find(|r| r.failed())
    }

    /// Overall verdict
    #[must_use]
    pub fn verdict(&self) -> ChainVerdict {
        match self.first_failure() {
            None => ChainVerdict::Approved,
            Some(result) if result.gate_id == GateId::CatalogMetadata => ChainVerdict::Quarantined,
            Some(result) => ChainVerdict::Rejected(result.gate_id),
        }
    }

    /// Reasons of the failing gate, empty on success
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.first_failure()
            .map(|r| r.reasons.clone())
            .unwrap_or_default()
    }

    /// Number of gates that ran
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no gate ran
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// ============================================================================
// Chain
// ============================================================================

/// Ordered list of gates executed fail-fast
pub struct GateChain {
    gates: Vec<Box<dyn Gate>>,
}

impl GateChain {
    /// The standard seven-gate chain
    #[must_use]
    pub fn standard() -> Self {
        Self::with_gates(vec![
            Box::new(CatalogMetadataGate),
            Box::new(PopulationCeilingGate),
            Box::new(SeasonLegalityGate),
            Box::new(ReadinessGate),
            Box::new(SessionTypeGate),
            Box::new(WeeklyProjectionGate),
            Box::new(TierThreeGate),
        ])
    }

    /// A chain over an arbitrary gate list, run in the given order
    #[must_use]
    pub fn with_gates(gates: Vec<Box<dyn Gate>>) -> Self {
        Self { gates }
    }

    /// Gate identifiers in execution order
    #[must_use]
    pub fn gate_ids(&self) -> Vec<GateId> {
        self.gates.iter().map(|g| g.id()).collect()
    }

    /// Run every gate in order, stopping after the first failure
    #[must_use]
    pub fn run(&self, ctx: &GateContext<'_>) -> GateReport {
        let mut results = Vec::with_capacity(self.gates.len());
        for gate in &self.gates {
            let id = gate.id();
            let result = GateResult::from_outcome(id, gate.evaluate(ctx));
            debug!(
                gate_id = id.as_str(),
                gate = id.name(),
                status = ?result.status,
                "gate evaluated"
            );
            let failed = result.failed();
            results.push(result);
            if failed {
                info!(
                    client_id = %ctx.client.client_id,
                    gate = id.name(),
                    reasons = ?results.last().map(|r| &r.reasons),
                    "gate chain stopped at first failure"
                );
                break;
            }
        }
        GateReport { results }
    }

    /// Report every gate as skipped for the same reason
    #[must_use]
    pub fn skip_all(&self, reason: SkipReason) -> GateReport {
        GateReport {
            results: self
                .gates
                .iter()
                .map(|g| GateResult::from_outcome(g.id(), GateOutcome::Skip(reason)))
                .collect(),
        }
    }
}

impl Default for GateChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for GateChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateChain")
            .field("gates", &self.gate_ids())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_ids_are_chain_positions() {
        for (position, gate) in GateId::ALL.into_iter().enumerate() {
            assert_eq!(gate.index(), position);
            assert_eq!(gate.as_str(), position.to_string());
        }
        assert_eq!(GateChain::standard().gate_ids(), GateId::ALL);
    }

    #[test]
    fn test_violation_display() {
        assert_eq!(
            Violation::new(ReasonCode::WeeklyPlyoCapExceeded).to_string(),
            "WEEKLY_PLYO_CAP_EXCEEDED"
        );
        assert_eq!(
            Violation::for_exercise(ReasonCode::BandExceeded, "SQ_01").to_string(),
            "BAND_EXCEEDED:SQ_01"
        );
    }

    #[test]
    fn test_empty_violations_pass() {
        assert_eq!(GateOutcome::from_violations(Vec::new()), GateOutcome::Pass);
    }

    #[test]
    fn test_verdict_routes_gate_zero_to_quarantine() {
        let report = GateReport {
            results: vec![GateResult::from_outcome(
                GateId::CatalogMetadata,
                GateOutcome::Fail(vec![Violation::for_exercise(
                    ReasonCode::MissingExercise,
                    "X",
                )]),
            )],
        };
        assert_eq!(report.verdict(), ChainVerdict::Quarantined);
        assert_eq!(report.reasons(), vec!["MISSING_EXERCISE:X".to_owned()]);
    }
}
