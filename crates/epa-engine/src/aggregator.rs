// ABOUTME: Session aggregator deriving plyometric contacts, true-sprint meters, and CNS category
// ABOUTME: Unresolvable exercise ids are recorded, not dropped, so the metadata gate can report them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use epa_core::constants::aggregation::{
    CNS_HIGH_CONTACTS, CNS_HIGH_SPRINT_METERS, CNS_MODERATE_CONTACTS, CNS_MODERATE_SPRINT_METERS,
    TRUE_SPRINT_MIN_PERCENT_VMAX,
};
use epa_core::models::{ENode, ExerciseInstance, ExerciseRecord, ProposedSession};
use serde::{Deserialize, Serialize};

use crate::catalog::ExerciseLookup;

/// Central-nervous-system load category of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CnsCategory {
    /// Below both moderate thresholds
    Low,
    /// At or above a moderate threshold
    Moderate,
    /// At or above a high threshold
    High,
}

impl CnsCategory {
    /// Step function over session contacts and sprint meters
    #[must_use]
    pub fn classify(contacts: u32, sprint_meters: f64) -> Self {
        if contacts >= CNS_HIGH_CONTACTS || sprint_meters >= CNS_HIGH_SPRINT_METERS {
            Self::High
        } else if contacts >= CNS_MODERATE_CONTACTS || sprint_meters >= CNS_MODERATE_SPRINT_METERS {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

/// Derived exposure of one exercise instance
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseExposure<'a> {
    /// Index of the containing block
    pub block_index: usize,
    /// The prescribed instance
    pub instance: &'a ExerciseInstance,
    /// Catalog record, `None` when the id does not resolve
    pub record: Option<&'a ExerciseRecord>,
    /// Plyometric contacts contributed
    pub contacts: u32,
    /// True-sprint meters contributed
    pub sprint_meters: f64,
}

impl ExerciseExposure<'_> {
    /// Catalog identifier of the instance
    #[must_use]
    pub fn exercise_id(&self) -> &str {
        &self.instance.exercise_id
    }

    /// E-node of the resolved record
    #[must_use]
    pub fn e_node(&self) -> Option<ENode> {
        self.record.and_then(|r| r.e_node)
    }

    /// Whether the record is classified in one of the two highest E-node tiers
    #[must_use]
    pub fn is_tier_3(&self) -> bool {
        self.e_node().is_some_and(|e| e.is_tier_3())
    }
}

/// Session-level totals plus the per-exercise breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTotals<'a> {
    /// One entry per exercise instance, in session order
    pub exposures: Vec<ExerciseExposure<'a>>,
    /// Sum of per-exercise contacts
    pub total_contacts: u32,
    /// Sum of per-exercise true-sprint meters
    pub total_sprint_meters: f64,
    /// CNS load category of the session
    pub cns_category: CnsCategory,
}

impl<'a> SessionTotals<'a> {
    /// A session with no exercises
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            exposures: Vec::new(),
            total_contacts: 0,
            total_sprint_meters: 0.0,
            cns_category: CnsCategory::Low,
        }
    }

    /// Instances whose ids did not resolve in the catalog
    pub fn unresolved(&self) -> impl Iterator<Item = &ExerciseExposure<'a>> {
        self.exposures.iter().filter(|e| e.record.is_none())
    }

    /// Exposures with a resolved catalog record
    pub fn resolved(&self) -> impl Iterator<Item = (&ExerciseExposure<'a>, &'a ExerciseRecord)> {
        self.exposures
            .iter()
            .filter_map(|e| e.record.map(|record| (e, record)))
    }

    /// Contacts contributed by E3/E4 exercises
    #[must_use]
    pub fn tier_3_contacts(&self) -> u64 {
        self.exposures
            .iter()
            .filter(|e| e.is_tier_3())
            .map(|e| u64::from(e.contacts))
            .sum()
    }

    /// Whether the session includes any true sprinting
    #[must_use]
    pub fn has_true_sprinting(&self) -> bool {
        self.total_sprint_meters > 0.0
    }
}

/// Computes [`SessionTotals`] from a session and a catalog
pub struct SessionAggregator;

impl SessionAggregator {
    /// Aggregate every exercise instance of `session`
    #[must_use]
    pub fn aggregate<'a, L>(session: &'a ProposedSession, catalog: &'a L) -> SessionTotals<'a>
    where
        L: ExerciseLookup + ?Sized,
    {
        let exposures: Vec<ExerciseExposure<'a>> = session
            .blocks
            .iter()
            .enumerate()
            .flat_map(|(block_index, block)| {
                block.items.iter().map(move |instance| {
                    let record = catalog.lookup(&instance.exercise_id);
                    ExerciseExposure {
                        block_index,
                        instance,
                        record,
                        contacts: record.map_or(0, |r| instance_contacts(instance, r)),
                        sprint_meters: true_sprint_meters(instance),
                    }
                })
            })
            .collect();

        let total_contacts = exposures
            .iter()
            .fold(0_u32, |acc, e| acc.saturating_add(e.contacts));
        let total_sprint_meters: f64 = exposures.iter().map(|e| e.sprint_meters).sum();

        SessionTotals {
            cns_category: CnsCategory::classify(total_contacts, total_sprint_meters),
            exposures,
            total_contacts,
            total_sprint_meters,
        }
    }
}

/// `floor(sets * reps * contacts_per_rep)` for plyometric records, else 0
#[must_use]
pub fn instance_contacts(instance: &ExerciseInstance, record: &ExerciseRecord) -> u32 {
    record.effective_contact_rate().map_or(0, |rate| {
        // float-to-int `as` saturates, so absurd prescriptions pin at u32::MAX
        (instance.total_reps() as f64 * rate).floor() as u32
    })
}

/// `sets * reps * distance` when intensity meets the true-sprint threshold, else 0
#[must_use]
pub fn true_sprint_meters(instance: &ExerciseInstance) -> f64 {
    match (instance.distance_m, instance.intensity_percent_vmax) {
        (Some(distance), Some(intensity))
            if intensity >= TRUE_SPRINT_MIN_PERCENT_VMAX && distance > 0.0 =>
        {
            instance.total_reps() as f64 * distance
        }
        _ => 0.0,
    }
}
