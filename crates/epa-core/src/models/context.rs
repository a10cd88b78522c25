// ABOUTME: Per-request client context and caller-owned weekly history counters
// ABOUTME: Built fresh on every evaluation; the engine never stores either
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Population, Readiness, SeasonPhase, SessionType};

/// Weekly load already accumulated, as tracked by the caller
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyHistory {
    /// Sessions planned for the week
    pub planned_sessions: u32,
    /// Sessions completed so far
    pub completed_sessions: u32,
    /// Sprint sessions planned for the week
    pub planned_sprint_sessions: u32,
    /// Sprint sessions completed so far
    pub completed_sprint_sessions: u32,
    /// Plyometric contacts already performed this week
    pub tracked_plyo_contacts: u32,
    /// True-sprint meters already performed this week
    pub tracked_sprint_meters: f64,
}

/// Facts about the athlete and the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientContext {
    /// Caller's client identifier
    pub client_id: String,
    /// Population bracket
    pub population: Population,
    /// Sport (informational)
    pub sport: String,
    /// Season phase
    pub season: SeasonPhase,
    /// Readiness reported for today
    pub readiness: Readiness,
    /// Active injury flags, normalized to uppercase
    pub injury_flags: BTreeSet<String>,
    /// Kind of session being proposed
    pub session_type: SessionType,
    /// Week identifier the session belongs to
    pub week_id: String,
    /// Position of the session within the week (1-based)
    pub session_index: u32,
    /// Weekly counters supplied by the caller
    pub history: WeeklyHistory,
}

impl ClientContext {
    /// Create a context with no injury flags and an empty week
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        population: Population,
        season: SeasonPhase,
        readiness: Readiness,
        session_type: SessionType,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            population,
            sport: String::new(),
            season,
            readiness,
            injury_flags: BTreeSet::new(),
            session_type,
            week_id: String::new(),
            session_index: 1,
            history: WeeklyHistory::default(),
        }
    }

    /// Set the sport
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = sport.into();
        self
    }

    /// Set the week identifier
    #[must_use]
    pub fn with_week(mut self, week_id: impl Into<String>) -> Self {
        self.week_id = week_id.into();
        self
    }

    /// Replace the weekly history
    #[must_use]
    pub const fn with_history(mut self, history: WeeklyHistory) -> Self {
        self.history = history;
        self
    }

    /// Add an injury flag (normalized to uppercase)
    #[must_use]
    pub fn with_injury_flag(mut self, flag: &str) -> Self {
        self.injury_flags.insert(normalize_flag(flag));
        self
    }

    /// Whether any active injury flag appears in `contraindications`
    #[must_use]
    pub fn has_flag_in(&self, contraindications: &BTreeSet<String>) -> bool {
        !self.injury_flags.is_disjoint(contraindications)
    }
}

/// Canonical form of an injury or contraindication flag
#[must_use]
pub fn normalize_flag(flag: &str) -> String {
    flag.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injury_flag_matching_is_case_insensitive() {
        let ctx = ClientContext::new(
            "c1",
            Population::Adult,
            SeasonPhase::OffSeason,
            Readiness::Green,
            SessionType::Full,
        )
        .with_injury_flag("acl");

        let contraindications: BTreeSet<String> = [normalize_flag("ACL")].into_iter().collect();
        assert!(ctx.has_flag_in(&contraindications));
        assert!(!ctx.has_flag_in(&BTreeSet::new()));
    }
}
