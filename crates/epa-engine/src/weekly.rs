// ABOUTME: Weekly aggregation snapshot projecting this session onto the caller's tracked week
// ABOUTME: completed = tracked practice exposure, planned = this session, projected = their sum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use epa_core::models::ClientContext;
use serde::Serialize;

use crate::aggregator::SessionTotals;
use crate::limits::ComputedLimits;

/// Weekly load before and after this session, with the caps it is judged against
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyAggregation {
    /// Week identifier
    pub week_id: String,
    /// Contacts already performed this week
    pub completed_plyo_contacts: u32,
    /// True-sprint meters already performed this week
    pub completed_sprint_meters: f64,
    /// Sprint sessions already completed this week
    pub completed_sprint_sessions: u32,
    /// Contacts this session adds
    pub planned_plyo_contacts: u32,
    /// True-sprint meters this session adds
    pub planned_sprint_meters: f64,
    /// Sprint sessions this session adds (0 or 1)
    pub planned_sprint_sessions: u32,
    /// Completed plus planned contacts
    pub projected_total_plyo_contacts: u64,
    /// Completed plus planned sprint meters
    pub projected_total_sprint_meters: f64,
    /// Completed plus planned sprint sessions
    pub projected_total_sprint_sessions: u32,
    /// Weekly contact cap
    pub weekly_plyo_cap: u32,
    /// Weekly sprint-meter cap
    pub weekly_sprint_meters_cap: u32,
    /// Weekly sprint-session cap
    pub weekly_sprint_sessions_cap: u32,
}

impl WeeklyAggregation {
    /// Project `totals` onto the client's tracked week
    ///
    /// A session counts as one sprint session when its true-sprint meters are
    /// positive, however many sprint exercises it contains.
    #[must_use]
    pub fn project(client: &ClientContext, limits: &ComputedLimits, totals: &SessionTotals<'_>) -> Self {
        let history = &client.history;
        let planned_sprint_sessions = u32::from(totals.has_true_sprinting());

        Self {
            week_id: client.week_id.clone(),
            completed_plyo_contacts: history.tracked_plyo_contacts,
            completed_sprint_meters: history.tracked_sprint_meters,
            completed_sprint_sessions: history.completed_sprint_sessions,
            planned_plyo_contacts: totals.total_contacts,
            planned_sprint_meters: totals.total_sprint_meters,
            planned_sprint_sessions,
            projected_total_plyo_contacts: u64::from(history.tracked_plyo_contacts)
                + u64::from(totals.total_contacts),
            projected_total_sprint_meters: history.tracked_sprint_meters + totals.total_sprint_meters,
            projected_total_sprint_sessions: history
                .completed_sprint_sessions
                .saturating_add(planned_sprint_sessions),
            weekly_plyo_cap: limits.weekly_caps.plyo_contacts_per_week,
            weekly_sprint_meters_cap: limits.weekly_caps.sprint_meters_per_week,
            weekly_sprint_sessions_cap: limits.weekly_caps.max_sprint_sessions_per_week,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::aggregator::CnsCategory;
    use crate::limits::LimitResolver;
    use epa_core::models::{Population, Readiness, SeasonPhase, SessionType, WeeklyHistory};

    #[test]
    fn test_projection_adds_session_to_tracked_week() {
        let client = ClientContext::new(
            "c1",
            Population::Youth8To12,
            SeasonPhase::PreSeason,
            Readiness::Green,
            SessionType::Full,
        )
        .with_week("2025-W14")
        .with_history(WeeklyHistory {
            completed_sprint_sessions: 2,
            tracked_plyo_contacts: 150,
            tracked_sprint_meters: 120.0,
            ..WeeklyHistory::default()
        });
        let limits = LimitResolver::for_client(&client);
        let totals = SessionTotals {
            exposures: Vec::new(),
            total_contacts: 40,
            total_sprint_meters: 60.0,
            cns_category: CnsCategory::Low,
        };

        let weekly = WeeklyAggregation::project(&client, &limits, &totals);
        assert_eq!(weekly.projected_total_plyo_contacts, 190);
        assert_eq!(weekly.projected_total_sprint_meters, 180.0);
        assert_eq!(weekly.planned_sprint_sessions, 1);
        assert_eq!(weekly.projected_total_sprint_sessions, 3);
        assert_eq!(weekly.weekly_plyo_cap, 200);
        assert_eq!(weekly.week_id, "2025-W14");
    }

    #[test]
    fn test_no_sprinting_adds_no_sprint_session() {
        let client = ClientContext::new(
            "c1",
            Population::Adult,
            SeasonPhase::OffSeason,
            Readiness::Green,
            SessionType::Full,
        );
        let limits = LimitResolver::for_client(&client);
        let weekly = WeeklyAggregation::project(&client, &limits, &SessionTotals::empty());
        assert_eq!(weekly.planned_sprint_sessions, 0);
        assert_eq!(weekly.projected_total_sprint_sessions, 0);
    }
}
