// ABOUTME: Limit resolver mapping population, session type, readiness, and season to ceilings
// ABOUTME: Pure and total over the typed enums; readiness is applied after session-type selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Limit Resolution
//!
//! Order of operations:
//!
//! 1. Select the population's FULL or MICRO contact cap (independent table
//!    entries, never a ratio of each other).
//! 2. Apply the readiness modifier to the selected contact cap and to the
//!    sprint-meter cap, flooring to an integer.
//! 3. Clamp the per-exercise E-node ceiling by readiness.
//!
//! Weekly caps and the seasonal range are looked up and returned unmodified.

use epa_core::constants::{
    population_ceiling, readiness_modifier, seasonal_range, weekly_caps, SeasonalRange, WeeklyCaps,
};
use epa_core::models::{
    Band, ClientContext, ENode, Node, Population, Readiness, SeasonPhase, SessionType,
};
use serde::Serialize;

/// Session-level ceilings after readiness is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionCaps {
    /// Maximum plyometric contacts this session
    pub plyo_contacts_cap: u32,
    /// Maximum true-sprint meters this session
    pub sprint_meters_cap: u32,
    /// Population band ceiling
    pub max_band: Band,
    /// Population node ceiling
    pub max_node: Node,
    /// Population E-node ceiling
    pub max_e_node: ENode,
}

/// Everything the gate chain checks against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputedLimits {
    /// Population the limits were resolved for
    pub population: Population,
    /// Session type the contact cap was selected for
    pub session_type: SessionType,
    /// Season phase the operating range was selected for
    pub season_type: SeasonPhase,
    /// Readiness applied to the caps
    pub readiness_flag: Readiness,
    /// Session ceilings
    pub session_caps: SessionCaps,
    /// Highest E-node any single exercise may carry under this readiness
    pub readiness_e_node_ceiling: ENode,
    /// Weekly ceilings
    pub weekly_caps: WeeklyCaps,
    /// Weekly target range for the season
    pub seasonal_operating_range: SeasonalRange,
}

/// Resolves [`ComputedLimits`] from the request's typed facts
pub struct LimitResolver;

impl LimitResolver {
    /// Resolve limits for one combination of inputs
    #[must_use]
    pub fn resolve(
        population: Population,
        session_type: SessionType,
        readiness: Readiness,
        season: SeasonPhase,
    ) -> ComputedLimits {
        let base = population_ceiling(population);
        let modifier = readiness_modifier(readiness);

        let session_caps = SessionCaps {
            plyo_contacts_cap: modifier.apply(base.contacts_for(session_type)),
            sprint_meters_cap: modifier.apply(base.sprint_meters),
            max_band: base.max_band,
            max_node: base.max_node,
            max_e_node: base.max_e_node,
        };

        ComputedLimits {
            population,
            session_type,
            season_type: season,
            readiness_flag: readiness,
            session_caps,
            readiness_e_node_ceiling: modifier.clamp(base.max_e_node),
            weekly_caps: weekly_caps(population),
            seasonal_operating_range: seasonal_range(population, season),
        }
    }

    /// Resolve limits for a client context
    #[must_use]
    pub fn for_client(client: &ClientContext) -> ComputedLimits {
        Self::resolve(
            client.population,
            client.session_type,
            client.readiness,
            client.season,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yellow_scales_selected_micro_cap() {
        let limits = LimitResolver::resolve(
            Population::Youth13To17,
            SessionType::Micro,
            Readiness::Yellow,
            SeasonPhase::OffSeason,
        );
        // 70 * 0.75 = 52.5, floored
        assert_eq!(limits.session_caps.plyo_contacts_cap, 52);
        assert_eq!(limits.session_caps.sprint_meters_cap, 150);
        assert_eq!(limits.readiness_e_node_ceiling, ENode::E2);
        assert_eq!(limits.session_caps.max_e_node, ENode::E4);
    }

    #[test]
    fn test_red_zeroes_every_population() {
        for population in Population::ALL {
            for session_type in SessionType::ALL {
                let limits = LimitResolver::resolve(
                    population,
                    session_type,
                    Readiness::Red,
                    SeasonPhase::PreSeason,
                );
                assert_eq!(limits.session_caps.plyo_contacts_cap, 0);
                assert_eq!(limits.session_caps.sprint_meters_cap, 0);
                assert_eq!(limits.readiness_e_node_ceiling, ENode::E0);
            }
        }
    }

    #[test]
    fn test_weekly_and_seasonal_are_unmodified_by_readiness() {
        let green = LimitResolver::resolve(
            Population::Adult,
            SessionType::Full,
            Readiness::Green,
            SeasonPhase::InSeasonTier2,
        );
        let red = LimitResolver::resolve(
            Population::Adult,
            SessionType::Full,
            Readiness::Red,
            SeasonPhase::InSeasonTier2,
        );
        assert_eq!(green.weekly_caps, red.weekly_caps);
        assert_eq!(green.seasonal_operating_range, red.seasonal_operating_range);
    }
}
