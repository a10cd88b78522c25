// ABOUTME: Load Standards v2.1.2 tables keyed by strongly-typed population, session type, and season
// ABOUTME: Every lookup is an exhaustive match so a missing combination fails to compile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Load Standards
//!
//! Base session caps, weekly caps, seasonal operating ranges, readiness
//! modifiers, and session-type special rules.
//!
//! MICRO contact caps are independent table entries. For both youth brackets
//! and all return-to-play stages they happen to equal 70% of the FULL cap;
//! the adult MICRO cap (60) is a separate policy value and is not derived
//! from the adult FULL cap (120). The R2P stage values are provisional and
//! awaiting sign-off from the sports-medicine lead.

use serde::{Deserialize, Serialize};

use crate::models::{Band, ENode, Node, Population, Readiness, SeasonPhase, SessionType};

/// Session-level ceilings for a population, before readiness is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationCeiling {
    /// Contact cap for a full session
    pub full_contacts: u32,
    /// Contact cap for a micro-session
    pub micro_contacts: u32,
    /// True-sprint meter cap per session
    pub sprint_meters: u32,
    /// Highest permitted load band
    pub max_band: Band,
    /// Highest permitted movement node
    pub max_node: Node,
    /// Highest permitted E-node
    pub max_e_node: ENode,
}

impl PopulationCeiling {
    /// Contact cap for the given session type
    #[must_use]
    pub const fn contacts_for(&self, session_type: SessionType) -> u32 {
        match session_type {
            SessionType::Full => self.full_contacts,
            SessionType::Micro => self.micro_contacts,
        }
    }
}

const fn ceiling(
    full_contacts: u32,
    micro_contacts: u32,
    sprint_meters: u32,
    max_band: Band,
    max_node: Node,
    max_e_node: ENode,
) -> PopulationCeiling {
    PopulationCeiling {
        full_contacts,
        micro_contacts,
        sprint_meters,
        max_band,
        max_node,
        max_e_node,
    }
}

/// Base session ceilings for a population
#[must_use]
pub const fn population_ceiling(population: Population) -> PopulationCeiling {
    match population {
        Population::Youth8To12 => ceiling(80, 56, 150, Band::Band2, Node::N2, ENode::E2),
        Population::Youth13To17 => ceiling(100, 70, 200, Band::Band3, Node::N3, ENode::E4),
        Population::Adult => ceiling(120, 60, 250, Band::Band4, Node::N4, ENode::E4),
        Population::R2pStage1 => ceiling(0, 0, 0, Band::Band1, Node::N1, ENode::E0),
        Population::R2pStage2 => ceiling(40, 28, 0, Band::Band1, Node::N1, ENode::E1),
        Population::R2pStage3 => ceiling(60, 42, 100, Band::Band2, Node::N2, ENode::E2),
        Population::R2pStage4 => ceiling(80, 56, 150, Band::Band3, Node::N3, ENode::E3),
    }
}

/// Weekly ceilings for a population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCaps {
    /// Plyometric contacts per week
    pub plyo_contacts_per_week: u32,
    /// True-sprint meters per week
    pub sprint_meters_per_week: u32,
    /// Sessions containing any true sprinting, per week
    pub max_sprint_sessions_per_week: u32,
}

const fn weekly(contacts: u32, sprint_meters: u32, sprint_sessions: u32) -> WeeklyCaps {
    WeeklyCaps {
        plyo_contacts_per_week: contacts,
        sprint_meters_per_week: sprint_meters,
        max_sprint_sessions_per_week: sprint_sessions,
    }
}

/// Weekly caps for a population
#[must_use]
pub const fn weekly_caps(population: Population) -> WeeklyCaps {
    match population {
        Population::Youth8To12 => weekly(200, 400, 3),
        Population::Youth13To17 => weekly(240, 500, 3),
        Population::Adult => weekly(300, 600, 3),
        Population::R2pStage1 => weekly(0, 0, 0),
        Population::R2pStage2 => weekly(100, 0, 0),
        Population::R2pStage3 => weekly(150, 200, 1),
        Population::R2pStage4 => weekly(200, 400, 2),
    }
}

/// Weekly target range for a population in a season phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalRange {
    /// Minimum weekly plyometric contacts
    pub plyo_min: u32,
    /// Maximum weekly plyometric contacts
    pub plyo_max: u32,
    /// Minimum weekly true-sprint meters
    pub sprint_min: u32,
    /// Maximum weekly true-sprint meters
    pub sprint_max: u32,
}

const fn range(plyo_min: u32, plyo_max: u32, sprint_min: u32, sprint_max: u32) -> SeasonalRange {
    SeasonalRange {
        plyo_min,
        plyo_max,
        sprint_min,
        sprint_max,
    }
}

/// Seasonal operating range for a population and season phase
#[must_use]
pub const fn seasonal_range(population: Population, season: SeasonPhase) -> SeasonalRange {
    use SeasonPhase::{InSeasonTier1, InSeasonTier2, InSeasonTier3, OffSeason, PostSeason, PreSeason};

    match (population, season) {
        (Population::Youth8To12, OffSeason) => range(80, 160, 150, 300),
        (Population::Youth8To12, PreSeason) => range(120, 200, 200, 400),
        (Population::Youth8To12, InSeasonTier1) => range(40, 100, 100, 250),
        (Population::Youth8To12, InSeasonTier2) => range(60, 140, 150, 300),
        (Population::Youth8To12, InSeasonTier3) => range(80, 180, 200, 350),
        (Population::Youth8To12, PostSeason) => range(20, 80, 50, 150),

        (Population::Youth13To17, OffSeason) => range(120, 240, 200, 500),
        (Population::Youth13To17, PreSeason) => range(160, 240, 300, 500),
        (Population::Youth13To17, InSeasonTier1) => range(60, 140, 150, 300),
        (Population::Youth13To17, InSeasonTier2) => range(100, 180, 200, 400),
        (Population::Youth13To17, InSeasonTier3) => range(120, 220, 250, 450),
        (Population::Youth13To17, PostSeason) => range(40, 100, 100, 200),

        (Population::Adult, OffSeason) => range(150, 300, 250, 600),
        (Population::Adult, PreSeason) => range(200, 300, 400, 600),
        (Population::Adult, InSeasonTier1) => range(80, 180, 200, 400),
        (Population::Adult, InSeasonTier2) => range(120, 220, 300, 500),
        (Population::Adult, InSeasonTier3) => range(150, 270, 350, 550),
        (Population::Adult, PostSeason) => range(60, 120, 150, 300),

        (Population::R2pStage1, _) => range(0, 0, 0, 0),
        (Population::R2pStage2, _) => range(20, 80, 0, 0),
        (Population::R2pStage3, _) => range(40, 120, 50, 200),
        (Population::R2pStage4, _) => range(80, 180, 100, 350),
    }
}

/// Effect of a readiness state on session caps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessModifier {
    /// Percentage of the base caps that remain available (floor applied)
    pub volume_percent: u32,
    /// Absolute E-node clamp, if the state imposes one
    pub e_node_clamp: Option<ENode>,
}

impl ReadinessModifier {
    /// Scale a cap by this modifier, rounding down
    #[must_use]
    pub const fn apply(&self, cap: u32) -> u32 {
        // u64 keeps cap * 100 from overflowing
        ((cap as u64 * self.volume_percent as u64) / 100) as u32
    }

    /// Clamp a population E-node ceiling by this modifier
    #[must_use]
    pub fn clamp(&self, ceiling: ENode) -> ENode {
        self.e_node_clamp.map_or(ceiling, |clamp| ceiling.min(clamp))
    }
}

/// Readiness modifier table
#[must_use]
pub const fn readiness_modifier(readiness: Readiness) -> ReadinessModifier {
    match readiness {
        Readiness::Green => ReadinessModifier {
            volume_percent: 100,
            e_node_clamp: None,
        },
        Readiness::Yellow => ReadinessModifier {
            volume_percent: 75,
            e_node_clamp: Some(ENode::E2),
        },
        Readiness::Red => ReadinessModifier {
            volume_percent: 0,
            e_node_clamp: Some(ENode::E0),
        },
    }
}

/// E-nodes a season phase forbids outright, independent of population
#[must_use]
pub const fn season_forbidden_e_nodes(season: SeasonPhase) -> &'static [ENode] {
    match season {
        SeasonPhase::InSeasonTier1 => &[ENode::E3, ENode::E4],
        SeasonPhase::OffSeason
        | SeasonPhase::PreSeason
        | SeasonPhase::InSeasonTier2
        | SeasonPhase::InSeasonTier3
        | SeasonPhase::PostSeason => &[],
    }
}

/// Adult micro-session special rule
pub mod adult_microsession {
    use crate::models::ENode;

    /// Fixed contact cap; not derived from the adult full-session cap
    pub const MAX_CONTACTS: u32 = 60;
    /// E-nodes permitted in an adult micro-session
    pub const ALLOWED_E_NODES: [ENode; 2] = [ENode::E0, ENode::E1];
    /// Whether true sprinting is permitted
    pub const TRUE_SPRINTING_ALLOWED: bool = false;
}

/// Tier-3 (E3/E4) share limit
pub mod tier_3 {
    use crate::models::Population;

    /// Maximum share of session contacts from E3/E4 exercises, in percent
    pub const MAX_PERCENT: u64 = 40;
    /// The only population the share limit applies to
    pub const APPLIES_TO: Population = Population::Youth13To17;
}
