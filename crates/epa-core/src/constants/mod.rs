// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Load standards tables plus aggregation thresholds shared by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data, organized by domain. The load standards live in their own
//! module because every table there is keyed by the typed domain enums.

/// Load Standards v2.1.2 caps, ranges, and modifiers
pub mod load_standards;

pub use load_standards::{
    population_ceiling, readiness_modifier, season_forbidden_e_nodes, seasonal_range, weekly_caps,
    PopulationCeiling, ReadinessModifier, SeasonalRange, WeeklyCaps,
};

/// Session aggregation thresholds
pub mod aggregation {
    /// Minimum intensity (% of max velocity) for sprint meters to count
    pub const TRUE_SPRINT_MIN_PERCENT_VMAX: f64 = 90.0;

    /// Contacts at or above which a session is HIGH CNS load
    pub const CNS_HIGH_CONTACTS: u32 = 100;
    /// Sprint meters at or above which a session is HIGH CNS load
    pub const CNS_HIGH_SPRINT_METERS: f64 = 200.0;
    /// Contacts at or above which a session is MODERATE CNS load
    pub const CNS_MODERATE_CONTACTS: u32 = 50;
    /// Sprint meters at or above which a session is MODERATE CNS load
    pub const CNS_MODERATE_SPRINT_METERS: f64 = 100.0;
}

/// Gate identifiers and display names, in chain order
pub mod gates {
    /// Catalog metadata completeness
    pub const EXERCISE_LIBRARY_METADATA: &str = "Exercise_Library_Metadata";
    /// Population band and E-node ceilings
    pub const POPULATION_BAND_NODE_CEILING: &str = "Population_Band_Node_Ceiling";
    /// Season-specific exclusions
    pub const SEASON_FIXTURE_LEGALITY: &str = "Season_Fixture_Legality";
    /// Readiness-driven restrictions
    pub const READINESS_MODIFIERS: &str = "Readiness_Modifiers";
    /// Session-type rules and resolved session caps
    pub const SESSION_TYPE_RULES: &str = "Session_Type_Rules";
    /// Weekly cap projection
    pub const WEEKLY_CAPS_PROJECTION: &str = "Weekly_Caps_Projection";
    /// Tier-3 contact share
    pub const TIER_3_PERCENTAGE_CAP: &str = "Tier_3_Percentage_Cap";
}
