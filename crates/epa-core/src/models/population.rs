// ABOUTME: Athlete-side enumerations: population, season phase, readiness, and session type
// ABOUTME: Wire names match the request contract exactly (e.g. "Youth_13_17", "IN_SEASON_TIER_1")
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// Athlete population bracket
///
/// Two youth brackets, adults, and four return-to-play (R2P) stages. Every
/// limit table in [`crate::constants::load_standards`] is total over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Population {
    /// Athletes aged 8 to 12
    #[serde(rename = "Youth_8_12")]
    Youth8To12,
    /// Athletes aged 13 to 17
    #[serde(rename = "Youth_13_17")]
    Youth13To17,
    /// Adult athletes
    #[serde(rename = "Adult")]
    Adult,
    /// Return-to-play stage 1 (protected, no impact)
    #[serde(rename = "R2P_Stage_1")]
    R2pStage1,
    /// Return-to-play stage 2
    #[serde(rename = "R2P_Stage_2")]
    R2pStage2,
    /// Return-to-play stage 3
    #[serde(rename = "R2P_Stage_3")]
    R2pStage3,
    /// Return-to-play stage 4 (pre-clearance)
    #[serde(rename = "R2P_Stage_4")]
    R2pStage4,
}

impl Population {
    /// Every population, in table order
    pub const ALL: [Self; 7] = [
        Self::Youth8To12,
        Self::Youth13To17,
        Self::Adult,
        Self::R2pStage1,
        Self::R2pStage2,
        Self::R2pStage3,
        Self::R2pStage4,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Youth8To12 => "Youth_8_12",
            Self::Youth13To17 => "Youth_13_17",
            Self::Adult => "Adult",
            Self::R2pStage1 => "R2P_Stage_1",
            Self::R2pStage2 => "R2P_Stage_2",
            Self::R2pStage3 => "R2P_Stage_3",
            Self::R2pStage4 => "R2P_Stage_4",
        }
    }

    /// Parse from the wire representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Whether this is one of the two youth brackets
    #[must_use]
    pub const fn is_youth(&self) -> bool {
        matches!(self, Self::Youth8To12 | Self::Youth13To17)
    }

    /// Whether this is a return-to-play stage
    #[must_use]
    pub const fn is_return_to_play(&self) -> bool {
        matches!(
            self,
            Self::R2pStage1 | Self::R2pStage2 | Self::R2pStage3 | Self::R2pStage4
        )
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Population {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("population", s))
    }
}

/// Season phase of the athlete's competitive calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeasonPhase {
    /// Off-season development block
    OffSeason,
    /// Pre-season build-up
    PreSeason,
    /// In-season, most restrictive tier (dense fixtures)
    #[serde(rename = "IN_SEASON_TIER_1")]
    InSeasonTier1,
    /// In-season, intermediate tier
    #[serde(rename = "IN_SEASON_TIER_2")]
    InSeasonTier2,
    /// In-season, least restrictive tier
    #[serde(rename = "IN_SEASON_TIER_3")]
    InSeasonTier3,
    /// Post-season recovery
    PostSeason,
}

impl SeasonPhase {
    /// Every season phase
    pub const ALL: [Self; 6] = [
        Self::OffSeason,
        Self::PreSeason,
        Self::InSeasonTier1,
        Self::InSeasonTier2,
        Self::InSeasonTier3,
        Self::PostSeason,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OffSeason => "OFF_SEASON",
            Self::PreSeason => "PRE_SEASON",
            Self::InSeasonTier1 => "IN_SEASON_TIER_1",
            Self::InSeasonTier2 => "IN_SEASON_TIER_2",
            Self::InSeasonTier3 => "IN_SEASON_TIER_3",
            Self::PostSeason => "POST_SEASON",
        }
    }

    /// Parse from the wire representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Whether the phase is one of the in-season tiers
    #[must_use]
    pub const fn is_in_season(&self) -> bool {
        matches!(
            self,
            Self::InSeasonTier1 | Self::InSeasonTier2 | Self::InSeasonTier3
        )
    }
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonPhase {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("season phase", s))
    }
}

/// Daily athlete-reported readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Readiness {
    /// Fully recovered, no modification
    Green,
    /// Partially recovered: reduced volume, capped intensity tier
    Yellow,
    /// Not recovered: no impact or true sprint work
    Red,
}

impl Readiness {
    /// Every readiness state
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Red];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }

    /// Parse from the wire representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Readiness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("readiness flag", s))
    }
}

/// Kind of session being proposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SessionType {
    /// Full training session
    #[serde(rename = "FULL_SESSION")]
    Full,
    /// Short micro-session (10-25 minutes)
    #[serde(rename = "MICROSESSION")]
    Micro,
}

impl SessionType {
    /// Every session type
    pub const ALL: [Self; 2] = [Self::Full, Self::Micro];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "FULL_SESSION",
            Self::Micro => "MICROSESSION",
        }
    }

    /// Parse from the wire representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("session type", s))
    }
}
