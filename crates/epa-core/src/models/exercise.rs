// ABOUTME: Exercise catalog record and the ordinal tiers it is classified by
// ABOUTME: Band (load intensity), Node (pattern complexity), and E-node (impact difficulty)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Records
//!
//! Catalog entries are immutable once loaded. The three tiers are ordinal
//! enums so ceilings can be compared with `>`; the derive order of the
//! variants is the ordinal order.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Population;
use crate::errors::ParseError;

/// Load-intensity tier (0-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    /// Bodyweight
    #[serde(rename = "Band_0")]
    Band0,
    /// Light (60-70% 1RM)
    #[serde(rename = "Band_1")]
    Band1,
    /// Moderate (70-80% 1RM)
    #[serde(rename = "Band_2")]
    Band2,
    /// Heavy (80-90% 1RM)
    #[serde(rename = "Band_3")]
    Band3,
    /// Maximal (90-100% 1RM)
    #[serde(rename = "Band_4")]
    Band4,
}

impl Band {
    /// Every band, lowest first
    pub const ALL: [Self; 5] = [Self::Band0, Self::Band1, Self::Band2, Self::Band3, Self::Band4];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Band0 => "Band_0",
            Self::Band1 => "Band_1",
            Self::Band2 => "Band_2",
            Self::Band3 => "Band_3",
            Self::Band4 => "Band_4",
        }
    }

    /// Parse from the wire representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == s)
    }

    /// Coaching description of the load this band implies
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Band0 => "Bodyweight",
            Self::Band1 => "Light (60-70% 1RM)",
            Self::Band2 => "Moderate (70-80% 1RM)",
            Self::Band3 => "Heavy (80-90% 1RM)",
            Self::Band4 => "Max (90-100% 1RM)",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Band {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("band", s))
    }
}

/// Movement-complexity node (0-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Node {
    /// N0
    N0,
    /// N1
    N1,
    /// N2
    N2,
    /// N3
    N3,
    /// N4
    N4,
}

impl Node {
    /// Every node, lowest first
    pub const ALL: [Self; 5] = [Self::N0, Self::N1, Self::N2, Self::N3, Self::N4];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::N0 => "N0",
            Self::N1 => "N1",
            Self::N2 => "N2",
            Self::N3 => "N3",
            Self::N4 => "N4",
        }
    }

    /// Parse a node name, accepting the catalog's letter aliases `A`..`D`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Self::N1),
            "B" => Some(Self::N2),
            "C" => Some(Self::N3),
            "D" => Some(Self::N4),
            other => Self::ALL.into_iter().find(|n| n.as_str() == other),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Node {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("node", s))
    }
}

/// Impact-difficulty tier (0-4), used for plyometric gating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ENode {
    /// E0
    E0,
    /// E1
    E1,
    /// E2
    E2,
    /// E3
    E3,
    /// E4
    E4,
}

impl ENode {
    /// Every E-node, lowest first
    pub const ALL: [Self; 5] = [Self::E0, Self::E1, Self::E2, Self::E3, Self::E4];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::E0 => "E0",
            Self::E1 => "E1",
            Self::E2 => "E2",
            Self::E3 => "E3",
            Self::E4 => "E4",
        }
    }

    /// Parse an exact E-node name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == s)
    }

    /// Extract the E-node from a catalog difficulty label such as `E2-Reactive`
    #[must_use]
    pub fn from_difficulty(label: &str) -> Option<Self> {
        label.get(..2).and_then(Self::parse)
    }

    /// Whether this is one of the two highest tiers (E3, E4)
    #[must_use]
    pub const fn is_tier_3(&self) -> bool {
        matches!(self, Self::E3 | Self::E4)
    }
}

impl fmt::Display for ENode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ENode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("E-node", s))
    }
}

/// One entry of the exercise catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Stable catalog identifier
    pub exercise_id: String,
    /// Display name
    pub exercise_name: String,
    /// Movement classification (e.g. "Jump", "Hinge")
    pub movement_pattern: String,
    /// Load-intensity tier
    pub band: Band,
    /// Movement-complexity node, when classified
    pub node: Option<Node>,
    /// Impact-difficulty tier, when classified
    pub e_node: Option<ENode>,
    /// Ground contacts per repetition
    pub contacts_per_rep: Option<f64>,
    /// Whether repetitions count as plyometric ground contacts
    pub is_plyometric: bool,
    /// Whether the exercise is a sprint drill
    pub is_sprint: bool,
    /// Populations for which the exercise must not be prescribed
    pub contraindicated_populations: BTreeSet<Population>,
    /// Injury flags (uppercase) for which the exercise must not be prescribed
    pub contraindicated_flags: BTreeSet<String>,
}

impl ExerciseRecord {
    /// Create a non-plyometric, non-sprint record with no contraindications
    #[must_use]
    pub fn new(exercise_id: impl Into<String>, exercise_name: impl Into<String>, band: Band) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            exercise_name: exercise_name.into(),
            movement_pattern: String::new(),
            band,
            node: None,
            e_node: None,
            contacts_per_rep: None,
            is_plyometric: false,
            is_sprint: false,
            contraindicated_populations: BTreeSet::new(),
            contraindicated_flags: BTreeSet::new(),
        }
    }

    /// Set the movement pattern
    #[must_use]
    pub fn with_movement_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.movement_pattern = pattern.into();
        self
    }

    /// Set the movement-complexity node
    #[must_use]
    pub const fn with_node(mut self, node: Node) -> Self {
        self.node = Some(node);
        self
    }

    /// Set the impact-difficulty tier
    #[must_use]
    pub const fn with_e_node(mut self, e_node: ENode) -> Self {
        self.e_node = Some(e_node);
        self
    }

    /// Mark as plyometric with the given contacts-per-rep rate
    #[must_use]
    pub const fn plyometric(mut self, contacts_per_rep: f64) -> Self {
        self.contacts_per_rep = Some(contacts_per_rep);
        self.is_plyometric = true;
        self
    }

    /// Mark as plyometric without a contact rate (incomplete metadata)
    #[must_use]
    pub const fn plyometric_without_rate(mut self) -> Self {
        self.contacts_per_rep = None;
        self.is_plyometric = true;
        self
    }

    /// Mark as a sprint drill
    #[must_use]
    pub const fn sprint(mut self) -> Self {
        self.is_sprint = true;
        self
    }

    /// Add a contraindicated population
    #[must_use]
    pub fn contraindicated_for(mut self, population: Population) -> Self {
        self.contraindicated_populations.insert(population);
        self
    }

    /// Add a contraindicated injury flag (stored uppercase)
    #[must_use]
    pub fn contraindicated_with_flag(mut self, flag: &str) -> Self {
        self.contraindicated_flags.insert(flag.trim().to_ascii_uppercase());
        self
    }

    /// Contact rate usable for counting, if this record produces contacts
    ///
    /// Non-plyometric records, and plyometric records missing a positive rate,
    /// yield `None`.
    #[must_use]
    pub fn effective_contact_rate(&self) -> Option<f64> {
        if !self.is_plyometric {
            return None;
        }
        self.contacts_per_rep.filter(|rate| *rate > 0.0)
    }
}
