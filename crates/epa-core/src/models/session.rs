// ABOUTME: Proposed session structure: ordered blocks of exercise instances
// ABOUTME: Supplied by the caller and never mutated; defaults mirror the session builder's wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default block duration when the caller does not give one
pub const DEFAULT_BLOCK_MINUTES: u32 = 20;

/// Default rest between sets
pub const DEFAULT_REST_SECONDS: u32 = 60;

/// Default load prescription
pub const DEFAULT_LOAD: &str = "Bodyweight";

/// Role of a block within the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockType {
    /// Mobility, activation, breathing
    Prime,
    /// Pattern rehearsal
    Prep,
    /// Main training content
    #[default]
    Work,
    /// Cool-down and recovery
    Clear,
}

impl BlockType {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prime => "PRIME",
            Self::Prep => "PREP",
            Self::Work => "WORK",
            Self::Clear => "CLEAR",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_block_minutes() -> u32 {
    DEFAULT_BLOCK_MINUTES
}

const fn default_rest_seconds() -> u32 {
    DEFAULT_REST_SECONDS
}

fn default_load() -> String {
    DEFAULT_LOAD.to_owned()
}

/// One prescribed exercise inside a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInstance {
    /// Catalog identifier this instance refers to
    pub exercise_id: String,
    /// Display name override; falls back to the catalog name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Rest between sets
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,
    /// Load prescription (free text)
    #[serde(default = "default_load")]
    pub load: String,
    /// Target rate of perceived exertion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe_target: Option<f64>,
    /// Coaching cues
    #[serde(default)]
    pub coaching_cues: Vec<String>,
    /// Distance per repetition in meters (sprint drills)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    /// Intensity as a percentage of maximal velocity (sprint drills)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_percent_vmax: Option<f64>,
}

impl ExerciseInstance {
    /// Create an instance with wire defaults for everything but sets and reps
    #[must_use]
    pub fn new(exercise_id: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            exercise_name: None,
            sets,
            reps,
            rest_seconds: DEFAULT_REST_SECONDS,
            load: default_load(),
            rpe_target: None,
            coaching_cues: Vec::new(),
            distance_m: None,
            intensity_percent_vmax: None,
        }
    }

    /// Attach sprint distance and intensity
    #[must_use]
    pub const fn with_sprint(mut self, distance_m: f64, intensity_percent_vmax: f64) -> Self {
        self.distance_m = Some(distance_m);
        self.intensity_percent_vmax = Some(intensity_percent_vmax);
        self
    }

    /// Total repetitions across all sets
    #[must_use]
    pub const fn total_reps(&self) -> u64 {
        self.sets as u64 * self.reps as u64
    }
}

/// An ordered group of exercise instances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionBlock {
    /// Block role
    #[serde(default)]
    pub name: BlockType,
    /// Planned duration of the block
    #[serde(default = "default_block_minutes")]
    pub duration_minutes_target: u32,
    /// Exercises in prescription order
    #[serde(default)]
    pub items: Vec<ExerciseInstance>,
}

impl SessionBlock {
    /// Create an empty block with the default duration
    #[must_use]
    pub const fn new(name: BlockType) -> Self {
        Self {
            name,
            duration_minutes_target: DEFAULT_BLOCK_MINUTES,
            items: Vec::new(),
        }
    }

    /// Append an exercise
    #[must_use]
    pub fn with_item(mut self, item: ExerciseInstance) -> Self {
        self.items.push(item);
        self
    }
}

/// The session under evaluation, as an ordered list of blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposedSession {
    /// Blocks in session order
    pub blocks: Vec<SessionBlock>,
}

impl ProposedSession {
    /// Wrap a list of blocks
    #[must_use]
    pub const fn new(blocks: Vec<SessionBlock>) -> Self {
        Self { blocks }
    }

    /// Every exercise instance in session order
    pub fn items(&self) -> impl Iterator<Item = &ExerciseInstance> {
        self.blocks.iter().flat_map(|block| block.items.iter())
    }

    /// Sum of block durations
    #[must_use]
    pub fn total_duration_minutes(&self) -> u32 {
        self.blocks
            .iter()
            .map(|block| block.duration_minutes_target)
            .sum()
    }
}
