// ABOUTME: Intent authorization matrix for the request-routing layer
// ABOUTME: Static intent-to-roles mapping with explicit default deny for unknown roles and intents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intent Authorization
//!
//! The routing layer in front of the decision engine checks that a caller's
//! role may issue a given intent. The mapping is an exhaustive `match` over
//! [`Intent`]; string-level lookups that fail to parse a role or an intent
//! return an explicit [`AuthorizationVerdict::Denied`] naming the cause.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// Caller role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Coach
    Coach,
    /// Senior coach
    SeniorCoach,
    /// Medical provider (physio, physician)
    MedicalProvider,
    /// Platform administrator
    Admin,
    /// Quality assurance
    QA,
    /// Automated system caller
    System,
}

impl Role {
    /// Every role
    pub const ALL: [Self; 6] = [
        Self::Coach,
        Self::SeniorCoach,
        Self::MedicalProvider,
        Self::Admin,
        Self::QA,
        Self::System,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coach => "Coach",
            Self::SeniorCoach => "SeniorCoach",
            Self::MedicalProvider => "MedicalProvider",
            Self::Admin => "Admin",
            Self::QA => "QA",
            Self::System => "System",
        }
    }

    /// Parse from the wire representation (exact match)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// The single-role set for this role
    #[must_use]
    pub const fn as_set(&self) -> RoleSet {
        match self {
            Self::Coach => RoleSet::COACH,
            Self::SeniorCoach => RoleSet::SENIOR_COACH,
            Self::MedicalProvider => RoleSet::MEDICAL_PROVIDER,
            Self::Admin => RoleSet::ADMIN,
            Self::QA => RoleSet::QA,
            Self::System => RoleSet::SYSTEM,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("role", s))
    }
}

bitflags! {
    /// Set of roles permitted to issue an intent
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RoleSet: u8 {
        /// Coach
        const COACH = 0b0000_0001;
        /// Senior coach
        const SENIOR_COACH = 0b0000_0010;
        /// Medical provider
        const MEDICAL_PROVIDER = 0b0000_0100;
        /// Administrator
        const ADMIN = 0b0000_1000;
        /// Quality assurance
        const QA = 0b0001_0000;
        /// Automated system caller
        const SYSTEM = 0b0010_0000;
    }
}

impl RoleSet {
    /// Whether `role` is in this set
    #[must_use]
    pub const fn permits(self, role: Role) -> bool {
        self.contains(role.as_set())
    }

    /// Roles in this set, in declaration order
    #[must_use]
    pub fn roles(self) -> Vec<Role> {
        Role::ALL.into_iter().filter(|r| self.permits(*r)).collect()
    }
}

/// Request intent routed to the governance layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Generate a single session
    RequestSessionGeneration,
    /// Generate a mesocycle
    RequestMesocycleGeneration,
    /// Submit a hand-written program for validation
    SubmitManualProgram,
    /// Request a return-to-play stage override
    RequestOverrideStage,
    /// Approve a pending override
    ApproveOverride,
    /// Request a cap override
    RequestOverrideCap,
    /// Deploy a new generator version
    DeployGeneratorVersion,
    /// Update the project specification
    UpdateProjectSpec,
    /// Update an artifact schema
    UpdateArtifactSchema,
    /// Query artifact history
    QueryArtifactHistory,
    /// Query recorded violations
    QueryViolations,
    /// Generate a compliance report
    GenerateComplianceReport,
}

impl Intent {
    /// Every intent
    pub const ALL: [Self; 12] = [
        Self::RequestSessionGeneration,
        Self::RequestMesocycleGeneration,
        Self::SubmitManualProgram,
        Self::RequestOverrideStage,
        Self::ApproveOverride,
        Self::RequestOverrideCap,
        Self::DeployGeneratorVersion,
        Self::UpdateProjectSpec,
        Self::UpdateArtifactSchema,
        Self::QueryArtifactHistory,
        Self::QueryViolations,
        Self::GenerateComplianceReport,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RequestSessionGeneration => "REQUEST_SESSION_GENERATION",
            Self::RequestMesocycleGeneration => "REQUEST_MESOCYCLE_GENERATION",
            Self::SubmitManualProgram => "SUBMIT_MANUAL_PROGRAM",
            Self::RequestOverrideStage => "REQUEST_OVERRIDE_STAGE",
            Self::ApproveOverride => "APPROVE_OVERRIDE",
            Self::RequestOverrideCap => "REQUEST_OVERRIDE_CAP",
            Self::DeployGeneratorVersion => "DEPLOY_GENERATOR_VERSION",
            Self::UpdateProjectSpec => "UPDATE_PROJECT_SPEC",
            Self::UpdateArtifactSchema => "UPDATE_ARTIFACT_SCHEMA",
            Self::QueryArtifactHistory => "QUERY_ARTIFACT_HISTORY",
            Self::QueryViolations => "QUERY_VIOLATIONS",
            Self::GenerateComplianceReport => "GENERATE_COMPLIANCE_REPORT",
        }
    }

    /// Parse from the wire representation (exact match)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == s)
    }

    /// Roles permitted to issue this intent
    #[must_use]
    pub const fn allowed_roles(&self) -> RoleSet {
        match self {
            Self::RequestSessionGeneration => RoleSet::COACH
                .union(RoleSet::SENIOR_COACH)
                .union(RoleSet::ADMIN)
                .union(RoleSet::SYSTEM),
            Self::RequestMesocycleGeneration | Self::RequestOverrideCap => {
                RoleSet::SENIOR_COACH.union(RoleSet::ADMIN)
            }
            Self::SubmitManualProgram => RoleSet::COACH
                .union(RoleSet::SENIOR_COACH)
                .union(RoleSet::MEDICAL_PROVIDER)
                .union(RoleSet::ADMIN),
            Self::RequestOverrideStage | Self::ApproveOverride => RoleSet::SENIOR_COACH
                .union(RoleSet::MEDICAL_PROVIDER)
                .union(RoleSet::ADMIN),
            Self::DeployGeneratorVersion
            | Self::UpdateProjectSpec
            | Self::UpdateArtifactSchema
            | Self::GenerateComplianceReport => RoleSet::ADMIN,
            Self::QueryArtifactHistory => RoleSet::COACH
                .union(RoleSet::SENIOR_COACH)
                .union(RoleSet::MEDICAL_PROVIDER)
                .union(RoleSet::ADMIN)
                .union(RoleSet::QA),
            Self::QueryViolations => RoleSet::ADMIN.union(RoleSet::QA),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::unknown("intent", s))
    }
}

/// Why an authorization check was denied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "cause", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenialCause {
    /// The role string is not a known role
    UnknownRole {
        /// Offending role string
        role: String,
    },
    /// The intent string is not a known intent
    UnknownIntent {
        /// Offending intent string
        intent: String,
    },
    /// Both are known but the role is not permitted
    RoleNotPermitted {
        /// Role that was checked
        role: Role,
        /// Intent that was checked
        intent: Intent,
    },
}

/// Outcome of an authorization check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationVerdict {
    /// The role may issue the intent
    Allowed,
    /// The role may not issue the intent
    Denied(DenialCause),
}

impl AuthorizationVerdict {
    /// Whether the verdict is `Allowed`
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Typed authorization check
#[must_use]
pub const fn authorize(role: Role, intent: Intent) -> AuthorizationVerdict {
    if intent.allowed_roles().permits(role) {
        AuthorizationVerdict::Allowed
    } else {
        AuthorizationVerdict::Denied(DenialCause::RoleNotPermitted { role, intent })
    }
}

/// String-level authorization check with explicit default deny
///
/// Unknown roles and unknown intents are denied with a cause naming which
/// side failed to parse. Role is checked first.
#[must_use]
pub fn is_authorized(role: &str, intent: &str) -> AuthorizationVerdict {
    let Some(role) = Role::parse(role) else {
        return AuthorizationVerdict::Denied(DenialCause::UnknownRole {
            role: role.to_owned(),
        });
    };
    let Some(intent) = Intent::parse(intent) else {
        return AuthorizationVerdict::Denied(DenialCause::UnknownIntent {
            intent: intent.to_owned(),
        });
    };
    authorize(role, intent)
}
