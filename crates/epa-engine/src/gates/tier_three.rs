// ABOUTME: Gate 6, share of session contacts coming from E3 and E4 exercises
// ABOUTME: Applies to Youth 13-17 only and skips zero-contact sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use epa_core::constants::load_standards::tier_3;

use super::{Gate, GateContext, GateId, GateOutcome, ReasonCode, SkipReason, Violation};

/// E3/E4 contacts make up at most 40% of session contacts
pub struct TierThreeGate;

impl Gate for TierThreeGate {
    fn id(&self) -> GateId {
        GateId::TierThreePercentage
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateOutcome {
        if ctx.client.population != tier_3::APPLIES_TO {
            return GateOutcome::Skip(SkipReason::PopulationNotApplicable);
        }
        let total = u64::from(ctx.totals.total_contacts);
        if total == 0 {
            return GateOutcome::Skip(SkipReason::NoContacts);
        }

        let tier_3_contacts = ctx.totals.tier_3_contacts();
        // integer form of tier_3 / total > 40%
        if tier_3_contacts * 100 > tier_3::MAX_PERCENT * total {
            return GateOutcome::Fail(vec![Violation::new(ReasonCode::Tier3PercentageExceeded)
                .with_values(
                    format!("{tier_3_contacts}/{total}"),
                    format!("{}%", tier_3::MAX_PERCENT),
                )]);
        }
        GateOutcome::Pass
    }
}
