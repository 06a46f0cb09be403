pub mod air_filter;
pub mod brake_fluid;
pub mod brakes;
pub mod cabin_filter;
pub mod intake_pcv;
pub mod oil_service;
pub mod predicates;
pub mod spark_plugs;
pub mod transmission;

use crate::{
    engine::{AdviceItem, Urgency},
    history::MaintenanceEvent,
    vehicle::VehicleState,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Read-only context passed to every rule condition.
pub struct RuleContext<'a> {
    pub vehicle: &'a VehicleState,
    pub history: &'a [MaintenanceEvent],
    /// Captured once per evaluation so all rules agree on "now".
    pub today:   NaiveDate,
}

/// Fixed advice a rule emits when its condition holds.
#[derive(Debug)]
pub struct AdvicePayload {
    pub category:       &'static str,
    pub recommendation: &'static str,
    pub urgency:        Urgency,
    pub rationale:      Option<&'static str>,
    pub estimated_cost: u32,
}

impl AdvicePayload {
    pub fn to_advice(&self) -> AdviceItem {
        AdviceItem {
            category:       self.category.to_owned(),
            recommendation: self.recommendation.to_owned(),
            urgency:        self.urgency,
            rationale:      self.rationale.map(str::to_owned),
            estimated_cost: self.estimated_cost,
        }
    }
}

/// A rule is a condition plus the advice it yields. Rules never see each
/// other's output.
pub struct Rule {
    pub key:     &'static str,
    pub advice:  &'static AdvicePayload,
    pub applies: fn(&RuleContext) -> bool,
}

impl Rule {
    pub fn evaluate(&self, ctx: &RuleContext) -> Option<AdviceItem> {
        (self.applies)(ctx).then(|| self.advice.to_advice())
    }
}

// ---------------------------------------------------------------------------
// Rule table. Order here is the order of the advice list.
// ---------------------------------------------------------------------------

pub static RULES: [Rule; 8] = [
    Rule { key: oil_service::KEY,  advice: &oil_service::ADVICE,  applies: oil_service::applies },
    Rule { key: spark_plugs::KEY,  advice: &spark_plugs::ADVICE,  applies: spark_plugs::applies },
    Rule { key: brakes::KEY,       advice: &brakes::ADVICE,       applies: brakes::applies },
    Rule { key: air_filter::KEY,   advice: &air_filter::ADVICE,   applies: air_filter::applies },
    Rule { key: cabin_filter::KEY, advice: &cabin_filter::ADVICE, applies: cabin_filter::applies },
    Rule { key: transmission::KEY, advice: &transmission::ADVICE, applies: transmission::applies },
    Rule { key: brake_fluid::KEY,  advice: &brake_fluid::ADVICE,  applies: brake_fluid::applies },
    Rule { key: intake_pcv::KEY,   advice: &intake_pcv::ADVICE,   applies: intake_pcv::applies },
];

/// Lightweight rule descriptor for listing the rule set.
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub key:            &'static str,
    pub category:       &'static str,
    pub urgency:        Urgency,
    pub estimated_cost: u32,
}

pub fn catalog() -> Vec<RuleInfo> {
    RULES
        .iter()
        .map(|r| RuleInfo {
            key:            r.key,
            category:       r.advice.category,
            urgency:        r.advice.urgency,
            estimated_cost: r.advice.estimated_cost,
        })
        .collect()
}
