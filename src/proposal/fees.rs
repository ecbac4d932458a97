// src/proposal/fees.rs
use crate::config::state::ProposalState;
use crate::core::sanitize::thousands;

use super::catalog::{CA_TASKS, SCOPE_TASKS};

/// One line of the fee schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeLine {
    pub id: &'static str,
    pub label: &'static str,
    pub amount: u64,
}

/// Whole dollars, `$` prefix, thousands separators.
pub fn format_usd(amount: u64) -> String {
    join!("$", &thousands(amount))
}

/// Base fee unless the billing tab carries an override for this task.
pub fn effective_fee(p: &ProposalState, id: &str, base: u64) -> u64 {
    p.billing.overrides.get(id).copied().unwrap_or(base)
}

/// Per-line schedule over every selected scope task and CA task, in
/// catalog order.
pub fn schedule(p: &ProposalState) -> Vec<FeeLine> {
    let mut lines = Vec::new();
    for t in SCOPE_TASKS {
        if p.task_selected(t.id) {
            lines.push(FeeLine {
                id: t.id,
                label: t.label,
                amount: effective_fee(p, t.id, t.fee),
            });
        }
    }
    for t in CA_TASKS {
        if p.ca_selected(t.id) {
            lines.push(FeeLine {
                id: t.id,
                label: t.label,
                amount: effective_fee(p, t.id, t.fee),
            });
        }
    }
    lines
}

/// Running grand total across the schedule.
pub fn total(p: &ProposalState) -> u64 {
    schedule(p).iter().map(|l| l.amount).sum()
}
