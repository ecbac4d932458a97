// src/gui/components/fee_table.rs
//
// Fee schedule table for the billing tab. Each selected task gets an
// editable fee cell; editing away from the base fee records an
// override, editing back to it clears the override again.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::config::state::ProposalState;
use crate::proposal::catalog::{CA_TASKS, SCOPE_TASKS};
use crate::proposal::fees::{self, format_usd};

struct FeeRow {
    id: &'static str,
    label: &'static str,
    base: u64,
}

fn selected_rows(p: &ProposalState) -> Vec<FeeRow> {
    let mut rows = Vec::new();
    for t in SCOPE_TASKS {
        if p.task_selected(t.id) {
            rows.push(FeeRow { id: t.id, label: t.label, base: t.fee });
        }
    }
    for t in CA_TASKS {
        if p.ca_selected(t.id) {
            rows.push(FeeRow { id: t.id, label: t.label, base: t.fee });
        }
    }
    rows
}

pub fn draw(ui: &mut egui::Ui, p: &mut ProposalState) {
    let rows = selected_rows(p);
    if rows.is_empty() {
        ui.label("No fee-bearing tasks selected yet. Check tasks on the Scope of Services and Permitting tabs.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(280.0))
        .column(Column::exact(90.0))
        .column(Column::exact(110.0))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("Task"); });
            header.col(|ui| { ui.strong("Base"); });
            header.col(|ui| { ui.strong("Fee"); });
        })
        .body(|mut body| {
            for row in &rows {
                body.row(24.0, |mut table_row| {
                    table_row.col(|ui| { ui.label(row.label); });
                    table_row.col(|ui| { ui.label(format_usd(row.base)); });
                    table_row.col(|ui| {
                        let mut fee = fees::effective_fee(p, row.id, row.base);
                        let changed = ui
                            .add(
                                egui::DragValue::new(&mut fee)
                                    .prefix("$")
                                    .speed(100)
                                    .range(0..=10_000_000),
                            )
                            .changed();
                        if changed {
                            if fee == row.base {
                                p.billing.overrides.remove(row.id);
                            } else {
                                p.billing.overrides.insert(s!(row.id), fee);
                            }
                        }
                    });
                });
            }
        });

    ui.separator();
    ui.strong(format!("Total — {}", format_usd(fees::total(p))));
}
