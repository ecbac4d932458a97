// src/gui/pages/permitting.rs
//
// Tab 4: Task 107 permits, Tasks 108–110, and the full text preview.
// Permitting itself is not a checkbox; the permit list is.

use eframe::egui;

use crate::config::state::PageKind;
use crate::proposal::catalog::{CA_TASKS, PERMITS};
use crate::proposal::preview;

use super::{AppCtx, Page};

pub struct PermittingPage;
pub static PAGE: PermittingPage = PermittingPage;

impl Page for PermittingPage {
    fn title(&self) -> &'static str { "Permitting & Summary" }
    fn kind(&self) -> PageKind { PageKind::Permitting }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.heading("Task 107 — Permitting");
        let permits = &mut ctx.state.proposal.permits;
        for p in PERMITS {
            let checked = permits.permit_ids.entry(s!(p.id)).or_insert(false);
            ui.checkbox(checked, p.label);
        }

        ui.label("Additional permits (optional)");
        ui.add(
            egui::TextEdit::multiline(&mut permits.permit_other)
                .hint_text("List any additional permits/approvals required (one per line if possible).")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.separator();

        ui.heading("Tasks 108–110");
        let ca = &mut ctx.state.proposal.ca_tasks;
        for t in CA_TASKS {
            let checked = ca.task_ids.entry(s!(t.id)).or_insert(false);
            ui.checkbox(checked, t.label);
        }

        ui.separator();

        ui.heading("Preview");
        let rendered = preview::render(&ctx.state.proposal);
        let mut shown = rendered.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut shown)
                .font(egui::TextStyle::Monospace)
                .desired_rows(18)
                .desired_width(f32::INFINITY),
        );
    }
}
