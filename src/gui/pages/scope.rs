// src/gui/pages/scope.rs
//
// Tab 3: scope-of-services checkboxes in two columns. The checkbox
// shows the section tag with its letter prefix stripped; the full task
// label rides on hover.

use eframe::egui;

use crate::config::state::PageKind;
use crate::proposal::catalog::{SCOPE_TASKS, section_label};

use super::{AppCtx, Page};

pub struct ScopePage;
pub static PAGE: ScopePage = ScopePage;

impl Page for ScopePage {
    fn title(&self) -> &'static str { "Scope of Services" }
    fn kind(&self) -> PageKind { PageKind::Scope }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        let scope = &mut ctx.state.proposal.scope;

        ui.columns(2, |cols| {
            for (idx, task) in SCOPE_TASKS.iter().enumerate() {
                let col = &mut cols[idx % 2];
                let checked = scope.task_ids.entry(s!(task.id)).or_insert(false);
                col.checkbox(checked, section_label(task.section))
                    .on_hover_text(task.label);
            }
        });

        ui.add_space(8.0);
        ui.label("Additional scope items (optional)");
        ui.add(
            egui::TextEdit::multiline(&mut scope.scope_other)
                .hint_text("Add any scope items not covered by the checkboxes.")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
    }
}
