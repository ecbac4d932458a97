// src/gui/pages/understanding.rs
//
// Tab 2: short description, assumption checkboxes, and the
// auto-generated understanding paragraph.

use eframe::egui;

use crate::config::state::PageKind;
use crate::proposal::catalog::ASSUMPTIONS;
use crate::proposal::preview::understanding_paragraph;

use super::{AppCtx, Page};

pub struct UnderstandingPage;
pub static PAGE: UnderstandingPage = UnderstandingPage;

impl Page for UnderstandingPage {
    fn title(&self) -> &'static str { "Project Understanding" }
    fn kind(&self) -> PageKind { PageKind::Understanding }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        let project = &mut ctx.state.proposal.project;

        ui.label("Short project description");
        ui.add(
            egui::TextEdit::multiline(&mut project.description_short)
                .hint_text("Example: Client plans to develop …")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        ui.heading("Project Assumptions (check all that apply)");
        for a in ASSUMPTIONS {
            let checked = project
                .assumptions_checked
                .entry(s!(a.id))
                .or_insert(false);
            ui.checkbox(checked, a.text);
        }

        ui.add_space(8.0);
        ui.label("Additional assumptions / clarifications (optional)");
        ui.add(
            egui::TextEdit::multiline(&mut project.assumptions_other)
                .hint_text("Enter any additional assumptions, exclusions, phasing notes, etc.")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        ui.heading("Project Understanding (auto-generated)");
        let paragraph = understanding_paragraph(&ctx.state.proposal);
        let mut shown = if paragraph.is_empty() {
            "Enter project details on the intake tab and the short description above to generate this paragraph."
        } else {
            paragraph.as_str()
        };
        ui.add(
            egui::TextEdit::multiline(&mut shown)
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .interactive(false),
        );
    }
}
