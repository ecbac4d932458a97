// src/gui/pages/billing.rs
//
// Tab 5: fee schedule with per-task overrides and the hourly note.

use eframe::egui;

use crate::config::state::PageKind;
use crate::gui::components::fee_table;

use super::{AppCtx, Page};

pub struct BillingPage;
pub static PAGE: BillingPage = BillingPage;

impl Page for BillingPage {
    fn title(&self) -> &'static str { "Invoice & Billing" }
    fn kind(&self) -> PageKind { PageKind::Billing }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.heading("Fee Schedule");
        fee_table::draw(ui, &mut ctx.state.proposal);

        ui.add_space(8.0);
        ui.label("Hourly services note (optional)");
        ui.add(
            egui::TextEdit::multiline(&mut ctx.state.proposal.billing.hourly_note)
                .hint_text("Services beyond the tasks above are billed hourly per the attached rate schedule.")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
    }
}
