// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::app::App;
use crate::proposal::fees;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        if app.running() {
            ui.add(egui::Spinner::new());
        }
        let status = app.status.lock().unwrap().clone();
        ui.label(status);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "Fee total: {}",
                fees::format_usd(fees::total(&app.state.proposal))
            ));
        });
    });
}
