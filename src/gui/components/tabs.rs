// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. All form
// state lives in AppState, so switching tabs is just an index change;
// nothing is saved or reloaded.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                tracing::debug!(from = cur, to = idx, "tab switch");
                app.set_current_index(idx);
            }
        }
    });
}
