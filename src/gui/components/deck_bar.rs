// src/gui/components/deck_bar.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{app::App, jobs};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    ui.horizontal(|ui| {
        ui.label("Deck:");

        let before = app.state.gui.selected_deck.clone();
        let shown = before.as_deref().unwrap_or("—");
        ui.add_enabled_ui(!app.running && !app.decks.is_empty(), |ui| {
            egui::ComboBox::from_id_salt("deck_combo")
                .selected_text(shown)
                .width(220.0)
                .show_ui(ui, |ui| {
                    for name in &app.decks {
                        ui.selectable_value(&mut app.state.gui.selected_deck, Some(name.clone()), name);
                    }
                });
        });

        if app.state.gui.selected_deck != before {
            if let Some(deck) = app.state.gui.selected_deck.clone() {
                logf!("UI: deck → {deck}");
                jobs::select_class(app, &deck);
                jobs::analyze(app, ctx);
            }
        }

        let can_analyze = !app.running && app.state.gui.selected_deck.is_some();
        if ui.add_enabled(can_analyze, egui::Button::new("Analyze")).clicked() {
            jobs::analyze(app, ctx);
        }

        ui.separator();
        if app.running {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());
    });
}
