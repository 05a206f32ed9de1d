// src/gui/components/code_bar.rs

use eframe::egui;

use crate::{config::options::ExportFormat, gui::app::App, store};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat {
    Csv,
    Tsv,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Deck total + share code ---
    ui.horizontal(|ui| {
        ui.strong(app.editor.total_label());
        if ui
            .add_enabled(!app.editor.is_empty(), egui::Button::new("Reset"))
            .clicked()
        {
            app.editor.reset();
            app.deck_code.clear();
            logf!("UI: edits reset");
        }

        ui.separator();
        ui.label("Class:");
        ui.add(egui::DragValue::new(&mut app.state.gui.class_id).range(1..=7));

        let can_build = !app.editor.is_empty() && app.session.is_some();
        if ui.add_enabled(can_build, egui::Button::new("Deck code")).clicked() {
            build_code(app);
        }

        ui.add(
            egui::TextEdit::singleline(&mut app.deck_code)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
    });

    // --- Format + headers + output path ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.label("Format:");
        ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
        ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Copy / Export ---
    ui.horizontal(|ui| {
        let has_rows = !app.editor.is_empty();

        if ui.add_enabled(!app.deck_code.is_empty(), egui::Button::new("Copy code")).clicked() {
            ui.ctx().copy_text(app.deck_code.clone());
            app.status("Deck code copied");
        }

        if ui.add_enabled(has_rows, egui::Button::new("Copy table")).clicked() {
            match store::results_text(&app.editor.results()) {
                Ok(txt) => {
                    logf!("Copy: rows={}", app.editor.len() + 1);
                    ui.ctx().copy_text(txt);
                    app.status("Copied to clipboard");
                }
                Err(e) => {
                    loge!("Copy: {e}");
                    app.status(format!("Copy error: {e}"));
                }
            }
        }

        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            if app.out_path_dirty {
                app.state.options.export.set_path(&app.out_path_text);
                logf!(
                    "Export: Out path set → {}",
                    app.state.options.export.out_path().display()
                );
                app.out_path_dirty = false;
            }

            match store::export_results(&app.editor.results(), &app.state.options.export) {
                Ok(path) => {
                    logf!("Export: OK {}", path.display());
                    app.status(format!("Exported to {}", path.display()));
                }
                Err(e) => {
                    loge!("Export: Error: {e}");
                    app.status(format!("Export error: {e}"));
                }
            }
        }
    });
}

fn build_code(app: &mut App) {
    let Some(session) = app.session.as_ref() else { return };
    let names = app.editor.card_names();
    match session.build_deck_code(&names, app.state.gui.class_id) {
        Ok(url) => {
            logf!("Deck code: {} cards, class {}", names.len(), app.state.gui.class_id);
            app.deck_code = url;
            app.status("Deck code ready");
        }
        Err(e) => {
            logw!("Deck code: {e}");
            app.deck_code.clear();
            app.status(format!("Deck code error: {e}"));
        }
    }
}
