// src/gui/components/data_table.rs
//
// Draws the editor table. Header clicks sort, −/+ trade copies between
// cards. Purely a view; edits are applied after the table is drawn.

use eframe::egui::{self, Align, Color32, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::analysis::{Change, SortKey};
use crate::gui::app::App;

const INCREASED: Color32 = Color32::from_rgb(0x6C, 0xC4, 0x6C);
const DECREASED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

enum Col {
    Sort(SortKey),
    Slot,
}

const COLUMNS: [(Col, f32); 7] = [
    (Col::Sort(SortKey::Name), 220.0),
    (Col::Sort(SortKey::Average), 60.0),
    (Col::Slot, 60.0),
    (Col::Sort(SortKey::Recommended), 50.0),
    (Col::Sort(SortKey::Current), 90.0),
    (Col::Sort(SortKey::Removability), 50.0),
    (Col::Sort(SortKey::Addability), 50.0),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.editor.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(if app.running { "Working…" } else { "Pick a post and a deck." });
        });
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let order: Vec<usize> = match app.state.gui.sort {
        Some((key, asc)) => app.editor.sorted_order(key, asc),
        None => (0..app.editor.len()).collect(),
    };

    let mut sort_clicked: Option<SortKey> = None;
    let mut edit: Option<(usize, bool)> = None; // (card, increase?)
    let current_sort = app.state.gui.sort;
    let editor = &app.editor;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for (_, w) in &COLUMNS {
        table = table.column(Column::initial(*w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (col, _) in &COLUMNS {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    match col {
                        Col::Slot => {
                            ui.label(RichText::new("슬롯").strong());
                        }
                        Col::Sort(key) => {
                            let arrow = match current_sort {
                                Some((k, true)) if k == *key => " ▲",
                                Some((k, false)) if k == *key => " ▼",
                                _ => "",
                            };
                            let text = RichText::new(format!("{}{arrow}", key.title())).strong();
                            let resp = ui.add(egui::Label::new(text).sense(Sense::click()));
                            if resp.clicked() {
                                sort_clicked = Some(*key);
                            }
                        }
                    }
                });
            }
        })
        .body(|body| {
            body.rows(22.0, order.len(), |mut row| {
                let i = order[row.index()];
                let card = &editor.cards()[i];
                let color = match editor.change(i) {
                    Change::Increased => Some(INCREASED),
                    Change::Decreased => Some(DECREASED),
                    Change::Same => None,
                };
                let tint = |t: String| match color {
                    Some(c) => RichText::new(t).color(c),
                    None => RichText::new(t),
                };

                row.col(|ui| {
                    ui.label(tint(card.name.clone()));
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", card.weighted_average));
                });
                row.col(|ui| {
                    ui.label(card.slot().label());
                });
                row.col(|ui| {
                    ui.label(editor.recommended(i).to_string());
                });
                row.col(|ui| {
                    if ui.small_button("−").clicked() {
                        edit = Some((i, false));
                    }
                    ui.label(tint(card.adjusted_count.to_string()));
                    if ui.small_button("+").clicked() {
                        edit = Some((i, true));
                    }
                });
                row.col(|ui| {
                    ui.label(card.removability.symbol());
                });
                row.col(|ui| {
                    ui.label(card.addability.symbol());
                });
            });
        });

    if let Some(key) = sort_clicked {
        app.state.gui.toggle_sort(key);
        logd!("UI: sort → {:?}", app.state.gui.sort);
    }

    if let Some((i, up)) = edit {
        let partner = if up { app.editor.increase(i) } else { app.editor.decrease(i) };
        match partner {
            Some(_) => {
                app.deck_code.clear();
                app.status(app.editor.total_label());
            }
            None => app.status("No card can take the other side of that change"),
        }
    }
}
