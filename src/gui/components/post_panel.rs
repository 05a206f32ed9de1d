// src/gui/components/post_panel.rs
//
// Left list of comparison posts. Clicking a post loads its decks.

use eframe::egui;

use crate::gui::{app::App, jobs};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    ui.horizontal(|ui| {
        ui.heading("Posts");
        if ui.add_enabled(!app.running, egui::Button::new("Refresh")).clicked() {
            jobs::refresh_posts(app, ctx);
        }
    });

    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    if app.posts.is_empty() {
        ui.label("No posts yet. Press Refresh.");
        return;
    }

    let mut clicked = None;
    egui::ScrollArea::vertical()
        .id_salt("posts_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for (idx, post) in app.posts.iter().enumerate() {
                let is_selected = app.state.gui.selected_post == Some(idx);
                let resp = ui
                    .selectable_label(is_selected, &post.title)
                    .on_hover_text(&post.url);
                if resp.clicked() && !app.running && !is_selected {
                    clicked = Some(idx);
                }
            }
        });

    if let Some(idx) = clicked {
        app.state.gui.selected_post = Some(idx);
        app.state.gui.selected_deck = None;
        app.decks.clear();
        app.clear_analysis();
        logf!("UI: post → {}", app.posts[idx].title);
        jobs::load_decks(app, ctx);
    }
}
