// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    analysis::{Analysis, DeckEditor},
    config::{options::SourceKind, state::AppState},
    session::Session,
    source::Post,
    store,
};

use super::{components, fonts, jobs::JobOutcome};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Deck Scrape",
        options,
        Box::new(|cc| {
            fonts::install(&cc.egui_ctx);
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: Option<Arc<Session>>,

    pub posts: Vec<Post>,
    pub decks: Vec<String>,

    // last analysis and the user's edits on top of it
    pub analysis: Option<Analysis>,
    pub editor: DeckEditor,
    pub deck_code: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub(super) jobs: Option<Receiver<JobOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        let session = match Session::open(&state.options) {
            Ok(s) => Some(Arc::new(s)),
            Err(e) => {
                loge!("Init: cannot open data source: {e}");
                status = format!("Error: {e}");
                None
            }
        };

        // cached post list (live site only)
        let posts = if state.options.source.kind == SourceKind::Live {
            match store::load_posts(&store::posts_cache_path()) {
                Ok(v) => {
                    if !v.is_empty() {
                        status = format!("Loaded {} cached posts", v.len());
                    }
                    v
                }
                Err(e) => {
                    logd!("Cache: posts unreadable ({e})");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!(
            "Init: posts={}, source={}",
            posts.len(),
            session.as_ref().map_or("none", |s| s.source_name())
        );

        Self {
            state,
            session,
            posts,
            decks: Vec::new(),
            analysis: None,
            editor: DeckEditor::default(),
            deck_code: String::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
            running: false,
            jobs: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.state.gui.selected_post.and_then(|i| self.posts.get(i))
    }

    /// Drop analysis state when the post or deck changes.
    pub fn clear_analysis(&mut self) {
        self.analysis = None;
        self.editor = DeckEditor::default();
        self.deck_code.clear();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::jobs::poll(self, ctx);

        egui::SidePanel::left("posts")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                components::post_panel::draw(ui, self, ctx);
            });

        egui::TopBottomPanel::top("deck_bar").show(ctx, |ui| {
            components::deck_bar::draw(ui, self, ctx);
        });

        egui::TopBottomPanel::bottom("code_bar").show(ctx, |ui| {
            components::code_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::data_table::draw(ui, self);
        });

        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
