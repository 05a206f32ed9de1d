// src/gui/jobs.rs
//
// Network work runs on a worker thread; the outcome comes back over a
// channel and is applied on the UI thread in `poll`. One job at a time.

use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use super::{app::App, progress::GuiProgress};
use crate::{
    analysis::Analysis,
    config::options::SourceKind,
    core::sanitize::sanitize_filename,
    deckcode::class_from_deck_name,
    session::Session,
    source::{Post, SourceError},
    store,
};

pub enum JobOutcome {
    Posts(Result<Vec<Post>, SourceError>),
    Decks {
        post: String,
        result: Result<Vec<String>, SourceError>,
    },
    Table {
        post: String,
        deck: String,
        result: Result<Option<Analysis>, SourceError>,
    },
}

fn spawn<F>(app: &mut App, ctx: &egui::Context, label: String, work: F)
where
    F: FnOnce(&Session, &mut GuiProgress) -> JobOutcome + Send + 'static,
{
    if app.running {
        logd!("Jobs: busy, ignored {label:?}");
        return;
    }
    let Some(session) = app.session.clone() else {
        app.status("No data source");
        return;
    };

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    let ctx = ctx.clone();
    app.running = true;
    app.jobs = Some(rx);
    app.status(label);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let outcome = work(&session, &mut prog);
        let _ = tx.send(outcome);
        ctx.request_repaint();
    });
}

pub fn refresh_posts(app: &mut App, ctx: &egui::Context) {
    logf!("Jobs: refresh posts");
    spawn(app, ctx, s!("Fetching posts…"), |session, prog| {
        JobOutcome::Posts(session.posts(prog))
    });
}

pub fn load_decks(app: &mut App, ctx: &egui::Context) {
    let Some(post) = app.selected_post().map(|p| p.url.clone()) else { return };
    logf!("Jobs: decks of {post}");
    spawn(app, ctx, s!("Loading decks…"), move |session, _| {
        let result = session.deck_names(&post);
        JobOutcome::Decks { post, result }
    });
}

pub fn analyze(app: &mut App, ctx: &egui::Context) {
    let Some(post) = app.selected_post().map(|p| p.url.clone()) else { return };
    let Some(deck) = app.state.gui.selected_deck.clone() else { return };
    logf!("Jobs: analyze {deck:?} in {post}");
    app.clear_analysis();
    spawn(app, ctx, format!("Analyzing {deck}…"), move |session, _| {
        let result = session.analysis(&post, &deck);
        JobOutcome::Table { post, deck, result }
    });
}

/// Class id for the share URL, guessed from the deck name when possible.
pub fn select_class(app: &mut App, deck: &str) {
    if let Some(class_id) = class_from_deck_name(deck) {
        app.state.gui.class_id = class_id;
    }
}

/// Apply a finished job, if any.
pub fn poll(app: &mut App, ctx: &egui::Context) {
    let received = match app.jobs.as_ref().map(|rx| rx.try_recv()) {
        None | Some(Err(TryRecvError::Empty)) => return,
        Some(Ok(outcome)) => Some(outcome),
        Some(Err(TryRecvError::Disconnected)) => None,
    };
    app.jobs = None;
    app.running = false;

    let Some(outcome) = received else {
        loge!("Jobs: worker ended without a result");
        app.status("Error: worker stopped");
        return;
    };

    match outcome {
        JobOutcome::Posts(Ok(posts)) => {
            app.status(format!("{} posts", posts.len()));
            if app.state.options.source.kind == SourceKind::Live {
                if let Err(e) = store::save_posts(&store::posts_cache_path(), &posts) {
                    loge!("Cache: save failed: {e}");
                }
            }
            app.posts = posts;
            app.state.gui.selected_post = None;
            app.decks.clear();
            app.clear_analysis();
        }

        JobOutcome::Decks { post, result: Ok(names) } => {
            if app.selected_post().map(|p| p.url.as_str()) != Some(post.as_str()) {
                return; // selection moved on
            }
            app.status(format!("{} decks", names.len()));
            app.decks = names;
            let first = app.decks.first().cloned();
            app.state.gui.selected_deck = first.clone();
            if let Some(deck) = first {
                select_class(app, &deck);
                analyze(app, ctx);
            }
        }

        JobOutcome::Table { deck, result: Ok(found), .. } => match found {
            Some(analysis) => {
                app.status(format!(
                    "{deck}: {} cards, Σ rounded {} → {}",
                    analysis.cards.len(),
                    analysis.round_sum,
                    analysis.total()
                ));
                app.editor = analysis.editor();
                app.analysis = Some(analysis);
                if !app.out_path_dirty {
                    let export = &mut app.state.options.export;
                    export.set_file_stem(&sanitize_filename(&deck, 0));
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }
            None => app.status(format!("No data for {deck}")),
        },

        JobOutcome::Posts(Err(e))
        | JobOutcome::Decks { result: Err(e), .. }
        | JobOutcome::Table { result: Err(e), .. } => {
            loge!("Jobs: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
