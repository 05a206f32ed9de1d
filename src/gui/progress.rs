// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Writes progress into the shared status line the UI thread draws.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }

    pub fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, pages: usize) {
        self.total = pages;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, page: usize) {
        self.done += 1;
        self.set_status(format!("Post index page {page} ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        self.set_status(format!("Post index: {} of {} pages read", self.done, self.total));
    }
}
