// src/progress.rs
/// Page-by-page feedback while the post index is walked.
/// The GUI writes it to the status line, the CLI to stderr.
pub trait Progress {
    /// Index pages about to be fetched.
    fn begin(&mut self, _pages: usize) {}

    fn log(&mut self, _msg: &str) {}

    /// One index page fetched; `page` counts from 1.
    fn item_done(&mut self, _page: usize) {}

    /// End of the walk, also after an error.
    fn finish(&mut self) {}
}

/// Discards everything. Used by tests and local snapshot listings.
pub struct NullProgress;

impl Progress for NullProgress {}
