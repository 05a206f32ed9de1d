// src/source/mod.rs
//! Where comparison tables come from.
//!
//! `HttpSource` reads the live blog, `SnapshotSource` reads saved pages from
//! disk. Both hand raw page structure to the `specs` readers and return
//! `TableSnapshot`s; neither interprets numbers.

mod http;
mod snapshots;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use crate::specs::posts::Post;
pub use http::HttpSource;
pub use snapshots::SnapshotSource;

use crate::analysis::TableSnapshot;
use crate::config::options::{SourceKind, SourceOptions};
use crate::progress::Progress;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("bad link {0}")]
    Url(String),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("#{id} not found on {url}")]
    MissingElement { id: &'static str, url: String },
}

impl SourceError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SourceError::Io { path: path.into(), source }
    }
}

pub trait DataSource: Send + Sync {
    /// Short label for logs and the status line.
    fn name(&self) -> &'static str;

    /// Comparison posts, newest first as the blog lists them.
    fn list_posts(&self, pages: usize, progress: &mut dyn Progress) -> Result<Vec<Post>, SourceError>;

    /// Deck names available in one post.
    fn deck_names(&self, post_url: &str) -> Result<Vec<String>, SourceError>;

    /// The comparison table of `deck` in one post. An empty snapshot means no data.
    fn fetch_table(&self, post_url: &str, deck: &str) -> Result<TableSnapshot, SourceError>;
}

pub fn open_source(opts: &SourceOptions) -> Result<Box<dyn DataSource>, SourceError> {
    Ok(match &opts.kind {
        SourceKind::Live => Box::new(HttpSource::new()?),
        SourceKind::Snapshots(root) => Box::new(SnapshotSource::new(root.clone())),
    })
}
