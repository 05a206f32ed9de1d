// src/source/snapshots.rs
// Saved pages on disk: <root>/<post>/<deck>.html

use std::fs;
use std::path::{Path, PathBuf};

use super::{DataSource, Post, SourceError};
use crate::analysis::TableSnapshot;
use crate::progress::Progress;
use crate::specs::table;

pub struct SnapshotSource {
    root: PathBuf,
}

impl SnapshotSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sorted entry names under `dir` that pass `keep`.
    fn names(dir: &Path, keep: impl Fn(&Path) -> Option<String>) -> Result<Vec<String>, SourceError> {
        let entries = fs::read_dir(dir).map_err(|e| SourceError::io(dir, e))?;
        let mut out = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| SourceError::io(dir, e))?.path();
            if let Some(name) = keep(&path) {
                out.push(name);
            }
        }
        out.sort();
        Ok(out)
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn deck_page_stem(path: &Path) -> Option<String> {
    let is_html = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
    if !path.is_file() || !is_html {
        return None;
    }
    path.file_stem().map(|n| n.to_string_lossy().into_owned())
}

impl DataSource for SnapshotSource {
    fn name(&self) -> &'static str {
        "snapshots"
    }

    /// Every post directory; `pages` does not apply to a local tree.
    fn list_posts(&self, _pages: usize, progress: &mut dyn Progress) -> Result<Vec<Post>, SourceError> {
        progress.begin(1);
        let dirs = Self::names(&self.root, |p| if p.is_dir() { file_name(p) } else { None });
        progress.item_done(1);
        progress.finish();

        let posts: Vec<Post> = dirs?
            .into_iter()
            .map(|title| {
                let url = self.root.join(&title).to_string_lossy().into_owned();
                Post { title, url }
            })
            .collect();
        logf!("Posts: {} under {}", posts.len(), self.root.display());
        Ok(posts)
    }

    fn deck_names(&self, post_url: &str) -> Result<Vec<String>, SourceError> {
        Self::names(Path::new(post_url), deck_page_stem)
    }

    fn fetch_table(&self, post_url: &str, deck: &str) -> Result<TableSnapshot, SourceError> {
        let path = Path::new(post_url).join(format!("{deck}.html"));
        let doc = fs::read_to_string(&path).map_err(|e| SourceError::io(&path, e))?;
        logd!("Table: read {}", path.display());
        Ok(table::parse(&doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (post, deck) in [("1018 ローテ", "秘術W"), ("1018 ローテ", "進化R"), ("1017", "A")] {
            let p = dir.path().join(post);
            fs::create_dir_all(&p).unwrap();
            fs::write(p.join(format!("{deck}.html")), "<html></html>").unwrap();
        }
        fs::write(dir.path().join("1017").join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("README"), "x").unwrap();
        dir
    }

    #[test]
    fn posts_are_sorted_directories() {
        let dir = tree();
        let src = SnapshotSource::new(dir.path().to_path_buf());
        let posts = src.list_posts(2, &mut NullProgress).unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["1017", "1018 ローテ"]);
        assert!(Path::new(&posts[1].url).is_dir());
    }

    #[test]
    fn decks_are_html_stems() {
        let dir = tree();
        let src = SnapshotSource::new(dir.path().to_path_buf());
        let post = dir.path().join("1018 ローテ");
        let decks = src.deck_names(&post.to_string_lossy()).unwrap();
        assert_eq!(decks, vec!["秘術W", "進化R"]);
        assert_eq!(src.deck_names(&dir.path().join("1017").to_string_lossy()).unwrap(), vec!["A"]);
    }

    #[test]
    fn table_reads_file_or_fails_with_path() {
        let dir = tree();
        let src = SnapshotSource::new(dir.path().to_path_buf());
        let post = dir.path().join("1017").to_string_lossy().into_owned();
        assert!(src.fetch_table(&post, "A").unwrap().is_empty());
        assert!(matches!(src.fetch_table(&post, "Z"), Err(SourceError::Io { .. })));
    }
}
