// src/store.rs
// Local files: the cached post list and exported result tables.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::analysis::CardResult;
use crate::config::consts::{POSTS_CACHE_FILE, STORE_DIR};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::specs::posts::Post;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }
    }
    Ok(())
}

pub fn posts_cache_path() -> PathBuf {
    Path::new(STORE_DIR).join(POSTS_CACHE_FILE)
}

pub fn save_posts(path: &Path, posts: &[Post]) -> Result<(), StoreError> {
    ensure_parent(path)?;
    let mut w = csv::Writer::from_path(path)?;
    for p in posts {
        w.serialize(p)?;
    }
    w.flush().map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    logf!("Store: saved {} posts to {}", posts.len(), path.display());
    Ok(())
}

/// Cached posts. A missing cache is an empty list; unreadable rows are skipped.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut r = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for rec in r.deserialize::<Post>() {
        match rec {
            Ok(p) => out.push(p),
            Err(e) => logd!("Store: skipped cached post: {e}"),
        }
    }
    logd!("Store: loaded {} posts from {}", out.len(), path.display());
    Ok(out)
}

/// Result rows as CSV/TSV into any writer.
pub fn write_results<W: Write>(
    out: W,
    rows: &[CardResult],
    format: ExportFormat,
    include_headers: bool,
) -> Result<(), StoreError> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .from_writer(out);
    if include_headers {
        w.write_record(CardResult::HEADERS)?;
    }
    for row in rows {
        w.write_record(row.cells())?;
    }
    w.flush()
        .map_err(|source| StoreError::Io { path: PathBuf::from("<writer>"), source })?;
    Ok(())
}

/// Tab-separated text with headers, for the clipboard.
pub fn results_text(rows: &[CardResult]) -> Result<String, StoreError> {
    let mut buf = Vec::new();
    write_results(&mut buf, rows, ExportFormat::Tsv, true)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `rows` to the configured output path; returns the path written.
pub fn export_results(rows: &[CardResult], opts: &ExportOptions) -> Result<PathBuf, StoreError> {
    let path = opts.out_path();
    ensure_parent(&path)?;
    let file = fs::File::create(&path)
        .map_err(|source| StoreError::Io { path: path.clone(), source })?;
    write_results(io::BufWriter::new(file), rows, opts.format, opts.include_headers)?;
    logf!("Store: exported {} rows to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::CardStat;

    fn rows() -> Vec<CardResult> {
        vec![CardStat::new("Fire, Lizard", 2.5, 0.25).to_result(), CardResult::summary(40)]
    }

    #[test]
    fn posts_cache_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("posts.csv");
        assert!(load_posts(&path).unwrap().is_empty());

        let posts = vec![
            Post { title: s!("【10/18】デッキリスト比較"), url: s!("https://svlabo.jp/a.html") },
            Post { title: s!("with, comma"), url: s!("https://svlabo.jp/b.html") },
        ];
        save_posts(&path, &posts).unwrap();
        assert_eq!(load_posts(&path).unwrap(), posts);
    }

    #[test]
    fn csv_quotes_and_headers() {
        let mut buf = Vec::new();
        write_results(&mut buf, &rows(), ExportFormat::Csv, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("name,average,variance"));
        assert_eq!(lines[1], "\"Fire, Lizard\",2.50,0.25,0.50,2,0.50,2,0.0000,0.0000");
        assert_eq!(lines[2], "총 합,40,N/A,N/A,N/A,40,40,N/A,N/A");
    }

    #[test]
    fn tsv_without_headers() {
        let mut buf = Vec::new();
        write_results(&mut buf, &rows(), ExportFormat::Tsv, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Fire, Lizard\t2.50\t"));
        assert_eq!(text.lines().count(), 2);
        assert!(results_text(&rows()).unwrap().starts_with("name\taverage"));
    }

    #[test]
    fn export_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = ExportOptions::default();
        opts.format = ExportFormat::Tsv;
        opts.set_path(&dir.path().join("out").join("aggro").to_string_lossy());
        let path = export_results(&rows(), &opts).unwrap();
        assert!(path.ends_with("aggro.tsv"));
        assert!(fs::read_to_string(path).unwrap().contains("총 합"));
    }
}
