// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub weighting: WeightingOptions,
    pub export: ExportOptions,
    pub catalog_path: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            weighting: WeightingOptions::default(),
            export: ExportOptions::default(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
        }
    }
}

/// Tunables of the sample weighting. Defaults are the values the
/// recommendations are calibrated on.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightingOptions {
    /// Recency decays linearly to the floor over `2 * half_life_days`.
    pub half_life_days: f64,
    pub min_recency_weight: f64,
    pub rating_baseline: i64,
    pub rating_step: f64,
    pub rating_bonus_per_step: f64,
}

impl Default for WeightingOptions {
    fn default() -> Self {
        Self {
            half_life_days: 3.0,
            min_recency_weight: 0.1,
            rating_baseline: 1600,
            rating_step: 100.0,
            rating_bonus_per_step: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Live,
    Snapshots(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub kind: SourceKind,
    pub post_pages: usize,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            kind: SourceKind::Live,
            post_pages: DEFAULT_POST_PAGES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, extension always following the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path
            .dir
            .join(format!("{}.{}", stem, self.format.ext()))
    }

    /// Parse user text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    /// Keep the directory, replace the file name.
    pub fn set_file_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
