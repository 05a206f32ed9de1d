// src/analysis/snapshot.rs
//! Raw table as read off a deck-list comparison page, and its reduction to
//! a sample table (sample count, ratings, dates, per-card counts).

use crate::config::consts::{
    COUNT_HEADER, DATE_ROW_LABEL, RATING_HEADER, RATING_ROW_TRAILING_CELLS, STREAK_HEADER,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderCell {
    pub text: String,
    pub colspan: Option<String>,
}

/// `<th>` cells of each header `<tr>`, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawHeader {
    pub rows: Vec<Vec<HeaderCell>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyRow {
    /// Text of the first `<th>`/`<td>` of the row, if it has any cell.
    pub label: Option<String>,
    /// Card name cell, present on card rows only.
    pub name: Option<String>,
    /// Texts of every `<td>` in the row, in order.
    pub cells: Vec<String>,
}

/// What a data source hands to the analysis. Either part may be missing
/// when the page did not render the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    pub header: Option<RawHeader>,
    pub body: Option<Vec<BodyRow>>,
}

impl TableSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.body.is_none()
    }

    /// Resolve the header and pull dates and card rows out of the body.
    /// `None` means there is nothing to analyse.
    pub fn samples(&self) -> Option<SampleTable> {
        let shape = HeaderShape::resolve(self.header.as_ref()?)?;
        let n = shape.samples();
        let body = self.body.as_ref()?;

        let mut dates = Vec::new();
        let mut card_rows: Vec<&BodyRow> = Vec::new();
        for row in body {
            let Some(label) = row.label.as_deref() else { continue };
            if label.contains(DATE_ROW_LABEL) {
                dates = row.cells.iter().take(n).cloned().collect();
            } else if row.name.is_some() {
                card_rows.push(row);
            }
        }
        if card_rows.is_empty() {
            return None;
        }

        let rows = card_rows
            .into_iter()
            .filter_map(|row| RawCardRow::from_body(row, n))
            .collect();

        Some(SampleTable { shape, dates, rows })
    }
}

/// The three header layouts the site uses, tried in this order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderShape {
    /// Ranked samples; a second header row carries one rating per sample.
    Rated { samples: usize, ratings: Vec<String> },
    /// Win-streak samples, no ratings.
    Streak { samples: usize },
    /// Plain adoption counts.
    Generic { samples: usize },
}

impl HeaderShape {
    pub fn resolve(header: &RawHeader) -> Option<Self> {
        let top = header.rows.first()?;

        if let Some(samples) = span_of(top, RATING_HEADER) {
            let ratings = header
                .rows
                .get(1)
                .map(|row| {
                    let keep = row.len().saturating_sub(RATING_ROW_TRAILING_CELLS);
                    row.iter().take(keep).map(|c| c.text.trim().to_string()).collect()
                })
                .unwrap_or_default();
            logd!("Header: rated, {samples} samples");
            return Some(HeaderShape::Rated { samples, ratings });
        }

        if let Some(samples) = span_of(top, STREAK_HEADER) {
            logd!("Header: streak, {samples} samples");
            return Some(HeaderShape::Streak { samples });
        }

        // last resort: an unreadable span here means no data at all
        let cell = find_header(top, COUNT_HEADER)?;
        let samples = parse_span(cell.colspan.as_deref()?)?;
        logd!("Header: generic, {samples} samples");
        Some(HeaderShape::Generic { samples })
    }

    pub fn samples(&self) -> usize {
        match self {
            HeaderShape::Rated { samples, .. }
            | HeaderShape::Streak { samples }
            | HeaderShape::Generic { samples } => *samples,
        }
    }

    pub fn ratings(&self) -> &[String] {
        match self {
            HeaderShape::Rated { ratings, .. } => ratings,
            _ => &[],
        }
    }
}

fn find_header<'a>(row: &'a [HeaderCell], marker: &str) -> Option<&'a HeaderCell> {
    row.iter().find(|c| c.text.contains(marker))
}

/// Span of the first header containing `marker`, when it is a positive number.
fn span_of(row: &[HeaderCell], marker: &str) -> Option<usize> {
    find_header(row, marker)
        .and_then(|c| c.colspan.as_deref())
        .and_then(parse_span)
}

fn parse_span(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// One card's per-sample inclusion counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawCardRow {
    pub name: String,
    pub counts: Vec<i64>,
}

impl RawCardRow {
    /// Counts are the `<td>`s right after the name cell. Rows with a
    /// non-numeric cell or the wrong number of cells are dropped.
    fn from_body(row: &BodyRow, samples: usize) -> Option<Self> {
        let name = row.name.clone()?;
        let end = row.cells.len().min(samples + 1);
        let raw = row.cells.get(1..end).unwrap_or(&[]);

        let counts: Result<Vec<i64>, _> = raw.iter().map(|c| c.trim().parse::<i64>()).collect();
        let Ok(counts) = counts else {
            logd!("Rows: dropped {name:?} (non-numeric count)");
            return None;
        };
        if counts.len() != samples {
            logd!("Rows: dropped {name:?} ({} of {samples} counts)", counts.len());
            return None;
        }
        Some(Self { name, counts })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleTable {
    pub shape: HeaderShape,
    pub dates: Vec<String>,
    pub rows: Vec<RawCardRow>,
}

impl SampleTable {
    pub fn samples(&self) -> usize {
        self.shape.samples()
    }
}
