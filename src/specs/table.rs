// src/specs/table.rs
//! Reader for the deck-list comparison table of a post.
//!
//! - Header: `#table_header`, every `<tr>` reduced to its `<th>` cells (text + `colspan`).
//! - Body: `#decklist_body`, every `<tr>` as first-cell label, the
//!   `div.name_backimg2` card name if any, and all `<td>` texts.
//!
//! No interpretation happens here; `analysis::snapshot` decides which header
//! shape applies and which rows are usable.

use crate::analysis::snapshot::{BodyRow, HeaderCell, RawHeader, TableSnapshot};
use crate::config::consts::{CARD_NAME_CLASS, DECKLIST_BODY_ID, TABLE_HEADER_ID};
use crate::core::html::{self, CellTag};

pub fn parse(doc: &str) -> TableSnapshot {
    let header = html::element_by_id(doc, TABLE_HEADER_ID).map(parse_header);
    let body = html::element_by_id(doc, DECKLIST_BODY_ID).map(parse_body);
    if header.is_none() {
        logd!("Table: #{TABLE_HEADER_ID} not found");
    }
    if body.is_none() {
        logd!("Table: #{DECKLIST_BODY_ID} not found");
    }
    TableSnapshot { header, body }
}

fn parse_header(block: &str) -> RawHeader {
    let rows = html::elements(block, "tr")
        .into_iter()
        .map(|tr| {
            html::cells(tr)
                .into_iter()
                .filter(|c| c.tag == CellTag::Th)
                .map(|c| HeaderCell { text: c.text(), colspan: html::attr(c.open(), "colspan") })
                .collect()
        })
        .collect();
    RawHeader { rows }
}

fn parse_body(block: &str) -> Vec<BodyRow> {
    html::elements(block, "tr")
        .into_iter()
        .map(|tr| {
            let cells = html::cells(tr);
            BodyRow {
                label: cells.first().map(|c| c.text()),
                name: html::element_by_class(tr, "div", CARD_NAME_CLASS).map(html::text),
                cells: cells
                    .iter()
                    .filter(|c| c.tag == CellTag::Td)
                    .map(|c| c.text())
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<table>
  <thead id="table_header">
    <tr><th rowspan=2>カード</th><th colspan="3">レート</th><th colspan="4">集計</th></tr>
    <tr><th>1720</th><th>1650</th><th>-</th><th>平均</th><th>最小</th><th>最大</th><th>計</th></tr>
  </thead>
  <tbody id="decklist_body">
    <tr><th>使用日</th><td>10/18</td><td>10/17</td><td>10/12</td></tr>
    <tr><td><div class="name_backimg2">Fire&nbsp;Lizard</div></td><td>3</td><td>2</td><td>3</td><td>2.67</td></tr>
    <tr><td><div class="name_backimg2">Goblin</div></td><td>0</td><td>1</td><td>0</td></tr>
  </tbody>
</table>"#;

    #[test]
    fn reads_header_rows() {
        let snap = parse(PAGE);
        let header = snap.header.unwrap();
        assert_eq!(header.rows.len(), 2);
        assert_eq!(header.rows[0][1].text, "レート");
        assert_eq!(header.rows[0][1].colspan.as_deref(), Some("3"));
        assert_eq!(header.rows[0][0].colspan, None);
        assert_eq!(header.rows[1].len(), 7);
    }

    #[test]
    fn reads_body_rows() {
        let body = parse(PAGE).body.unwrap();
        assert_eq!(body.len(), 3);
        assert_eq!(body[0].label.as_deref(), Some("使用日"));
        assert_eq!(body[0].name, None);
        assert_eq!(body[0].cells, vec!["10/18", "10/17", "10/12"]);

        assert_eq!(body[1].name.as_deref(), Some("Fire Lizard"));
        assert_eq!(body[1].cells, vec!["Fire Lizard", "3", "2", "3", "2.67"]);
    }

    #[test]
    fn feeds_the_analysis() {
        let table = parse(PAGE).samples().unwrap();
        assert_eq!(table.samples(), 3);
        assert_eq!(table.shape.ratings(), &[s!("1720"), s!("1650"), s!("-")]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].counts, vec![0, 1, 0]);
    }

    #[test]
    fn page_without_table_is_empty() {
        assert!(parse("<html><body>メンテナンス中</body></html>").is_empty());
    }
}
