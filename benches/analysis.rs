// benches/analysis.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deck_scrape::analysis::{editor::DeckEditor, reconcile, CardStat};
use deck_scrape::specs::table;

/// 30 cards over 20 samples, rounded sum well off 40.
fn synthetic_page() -> String {
    let samples = 20;
    let mut head = String::from(r#"<thead id="table_header"><tr><th>カード</th>"#);
    head.push_str(&format!(r#"<th colspan="{samples}">採用枚数</th></tr></thead>"#));

    let mut body = String::from(r#"<tbody id="decklist_body">"#);
    for card in 0..30 {
        body.push_str(&format!(
            r#"<tr><td><div class="name_backimg2">Card {card}</div></td>"#
        ));
        for s in 0..samples {
            body.push_str(&format!("<td>{}</td>", (card * 7 + s * 3) % 4));
        }
        body.push_str("</tr>");
    }
    body.push_str("</tbody>");
    format!("<table>{head}{body}</table>")
}

fn cards() -> Vec<CardStat> {
    (0..30)
        .map(|i| CardStat::new(format!("Card {i}"), (i % 7) as f64 * 0.45, 0.1 + (i % 5) as f64 * 0.2))
        .collect()
}

fn bench_analysis(c: &mut Criterion) {
    let doc = synthetic_page();

    c.bench_function("parse_table", |b| {
        b.iter(|| {
            let snap = table::parse(black_box(&doc));
            black_box(snap.samples().map(|t| t.rows.len()))
        })
    });

    c.bench_function("reconcile", |b| {
        b.iter(|| {
            let mut cs = cards();
            black_box(reconcile::reconcile(black_box(&mut cs)))
        })
    });

    c.bench_function("editor_trade", |b| {
        let base = DeckEditor::new(cards());
        b.iter(|| {
            let mut ed = base.clone();
            black_box(ed.increase(black_box(0)))
        })
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
