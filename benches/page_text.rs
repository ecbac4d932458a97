// benches/page_text.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use proposal_desk::core::html::{page_text, strip_tags};

/// Synthetic details page in the shape the county renders: a deep div
/// soup with the land-area line buried in the middle.
fn sample_doc() -> String {
    let mut doc = String::from("<html><body>");
    for i in 0..400 {
        doc.push_str(&format!(
            "<div class=\"row\"><span class=\"k\">Field {i}</span>\
             <span class=\"v\">Value&nbsp;{i} &amp; more</span></div>"
        ));
        if i == 200 {
            doc.push_str("<div>Land Area: ≅ 10,500 sf | ≅ 0.24 acres</div>");
            doc.push_str("<div>123 MAIN ST N ST PETERSBURG, FL 33701</div>");
        }
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_text_extraction(c: &mut Criterion) {
    let doc = sample_doc();

    c.bench_function("page_text", |b| {
        b.iter(|| {
            let text = page_text(black_box(&doc));
            black_box(text.len())
        })
    });

    c.bench_function("strip_tags", |b| {
        b.iter(|| {
            let text = strip_tags(black_box(&doc));
            black_box(text.len())
        })
    });
}

criterion_group!(benches, bench_text_extraction);
criterion_main!(benches);
