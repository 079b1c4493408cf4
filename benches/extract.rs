use criterion::{criterion_group, criterion_main, Criterion};
use std::path::Path;

use mailcorpus::extract::{html, normalize};

fn bench_clean_html(c: &mut Criterion) {
    let page = "<html><head><style>body { color: red }</style>\
                <script>var tracking = 'beacon';</script></head><body>"
        .to_string()
        + &"<p>Limited offer, visit <a href=\"http://deals.example.com\">our site</a> \
            or reply to sales@example.com &amp; save!</p>\n"
            .repeat(200)
        + "</body></html>";

    c.bench_function("clean_html_200_paragraphs", |b| {
        b.iter(|| html::clean(&page))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let text = "Visit http://example.com/offer?id=123 or www.example.org, \
                mail sales@example.com   today.\n"
        .repeat(200);

    c.bench_function("normalize_200_lines", |b| {
        b.iter(|| normalize::normalize(&text))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let fixture_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("multipart.eml");
    let raw = std::fs::read(&fixture_path).unwrap();

    c.bench_function("build_record_multipart", |b| {
        b.iter(|| mailcorpus::corpus::builder::build(&fixture_path, &raw, "ham"))
    });
}

criterion_group!(benches, bench_clean_html, bench_normalize, bench_full_pipeline);
criterion_main!(benches);
