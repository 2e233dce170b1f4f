use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pagesift_core::{Categories, Document, KeywordFilter, ScrapeOptions, extract, filter_results, scrape_page};

fn bench_parse(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();

    c.bench_function("parse", |b| b.iter(|| Document::parse(black_box(&html))));
}

fn bench_extract(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    let doc = Document::parse(&html).unwrap();
    let categories = Categories::all();

    c.bench_function("extract_all", |b| b.iter(|| extract(black_box(&doc), black_box(&categories))));
}

fn bench_filter(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    let doc = Document::parse(&html).unwrap();
    let result = extract(&doc, &Categories::all()).unwrap();
    let filter = KeywordFilter::new("ownership").unwrap();

    c.bench_function("keyword_filter", |b| b.iter(|| filter_results(black_box(&result), &filter)));
}

fn bench_full_pipeline(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    let options = ScrapeOptions::builder().categories(Categories::all()).keyword("rust").build();

    c.bench_function("scrape_page", |b| {
        b.iter(|| scrape_page(black_box(&html), "https://example.com/notes", &options))
    });
}

criterion_group!(benches, bench_parse, bench_extract, bench_filter, bench_full_pipeline);
criterion_main!(benches);
