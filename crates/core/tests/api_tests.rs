//! Library API integration tests
use pagesift_core::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_extract_article_fixture() {
    let doc = Document::parse(&fixture("article.html")).expect("should parse");
    let result = extract(&doc, &Categories::all()).expect("should extract");

    assert_eq!(result.headings, vec!["Field Notes on Rust", "Ownership", "Borrowing", "Further reading"]);
    assert_eq!(result.links.len(), 4);
    assert_eq!(result.links[0], Link::new("Home", "/"));
    assert_eq!(result.paragraphs.len(), 5);
    assert_eq!(result.paragraphs[3], "The borrow checker enforces these rules at compile time.");
    assert_eq!(result.images, vec!["/static/ownership.png", "https://cdn.example.org/borrow.jpg"]);
}

#[test]
fn test_scrape_page_keyword() {
    let options = ScrapeOptions::builder()
        .categories(Categories::all())
        .keyword("OWNERSHIP")
        .build();
    let report = scrape_page(&fixture("article.html"), "https://example.com/notes/rust", &options).unwrap();

    assert_eq!(report.title_or_default(), "Field Notes on Rust");
    assert_eq!(
        report.results.images,
        vec!["https://example.com/static/ownership.png", "https://cdn.example.org/borrow.jpg"]
    );

    let matches = report.keyword_matches.expect("keyword given");
    assert_eq!(matches.headings, vec!["Ownership"]);
    assert_eq!(matches.paragraphs.len(), 3);
    assert!(matches.links.is_empty());

    let again = KeywordFilter::new("OWNERSHIP").unwrap().filter_strings(&matches.paragraphs);
    assert_eq!(again, matches.paragraphs);
}

#[test]
fn test_links_csv_from_fixture() {
    let options = ScrapeOptions::builder().links(true).build();
    let report = scrape_page(&fixture("article.html"), "https://example.com", &options).unwrap();

    let artifacts = report.artifacts();
    assert_eq!(artifacts.len(), 1);

    let csv = String::from_utf8(artifacts[0].bytes.clone()).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Link Text,URL");
    assert_eq!(lines[1], "Home,/");
    assert_eq!(lines[4], r#""Rust book, 2nd ""edition""",/docs/book"#);
}

#[test]
fn test_empty_page_yields_empty_sequences() {
    let options = ScrapeOptions::builder().categories(Categories::all()).keyword("x").build();
    let report = scrape_page(&fixture("empty_content.html"), "https://example.com", &options).unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.title, None);
    assert!(report.artifacts().is_empty());
    assert!(report.keyword_matches.unwrap().is_empty());
    assert!(report.word_frequencies.is_empty());
}

#[test]
fn test_malformed_html_is_tolerated() {
    let options = ScrapeOptions::builder().headings(true).paragraphs(true).build();
    let report = scrape_page(&fixture("malformed_html.html"), "https://example.com", &options).unwrap();

    assert_eq!(report.title.as_deref(), Some("Broken"));
    assert!(!report.results.headings.is_empty());
    assert!(report.results.headings[0].starts_with("Unclosed heading"));
}

#[test]
fn test_scrape_page_rejects_bad_url() {
    let result = scrape_page("<h1>x</h1>", "notaurl", &ScrapeOptions::default());
    assert!(matches!(result, Err(SiftError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_scrape_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes/rust"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("article.html")))
        .expect(1)
        .mount(&server)
        .await;

    let options = ScrapeOptions::builder().headings(true).paragraphs(true).top_words(3).build();
    let report = Scraper::new(FetchConfig::default())
        .scrape(&format!("{}/notes/rust", server.uri()), &options)
        .await
        .expect("should scrape");

    assert_eq!(report.results.headings.len(), 4);
    assert!(report.results.links.is_empty());
    assert_eq!(report.word_frequencies.len(), 3);
    assert_eq!(report.word_frequencies[0].word, "ownership");
}

#[tokio::test]
async fn test_scrape_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = Scraper::default().scrape(&server.uri(), &ScrapeOptions::default()).await;
    assert!(matches!(result, Err(SiftError::HttpStatus { status: 503 })));
}
