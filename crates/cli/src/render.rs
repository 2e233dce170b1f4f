//! Plain text rendering of a scrape report.

use std::fmt::Write;

use pagesift_core::{Categories, Category, FilteredSection, ScrapeReport};

/// Renders the report the way it is printed to stdout.
///
/// Every enabled category gets a section, empty or not. Keyword results
/// list only the sections that matched something.
pub fn render_text(report: &ScrapeReport, categories: &Categories) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Page Title: {}", report.title_or_default());

    for category in categories.iter() {
        let _ = writeln!(out, "\n{}", category.label());
        let lines: Vec<String> = match category {
            Category::Headings => report.results.headings.clone(),
            Category::Links => report.results.links.iter().map(|l| format!("{} -> {}", l.text, l.href)).collect(),
            Category::Paragraphs => report.results.paragraphs.clone(),
            Category::Images => report.results.images.clone(),
        };
        push_items(&mut out, &lines, "  ");
    }

    if let Some(matches) = &report.keyword_matches {
        let _ = writeln!(out, "\nResults for Keyword: {}", matches.keyword);
        for section in matches.sections() {
            let _ = writeln!(out, "  {}:", section.label());
            let lines: Vec<String> = match section {
                FilteredSection::Headings(items) | FilteredSection::Paragraphs(items) => items.to_vec(),
                FilteredSection::Links(links) => links.iter().map(|l| format!("{} -> {}", l.text, l.href)).collect(),
            };
            push_items(&mut out, &lines, "    ");
        }
    }

    if !report.word_frequencies.is_empty() {
        let _ = writeln!(out, "\nTop Words");
        let width = report.word_frequencies.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);
        for entry in &report.word_frequencies {
            let _ = writeln!(out, "  {:<width$}  {}", entry.word, entry.count, width = width);
        }
    }

    out
}

fn push_items(out: &mut String, items: &[String], indent: &str) {
    if items.is_empty() {
        let _ = writeln!(out, "{}(none)", indent);
        return;
    }
    for item in items {
        let _ = writeln!(out, "{}- {}", indent, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesift_core::{ScrapeOptions, scrape_page};

    const PAGE: &str = r#"<title>Example</title><h1>Hello</h1><p>Hello rust</p><a href="/x">Home</a>"#;

    #[test]
    fn test_render_sections() {
        let options = ScrapeOptions::builder().headings(true).links(true).images(true).build();
        let report = scrape_page(PAGE, "https://example.com", &options).unwrap();
        let text = render_text(&report, &options.categories);

        assert!(text.starts_with("Page Title: Example\n"));
        assert!(text.contains("\nHeadings\n  - Hello\n"));
        assert!(text.contains("\nLinks\n  - Home -> /x\n"));
        assert!(text.contains("\nImages\n  (none)\n"));
        assert!(!text.contains("Paragraphs"));
        assert!(!text.contains("Results for Keyword"));
    }

    #[test]
    fn test_render_keyword_results_only_non_empty() {
        let options = ScrapeOptions::builder().headings(true).paragraphs(true).keyword("hello").build();
        let report = scrape_page(PAGE, "https://example.com", &options).unwrap();
        let text = render_text(&report, &options.categories);

        assert!(text.contains("Results for Keyword: hello\n  Headings:\n    - Hello\n  Paragraphs:\n    - Hello rust\n"));
        assert!(!text.contains("  Links:"));
        assert!(text.contains("Top Words"));
    }
}
