//! Word frequencies for word-cloud rendering.
//!
//! Paragraph text is joined, tokenized and counted the way word-cloud
//! generators usually do it: stopwords, digits and single characters are
//! dropped, a trailing possessive `'s` is removed, and counts are scaled
//! against the most frequent word to give each entry a relative weight.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w[\w']+").unwrap());

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are", "aren't",
        "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
        "can't", "cannot", "com", "could", "couldn't", "did", "didn't", "do", "does", "doesn't", "doing", "don't",
        "down", "during", "each", "else", "ever", "few", "for", "from", "further", "get", "had", "hadn't", "has",
        "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's",
        "hers", "herself", "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm",
        "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's", "like",
        "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only",
        "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "r", "same",
        "shall", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "since", "so", "some",
        "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then", "there",
        "there's", "therefore", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
        "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're",
        "we've", "were", "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while",
        "who", "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you", "you'd",
        "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// One word of the cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
    /// `count` divided by the highest count, in `(0, 1]`.
    pub weight: f64,
}

/// Counts the words of `paragraphs`, most frequent first.
///
/// Ties are broken alphabetically. `top` caps the result; `0` keeps every
/// word.
///
/// # Example
///
/// ```rust
/// use pagesift_core::word_frequencies;
///
/// let paragraphs = vec!["Rust is fast.".to_string(), "Rust's compiler is strict".to_string()];
/// let words = word_frequencies(&paragraphs, 2);
/// assert_eq!(words[0].word, "rust");
/// assert_eq!(words[0].count, 2);
/// ```
pub fn word_frequencies(paragraphs: &[String], top: usize) -> Vec<WordCount> {
    let text = paragraphs.join(" ");
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in WORD_RE.find_iter(&text) {
        let lowered = token.as_str().to_lowercase();
        if STOPWORDS.contains(lowered.as_str()) {
            continue;
        }

        let word = lowered.strip_suffix("'s").unwrap_or(&lowered);
        if word.chars().count() < 2 || word.chars().all(|c| c.is_numeric()) || STOPWORDS.contains(word) {
            continue;
        }

        *counts.entry(word.to_string()).or_default() += 1;
    }

    let mut words: Vec<(String, usize)> = counts.into_iter().collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if top > 0 {
        words.truncate(top);
    }

    let max = words.first().map(|(_, count)| *count).unwrap_or(1) as f64;
    words
        .into_iter()
        .map(|(word, count)| WordCount { word, count, weight: count as f64 / max })
        .collect()
}
