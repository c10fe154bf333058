use ns_analysis::topics::{frequent_keywords, DEFAULT_KEYWORD_COUNT};
use ns_core::types::MISSING_TITLE;
use ns_core::Article;
use serde::Deserialize;

pub const MISSING_SUMMARY: &str = "Summary not available";
pub const MISSING_LINK: &str = "#";
pub const MISSING_DATE: &str = "Unknown Date";
pub const SUMMARY_WORDS: usize = 20;

/// A feed entry as delivered by an upstream source, before any defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default, alias = "Title")]
    pub title: Option<String>,
    #[serde(default, alias = "Summary", alias = "summary")]
    pub description: Option<String>,
    #[serde(default, alias = "Link")]
    pub link: Option<String>,
    #[serde(default, alias = "Published Date", alias = "pubDate")]
    pub published: Option<String>,
}

/// First `max_words` words, with "..." appended when anything was cut.
pub fn summarize_text(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return MISSING_SUMMARY.to_string();
    }

    let mut summary = words[..words.len().min(max_words)].join(" ");
    if words.len() > max_words {
        summary.push_str("...");
    }
    summary
}

/// Applies the feed defaults and derives summary and keyword topics from the full description.
pub fn normalize(entry: RawEntry) -> Article {
    let title = entry
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| MISSING_TITLE.to_string());
    let description = entry.description.unwrap_or_else(|| MISSING_SUMMARY.to_string());
    let topics = frequent_keywords(&description, DEFAULT_KEYWORD_COUNT)
        .into_iter()
        .collect();

    Article {
        title,
        summary: summarize_text(&description, SUMMARY_WORDS),
        link: Some(entry.link.unwrap_or_else(|| MISSING_LINK.to_string())),
        published: Some(entry.published.unwrap_or_else(|| MISSING_DATE.to_string())),
        topics: Some(topics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_text() {
        assert_eq!(summarize_text("", 20), MISSING_SUMMARY);
        assert_eq!(summarize_text("a  b\nc", 20), "a b c");
        assert_eq!(summarize_text("a b c d", 2), "a b...");
        assert_eq!(summarize_text("a b", 2), "a b");
    }

    #[test]
    fn test_normalize_applies_defaults() {
        let article = normalize(RawEntry::default());
        assert_eq!(article.title, "No Title");
        assert_eq!(article.summary, "Summary not available");
        assert_eq!(article.link.as_deref(), Some("#"));
        assert_eq!(article.published.as_deref(), Some("Unknown Date"));
        let topics: Vec<_> = article.topics.unwrap().into_iter().collect();
        assert_eq!(topics, vec!["available", "summary"]);
    }

    #[test]
    fn test_normalize_trims_summary_and_keeps_date() {
        let description = (1..=25).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let entry = RawEntry {
            title: Some("Tesla opens plant".to_string()),
            description: Some(description),
            link: Some("https://example.com/a".to_string()),
            published: Some("Tue, 04 Mar 2025 10:15:00 GMT".to_string()),
        };
        let article = normalize(entry);

        assert!(article.summary.ends_with("w20..."));
        assert_eq!(article.summary.split_whitespace().count(), 20);
        assert_eq!(article.published.as_deref(), Some("Tue, 04 Mar 2025 10:15:00 GMT"));
        assert_eq!(article.link.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_topics_come_from_the_full_description() {
        let mut description = (1..=20).map(|i| format!("filler{}", i)).collect::<Vec<_>>().join(" ");
        description.push_str(" battery battery battery recall recall");
        let article = normalize(RawEntry {
            description: Some(description),
            ..RawEntry::default()
        });

        assert!(!article.summary.contains("battery"));
        let topics = article.topics.unwrap();
        assert!(topics.contains("battery"));
        assert!(topics.contains("recall"));
        assert_eq!(topics.len(), 5);
        assert!(topics.contains("filler1"));
        assert!(!topics.contains("filler4"));
    }

    #[test]
    fn test_raw_entry_accepts_both_spellings() {
        let entries: Vec<RawEntry> = serde_json::from_str(
            r#"[{"title":"a","description":"x"},{"Title":"b","Summary":"y","Published Date":"2025-03-04T10:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].description.as_deref(), Some("x"));
        assert_eq!(entries[1].title.as_deref(), Some("b"));
        assert_eq!(
            normalize(entries[1].clone()).published.as_deref(),
            Some("2025-03-04T10:00:00Z")
        );
    }
}
