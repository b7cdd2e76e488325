//! Utility functions for string processing.

/// Normalize a string for matching: lowercase only.
///
/// No diacritic stripping and no stemming; matching is plain substring
/// containment on the lowercased text.
#[inline]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Parse a query string into lowercased, whitespace-separated terms.
///
/// Leading/trailing whitespace and runs of whitespace never produce empty
/// terms, so `"  MQTT   broker "` parses to `["mqtt", "broker"]`.
///
/// # Example
///
/// ```
/// use docsearch::parse_query;
///
/// assert_eq!(parse_query("Hello  World"), vec!["hello", "world"]);
/// assert!(parse_query("   ").is_empty());
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Build the searchable text for an entry: title, description and tags joined
/// by single spaces, lowercased.
///
/// Terms never contain whitespace, so joining with a space can't create
/// matches that straddle two fields.
pub fn haystack(title: &str, description: &str, tags: &str) -> String {
    let mut hay = String::with_capacity(title.len() + description.len() + tags.len() + 2);
    hay.push_str(title);
    hay.push(' ');
    hay.push_str(description);
    hay.push(' ');
    hay.push_str(tags);
    normalize(&hay)
}
