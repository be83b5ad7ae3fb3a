use std::sync::LazyLock;

use regex::Regex;

/// One input line of a bookmark file, reduced to the shapes the importer
/// understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    OpenList,
    CloseList,
    Heading(String),
    Anchor { url: String, title: String },
    Other,
}

static OPEN_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<dl(\s[^>]*)?>").expect("valid list-open pattern"));
static CLOSE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</dl\s*>").expect("valid list-close pattern"));
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h3(\s[^>]*)?>(.*?)</h3\s*>").expect("valid heading pattern")
});
static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*>(.*?)</a\s*>"#)
        .expect("valid anchor pattern")
});

/// Classifies a line. List markers win over headings and anchors, matching
/// how browsers lay the format out (one element per line).
pub fn classify(line: &str) -> Line {
    let line = line.trim();

    if OPEN_LIST.is_match(line) {
        return Line::OpenList;
    }
    if CLOSE_LIST.is_match(line) {
        return Line::CloseList;
    }
    if let Some(caps) = HEADING.captures(line) {
        return Line::Heading(caps[2].to_string());
    }
    if let Some(caps) = ANCHOR.captures(line) {
        let url = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        return Line::Anchor {
            url: url.to_string(),
            title: caps[3].to_string(),
        };
    }
    Line::Other
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Decodes the handful of entities `escape_html` produces (plus the common
/// spellings other exporters use). Anything else is left untouched.
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
