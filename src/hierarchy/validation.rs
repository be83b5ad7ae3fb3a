use url::Url;

use crate::error::{Error, Result};

pub const MAX_FOLDER_NAME_LEN: usize = 255;
pub const MAX_TITLE_LEN: usize = 500;
pub const MAX_URL_LEN: usize = 2048;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

const FORBIDDEN_NAME_CHARS: [char; 5] = ['<', '>', '"', '\'', '`'];

/// Removes control characters other than whitespace, truncates to
/// `max_chars` and trims.
pub fn sanitize_text(input: &str, max_chars: usize) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .take(max_chars)
        .collect();
    cleaned.trim().to_string()
}

/// Like `sanitize_text`, with line breaks folded into spaces. Names and
/// titles are written one element per line in bookmark files.
pub fn sanitize_line(input: &str, max_chars: usize) -> String {
    let folded = input.replace("\r\n", " ").replace(['\r', '\n'], " ");
    sanitize_text(&folded, max_chars)
}

pub fn is_forbidden_name_char(c: char) -> bool {
    FORBIDDEN_NAME_CHARS.contains(&c)
}

pub fn validate_id(id: i64, entity: &str) -> Result<i64> {
    if id <= 0 {
        return Err(Error::validation(format!(
            "{entity} id must be a positive integer"
        )));
    }
    Ok(id)
}

pub fn validate_folder_name(name: &str) -> Result<String> {
    if name.chars().count() > MAX_FOLDER_NAME_LEN {
        return Err(Error::validation(format!(
            "Folder name cannot exceed {MAX_FOLDER_NAME_LEN} characters"
        )));
    }
    let name = sanitize_line(name, MAX_FOLDER_NAME_LEN);
    if name.is_empty() {
        return Err(Error::validation("Folder name cannot be empty"));
    }
    if name.chars().any(is_forbidden_name_char) {
        return Err(Error::validation(
            "Folder name cannot contain <, >, \", ' or ` characters",
        ));
    }
    Ok(name)
}

pub fn validate_title(title: &str) -> Result<String> {
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(Error::validation(format!(
            "Bookmark title cannot exceed {MAX_TITLE_LEN} characters"
        )));
    }
    let title = sanitize_line(title, MAX_TITLE_LEN);
    if title.is_empty() {
        return Err(Error::validation("Bookmark title cannot be empty"));
    }
    Ok(title)
}

/// Returns the normalized form of an absolute http(s) URL.
pub fn validate_url(raw: &str) -> Result<String> {
    let (_, parsed) = parse_http_url(raw)?;
    let normalized = parsed.to_string();
    if normalized.chars().count() > MAX_URL_LEN {
        return Err(Error::validation(format!(
            "URL cannot exceed {MAX_URL_LEN} characters"
        )));
    }
    Ok(normalized)
}

/// Checks `raw` with the same rules as `validate_url` but returns the
/// trimmed input as written.
pub fn check_url(raw: &str) -> Result<String> {
    parse_http_url(raw).map(|(trimmed, _)| trimmed)
}

fn parse_http_url(raw: &str) -> Result<(String, Url)> {
    let trimmed = sanitize_text(raw, usize::MAX);
    if trimmed.is_empty() {
        return Err(Error::validation("URL cannot be empty"));
    }
    if trimmed.chars().count() > MAX_URL_LEN {
        return Err(Error::validation(format!(
            "URL cannot exceed {MAX_URL_LEN} characters"
        )));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(Error::validation("URL cannot contain line breaks or tabs"));
    }
    if trimmed.to_ascii_lowercase().starts_with("javascript:") {
        return Err(Error::validation("JavaScript URLs are not allowed"));
    }

    let parsed = Url::parse(&trimmed).map_err(|_| Error::validation("URL is not valid"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::validation("Only HTTP and HTTPS URLs are supported"));
    }
    Ok((trimmed, parsed))
}

pub fn validate_description(description: Option<&str>) -> Result<Option<String>> {
    let Some(description) = description else {
        return Ok(None);
    };
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(Error::validation(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    let description = sanitize_text(description, MAX_DESCRIPTION_LEN);
    Ok((!description.is_empty()).then_some(description))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name_rules() {
        assert_eq!(validate_folder_name("  Work ").unwrap(), "Work");
        assert!(validate_folder_name("").is_err());
        assert!(validate_folder_name("   ").is_err());
        assert!(validate_folder_name("a<b").is_err());
        assert!(validate_folder_name("it's").is_err());
        assert!(validate_folder_name("`cmd`").is_err());
        assert!(validate_folder_name(&"x".repeat(255)).is_ok());
        assert!(validate_folder_name(&"x".repeat(256)).is_err());
    }

    #[test]
    fn test_title_rules() {
        assert!(validate_title("").is_err());
        assert!(validate_title(&"t".repeat(500)).is_ok());
        assert!(validate_title(&"t".repeat(501)).is_err());
        assert_eq!(validate_title("a\u{0}b").unwrap(), "ab");
    }

    #[test]
    fn test_line_breaks_fold_to_spaces() {
        assert_eq!(validate_folder_name("Second\nHalf").unwrap(), "Second Half");
        assert_eq!(validate_folder_name("A\r\nB\rC").unwrap(), "A B C");
        assert_eq!(validate_title("Line one\nline two\n").unwrap(), "Line one line two");
        assert!(validate_folder_name("\n\r\n").is_err());
    }

    #[test]
    fn test_url_rules() {
        assert_eq!(
            validate_url("https://example.com").unwrap(),
            "https://example.com/"
        );
        assert!(validate_url("http://example.com/path?q=1").is_ok());
        assert!(validate_url("ftp://x").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
        assert!(validate_url("JavaScript:alert(1)").is_err());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("/relative/path").is_err());
        assert!(validate_url("").is_err());

        assert!(validate_url("https://exa\nmple.com").is_err());

        let long = format!("https://example.com/{}", "a".repeat(2048));
        assert!(validate_url(&long).is_err());
    }

    #[test]
    fn test_check_url_keeps_input_as_written() {
        assert_eq!(
            check_url("  HTTPS://Docs.Example.org/A ").unwrap(),
            "HTTPS://Docs.Example.org/A"
        );
        assert_eq!(check_url("https://example.com").unwrap(), "https://example.com");
        assert!(check_url("ftp://x").is_err());
        assert!(check_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_id_rules() {
        assert_eq!(validate_id(1, "Folder").unwrap(), 1);
        assert!(validate_id(0, "Folder").is_err());
        assert!(validate_id(-4, "Bookmark").is_err());
    }

    #[test]
    fn test_description_is_optional() {
        assert_eq!(validate_description(None).unwrap(), None);
        assert_eq!(validate_description(Some("   ")).unwrap(), None);
        assert_eq!(
            validate_description(Some(" notes ")).unwrap().as_deref(),
            Some("notes")
        );
        assert!(validate_description(Some(&"d".repeat(1001))).is_err());
    }
}
