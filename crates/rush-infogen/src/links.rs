//! URL detection for icon resolution and description autolinking

use crate::errors::GenerateError;
use once_cell::sync::OnceCell;
use regex::Regex;

const URL_REGEX: &str = r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()!@:%_+.~#?&//=]*)";

/// Bare links in description text: http(s) URLs, `www.` hosts and email
/// addresses. Trailing punctuation stays outside the link.
const AUTOLINK_REGEX: &str = r#"(?P<url>https?://[^\s<]*[^\s<.,;:!?"')\]])|(?P<www>www\.[^\s<]*[^\s<.,;:!?"')\]])|(?P<email>[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)"#;

static URL_PATTERN: OnceCell<Result<Regex, regex::Error>> = OnceCell::new();
static AUTOLINK_PATTERN: OnceCell<Result<Regex, regex::Error>> = OnceCell::new();

/// The compiled URL pattern
pub fn url_pattern() -> Result<&'static Regex, GenerateError> {
    URL_PATTERN
        .get_or_init(|| Regex::new(URL_REGEX))
        .as_ref()
        .map_err(|e| GenerateError::Pattern(e.to_string()))
}

/// The compiled description autolink pattern
pub fn autolink_pattern() -> Result<&'static Regex, GenerateError> {
    AUTOLINK_PATTERN
        .get_or_init(|| Regex::new(AUTOLINK_REGEX))
        .as_ref()
        .map_err(|e| GenerateError::Pattern(e.to_string()))
}

/// Link target for an autolink match: `www.` hosts get `http://`, email
/// addresses get `mailto:`
pub fn autolink_target(pattern: &Regex, found: &str) -> String {
    match pattern.captures(found) {
        Some(caps) if caps.name("www").is_some() => format!("http://{found}"),
        Some(caps) if caps.name("email").is_some() => format!("mailto:{found}"),
        _ => found.to_string(),
    }
}

/// True if `value` contains something that looks like an http(s) URL
pub fn is_url(value: &str) -> Result<bool, GenerateError> {
    Ok(url_pattern()?.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_detected() {
        assert!(is_url("https://example.com/a.png").is_ok_and(|m| m));
        assert!(is_url("http://www.example.org/icons/x.svg?v=2").is_ok_and(|m| m));
    }

    #[test]
    fn test_autolink_targets() {
        let Ok(pattern) = autolink_pattern() else {
            assert!(false, "pattern should compile");
            return;
        };
        assert_eq!(autolink_target(pattern, "www.example.com"), "http://www.example.com");
        assert_eq!(autolink_target(pattern, "dev@example.com"), "mailto:dev@example.com");
        assert_eq!(autolink_target(pattern, "https://example.com"), "https://example.com");
    }

    #[test]
    fn test_autolink_stops_before_trailing_punctuation() {
        let Ok(pattern) = autolink_pattern() else {
            assert!(false, "pattern should compile");
            return;
        };
        let found: Vec<&str> = pattern
            .find_iter("See www.example.com/a, or mail dev@example.com.")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["www.example.com/a", "dev@example.com"]);
    }

    #[test]
    fn test_file_names_are_not_urls() {
        assert!(is_url("icon.png").is_ok_and(|m| !m));
        assert!(is_url("images/extension.png").is_ok_and(|m| !m));
        assert!(is_url("ftp://example.com/a.png").is_ok_and(|m| !m));
    }
}
