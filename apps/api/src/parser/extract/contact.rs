use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+?\d[\d\s\-()]{9,}").unwrap());

/// Shortest phone number the pattern admits; year ranges carry 8 digits.
const MIN_PHONE_DIGITS: usize = 9;

/// First email address, scanning line by line so addresses never span lines.
pub fn extract_email<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| EMAIL_RE.find(line.as_ref()))
        .map(|m| m.as_str().to_string())
}

/// First phone number in canonical form: digits only, keeping a leading `+`.
///
/// Runs like "2016 - 2020" match the raw pattern but carry too few digits
/// and are skipped.
pub fn extract_phone<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    lines.iter().find_map(|line| {
        PHONE_RE
            .find_iter(line.as_ref())
            .map(|m| canonical_phone(m.as_str()))
            .find(|phone| digit_count(phone) >= MIN_PHONE_DIGITS)
    })
}

fn canonical_phone(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')') && !c.is_whitespace())
        .collect()
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_in_sentence() {
        let lines = ["Contact: jane.doe@example.com for details"];
        assert_eq!(extract_email(&lines).as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_no_at_sign_is_none() {
        let lines = ["Contact me via carrier pigeon"];
        assert_eq!(extract_email(&lines), None);
    }

    #[test]
    fn test_email_does_not_join_lines() {
        let lines = ["jane.doe@", "example.com"];
        assert_eq!(extract_email(&lines), None);
    }

    #[test]
    fn test_email_with_plus_and_subdomain() {
        let lines = ["x", "mail: j_doe+cv@mail.example.co.uk"];
        assert_eq!(
            extract_email(&lines).as_deref(),
            Some("j_doe+cv@mail.example.co.uk")
        );
    }

    #[test]
    fn test_email_requires_alphabetic_tld() {
        let lines = ["user@host.1"];
        assert_eq!(extract_email(&lines), None);
    }

    #[test]
    fn test_phone_is_canonicalized() {
        let lines = ["Call +1 (555) 123-4567 now"];
        assert_eq!(extract_phone(&lines).as_deref(), Some("+15551234567"));
    }

    #[test]
    fn test_phone_without_plus() {
        let lines = ["Phone: 98765 43210"];
        assert_eq!(extract_phone(&lines).as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_year_range_is_not_a_phone() {
        let lines = ["Acme | Engineer", "2016 - 2020", "Phone 555-123-4567"];
        assert_eq!(extract_phone(&lines).as_deref(), Some("5551234567"));
    }

    #[test]
    fn test_nine_digit_number_is_accepted() {
        let lines = ["Tel: 612 345 678"];
        assert_eq!(extract_phone(&lines).as_deref(), Some("612345678"));
    }

    #[test]
    fn test_no_phone_is_none() {
        let lines = ["Jane Doe", "Rust, Go"];
        assert_eq!(extract_phone(&lines), None);
    }
}
