// Field extractors. Each is a pure, total function over the normalized line
// view: "nothing found" is an empty value, never an error.

pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod skills;
pub mod summary;

use std::sync::LazyLock;

use regex::Regex;

pub use certifications::extract_certifications;
pub use contact::{extract_email, extract_phone};
pub use education::extract_education;
pub use experience::extract_experience;
pub use skills::extract_skills;
pub use summary::extract_summary;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

/// True when the line carries a standalone four-digit year.
pub(crate) fn contains_year(line: &str) -> bool {
    YEAR_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_year() {
        assert!(contains_year("2016-2020"));
        assert!(contains_year("Jan 2019 - Present"));
        assert!(!contains_year("Phone 12345"));
        assert!(!contains_year("Senior Engineer"));
    }
}
