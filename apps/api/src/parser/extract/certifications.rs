use crate::parser::sections::{locate, SectionQuery};

/// Lines this short are headings or stray markers rather than certifications.
const MIN_CERT_CHARS: usize = 7;

/// Every substantial line of the certifications section, verbatim.
pub fn extract_certifications<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    locate(lines, &SectionQuery::CERTIFICATIONS)
        .into_iter()
        .filter(|line| line.chars().count() >= MIN_CERT_CHARS)
        .filter(|line| !is_separator_only(line))
        .collect()
}

fn is_separator_only(line: &str) -> bool {
    const MARKERS: &[char] = &['-', '_', '=', '*', '|', '•', '·', '●', '▪', '–', '—'];
    line.chars()
        .all(|c| c.is_whitespace() || MARKERS.contains(&c))
}
