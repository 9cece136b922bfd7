use crate::parser::sections::{locate, SectionQuery};

/// Upper bound on the degraded summary taken from the top of the document.
const FALLBACK_MAX_CHARS: usize = 300;

/// Up to three lines after a "summary"/"about" anchor, joined by spaces.
///
/// Without an anchor (or with nothing under it) the first non-blank line,
/// capped at 300 characters, stands in, so the field is only ever empty for
/// an empty document.
pub fn extract_summary<S: AsRef<str>>(lines: &[S]) -> String {
    let block = locate(lines, &SectionQuery::SUMMARY);
    if !block.is_empty() {
        return block.join(" ");
    }

    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(FALLBACK_MAX_CHARS).collect())
        .unwrap_or_default()
}
