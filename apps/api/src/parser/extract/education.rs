use std::sync::LazyLock;

use regex::Regex;

use crate::parser::extract::contains_year;
use crate::parser::record::EducationEntry;
use crate::parser::sections::{locate, SectionQuery};

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:B\.Tech|M\.Tech|MBA|BSc|MSc|Bachelor|Master|PhD)").unwrap()
});

/// Education entries anchored on degree lines.
///
/// Adjacency convention: the institute is the line directly ABOVE the degree
/// line, unless that line is itself a degree or was already taken as the
/// previous entry's duration. The duration is the line directly BELOW, and
/// only when it carries a four-digit year; that line is then consumed.
pub fn extract_education<S: AsRef<str>>(lines: &[S]) -> Vec<EducationEntry> {
    let block = locate(lines, &SectionQuery::EDUCATION);

    let mut entries = Vec::new();
    let mut consumed_up_to: Option<usize> = None;
    let mut i = 0;
    while i < block.len() {
        if !is_degree(&block[i]) {
            i += 1;
            continue;
        }

        let institute = i
            .checked_sub(1)
            .filter(|&prev| consumed_up_to.map_or(true, |c| prev > c))
            .map(|prev| &block[prev])
            .filter(|prev| !is_degree(prev))
            .cloned()
            .unwrap_or_default();

        let duration = block.get(i + 1).filter(|next| contains_year(next)).cloned();

        let last = if duration.is_some() { i + 1 } else { i };
        entries.push(EducationEntry {
            degree: block[i].clone(),
            institute,
            duration: duration.unwrap_or_default(),
        });
        consumed_up_to = Some(last);
        i = last + 1;
    }
    entries
}

fn is_degree(line: &str) -> bool {
    DEGREE_RE.is_match(line)
}
