use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::sections::{locate, SectionQuery};

/// "3 years", "5+ yrs", "10 year" are experience durations, never skills.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+\s*\+?\s*(?:years?|yrs?)\b").unwrap());

/// What a removed duration leaves behind in "Python (5 years)".
static EMPTY_BRACKETS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]").unwrap());

/// Always split a skills line. Hyphens are handled in [`split_segments`].
const SEPARATORS: &[char] = &['|', ',', ';', '•', '·', '●', '▪', '◦', '–', '—'];

/// Headings that introduce a list, as in "Languages: Rust, Go".
const LABEL_WORDS: &[&str] = &[
    "languages",
    "programming languages",
    "tools",
    "frameworks",
    "libraries",
    "databases",
    "platforms",
    "technologies",
    "cloud",
    "devops",
    "skills",
    "other",
];

const MAX_LABEL_WORDS: usize = 3;

/// Skills listed under the skills section, deduplicated ignoring case
/// (first spelling wins) and sorted case-insensitively.
pub fn extract_skills<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let block = locate(lines, &SectionQuery::SKILLS);

    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for line in &block {
        for token in tokenize_line(line) {
            seen.entry(token.to_lowercase()).or_insert(token);
        }
    }
    seen.into_values().collect()
}

fn tokenize_line(line: &str) -> Vec<String> {
    let segments = split_segments(line);
    let labelled = has_label(&segments);

    segments
        .iter()
        .enumerate()
        .map(|(i, &segment)| match segment.split_once(':') {
            Some((_, rest)) if i == 0 && labelled => rest,
            // "Python: Advanced", "SQL: 3 years"
            Some((skill, _)) => skill,
            None => segment,
        })
        .filter_map(clean_token)
        .collect()
}

/// Splits on [`SEPARATORS`] and on hyphens, except a hyphen between two
/// lowercase letters ("scikit-learn").
fn split_segments(line: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        let splits = match c {
            '-' => {
                let before = i.checked_sub(1).and_then(|j| chars.get(j));
                let after = chars.get(i + 1);
                !matches!(
                    (before, after),
                    (Some((_, b)), Some((_, a))) if b.is_lowercase() && a.is_lowercase()
                )
            }
            c => SEPARATORS.contains(&c),
        };
        if splits {
            segments.push(&line[start..pos]);
            start = pos + c.len_utf8();
        }
    }
    segments.push(&line[start..]);
    segments
}

/// True when the text before the first colon names the list that follows.
/// A line where several items carry their own colon ("Python: 5 years,
/// SQL: 3 years") has no label.
fn has_label(segments: &[&str]) -> bool {
    let Some((label, rest)) = segments.first().and_then(|s| s.split_once(':')) else {
        return false;
    };
    if rest.trim().is_empty() {
        return false;
    }
    let label = label.split_whitespace().collect::<Vec<_>>().join(" ");
    if LABEL_WORDS.contains(&label.to_lowercase().as_str()) {
        return true;
    }
    segments.len() > 1
        && label.split_whitespace().count() <= MAX_LABEL_WORDS
        && segments[1..].iter().all(|s| !s.contains(':'))
}

fn clean_token(raw: &str) -> Option<String> {
    let without_duration = DURATION_RE.replace_all(raw, " ");
    let without_brackets = EMPTY_BRACKETS_RE.replace_all(&without_duration, " ");
    let token = without_brackets
        .trim()
        .trim_end_matches(':')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if token.chars().count() <= 1 || token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(token)
}
