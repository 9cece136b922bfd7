//! Finds the block of lines that belongs to a résumé heading.
//!
//! Every field extractor that works on a section goes through [`locate`] with
//! its own [`SectionQuery`]; the alias tables below are the only thing that
//! differs between fields.
//!
//! Known limitation: only the FIRST line matching a header alias opens a
//! section. A résumé with two "Skills" headings only has the first one read,
//! and a header alias that appears inside running prose (e.g. "about" in a
//! summary sentence) will open the section at that line.

/// Which lines open a section, which lines close it, and how many lines to keep.
#[derive(Debug, Clone, Copy)]
pub struct SectionQuery {
    pub headers: &'static [&'static str],
    pub stops: &'static [&'static str],
    pub max_lines: usize,
}

impl SectionQuery {
    pub const SUMMARY: SectionQuery = SectionQuery {
        headers: &["summary", "about"],
        stops: &[],
        max_lines: 3,
    };

    pub const SKILLS: SectionQuery = SectionQuery {
        headers: &["skills", "technical skills", "programming", "technology"],
        stops: &["experience", "education", "certification", "projects"],
        max_lines: 20,
    };

    pub const EXPERIENCE: SectionQuery = SectionQuery {
        headers: &["experience", "work history"],
        stops: &["education", "certification", "projects"],
        max_lines: 25,
    };

    pub const EDUCATION: SectionQuery = SectionQuery {
        headers: &["education", "academic background"],
        stops: &["experience", "skills", "certification"],
        max_lines: 20,
    };

    pub const CERTIFICATIONS: SectionQuery = SectionQuery {
        headers: &["certifications", "certification", "courses"],
        stops: &["experience", "education", "projects"],
        max_lines: 15,
    };
}

/// Returns the non-blank lines after the first header match, up to (not
/// including) the next stop line or `max_lines` captured lines.
///
/// No header match is a normal outcome and yields an empty block.
pub fn locate<S: AsRef<str>>(lines: &[S], query: &SectionQuery) -> Vec<String> {
    let Some(header_idx) = lines
        .iter()
        .position(|line| contains_any(line.as_ref(), query.headers))
    else {
        return Vec::new();
    };

    let mut block = Vec::new();
    for line in &lines[header_idx + 1..] {
        if block.len() >= query.max_lines {
            break;
        }
        let line = line.as_ref();
        if contains_any(line, query.stops) {
            break;
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            block.push(trimmed.to_string());
        }
    }
    block
}

/// Case-insensitive substring match against any alias.
pub fn contains_any(line: &str, aliases: &[&str]) -> bool {
    if aliases.is_empty() {
        return false;
    }
    let lower = line.to_lowercase();
    aliases.iter().any(|alias| lower.contains(alias))
}
