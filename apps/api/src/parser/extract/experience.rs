use crate::parser::extract::contains_year;
use crate::parser::record::ExperienceEntry;
use crate::parser::sections::{locate, SectionQuery};

/// Pairs a "Company | Role" line with the dated line right below it.
///
/// Each pair consumes both lines, so entries never overlap. Lines that do not
/// fit the pattern (bullets, descriptions) are skipped.
pub fn extract_experience<S: AsRef<str>>(lines: &[S]) -> Vec<ExperienceEntry> {
    let block = locate(lines, &SectionQuery::EXPERIENCE);

    let mut entries = Vec::new();
    let mut i = 0;
    while i + 1 < block.len() {
        let (heading, dates) = (&block[i], &block[i + 1]);
        if heading.contains('|') && contains_year(dates) {
            entries.push(ExperienceEntry {
                company_role: heading.clone(),
                duration: dates.clone(),
            });
            i += 2;
        } else {
            i += 1;
        }
    }
    entries
}
