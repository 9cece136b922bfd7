//! Offline PERSON detection: a line segment made of 2–4 capitalised words that
//! are not common résumé vocabulary is treated as a name.

use async_trait::async_trait;

use super::{Entity, EntityRecognizer, RecognizerError};

const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 4;

/// Words that show up capitalised at the top of a résumé but never in a name.
const NON_NAME_WORDS: &[&str] = &[
    "resume",
    "résumé",
    "curriculum",
    "vitae",
    "cv",
    "summary",
    "profile",
    "objective",
    "about",
    "contact",
    "skills",
    "experience",
    "education",
    "certifications",
    "projects",
    "engineer",
    "developer",
    "manager",
    "analyst",
    "scientist",
    "designer",
    "consultant",
    "intern",
    "architect",
    "senior",
    "junior",
    "lead",
    "software",
    "data",
    "university",
    "college",
    "institute",
    "school",
    "street",
    "road",
    "avenue",
    "linkedin",
    "github",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRecognizer;

#[async_trait]
impl EntityRecognizer for RuleBasedRecognizer {
    async fn find_entities(&self, span: &str) -> Result<Vec<Entity>, RecognizerError> {
        Ok(find_person_candidates(span))
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

/// All PERSON candidates in document order.
pub fn find_person_candidates(span: &str) -> Vec<Entity> {
    span.lines()
        .flat_map(|line| line.split(['|', ',', '•', '·', '–', '—', '\t']))
        .flat_map(|segment| segment.split(" - "))
        .map(str::trim)
        .filter(|segment| looks_like_name(segment))
        .map(|segment| {
            let name = segment.split_whitespace().collect::<Vec<_>>().join(" ");
            Entity::person(name)
        })
        .collect()
}

fn looks_like_name(segment: &str) -> bool {
    let words: Vec<&str> = segment.split_whitespace().collect();
    if !(MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&words.len()) {
        return false;
    }
    words.iter().all(|w| is_name_word(w))
}

fn is_name_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    if !word
        .chars()
        .all(|c| c.is_alphabetic() || matches!(c, '.' | '-' | '\''))
    {
        return false;
    }
    let bare = word.trim_matches(|c: char| !c.is_alphabetic()).to_lowercase();
    !bare.is_empty() && !NON_NAME_WORDS.contains(&bare.as_str())
}
