//! Asks the entity recognizer about the top of the document.

use tracing::warn;

use crate::ner_client::{EntityRecognizer, PERSON_LABEL};

/// Names live at the top of a résumé; the recognizer only sees this prefix.
pub const NAME_WINDOW_CHARS: usize = 500;

/// First `NAME_WINDOW_CHARS` characters of the line view, newline-joined so
/// the recognizer still sees line boundaries.
pub fn name_window<S: AsRef<str>>(lines: &[S]) -> String {
    let mut window = String::new();
    let mut remaining = NAME_WINDOW_CHARS;
    for line in lines {
        if remaining == 0 {
            break;
        }
        if !window.is_empty() {
            window.push('\n');
            remaining -= 1;
        }
        let chunk: String = line.as_ref().chars().take(remaining).collect();
        remaining -= chunk.chars().count();
        window.push_str(&chunk);
    }
    window
}

/// Text of the first PERSON entity, or `None`.
///
/// A failing recognizer degrades to `None`; it never aborts the parse.
pub async fn resolve_name<S: AsRef<str>>(
    lines: &[S],
    recognizer: &dyn EntityRecognizer,
) -> Option<String> {
    let window = name_window(lines);
    if window.trim().is_empty() {
        return None;
    }

    match recognizer.find_entities(&window).await {
        Ok(entities) => entities
            .into_iter()
            .find(|e| e.label == PERSON_LABEL)
            .map(|e| e.text.trim().to_string())
            .filter(|name| !name.is_empty()),
        Err(e) => {
            warn!(
                "Entity recognizer ({}) failed, leaving name empty: {e}",
                recognizer.backend()
            );
            None
        }
    }
}
