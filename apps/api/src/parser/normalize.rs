//! Turns raw extracted text into a line view and a flat view.

/// Two read-only views over the same extracted text.
///
/// `lines` keeps the document's line structure (blank lines included, order
/// untouched) and is what section search walks. `flat` is a single
/// whitespace-collapsed, printable-ASCII string used for document summaries
/// in logs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedText {
    lines: Vec<String>,
    flat: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let canonical = raw.replace("\r\n", "\n").replace('\r', "\n");

        let lines: Vec<String> = canonical.split('\n').map(clean_line).collect();

        let flat = lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .map(|word| {
                word.chars()
                    .filter(|c| c.is_ascii_graphic())
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        // Whitespace-only input has no lines at all.
        let lines = if raw.trim().is_empty() { Vec::new() } else { lines };

        Self { lines, flat }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn flat(&self) -> &str {
        &self.flat
    }

    /// True when no line carries any text. Non-ASCII lines count as text.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

/// Tabs become spaces, other control characters are dropped.
fn clean_line(line: &str) -> String {
    line.chars()
        .map(|c| if c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
