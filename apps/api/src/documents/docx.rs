use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::DocumentError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Plain text of a DOCX body: one line per paragraph, `w:br`/`w:cr` as line
/// breaks and `w:tab` inside a run as a tab. Tab-stop definitions under
/// `w:pPr` produce nothing.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocumentError::Docx(format!("Failed to open DOCX archive: {e}")))?;

    let xml = {
        let mut file = archive
            .by_name(DOCUMENT_XML)
            .map_err(|e| DocumentError::Docx(format!("Missing {DOCUMENT_XML}: {e}")))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| DocumentError::Docx(format!("Failed to read {DOCUMENT_XML}: {e}")))?;
        content
    };

    document_xml_to_text(&xml)
}

fn document_xml_to_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut text = String::new();
    let mut in_text = false;
    let mut in_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = true,
                b"r" => in_run = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => in_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"tab" if in_run => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let unescaped = e
                    .unescape()
                    .map_err(|e| DocumentError::Docx(format!("Bad text in {DOCUMENT_XML}: {e}")))?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Docx(format!(
                    "XML parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
