// Résumé parsing pipeline: normalize -> locate sections -> extract fields ->
// resolve name -> assemble. Stages run strictly in order over one document and
// none of them can fail; bad input only lowers field quality.

pub mod extract;
pub mod name;
pub mod normalize;
pub mod record;
pub mod sections;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::ner_client::EntityRecognizer;

pub use normalize::NormalizedText;
pub use record::{ContactInfo, EducationEntry, ExperienceEntry, ExtractedFields, ResumeRecord};

/// Runs every field extractor over the normalized text.
pub fn extract_fields(text: &NormalizedText) -> ExtractedFields {
    let lines = text.lines();

    let fields = ExtractedFields {
        contact: ContactInfo {
            email: extract::extract_email(lines),
            phone: extract::extract_phone(lines),
        },
        summary: extract::extract_summary(lines),
        skills: extract::extract_skills(lines),
        experience: extract::extract_experience(lines),
        education: extract::extract_education(lines),
        certifications: extract::extract_certifications(lines),
    };

    debug!(
        "Extracted fields: email={} phone={} skills={} experience={} education={} certifications={}",
        fields.contact.email.is_some(),
        fields.contact.phone.is_some(),
        fields.skills.len(),
        fields.experience.len(),
        fields.education.len(),
        fields.certifications.len()
    );
    fields
}

/// Parses raw extracted text into a `ResumeRecord`.
///
/// The only await point is the entity recognizer call used for the name.
pub async fn parse_resume(raw_text: &str, recognizer: &dyn EntityRecognizer) -> ResumeRecord {
    let text = NormalizedText::new(raw_text);
    if text.is_empty() {
        warn!("Document has no printable text; every field will be empty");
    }
    let fields = extract_fields(&text);
    let name = name::resolve_name(text.lines(), recognizer).await;

    info!(
        "Parsed resume: {} lines, {} chars, name {}",
        text.lines().len(),
        text.flat().len(),
        if name.is_some() { "found" } else { "missing" }
    );

    ResumeRecord::assemble(name, fields, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner_client::RuleBasedRecognizer;

    const SAMPLE_RESUME: &str = "Jane Doe\r\n\
        jane.doe@example.com | +1 (555) 123-4567\r\n\
        \r\n\
        Professional Summary\r\n\
        Backend engineer with 6 years building payment systems.\r\n\
        Focused on Rust and distributed systems.\r\n\
        \r\n\
        Technical Skills\r\n\
        Languages: Rust, Python, SQL\r\n\
        Docker • Kubernetes • AWS\r\n\
        5+ years PostgreSQL\r\n\
        \r\n\
        Experience\r\n\
        Acme Payments | Senior Backend Engineer\r\n\
        Jan 2020 - Present\r\n\
        Led the ledger rewrite.\r\n\
        Globex | Software Engineer\r\n\
        2017 - 2019\r\n\
        \r\n\
        Education\r\n\
        XYZ University\r\n\
        Bachelor of Science in Computer Science\r\n\
        2013 - 2017\r\n\
        \r\n\
        Certifications\r\n\
        AWS Certified Solutions Architect\r\n\
        CKA\r\n";

    #[tokio::test]
    async fn test_full_resume() {
        let record = parse_resume(SAMPLE_RESUME, &RuleBasedRecognizer).await;

        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(record.contact.phone.as_deref(), Some("+15551234567"));
        assert_eq!(
            record.summary,
            "Backend engineer with 6 years building payment systems. \
             Focused on Rust and distributed systems. Technical Skills"
        );
        assert_eq!(
            record.skills,
            vec!["AWS", "Docker", "Kubernetes", "PostgreSQL", "Python", "Rust", "SQL"]
        );
        assert_eq!(record.experience.len(), 2);
        assert_eq!(
            record.experience[0].company_role,
            "Acme Payments | Senior Backend Engineer"
        );
        assert_eq!(record.experience[1].duration, "2017 - 2019");
        assert_eq!(
            record.education,
            vec![EducationEntry {
                degree: "Bachelor of Science in Computer Science".to_string(),
                institute: "XYZ University".to_string(),
                duration: "2013 - 2017".to_string(),
            }]
        );
        assert_eq!(
            record.certifications,
            vec!["AWS Certified Solutions Architect"]
        );
    }

    #[tokio::test]
    async fn test_garbage_document_yields_empty_record() {
        let record = parse_resume("%%%% 12 ### !!", &RuleBasedRecognizer).await;

        assert_eq!(record.name, None);
        assert_eq!(record.contact, ContactInfo::default());
        assert!(record.skills.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.certifications.is_empty());
    }

    #[tokio::test]
    async fn test_empty_document_yields_empty_record() {
        let record = parse_resume("", &RuleBasedRecognizer).await;

        assert_eq!(record.name, None);
        assert_eq!(record.contact, ContactInfo::default());
        assert_eq!(record.summary, "");
        assert!(record.skills.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.certifications.is_empty());
    }

    #[tokio::test]
    async fn test_parse_is_idempotent() {
        let first = parse_resume(SAMPLE_RESUME, &RuleBasedRecognizer).await;
        let second = parse_resume(SAMPLE_RESUME, &RuleBasedRecognizer).await;
        assert!(first.same_fields(&second));
    }
}
