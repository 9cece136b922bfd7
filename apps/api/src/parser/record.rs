//! The structured output of one parsed résumé.
//!
//! The serialized shape of [`ResumeRecord`] is the public JSON contract served
//! by the upload and download endpoints; field names and nesting must not
//! drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company_role: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institute: String,
    pub duration: String,
}

/// Everything the field extractors produced, before the record is stamped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub contact: ContactInfo,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub contact: ContactInfo,
    pub summary: String,
    /// Unique, sorted case-insensitively.
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ResumeRecord {
    /// Merges extractor outputs. Never fails; any field may be empty.
    pub fn assemble(
        name: Option<String>,
        fields: ExtractedFields,
        created_at: DateTime<Utc>,
    ) -> Self {
        let ExtractedFields {
            contact,
            summary,
            skills,
            experience,
            education,
            certifications,
        } = fields;

        ResumeRecord {
            name,
            contact,
            summary,
            skills,
            experience,
            education,
            certifications,
            created_at,
        }
    }

    /// True when the record carries the same extracted data, ignoring `created_at`.
    pub fn same_fields(&self, other: &ResumeRecord) -> bool {
        ResumeRecord {
            created_at: other.created_at,
            ..self.clone()
        } == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_serializes_all_keys() {
        let record = ResumeRecord::assemble(None, ExtractedFields::default(), Utc::now());
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "certifications",
                "contact",
                "created_at",
                "education",
                "experience",
                "name",
                "skills",
                "summary"
            ]
        );
        assert!(json["name"].is_null());
        assert!(json["contact"]["email"].is_null());
        assert!(json["contact"]["phone"].is_null());
        assert_eq!(json["skills"], serde_json::json!([]));
    }

    #[test]
    fn test_entry_field_names_are_stable() {
        let fields = ExtractedFields {
            experience: vec![ExperienceEntry {
                company_role: "Acme | Engineer".to_string(),
                duration: "2019 - 2021".to_string(),
            }],
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                institute: "XYZ".to_string(),
                duration: "2016".to_string(),
            }],
            ..Default::default()
        };
        let record = ResumeRecord::assemble(Some("Jane Doe".into()), fields, Utc::now());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["experience"][0]["company_role"], "Acme | Engineer");
        assert_eq!(json["experience"][0]["duration"], "2019 - 2021");
        assert_eq!(json["education"][0]["degree"], "BSc");
        assert_eq!(json["education"][0]["institute"], "XYZ");
        assert_eq!(json["education"][0]["duration"], "2016");
    }

    #[test]
    fn test_json_roundtrip_preserves_record() {
        let record = ResumeRecord::assemble(
            Some("Jane".into()),
            ExtractedFields {
                skills: vec!["Rust".into()],
                ..Default::default()
            },
            Utc::now(),
        );
        let text = serde_json::to_string(&record).unwrap();
        let back: ResumeRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_same_fields_ignores_timestamp() {
        let earlier = ResumeRecord::assemble(None, ExtractedFields::default(), Utc::now());
        let later = ResumeRecord {
            created_at: earlier.created_at + chrono::Duration::seconds(5),
            ..earlier.clone()
        };
        assert!(earlier.same_fields(&later));
        assert_ne!(earlier, later);
    }
}
