//! Profile payload and the coercion from raw form text.

use serde::{Deserialize, Serialize};

use super::fields::{FormField, FormValues};

/// Certification text sent when the field is left empty.
pub const NO_CERTIFICATIONS: &str = "None";

/// Profile after type coercion, before validation.
///
/// Numeric fields are `None` when the text does not start with a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub education: String,
    pub years_of_experience: Option<i64>,
    pub project_count: Option<i64>,
    pub domain: String,
    pub skills: Vec<String>,
    pub certifications: String,
    pub skill_level: String,
    pub fatigue: String,
}

impl ProfileDraft {
    /// Coerce raw form text into typed values.
    ///
    /// Text fields are taken as typed (the name is trimmed only when
    /// validated). Numbers use integer-prefix parsing, skills are split on
    /// commas with blanks dropped, and empty certifications become `"None"`.
    pub fn from_form(values: &FormValues) -> Self {
        let certifications = values.get(FormField::Certifications);
        Self {
            name: values.get(FormField::Name).to_string(),
            education: values.get(FormField::Education).to_string(),
            years_of_experience: parse_int_prefix(values.get(FormField::Experience)),
            project_count: parse_int_prefix(values.get(FormField::ProjectCount)),
            domain: values.get(FormField::Domain).to_string(),
            skills: split_skills(values.get(FormField::Skills)),
            certifications: if certifications.is_empty() {
                NO_CERTIFICATIONS.to_string()
            } else {
                certifications.to_string()
            },
            skill_level: values.get(FormField::SkillLevel).to_string(),
            fatigue: values.get(FormField::Fatigue).to_string(),
        }
    }
}

/// Validated submission payload, serialized with the scoring service's keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Years_of_Experience")]
    pub years_of_experience: u64,
    #[serde(rename = "Project_Count")]
    pub project_count: u64,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Skills")]
    pub skills: Vec<String>,
    #[serde(rename = "Certifications")]
    pub certifications: String,
    #[serde(rename = "Skill_Level")]
    pub skill_level: String,
    #[serde(rename = "Fatigue")]
    pub fatigue: String,
}

/// Split a comma-separated list, trimming entries and dropping blanks.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit (`"3 years"` is 3). Returns `None` when no digit follows, or the
/// value does not fit in an `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    rest[..digits_end]
        .parse::<i64>()
        .ok()
        .map(|value| value * sign)
}
