//! Fixed field set of the profile form.
//!
//! Adding a field: add a variant here + an entry in `FormField::all()`.
//! The `as_str()` value is the persistence key. Once published, do not rename.

use std::collections::HashMap;

/// Unique identifier for each form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Education,
    Experience,
    ProjectCount,
    Domain,
    Skills,
    Certifications,
    SkillLevel,
    Fatigue,
}

/// How a field is edited and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Whole number, must not be negative.
    Number,
    /// Comma-separated list of entries.
    List,
    /// Free text with a fixed set of suggested options.
    Choice(&'static [&'static str]),
}

pub const EDUCATION_OPTIONS: &[&str] = &["High School", "Bachelor's", "Master's", "PhD"];
pub const SKILL_LEVEL_OPTIONS: &[&str] = &["Beginner", "Intermediate", "Advanced", "Expert"];
pub const FATIGUE_OPTIONS: &[&str] = &["Low", "Medium", "High"];

impl FormField {
    /// Stable storage key, identical to the form control name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::ProjectCount => "projectCount",
            Self::Domain => "domain",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::SkillLevel => "skillLevel",
            Self::Fatigue => "fatigue",
        }
    }

    /// All fields in display order.
    pub fn all() -> &'static [FormField] {
        &[
            Self::Name,
            Self::Education,
            Self::Experience,
            Self::ProjectCount,
            Self::Domain,
            Self::Skills,
            Self::Certifications,
            Self::SkillLevel,
            Self::Fatigue,
        ]
    }

    /// Parse from a storage key. Unknown keys return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Education => "Education",
            Self::Experience => "Years of Experience",
            Self::ProjectCount => "Project Count",
            Self::Domain => "Domain",
            Self::Skills => "Skills",
            Self::Certifications => "Certifications",
            Self::SkillLevel => "Skill Level",
            Self::Fatigue => "Fatigue",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Experience | Self::ProjectCount => FieldKind::Number,
            Self::Skills => FieldKind::List,
            Self::Education => FieldKind::Choice(EDUCATION_OPTIONS),
            Self::SkillLevel => FieldKind::Choice(SKILL_LEVEL_OPTIONS),
            Self::Fatigue => FieldKind::Choice(FATIGUE_OPTIONS),
            Self::Name | Self::Domain | Self::Certifications => FieldKind::Text,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Certifications | Self::Fatigue)
    }

    /// One-line hint shown while the field is focused.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Education => Some("Select your highest level of education"),
            Self::Experience => Some("Total years of professional experience"),
            Self::ProjectCount => Some("Number of projects you have worked on"),
            Self::Domain => Some("Your primary area of expertise"),
            Self::Skills => {
                Some("Technical skills separated by commas (e.g., Python, JavaScript, React)")
            }
            Self::Certifications => Some("Professional certifications (leave empty if none)"),
            Self::SkillLevel => Some("Your current skill level in your domain"),
            Self::Name | Self::Fatigue => None,
        }
    }
}

/// Raw text of every field, exactly as typed.
///
/// Missing entries read as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    values: HashMap<FormField, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Map of storage key to raw value for every field, including empty ones.
    pub fn to_raw_map(&self) -> HashMap<String, String> {
        FormField::all()
            .iter()
            .map(|field| (field.as_str().to_string(), self.get(*field).to_string()))
            .collect()
    }

    /// Overwrite fields present in `raw`. Unknown keys are ignored, fields
    /// absent from `raw` keep their current value.
    pub fn apply_raw_map(&mut self, raw: &HashMap<String, String>) {
        for (key, value) in raw {
            if let Some(field) = FormField::parse(key) {
                self.set(field, value.clone());
            }
        }
    }
}
