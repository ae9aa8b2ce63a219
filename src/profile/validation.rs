//! Validation rules for the profile form.
//!
//! Two independent checks:
//! - `validate_profile` gates submission and collects every failing rule.
//! - `validate_field` runs when a field loses focus and only drives that
//!   field's visual state.

use super::fields::{FieldKind, FormField};
use super::model::{parse_int_prefix, split_skills, Profile, ProfileDraft};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EDUCATION_REQUIRED: &str = "Education level is required";
pub const EXPERIENCE_NEGATIVE: &str = "Years of experience must be non-negative";
pub const EXPERIENCE_NOT_A_NUMBER: &str = "Years of experience must be a valid number";
pub const PROJECT_COUNT_NEGATIVE: &str = "Project count must be non-negative";
pub const PROJECT_COUNT_NOT_A_NUMBER: &str = "Project count must be a valid number";
pub const DOMAIN_REQUIRED: &str = "Domain is required";
pub const SKILLS_REQUIRED: &str = "At least one skill is required";
pub const SKILL_LEVEL_REQUIRED: &str = "Skill level is required";

pub const FIELD_REQUIRED: &str = "This field is required";
pub const FIELD_INVALID_NUMBER: &str = "Please enter a valid number";
pub const FIELD_NO_SKILLS: &str = "Please enter at least one skill";

/// Outcome of `validate_profile`: every failing rule, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Single notification text for the whole report.
    pub fn summary(&self) -> String {
        self.errors.join(", ")
    }
}

/// Outcome of `validate_field`. `message` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub valid: bool,
    pub message: String,
}

impl FieldCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Evaluate every profile rule. Rules do not short-circuit.
pub fn validate_profile(draft: &ProfileDraft) -> ValidationReport {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(NAME_REQUIRED);
    }
    if draft.education.is_empty() {
        errors.push(EDUCATION_REQUIRED);
    }
    match draft.years_of_experience {
        None => errors.push(EXPERIENCE_NOT_A_NUMBER),
        Some(years) if years < 0 => errors.push(EXPERIENCE_NEGATIVE),
        Some(_) => {}
    }
    match draft.project_count {
        None => errors.push(PROJECT_COUNT_NOT_A_NUMBER),
        Some(count) if count < 0 => errors.push(PROJECT_COUNT_NEGATIVE),
        Some(_) => {}
    }
    if draft.domain.is_empty() {
        errors.push(DOMAIN_REQUIRED);
    }
    if draft.skills.is_empty() {
        errors.push(SKILLS_REQUIRED);
    }
    if draft.skill_level.is_empty() {
        errors.push(SKILL_LEVEL_REQUIRED);
    }

    ValidationReport {
        errors: errors.into_iter().map(str::to_string).collect(),
    }
}

impl TryFrom<ProfileDraft> for Profile {
    type Error = ValidationReport;

    fn try_from(draft: ProfileDraft) -> Result<Self, Self::Error> {
        let report = validate_profile(&draft);
        if !report.is_valid() {
            return Err(report);
        }

        // The report guarantees both counts are present and non-negative.
        let years = draft.years_of_experience.unwrap_or_default();
        let projects = draft.project_count.unwrap_or_default();
        Ok(Profile {
            name: draft.name,
            education: draft.education,
            years_of_experience: years.unsigned_abs(),
            project_count: projects.unsigned_abs(),
            domain: draft.domain,
            skills: draft.skills,
            certifications: draft.certifications,
            skill_level: draft.skill_level,
            fatigue: draft.fatigue,
        })
    }
}

/// Per-field check run on blur. Later rules overwrite earlier messages.
pub fn validate_field(field: FormField, raw: &str) -> FieldCheck {
    let value = raw.trim();
    let mut check = FieldCheck::ok();

    if field.is_required() && value.is_empty() {
        check = FieldCheck::fail(FIELD_REQUIRED);
    }

    if field.kind() == FieldKind::Number && !value.is_empty() {
        match parse_int_prefix(value) {
            Some(number) if number >= 0 => {}
            _ => check = FieldCheck::fail(FIELD_INVALID_NUMBER),
        }
    }

    if field.kind() == FieldKind::List && !value.is_empty() && split_skills(value).is_empty() {
        check = FieldCheck::fail(FIELD_NO_SKILLS);
    }

    check
}
