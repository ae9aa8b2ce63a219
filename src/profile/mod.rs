//! Candidate profile: form fields, coercion and validation.

mod fields;
mod model;
mod validation;

pub use fields::{
    FieldKind, FormField, FormValues, EDUCATION_OPTIONS, FATIGUE_OPTIONS, SKILL_LEVEL_OPTIONS,
};
pub use model::{parse_int_prefix, split_skills, Profile, ProfileDraft, NO_CERTIFICATIONS};
pub use validation::{
    validate_field, validate_profile, FieldCheck, ValidationReport, DOMAIN_REQUIRED,
    EDUCATION_REQUIRED, EXPERIENCE_NEGATIVE, EXPERIENCE_NOT_A_NUMBER, FIELD_INVALID_NUMBER,
    FIELD_NO_SKILLS, FIELD_REQUIRED, NAME_REQUIRED, PROJECT_COUNT_NEGATIVE,
    PROJECT_COUNT_NOT_A_NUMBER, SKILLS_REQUIRED, SKILL_LEVEL_REQUIRED,
};
