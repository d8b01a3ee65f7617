use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::draft::ApplicationDraft;
use super::position::Position;
use super::skill::Skill;

/// Validation errors for application form fields.
///
/// Messages are the exact strings shown inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please enter a valid experience greater than 0.")]
    InvalidExperience,
    #[error("Please select a preferred interview time.")]
    MissingInterviewTime,
    #[error("Please select at least one skill.")]
    NoSkills,
}

/// Fields that can carry a validation error.
///
/// The key set is fixed; a field absent from the [`ErrorMap`] is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorField {
    Email,
    Phone,
    Experience,
    InterviewTime,
    AdditionalInfo,
}

/// Field-keyed validation failures for one submission attempt.
///
/// Rebuilt from scratch by [`validate_draft`] on every attempt, never
/// partially updated.
pub type ErrorMap = BTreeMap<ErrorField, ValidationError>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("valid hardcoded regex")
});

/// Validates an email address: non-empty and matching the address pattern
/// (dotted local part, at least one domain label, 2-4 character top label).
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a phone number: non-empty and numeric.
///
/// Any numeric-parseable string passes, including negatives and decimals.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::InvalidPhone);
    }
    match phone.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(()),
        _ => Err(ValidationError::InvalidPhone),
    }
}

/// Validates stated experience for the selected position.
///
/// Only Developer and Designer applicants must state experience; for any
/// other (or no) selection the field is never flagged. A non-empty value
/// that does not parse as a number also passes — the check rejects only
/// values known to be zero or negative.
pub fn validate_experience(
    position: Option<Position>,
    experience: &str,
) -> Result<(), ValidationError> {
    let requires = position.is_some_and(|p| p.requires_experience());
    if !requires {
        return Ok(());
    }
    if experience.is_empty() {
        return Err(ValidationError::InvalidExperience);
    }
    match experience.trim().parse::<f64>() {
        Ok(v) if v <= 0.0 => Err(ValidationError::InvalidExperience),
        _ => Ok(()),
    }
}

/// Validates the preferred interview time: must be non-empty.
pub fn validate_interview_time(interview_time: &str) -> Result<(), ValidationError> {
    if interview_time.is_empty() {
        Err(ValidationError::MissingInterviewTime)
    } else {
        Ok(())
    }
}

/// Validates the skill selection: at least one tag required.
pub fn validate_skills(skills: &[Skill]) -> Result<(), ValidationError> {
    if skills.is_empty() {
        Err(ValidationError::NoSkills)
    } else {
        Ok(())
    }
}

/// Runs every field rule against the draft and collects the failures.
///
/// Rules are evaluated independently; the returned map contains exactly the
/// entries for fields currently violating their rule.
pub fn validate_draft(draft: &ApplicationDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if let Err(e) = validate_email(&draft.email) {
        errors.insert(ErrorField::Email, e);
    }
    if let Err(e) = validate_phone(&draft.phone) {
        errors.insert(ErrorField::Phone, e);
    }
    if let Err(e) = validate_experience(draft.position, &draft.experience) {
        errors.insert(ErrorField::Experience, e);
    }
    if let Err(e) = validate_interview_time(&draft.interview_time) {
        errors.insert(ErrorField::InterviewTime, e);
    }
    if let Err(e) = validate_skills(&draft.skills) {
        errors.insert(ErrorField::AdditionalInfo, e);
    }
    errors
}
