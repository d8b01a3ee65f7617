mod application;
mod draft;
mod position;
mod skill;
mod validation;

pub use application::{Application, PORTFOLIO_PLACEHOLDER};
pub use draft::ApplicationDraft;
pub use position::Position;
pub use skill::{Skill, join_skills};
pub use validation::{
    ErrorField, ErrorMap, ValidationError, validate_draft, validate_email, validate_experience,
    validate_interview_time, validate_phone, validate_skills,
};
