#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Offline terminal job-application form.
//!
//! One interactive form screen: free-text and numeric inputs, a position
//! selector with conditional fields, a skill checkbox group, inline
//! validation on submit, and a read-only summary of the last accepted
//! application. All state is in-memory and lives for one session.

pub mod logging;
pub mod model;
pub mod tui;
