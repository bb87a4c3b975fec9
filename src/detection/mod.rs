//! Subject-pixel detection module
//!
//! This module decides which template pixels belong to the recolorable
//! subject (drink liquid or cup body) and which belong to the untouched
//! background, logo, lid, and highlight regions.

pub mod subject;

pub use subject::{is_subject_pixel, SubjectKind, SubjectThresholds};
