//! Value primitives shared across the fieldval workspace.
//!
//! This crate provides the format-aware date conversion and the numeric
//! coercion that the validator and engine crates build on.

pub mod dateformat;
pub mod number;

pub use dateformat::{CanonicalDate, DateFormat, ParseCanonicalDateError};
pub use number::ParsedNumber;
