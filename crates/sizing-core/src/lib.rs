//! Core types for the position sizing calculators.
//!
//! This crate provides the building blocks shared by the engine and the
//! presentation layers:
//! - Trade inputs for each calculator mode and the calculation result
//! - Position direction and per-field validation failures
//! - The immutable message table used for field errors
//! - Numeric validators

pub mod error;
pub mod messages;
pub mod types;
pub mod validators;

pub use error::{FieldError, RejectionKind, Stage, ValidationFailure};
pub use messages::Messages;
pub use types::*;
pub use validators::{is_percentage, is_positive_number, is_valid_number, validate_inputs, RawNumber};
