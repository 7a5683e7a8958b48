// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

//! Check-digit ("DV") algorithms for structured Brazilian government
//! identifiers: the 17-character unified federal protocol number (NUP 17),
//! the 12-digit electoral title and the 20-character judicial process
//! number.
//!
//! Each identifier type lives in its own module with the same surface:
//! `dv` computes the 2-digit check pair for a body, `validate` /
//! `validate_or_fail` check a full value, `mask` renders the canonical
//! display form and `fake` produces structurally valid synthetic values
//! for tests.

mod checksum;
mod error;
mod mask;
mod normalization;
mod validators;

// This is the public API of the library
pub use error::ValidationError;
pub use normalization::{normalize, NormalizeOptions};
pub use validators::{electoral_title, federal_protocol, judicial_process};
pub use validators::{IdentifierKind, Validator};
