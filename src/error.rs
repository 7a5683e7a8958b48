use thiserror::Error;

/// Why a value was rejected. `validate` collapses all of these to `false`;
/// callers that need the reason must go through `validate_or_fail` or `dv`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No digits were left after stripping non-digit characters
    #[error("value contains no digits")]
    EmptyValue,

    /// The cleaned digit count does not fit the expected length
    #[error("expected {expected} digits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// A structural rule was violated (e.g. all-identical digits, zero
    /// court code), independently of check-digit consistency
    #[error("structurally invalid value: {0}")]
    InvalidValue(&'static str),

    /// The check digits embedded in the value do not match the recomputed ones
    #[error("check digits mismatch: computed {computed}, found {found}")]
    InvalidDv { computed: String, found: String },
}
