pub mod electoral_title;
pub mod federal_protocol;
pub mod judicial_process;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Boolean-predicate view of a validator, for callers that only care
/// whether a value is well formed.
pub trait Validator: Send + Sync {
    fn is_valid(&self, value: &str) -> bool;
}

/// Identifier types supported by this crate, as a serializable tag so a
/// validator can be selected from configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter)]
#[serde(tag = "type")]
pub enum IdentifierKind {
    /// 17-character unified federal protocol number (NUP 17)
    FederalProtocol,
    /// 12-digit electoral title
    ElectoralTitle,
    /// 20-character judicial process number
    JudicialProcess,
}

impl IdentifierKind {
    /// Computes the 2-digit check pair for a body of this identifier type.
    pub fn dv(&self, value: &str) -> Result<String, ValidationError> {
        match self {
            IdentifierKind::FederalProtocol => federal_protocol::dv(value),
            IdentifierKind::ElectoralTitle => electoral_title::dv(value),
            IdentifierKind::JudicialProcess => judicial_process::dv(value),
        }
    }

    /// Renders the canonical display form of a full value.
    pub fn mask(&self, value: &str) -> Result<String, ValidationError> {
        match self {
            IdentifierKind::FederalProtocol => federal_protocol::mask(value),
            IdentifierKind::ElectoralTitle => electoral_title::mask(value),
            IdentifierKind::JudicialProcess => judicial_process::mask(value),
        }
    }

    /// Generates a structurally valid synthetic value.
    pub fn fake(&self, masked: bool) -> String {
        match self {
            IdentifierKind::FederalProtocol => federal_protocol::fake(masked),
            IdentifierKind::ElectoralTitle => electoral_title::fake(masked),
            IdentifierKind::JudicialProcess => judicial_process::fake(masked),
        }
    }

    /// Checks a full value, reporting why it was rejected.
    pub fn validate_or_fail(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            IdentifierKind::FederalProtocol => federal_protocol::validate_or_fail(value),
            IdentifierKind::ElectoralTitle => electoral_title::validate_or_fail(value),
            IdentifierKind::JudicialProcess => judicial_process::validate_or_fail(value),
        }
    }

    /// Checks a full value; never fails.
    pub fn validate(&self, value: &str) -> bool {
        self.validate_or_fail(value).is_ok()
    }
}

impl Validator for IdentifierKind {
    fn is_valid(&self, value: &str) -> bool {
        self.validate(value)
    }
}

/// `count` uniformly random decimal digits.
fn random_digits<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
