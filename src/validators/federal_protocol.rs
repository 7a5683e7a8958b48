//! Unified federal protocol number (NUP 17): 15 body digits (issuing organ,
//! sequential number and year) followed by a 2-digit mod-11 check pair
//! computed over the reversed body.

use rand::Rng;

use crate::checksum::{digit_values, weighted_sum, RemainderRule};
use crate::error::ValidationError;
use crate::mask::apply_mask;
use crate::normalization::{normalize, NormalizeOptions};
use crate::validators::random_digits;

pub const FULL_LENGTH: usize = 17;
pub const BODY_LENGTH: usize = 15;
pub const MASK_TEMPLATE: &str = "00000.000000/0000-00";

const RULE: RemainderRule = RemainderRule::ElevenComplement;

const BODY_OPTIONS: NormalizeOptions = NormalizeOptions {
    reject_empty: true,
    reject_longer: false,
    fill_zeros_left: true,
    trim_right: true,
    reject_repeated: false,
};

const FULL_OPTIONS: NormalizeOptions = NormalizeOptions {
    reject_empty: true,
    reject_longer: true,
    fill_zeros_left: true,
    trim_right: false,
    reject_repeated: false,
};

/// Check pair of a 15-digit body, already normalized.
///
/// The first digit weights the reversed body with 2..=16; the second
/// prefixes that digit to the reversed body and weights with 2..=17.
fn check_pair(body: &str) -> String {
    let mut reversed = digit_values(body);
    reversed.reverse();
    let dv1 = RULE.digit(weighted_sum(&reversed, 2));

    let mut chained = Vec::with_capacity(reversed.len() + 1);
    chained.push(dv1);
    chained.extend_from_slice(&reversed);
    let dv2 = RULE.digit(weighted_sum(&chained, 2));

    format!("{dv1}{dv2}")
}

/// Computes the 2-digit check pair for a protocol body. A full 17-digit
/// value is accepted too; its trailing check digits are dropped first.
pub fn dv(value: &str) -> Result<String, ValidationError> {
    let body = normalize(value, BODY_LENGTH, &BODY_OPTIONS)?;
    Ok(check_pair(&body))
}

/// Renders a full value as `00000.000000/0000-00`.
pub fn mask(value: &str) -> Result<String, ValidationError> {
    let full = normalize(value, FULL_LENGTH, &FULL_OPTIONS)?;
    Ok(apply_mask(MASK_TEMPLATE, &full))
}

/// Checks a full 17-digit value (masked or not), reporting why it was
/// rejected.
pub fn validate_or_fail(value: &str) -> Result<(), ValidationError> {
    let full = normalize(value, FULL_LENGTH, &FULL_OPTIONS)?;
    let computed = check_pair(&full[..BODY_LENGTH]);
    let found = &full[BODY_LENGTH..];
    if computed != found {
        return Err(ValidationError::InvalidDv {
            computed,
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Checks a full 17-digit value; never fails.
pub fn validate(value: &str) -> bool {
    validate_or_fail(value).is_ok()
}

/// Generates a structurally valid protocol number from an injected random
/// source.
pub fn fake_with<R: Rng>(rng: &mut R, masked: bool) -> String {
    let body = random_digits(rng, BODY_LENGTH);
    let full = format!("{body}{}", check_pair(&body));
    if masked {
        apply_mask(MASK_TEMPLATE, &full)
    } else {
        full
    }
}

/// Generates a structurally valid protocol number.
pub fn fake(masked: bool) -> String {
    fake_with(&mut rand::thread_rng(), masked)
}
