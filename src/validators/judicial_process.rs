//! Judicial process number: displayed as `0000000-00.0000.0.00.0000`
//! (sequential number, check pair, year, judicial segment, court of origin,
//! originating unit). The check pair is the staged mod-97 scheme of the
//! national judiciary numbering standard, computed over the body in
//! `sequential + year + segment + court + origin` order.

use rand::Rng;

use crate::checksum::mod97;
use crate::error::ValidationError;
use crate::mask::apply_mask;
use crate::normalization::{normalize, NormalizeOptions};
use crate::validators::random_digits;

pub const FULL_LENGTH: usize = 20;
pub const BODY_LENGTH: usize = 18;
pub const MASK_TEMPLATE: &str = "0000000-00.0000.0.00.0000";

const SEQUENTIAL_LENGTH: usize = 7;
// Display-order field offsets
const DV_RANGE: std::ops::Range<usize> = 7..9;
const SEGMENT_INDEX: usize = 13;
const COURT_RANGE: std::ops::Range<usize> = 14..16;

const BODY_OPTIONS: NormalizeOptions = NormalizeOptions {
    reject_empty: true,
    reject_longer: true,
    fill_zeros_left: true,
    trim_right: false,
    reject_repeated: false,
};

const FULL_OPTIONS: NormalizeOptions = NormalizeOptions {
    reject_empty: true,
    reject_longer: true,
    fill_zeros_left: true,
    trim_right: false,
    reject_repeated: false,
};

/// Check pair of an 18-digit computation-order body, already normalized.
///
/// Staged so the value never needs to fit an integer type: the remainder of
/// each stage is carried, as a plain decimal number, in front of the next
/// group of digits.
fn check_pair(body: &str) -> String {
    let r1 = mod97(&body[..SEQUENTIAL_LENGTH]);
    // year + segment + court
    let r2 = mod97(&format!("{r1}{}", &body[SEQUENTIAL_LENGTH..14]));
    // originating unit, with the two check-digit positions zeroed
    let r3 = mod97(&format!("{r2}{}00", &body[14..]));
    format!("{:02}", 98 - r3)
}

/// Normalizes a court-of-origin code for generation: absent or zero codes
/// become `"01"`. Validation never goes through here; a literal zero code
/// must fail there.
fn court_or_default(code: &str) -> String {
    if code.bytes().all(|b| b == b'0') {
        "01".to_string()
    } else {
        format!("{code:0>2}")
    }
}

/// Computes the check pair for an 18-digit body given in computation order
/// (`sequential + year + segment + court + origin`). Shorter values are
/// left-padded with zeros.
pub fn dv(value: &str) -> Result<String, ValidationError> {
    let body = normalize(value, BODY_LENGTH, &BODY_OPTIONS)?;
    Ok(check_pair(&body))
}

/// Renders a full value as `0000000-00.0000.0.00.0000`.
pub fn mask(value: &str) -> Result<String, ValidationError> {
    let full = normalize(value, FULL_LENGTH, &FULL_OPTIONS)?;
    Ok(apply_mask(MASK_TEMPLATE, &full))
}

/// Checks a full 20-digit value (masked or not), reporting why it was
/// rejected. A zero judicial segment or a literal `"00"` court code is
/// structurally invalid no matter what the check digits say.
pub fn validate_or_fail(value: &str) -> Result<(), ValidationError> {
    let full = normalize(value, FULL_LENGTH, &FULL_OPTIONS)?;
    if &full[SEGMENT_INDEX..SEGMENT_INDEX + 1] == "0" {
        return Err(ValidationError::InvalidValue("zero judicial segment code"));
    }
    if &full[COURT_RANGE] == "00" {
        return Err(ValidationError::InvalidValue("zero court code"));
    }

    // Reassemble the computation-order body around the embedded check pair
    let body = format!("{}{}", &full[..SEQUENTIAL_LENGTH], &full[DV_RANGE.end..]);
    let computed = check_pair(&body);
    let found = &full[DV_RANGE];
    if computed != found {
        return Err(ValidationError::InvalidDv {
            computed,
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Checks a full 20-digit value; never fails.
pub fn validate(value: &str) -> bool {
    validate_or_fail(value).is_ok()
}

/// Generates a structurally valid process number from an injected random
/// source.
pub fn fake_with<R: Rng>(rng: &mut R, masked: bool) -> String {
    let sequential = random_digits(rng, SEQUENTIAL_LENGTH);
    let year = rng.gen_range(1900..=2099u32);
    let segment = rng.gen_range(1..=9u32);
    let court = court_or_default(&rng.gen_range(0..=27u32).to_string());
    let origin = random_digits(rng, 4);

    let body = format!("{sequential}{year}{segment}{court}{origin}");
    let pair = check_pair(&body);
    let full = format!("{sequential}{pair}{year}{segment}{court}{origin}");
    if masked {
        apply_mask(MASK_TEMPLATE, &full)
    } else {
        full
    }
}

/// Generates a structurally valid process number.
pub fn fake(masked: bool) -> String {
    fake_with(&mut rand::thread_rng(), masked)
}
