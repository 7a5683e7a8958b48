//! Electoral title: an 8-digit sequential number, a 2-digit federation-unit
//! code and a 2-digit check pair. Both check digits use the plain mod-11
//! remainder with 10 mapped to 0; the second chains the first after the
//! federation-unit code.

use rand::Rng;

use crate::checksum::{digit_values, weighted_sum, RemainderRule};
use crate::error::ValidationError;
use crate::mask::apply_mask;
use crate::normalization::{normalize, NormalizeOptions};
use crate::validators::random_digits;

pub const FULL_LENGTH: usize = 12;
pub const BODY_LENGTH: usize = 10;
pub const MASK_TEMPLATE: &str = "0000 0000 0000";

const SEQUENTIAL_LENGTH: usize = 8;
/// Federation-unit codes issued by the electoral authority: 01 through 27
/// (28 is used for applications from abroad and is not generated here).
const FEDERATION_UNIT_RANGE: std::ops::RangeInclusive<u32> = 1..=27;

const RULE: RemainderRule = RemainderRule::Modulo;

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
    // An all-identical title (e.g. the all-zero one) carries consistent
    // check digits, so it has to be rejected structurally
    reject_repeated: true,
};

/// Check pair of a 10-digit body, already normalized.
fn check_pair(body: &str) -> String {
    let digits = digit_values(body);
    let dv1 = RULE.digit(weighted_sum(&digits[..SEQUENTIAL_LENGTH], 2));
    let dv2 = RULE.digit(weighted_sum(
        &[digits[SEQUENTIAL_LENGTH], digits[SEQUENTIAL_LENGTH + 1], dv1],
        7,
    ));
    format!("{dv1}{dv2}")
}

/// Computes the 2-digit check pair for a title body (sequential number plus
/// federation-unit code). A full 12-digit title is accepted too.
pub fn dv(value: &str) -> Result<String, ValidationError> {
    let body = normalize(value, BODY_LENGTH, &BODY_OPTIONS)?;
    Ok(check_pair(&body))
}

/// Renders a full value as `0000 0000 0000`.
pub fn mask(value: &str) -> Result<String, ValidationError> {
    let full = normalize(value, FULL_LENGTH, &FULL_OPTIONS)?;
    Ok(apply_mask(MASK_TEMPLATE, &full))
}

/// Checks a full 12-digit title, reporting why it was rejected.
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

/// Checks a full 12-digit title; never fails.
pub fn validate(value: &str) -> bool {
    validate_or_fail(value).is_ok()
}

/// Generates a structurally valid title from an injected random source.
pub fn fake_with<R: Rng>(rng: &mut R, masked: bool) -> String {
    let sequential = random_digits(rng, SEQUENTIAL_LENGTH);
    let federation_unit = rng.gen_range(FEDERATION_UNIT_RANGE);
    let body = format!("{sequential}{federation_unit:02}");
    let full = format!("{body}{}", check_pair(&body));
    if masked {
        apply_mask(MASK_TEMPLATE, &full)
    } else {
        full
    }
}

/// Generates a structurally valid title.
pub fn fake(masked: bool) -> String {
    fake_with(&mut rand::thread_rng(), masked)
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn computes_known_check_pairs() {
        assert_eq!(dv("1023850106").unwrap(), "71");
        // Remainder 10 on the first pass comes out as 0
        assert_eq!(dv("4387129602").unwrap(), "05");
        // A full title trims down to its body first
        assert_eq!(dv("102385010671").unwrap(), "71");
    }

    #[test]
    fn masks_to_canonical_form() {
        assert_eq!(mask("102385010671").unwrap(), "1023 8501 0671");
        assert_eq!(mask("438712960205").unwrap(), "4387 1296 0205");
    }

    #[test]
    fn validates_masked_and_unmasked_forms() {
        let valid = vec!["102385010671", "1023 8501 0671", "438712960205"];
        for value in valid {
            assert!(validate(value), "rejected {value}");
        }
    }

    #[test]
    fn rejects_wrong_check_digits() {
        let invalid = vec!["102385010672", "102385010611", "438712960250"];
        for value in invalid {
            assert!(!validate(value), "accepted {value}");
        }
        assert_eq!(
            validate_or_fail("102385010672"),
            Err(ValidationError::InvalidDv {
                computed: "71".to_string(),
                found: "72".to_string(),
            })
        );
    }

    #[test]
    fn rejects_equal_sequences() {
        let invalid = vec!["000000000000", "111111111111", "9999 9999 9999"];
        for value in invalid {
            assert_eq!(
                validate_or_fail(value),
                Err(ValidationError::InvalidValue("all digits are identical")),
                "accepted {value}"
            );
        }
    }

    #[test]
    fn rejects_empty_and_overlong_input() {
        assert_eq!(validate_or_fail(""), Err(ValidationError::EmptyValue));
        assert_eq!(dv(""), Err(ValidationError::EmptyValue));
        assert_eq!(
            validate_or_fail("1023850106715"),
            Err(ValidationError::InvalidLength {
                expected: FULL_LENGTH,
                found: 13
            })
        );
    }

    #[test]
    fn flipping_a_check_digit_invalidates() {
        let valid = "102385010671";
        for position in BODY_LENGTH..FULL_LENGTH {
            let original = valid.as_bytes()[position];
            for digit in b'0'..=b'9' {
                if digit == original {
                    continue;
                }
                let mut flipped = valid.as_bytes().to_vec();
                flipped[position] = digit;
                let flipped = String::from_utf8(flipped).unwrap();
                assert!(!validate(&flipped), "accepted {flipped}");
            }
        }
    }

    #[test]
    fn fakes_always_validate() {
        let mut rng = StdRng::seed_from_u64(0x5449_544f);
        for _ in 0..500 {
            let plain = fake_with(&mut rng, false);
            assert_eq!(plain.len(), FULL_LENGTH);
            assert!(validate(&plain), "rejected {plain}");
            // Federation-unit code stays in the issued range
            let federation_unit: u32 = plain[8..10].parse().unwrap();
            assert!(FEDERATION_UNIT_RANGE.contains(&federation_unit));

            let masked = fake_with(&mut rng, true);
            assert_eq!(masked.len(), MASK_TEMPLATE.len());
            assert!(validate(&masked), "rejected {masked}");
        }
    }
}
