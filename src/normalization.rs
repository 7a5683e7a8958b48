use crate::error::ValidationError;

/// How `normalize` reconciles a cleaned digit string with its target length.
/// All flags default to off; each operation enables exactly the ones its
/// contract needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Fail with `EmptyValue` when no digits survive cleaning
    pub reject_empty: bool,
    /// Fail with `InvalidLength` when there are more digits than the target
    pub reject_longer: bool,
    /// Left-pad with zeros up to the target length
    pub fill_zeros_left: bool,
    /// Keep the leftmost `length` digits and drop the rest (used when a
    /// full identifier is handed to a body-only operation)
    pub trim_right: bool,
    /// Fail with `InvalidValue` when every digit is identical
    pub reject_repeated: bool,
}

/// Strips everything but ASCII digits from `value` and coerces the result
/// to exactly `length` digits according to `options`.
pub fn normalize(
    value: &str,
    length: usize,
    options: &NormalizeOptions,
) -> Result<String, ValidationError> {
    let mut digits: String = value.chars().filter(char::is_ascii_digit).collect();

    if options.reject_empty && digits.is_empty() {
        return Err(ValidationError::EmptyValue);
    }
    if options.reject_longer && digits.len() > length {
        return Err(ValidationError::InvalidLength {
            expected: length,
            found: digits.len(),
        });
    }
    if options.trim_right && digits.len() > length {
        digits.truncate(length);
    }
    if options.fill_zeros_left && digits.len() < length {
        digits.insert_str(0, &"0".repeat(length - digits.len()));
    }
    if options.reject_repeated {
        let mut bytes = digits.bytes();
        if let Some(first) = bytes.next() {
            if bytes.all(|b| b == first) {
                return Err(ValidationError::InvalidValue("all digits are identical"));
            }
        }
    }
    if digits.len() != length {
        return Err(ValidationError::InvalidLength {
            expected: length,
            found: digits.len(),
        });
    }

    Ok(digits)
}
