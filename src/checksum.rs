//! Shared arithmetic behind the per-type check-digit schemes: positional
//! weighted sums, the mod-11 remainder-to-digit tables and the streaming
//! mod-97 remainder used by the judicial process scheme.

/// Σ digit × weight over a contiguous ascending weight run starting at
/// `first_weight` (first digit × `first_weight`, second × `first_weight`+1,
/// and so on).
pub(crate) fn weighted_sum(digits: &[u32], first_weight: u32) -> u32 {
    digits
        .iter()
        .zip(first_weight..)
        .map(|(digit, weight)| digit * weight)
        .sum()
}

/// Maps a weighted sum's mod-11 remainder to the resulting check digit.
/// The special-cased remainders are data, not control flow, so the per-type
/// schemes stay verifiably consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RemainderRule {
    /// `11 - (sum % 11)`, with raw 11 mapped to 1 and raw 10 mapped to 0
    /// (the NUP 17 rule)
    ElevenComplement,
    /// `sum % 11`, with 10 mapped to 0 (the electoral title rule)
    Modulo,
}

impl RemainderRule {
    pub(crate) fn digit(self, sum: u32) -> u32 {
        let remainder = sum % 11;
        match self {
            RemainderRule::ElevenComplement => match remainder {
                0 => 1,
                1 => 0,
                r => 11 - r,
            },
            RemainderRule::Modulo => match remainder {
                10 => 0,
                r => r,
            },
        }
    }
}

/// Remainder of an arbitrarily long decimal string modulo 97, computed
/// left-to-right so the value never needs to fit an integer type.
pub(crate) fn mod97(digits: &str) -> u32 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u32, |remainder, byte| {
            (remainder * 10 + u32::from(byte - b'0')) % 97
        })
}

/// Digit values of a cleaned numeric string, in order.
pub(crate) fn digit_values(digits: &str) -> Vec<u32> {
    digits.bytes().map(|byte| u32::from(byte - b'0')).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weighted_sum_is_positional() {
        // 1*2 + 2*3 + 3*4 = 20
        assert_eq!(weighted_sum(&[1, 2, 3], 2), 20);
        // 0*7 + 6*8 + 7*9 = 111
        assert_eq!(weighted_sum(&[0, 6, 7], 7), 111);
        assert_eq!(weighted_sum(&[], 2), 0);
    }

    #[test]
    fn eleven_complement_rule() {
        // remainder 10 -> 11 - 10 = 1
        assert_eq!(RemainderRule::ElevenComplement.digit(10), 1);
        // remainder 0 would give raw 11 -> 1
        assert_eq!(RemainderRule::ElevenComplement.digit(11), 1);
        // remainder 1 would give raw 10 -> 0
        assert_eq!(RemainderRule::ElevenComplement.digit(12), 0);
        // remainder 2 -> 9
        assert_eq!(RemainderRule::ElevenComplement.digit(13), 9);
    }

    #[test]
    fn modulo_rule() {
        assert_eq!(RemainderRule::Modulo.digit(117), 7);
        // remainder 10 -> 0
        assert_eq!(RemainderRule::Modulo.digit(21), 0);
        assert_eq!(RemainderRule::Modulo.digit(0), 0);
    }

    #[test]
    fn mod97_matches_integer_arithmetic() {
        assert_eq!(mod97("0002080"), 2080 % 97);
        assert_eq!(mod97("432012515"), 432012515 % 97);
        assert_eq!(mod97("26004900"), 26004900 % 97);
        assert_eq!(mod97("0"), 0);
    }
}
