/// Overlays a literal display template on a cleaned digit string: each `'0'`
/// in the template consumes the next input digit, every other character is
/// copied verbatim. Callers normalize `digits` to the template's placeholder
/// count first.
pub(crate) fn apply_mask(template: &str, digits: &str) -> String {
    debug_assert_eq!(template.matches('0').count(), digits.len());
    let mut source = digits.chars();
    template
        .chars()
        .map(|c| {
            if c == '0' {
                source.next().unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn overlays_template_left_to_right() {
        assert_eq!(
            apply_mask("00000.000000/0000-00", "23037001380202111"),
            "23037.001380/2021-11"
        );
        assert_eq!(
            apply_mask("0000000-00.0000.0.00.0000", "00020802520125150049"),
            "0002080-25.2012.5.15.0049"
        );
        assert_eq!(apply_mask("0000 0000 0000", "102385010671"), "1023 8501 0671");
    }

    #[test]
    fn copies_separators_verbatim() {
        assert_eq!(apply_mask("0-0/0", "123"), "1-2/3");
        assert_eq!(apply_mask("...", ""), "...");
    }
}
