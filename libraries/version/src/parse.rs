use crate::Component;

const SEPARATOR: u8 = b'.';

/// Scans `input` as dot-separated groups of ASCII decimal digits.
///
/// Returns the groups as parsed, trailing zeros included, or [`None`] on an
/// empty group, a character outside of `[0-9.]` or a group overflowing
/// [`Component`]. The empty string is the only input without groups.
pub(crate) fn groups(input: &str) -> Option<Vec<Component>> {
    if input.is_empty() {
        return Some(vec![]);
    }

    input.as_bytes().split(|&byte| byte == SEPARATOR).map(group).collect()
}

fn group(digits: &[u8]) -> Option<Component> {
    if digits.is_empty() {
        return None;
    }

    digits.iter().try_fold(0, |value: Component, &digit| {
        if digit.is_ascii_digit() {
            value
                .checked_mul(10)?
                .checked_add(Component::from(digit - b'0'))
        } else {
            None
        }
    })
}
