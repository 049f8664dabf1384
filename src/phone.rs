//! Phone number input mask: `(DD) DDDDD-DDDD`.

/// Longest number accepted: two area-code digits plus nine.
pub const MAX_DIGITS: usize = 11;

/// The ASCII digits of `input`, capped at [`MAX_DIGITS`].
pub fn digits(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect()
}

/// Reformat whatever was typed into the progressive mask.
///
/// The closing parenthesis appears as soon as the area code is complete
/// and the dash once the eighth digit is typed.
pub fn mask_phone(input: &str) -> String {
    let digits = digits(input);
    let mut out = String::with_capacity(16);

    for (i, c) in digits.chars().enumerate() {
        match i {
            0 => out.push('('),
            7 => out.push('-'),
            _ => {}
        }
        out.push(c);
        if i == 1 {
            out.push_str(") ");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_progressive_mask() {
        let expected = [
            "",
            "(1",
            "(12) ",
            "(12) 3",
            "(12) 34",
            "(12) 345",
            "(12) 3456",
            "(12) 34567",
            "(12) 34567-8",
            "(12) 34567-89",
            "(12) 34567-890",
            "(12) 34567-8901",
        ];
        let full = "12345678901";
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(mask_phone(&full[..n]), *want, "after {n} digits");
        }
    }

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(mask_phone("(11) 98765-4321"), "(11) 98765-4321");
        assert_eq!(mask_phone("abc11x9"), "(11) 9");
        assert_eq!(mask_phone("٣٤"), "");
    }

    #[test]
    fn test_caps_at_eleven_digits() {
        assert_eq!(mask_phone("1198765432199"), "(11) 98765-4321");
        assert_eq!(digits("1198765432199"), "11987654321");
    }

    #[test]
    fn test_remask_is_stable() {
        let once = mask_phone("11987654321");
        assert_eq!(mask_phone(&once), once);
    }

    proptest! {
        #[test]
        fn mask_keeps_only_the_first_digits(input in ".{0,40}") {
            let masked = mask_phone(&input);
            let expected: String = input.chars().filter(char::is_ascii_digit).take(MAX_DIGITS).collect();
            prop_assert_eq!(digits(&masked), expected);
            prop_assert!(masked.chars().all(|c| c.is_ascii_digit() || "() -".contains(c)));
        }
    }
}
