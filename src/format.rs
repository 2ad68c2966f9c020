/// 3-4-6 display grouping for 13-character codes; anything else passes
/// through untouched. Length is the only gate — a checksum-invalid code
/// still formats.
pub fn format_gtin(value: &str) -> String {
    if value.chars().count() != 13 {
        return value.into();
    }

    let mut grouped = String::with_capacity(value.len() + 2);
    for (i, c) in value.chars().enumerate() {
        if i == 3 || i == 7 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    grouped
}

/// 4-4 display grouping, gated on exactly eight digits.
pub fn format_ean8(value: &str) -> String {
    if value.len() != 8 || !value.bytes().all(|u| u.is_ascii_digit()) {
        return value.into();
    }

    format!("{} {}", &value[..4], &value[4..])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::normalization::normalize;

    use super::{format_ean8, format_gtin};

    #[test]
    fn gtin_groups_3_4_6() {
        assert_eq!(format_gtin("4006381333931"), "400 6381 333931");
    }

    #[test]
    fn gtin_formats_on_length_alone() {
        // No digit or checksum gate for the 13-char formatter.
        assert_eq!(format_gtin("4006381333930"), "400 6381 333930");
        assert_eq!(format_gtin("abcdefghijklm"), "abc defg hijklm");
    }

    #[test]
    fn gtin_passes_other_lengths_through() {
        assert_eq!(format_gtin("73513537"), "73513537");
        assert_eq!(format_gtin(""), "");
        assert_eq!(format_gtin("12345678901234"), "12345678901234");
    }

    #[test]
    fn ean8_groups_4_4() {
        assert_eq!(format_ean8("73513537"), "7351 3537");
    }

    #[test]
    fn ean8_requires_eight_digits() {
        assert_eq!(format_ean8("7351353"), "7351353");
        assert_eq!(format_ean8("735135370"), "735135370");
        assert_eq!(format_ean8("7351353a"), "7351353a");
    }

    proptest! {
        #[test]
        fn grouping_inserts_spaces_at_fixed_offsets(d in "[0-9]{13}") {
            let grouped = format_gtin(&d);
            prop_assert_eq!(grouped.len(), 15);
            prop_assert_eq!(&grouped[3..4], " ");
            prop_assert_eq!(&grouped[8..9], " ");
        }

        #[test]
        fn grouping_preserves_normalized_digits(s in "\\PC*") {
            let code = normalize(&s);
            if code.len() == 13 {
                prop_assert_eq!(format_gtin(&code).replace(' ', ""), code);
            }
        }
    }
}
