/// Canonical digit form of raw scanner output: every non-digit is dropped,
/// and a 12-digit UPC-A gains the leading zero that makes it a 13-digit
/// EAN-13. Anything else passes through at its stripped length for the
/// validators to reject.
pub fn normalize(code: &str) -> String {
    let mut digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 12 {
        digits.insert(0, '0');
    }

    digits
}

/// Digit values of `s`, or `None` if any byte is not an ascii digit.
pub fn values(s: &str) -> Option<Vec<u32>> {
    s.bytes()
        .map(|u| {
            if u.is_ascii_digit() {
                Some(u32::from(u - b'0'))
            } else {
                None
            }
        })
        .collect()
}
