//! Text utilities for numeric field contents

/// Length of the longest prefix of `bytes` that reads as a decimal number:
/// optional sign, digits, optional fraction. Zero if there are no digits.
pub fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        0
    } else {
        end
    }
}

/// Parse the longest numeric prefix of a field, C `atof` style.
///
/// Returns 0.0 when the field does not start with a number. Trailing bytes
/// after the prefix are ignored, so `1.5-2` reads as 1.5.
pub fn parse_leading_float(bytes: &[u8]) -> f64 {
    let len = numeric_prefix_len(bytes);
    std::str::from_utf8(&bytes[..len])
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}
