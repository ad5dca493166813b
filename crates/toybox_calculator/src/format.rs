//! Number formatting for the display and the history log.

/// Formats a finite value as the shortest text that reads back to the same
/// float, always with a fractional part or an exponent.
///
/// `10.0`, `2.5`, `0.30000000000000004`, `1e+16`, `1.5e-07`.
pub fn format_number(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_keep_fraction() {
        assert_eq!(format_number(10.0), "10.0");
        assert_eq!(format_number(-3.0), "-3.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn test_shortest_round_trip() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(2.5e120), "2.5e+120");
    }
}
