/// Render a computed value as canonical display text.
///
/// Magnitudes above `1e10` or below `1e-6` (but not zero) use
/// exponential notation with 8 fractional mantissa digits and a signed
/// exponent, like `1.23456789e+11`. Everything else is rounded to 12
/// significant digits and printed as the shortest plain decimal, so
/// chained results never show more than 12 digits of noise.
pub fn format_result(num: f64) -> String {
    let abs = num.abs();
    if abs > 1e10 || (abs < 1e-6 && num != 0.0) {
        return exponential(num, 8);
    }
    let rounded: f64 = format!("{:.*e}", 11, num).parse().unwrap_or(num);
    if rounded == 0.0 {
        // no "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

fn exponential(num: f64, digits: usize) -> String {
    let s = format!("{:.*e}", digits, num);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(7.0), "7");
        assert_eq!(format_result(-2.5), "-2.5");
        assert_eq!(format_result(1e10), "10000000000");
        assert_eq!(format_result(0.000001), "0.000001");
    }

    #[test]
    fn test_twelve_significant_digits() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.333333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.666666666667");
        assert_eq!(format_result(std::f64::consts::PI), "3.14159265359");
    }

    #[test]
    fn test_exponential() {
        assert_eq!(format_result(123456789012.0), "1.23456789e+11");
        assert_eq!(format_result(0.0000001), "1.00000000e-7");
        assert_eq!(format_result(-2e20), "-2.00000000e+20");
        assert_eq!(format_result(1.2246467991473532e-16), "1.22464680e-16");
    }
}
