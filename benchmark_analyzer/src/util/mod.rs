//!
//! The benchmark analyzer utils.
//!

///
/// Rounds the value to the specified number of decimal places, half away from zero.
///
pub fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

///
/// Returns at most `max_chars` leading characters of the string.
///
pub fn truncate(string: &str, max_chars: usize) -> String {
    string.chars().take(max_chars).collect()
}

///
/// Formats an integer with thousands separators.
///
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}

#[cfg(test)]
mod tests {
    #[test]
    fn round() {
        assert_eq!(super::round(66.666666, 2), 66.67);
        assert_eq!(super::round(12.3456, 3), 12.346);
        assert_eq!(super::round(-0.125, 2), -0.13);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(super::truncate("ошибка", 3), "оши");
        assert_eq!(super::truncate("short", 200), "short");
    }

    #[test]
    fn format_thousands() {
        assert_eq!(super::format_thousands(0), "0");
        assert_eq!(super::format_thousands(999), "999");
        assert_eq!(super::format_thousands(1000), "1,000");
        assert_eq!(super::format_thousands(1234567), "1,234,567");
    }
}
