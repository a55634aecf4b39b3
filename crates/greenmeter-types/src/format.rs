//! Number formatting shared by the CLI report and the dashboard

/// Format a number with `,` thousands separators and a fixed number of decimals.
///
/// `format_grouped(1234567.4, 0)` gives `"1,234,567"`. Non-finite values are
/// returned as Rust prints them.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value);
    let (sign, body) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = format!("{}{}", sign, grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Emission total as shown on the dashboard (zero decimals, grouped)
pub fn format_total(tons: f64) -> String {
    format_grouped(tons, 0)
}

/// Percentage with one decimal, e.g. `"21.5%"`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_millions() {
        assert_eq!(format_grouped(1_234_567.4, 0), "1,234,567");
    }

    #[test]
    fn test_grouped_small_values_have_no_separator() {
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(0.0, 0), "0");
    }

    #[test]
    fn test_grouped_exact_thousand() {
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(100_000.0, 0), "100,000");
    }

    #[test]
    fn test_grouped_with_decimals() {
        assert_eq!(format_grouped(2160.0, 2), "2,160.00");
        assert_eq!(format_grouped(31.995_1, 2), "32.00");
    }

    #[test]
    fn test_grouped_negative() {
        assert_eq!(format_grouped(-45_000.0, 0), "-45,000");
        assert_eq!(format_grouped(-12.0, 1), "-12.0");
    }

    #[test]
    fn test_grouped_non_finite() {
        assert_eq!(format_grouped(f64::INFINITY, 0), "inf");
    }

    #[test]
    fn test_format_total_rounds() {
        assert_eq!(format_total(3_105.7), "3,106");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(21.4567), "21.5%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
