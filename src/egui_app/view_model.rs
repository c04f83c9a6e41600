//! Helpers converting prediction results into display strings.

/// Format a sales estimate as currency in thousands, e.g. `$1,234.50 K`.
pub fn sales_metric_text(value: f64) -> String {
    format!("${} K", grouped_two_decimals(value))
}

/// Inline message shown when the model raises during prediction.
pub fn prediction_error_text(description: &str) -> String {
    format!("❌ An error occurred: {description}")
}

/// Render with two decimals and a comma every three integer digits.
fn grouped_two_decimals(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_rounds_to_two_decimals() {
        assert_eq!(sales_metric_text(45.6789), "$45.68 K");
    }

    #[test]
    fn metric_groups_thousands() {
        assert_eq!(sales_metric_text(1234.5), "$1,234.50 K");
        assert_eq!(sales_metric_text(1_000_000.0), "$1,000,000.00 K");
    }

    #[test]
    fn metric_handles_zero_and_small_values() {
        assert_eq!(sales_metric_text(0.0), "$0.00 K");
        assert_eq!(sales_metric_text(999.999), "$1,000.00 K");
    }

    #[test]
    fn metric_keeps_the_sign_inside_the_currency() {
        assert_eq!(sales_metric_text(-12.339), "$-12.34 K");
    }

    #[test]
    fn error_text_uses_the_fixed_prefix() {
        let message = prediction_error_text("model exploded");
        assert!(message.starts_with("❌ An error occurred:"));
        assert!(message.ends_with("model exploded"));
    }
}
