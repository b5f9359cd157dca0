//! Number formatting for result metrics

/// Форматирует число с разделителем тысяч (запятая) и фиксированным числом знаков.
/// `None` и нечисловые значения отображаются как "-".
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number;
/// assert_eq!(format_number(Some(1234.567), 2), "1,234.57");
/// assert_eq!(format_number(None, 2), "-");
/// ```
pub fn format_number(value: Option<f64>, digits: usize) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return "-".to_string(),
    };

    let formatted = format!("{:.*}", digits, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut integer: String = grouped.chars().rev().collect();

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        integer.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{}.{}", integer, d),
        None => integer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(12.3), 2), "12.30");
        assert_eq!(format_number(Some(150.0), 2), "150.00");
        assert_eq!(format_number(Some(1234567.891), 2), "1,234,567.89");
        assert_eq!(format_number(Some(0.05), 2), "0.05");
    }

    #[test]
    fn test_negative_and_rounding() {
        assert_eq!(format_number(Some(-1234.5), 2), "-1,234.50");
        assert_eq!(format_number(Some(-0.001), 2), "0.00");
        assert_eq!(format_number(Some(999.999), 2), "1,000.00");
        assert_eq!(format_number(Some(1234.0), 0), "1,234");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(format_number(None, 2), "-");
        assert_eq!(format_number(Some(f64::NAN), 2), "-");
    }
}
