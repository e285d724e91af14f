use once_cell::sync::Lazy;
use regex::Regex;

// 允许整数或带一位小数分隔符（点或逗号）的小数，可带正负号
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(?:[.,]\d+)?$").expect("Invalid decimal regex"));

/// 解析表单中的数字，接受 "12.5" 和 "12,5"
///
/// 拒绝空串、科学计数法、`inf` 和 `NaN`，以及超出 f64 范围的长数字串。
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !DECIMAL_RE.is_match(trimmed) {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// 两位小数格式
pub fn format_points(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12"), Some(12.0));
        assert_eq!(parse_decimal(" 12.5 "), Some(12.5));
        assert_eq!(parse_decimal("12,5"), Some(12.5));
        assert_eq!(parse_decimal("-3"), Some(-3.0));
        assert_eq!(parse_decimal("+0,25"), Some(0.25));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        for raw in ["", "  ", "abc", "1e5", "inf", "NaN", "1.2.3", "1,", ".5", "12 5"] {
            assert_eq!(parse_decimal(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn test_parse_decimal_rejects_overflow() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(parse_decimal(&huge), None);
        assert_eq!(parse_decimal(&format!("-{huge}")), None);
        assert_eq!(parse_decimal(&format!("{huge},5")), None);

        let large = format!("1{}", "0".repeat(300));
        assert!(parse_decimal(&large).is_some_and(f64::is_finite));
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(25.0), "25.00");
        assert_eq!(format_points(33.333), "33.33");
        assert_eq!(format_points(78.5), "78.50");
    }
}
