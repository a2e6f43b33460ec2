//! Pure checks over raw JSON values.
//!
//! Each check answers whether a value satisfies one constraint. The `as_*`
//! coercions read an already validated value into its Rust type.

use serde_json::Value;

/// Decimal number with optional sign and fraction, no exponent.
fn is_numeric_str(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    match frac_part {
        None => !int_part.is_empty() && all_digits(int_part),
        Some(f) => !(int_part.is_empty() && f.is_empty()) && all_digits(int_part) && all_digits(f),
    }
}

/// Text form of a scalar value. Objects, arrays and null have none.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Number carried by a JSON number or a numeric string.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_numeric_str(s) => s.parse().ok(),
        _ => None,
    }
}

/// Boolean carried by a JSON bool, `"true"`/`"false"`, or `0`/`1`.
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// 32-bit signed integer carried by a JSON integer or a decimal string.
pub fn as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        _ => None,
    }
}

pub fn is_integer(value: Option<&Value>) -> bool {
    value.and_then(as_i32).is_some()
}

pub fn is_not_empty(value: Option<&Value>) -> bool {
    value.and_then(as_text).is_some_and(|s| !s.is_empty())
}

pub fn is_numeric(value: Option<&Value>) -> bool {
    value.and_then(as_number).is_some_and(f64::is_finite)
}

pub fn is_positive(value: Option<&Value>) -> bool {
    value.and_then(as_number).is_some_and(|n| n > 0.0)
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    value.and_then(as_bool).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings() {
        for ok in ["300", "-1", "+2.5", "0.75", ".5", "5."] {
            assert!(is_numeric(Some(&json!(ok))), "{ok} should be numeric");
        }
        for bad in ["", "abc", "1e5", "12a", "1.2.3", "NaN", "inf", " 3", "."] {
            assert!(!is_numeric(Some(&json!(bad))), "{bad} should not be numeric");
        }
    }

    #[test]
    fn test_numeric_json_values() {
        assert!(is_numeric(Some(&json!(300))));
        assert!(is_numeric(Some(&json!(19.99))));
        assert!(!is_numeric(Some(&json!(true))));
        assert!(!is_numeric(Some(&Value::Null)));
        assert!(!is_numeric(None));
    }

    #[test]
    fn test_positive() {
        assert!(is_positive(Some(&json!(0.01))));
        assert!(is_positive(Some(&json!("300"))));
        assert!(!is_positive(Some(&json!(0))));
        assert!(!is_positive(Some(&json!(-5))));
        assert!(!is_positive(Some(&json!("abc"))));
        assert!(!is_positive(None));
    }

    #[test]
    fn test_not_empty() {
        assert!(is_not_empty(Some(&json!("Monitor"))));
        assert!(is_not_empty(Some(&json!(42))));
        assert!(!is_not_empty(Some(&json!(""))));
        assert!(!is_not_empty(Some(&Value::Null)));
        assert!(!is_not_empty(Some(&json!(["a"]))));
        assert!(!is_not_empty(None));
    }

    #[test]
    fn test_integer() {
        assert!(is_integer(Some(&json!("42"))));
        assert!(is_integer(Some(&json!("-7"))));
        assert!(is_integer(Some(&json!(3))));
        assert!(!is_integer(Some(&json!("abc"))));
        assert!(!is_integer(Some(&json!("1.5"))));
        assert!(!is_integer(Some(&json!("99999999999"))));
        assert!(!is_integer(None));
    }

    #[test]
    fn test_boolean() {
        assert_eq!(as_bool(&json!(false)), Some(false));
        assert_eq!(as_bool(&json!("true")), Some(true));
        assert_eq!(as_bool(&json!(1)), Some(true));
        assert_eq!(as_bool(&json!("0")), Some(false));
        assert!(!is_boolean(Some(&json!("yes"))));
        assert!(!is_boolean(Some(&json!(2))));
        assert!(!is_boolean(None));
    }
}
