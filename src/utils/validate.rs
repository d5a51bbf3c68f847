use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{MarkFeedError, Result};

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{0,18}$").expect("Invalid id regex"));

/// 校验路径中的数字 ID
///
/// 只接受不带符号、不带前导零的正整数，超出 i64 范围同样视为无效。
pub fn validate_id(raw: Option<&str>, label: &str) -> Result<i64> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(MarkFeedError::validation(format!("{label} is required"))),
    };

    if !ID_RE.is_match(raw) {
        return Err(MarkFeedError::validation(format!("Invalid {label}")));
    }

    raw.parse::<i64>()
        .map_err(|_| MarkFeedError::validation(format!("Invalid {label}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert_eq!(validate_id(Some("1"), "moduleID").unwrap(), 1);
        assert_eq!(validate_id(Some("42"), "moduleID").unwrap(), 42);
        assert_eq!(
            validate_id(Some("9223372036854775807"), "moduleID").unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_missing_id() {
        let err = validate_id(None, "userID").unwrap_err();
        assert_eq!(err, MarkFeedError::validation("userID is required"));
        assert!(validate_id(Some(""), "userID").is_err());
    }

    #[test]
    fn test_invalid_ids() {
        for raw in ["0", "-1", "01", "abc", "1.5", " 1", "9223372036854775808"] {
            let err = validate_id(Some(raw), "assignmentID").unwrap_err();
            assert_eq!(err, MarkFeedError::validation("Invalid assignmentID"), "{raw}");
        }
    }
}
