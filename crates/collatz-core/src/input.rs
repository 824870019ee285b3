//! Validation of host-supplied starting values.

use std::num::IntErrorKind;

use crate::error::{CollatzError, CollatzResult};

const TOO_WIDE: &str = "integer does not fit in 64 bits";

/// Parse an integer literal. Rejects fractions, words and empty input.
pub fn parse_integer(input: &str) -> CollatzResult<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| {
        let reason = match e.kind() {
            IntErrorKind::Empty => "empty input",
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => TOO_WIDE,
            _ => "not an integer",
        };
        CollatzError::invalid_argument(trimmed, reason)
    })
}

/// Parse a starting value: an integer literal that is at least 1.
pub fn parse_start_value(input: &str) -> CollatzResult<u64> {
    let trimmed = input.trim();
    let wide = trimmed.parse::<i128>().map_err(|e| match e.kind() {
        // Overflowing negatives are still integers below 1.
        IntErrorKind::NegOverflow => CollatzError::DomainError { value: i128::MIN },
        IntErrorKind::Empty => CollatzError::invalid_argument(trimmed, "empty input"),
        IntErrorKind::PosOverflow => CollatzError::invalid_argument(trimmed, TOO_WIDE),
        _ => CollatzError::invalid_argument(trimmed, "not an integer"),
    })?;
    check_start_value(wide)
}

/// Domain check shared by every walk entry point.
pub(crate) fn check_start_value(value: i128) -> CollatzResult<u64> {
    if value < 1 {
        return Err(CollatzError::DomainError { value });
    }
    u64::try_from(value).map_err(|_| CollatzError::invalid_argument(value.to_string(), TOO_WIDE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_value_accepts_positive() {
        assert_eq!(parse_start_value("27").unwrap(), 27);
        assert_eq!(parse_start_value("18446744073709551615").unwrap(), u64::MAX);
        assert_eq!(parse_start_value(" 1 ").unwrap(), 1);
    }

    #[test]
    fn test_parse_start_value_domain() {
        assert_eq!(
            parse_start_value("0").unwrap_err(),
            CollatzError::DomainError { value: 0 }
        );
        assert_eq!(
            parse_start_value("-5").unwrap_err(),
            CollatzError::DomainError { value: -5 }
        );
        assert!(matches!(
            parse_start_value("-99999999999999999999").unwrap_err(),
            CollatzError::DomainError { .. }
        ));
    }

    #[test]
    fn test_parse_start_value_non_integer() {
        for input in ["3.5", "abc", "", "1e3"] {
            let err = parse_start_value(input).unwrap_err();
            assert!(
                matches!(err, CollatzError::InvalidArgument { .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_start_value_too_large() {
        let err = parse_start_value("99999999999999999999").unwrap_err();
        assert!(matches!(err, CollatzError::InvalidArgument { .. }));
        assert!(err.to_string().contains("does not fit in 64 bits"));
    }

    #[test]
    fn test_check_start_value() {
        assert_eq!(check_start_value(3).unwrap(), 3);
        assert!(check_start_value(0).is_err());
        assert!(check_start_value(i128::from(i64::MIN)).is_err());
        assert!(matches!(
            check_start_value(i128::from(u64::MAX) + 1),
            Err(CollatzError::InvalidArgument { .. })
        ));
    }
}
