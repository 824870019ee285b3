//! Exit codes for the `collatz` binary.
//! Input and cache failures use [`CollatzError::exit_code`].

use collatz_core::CollatzError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1; // I/O and other non-cache errors

pub fn for_error(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CollatzError>()
        .map(CollatzError::exit_code)
        .unwrap_or(FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_cache_errors_keep_their_code() {
        let err: anyhow::Error = CollatzError::DomainError { value: 0 }.into();
        assert_eq!(for_error(&err), 2);
    }

    #[test]
    fn test_context_does_not_hide_code() {
        let res: Result<(), CollatzError> = Err(CollatzError::Overflow { value: 7 });
        let err = res.context("simulating 7").unwrap_err();
        assert_eq!(for_error(&err), 3);
    }

    #[test]
    fn test_other_errors() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(for_error(&err), FAILURE);
    }
}
