//! Unified error interface.
//!
//! Every error type in the workspace implements [`ErrorCode`] so that
//! callers can branch on a stable machine-readable code and know whether
//! the user can fix the problem without a configuration change.
//!
//! # Example
//!
//! ```
//! use grc_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum LookupError {
//!     Missing(String),
//!     Blank,
//! }
//!
//! impl ErrorCode for LookupError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Missing(_) => "LOOKUP_MISSING",
//!             Self::Blank => "LOOKUP_BLANK",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Blank)
//!     }
//! }
//!
//! let err = LookupError::Blank;
//! assert_eq!(err.code(), "LOOKUP_BLANK");
//! assert!(err.is_recoverable());
//! ```

/// Machine-readable error code plus recoverability.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**, e.g. `"AUTH_READ_ONLY"`
/// - **Prefixed by crate domain**: `AUTH_`, `MODEL_`, `CONFIG_`
/// - **Stable**: codes are part of the API contract
///
/// # Recoverability
///
/// Recoverable means the user can correct the input and try again
/// (a blank title, an inverted date range). Missing role definitions
/// and denied edits are not recoverable by retrying.
pub trait ErrorCode {
    /// Returns the machine-readable code.
    fn code(&self) -> &'static str;

    /// Returns whether the caller can fix the input and retry.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code follows the workspace conventions.
///
/// # Panics
///
/// Panics if the code is empty, lacks `expected_prefix`, or is not
/// UPPER_SNAKE_CASE.
///
/// # Example
///
/// ```
/// use grc_types::{ErrorCode, assert_error_code};
///
/// struct Denied;
///
/// impl ErrorCode for Denied {
///     fn code(&self) -> &'static str { "AUTH_DENIED" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Denied, "AUTH_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Runs [`assert_error_code`] over every given error.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }

    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum SampleError {
        BadInput,
        MissingRole,
    }

    impl ErrorCode for SampleError {
        fn code(&self) -> &'static str {
            match self {
                Self::BadInput => "SAMPLE_BAD_INPUT",
                Self::MissingRole => "SAMPLE_MISSING_ROLE",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::BadInput)
        }
    }

    #[test]
    fn codes_and_recoverability() {
        assert_eq!(SampleError::BadInput.code(), "SAMPLE_BAD_INPUT");
        assert!(SampleError::BadInput.is_recoverable());
        assert!(!SampleError::MissingRole.is_recoverable());
    }

    #[test]
    fn all_variants_follow_convention() {
        assert_error_codes(&[SampleError::BadInput, SampleError::MissingRole], "SAMPLE_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn wrong_prefix_panics() {
        assert_error_code(&SampleError::BadInput, "AUTH_");
    }

    #[test]
    fn upper_snake_case_rules() {
        assert!(is_upper_snake_case("AUTH_READ_ONLY"));
        assert!(is_upper_snake_case("CONFIG_2"));
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("auth"));
        assert!(!is_upper_snake_case("_AUTH"));
        assert!(!is_upper_snake_case("AUTH_"));
        assert!(!is_upper_snake_case("AUTH__X"));
    }
}
