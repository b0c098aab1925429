use thiserror::Error;

/// Error type for expense text interpretation failures.
///
/// Parsing is the only fallible operation in the crate; every other
/// entry point is a total function over its documented input domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No currency-marked amount token was recognized in the input, or
    /// the token did not convert to a finite number. Callers should
    /// re-prompt the user rather than treat this as fatal.
    #[error("no amount recognized in input")]
    NoAmount,
}
