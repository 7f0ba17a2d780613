//! Construct-time errors
//!
//! Invoking a thunk never fails; only the checked constructors report errors.
//!
//! Author: Moroya Sakamoto

use thiserror::Error;

/// Error returned by the checked `init` constructors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThunkError {
    /// A required argument was absent (`storage`, or the callable for `Embedded`)
    #[error("invalid argument: {0} is absent")]
    InvalidArgument(&'static str),
}

/// Shorthand for construct results
pub type Result<T> = core::result::Result<T, ThunkError>;
