//! Structural self-checks for groups and decomposition results.

use crate::strata_error::StrataError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first violation encountered.
    fn validate_invariants(&self) -> Result<(), StrataError>;
}

/// Fail with [`StrataError::InvariantViolation`] unless `cond` holds.
///
/// The message is only built on failure.
pub(crate) fn ensure(cond: bool, msg: impl FnOnce() -> String) -> Result<(), StrataError> {
    if cond {
        Ok(())
    } else {
        Err(StrataError::InvariantViolation(msg()))
    }
}

/// Run a fallible invariant check and panic on error in debug builds.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(debug_assertions)]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
