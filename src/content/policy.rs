//! Exception policy: which failures are returned and which are suppressed.
//!
//! The policy is a pure function of the failure kind and the client's
//! configured [`ExceptionLevel`]:
//!
//! | Level      | Ghost failure | Other failure |
//! |------------|---------------|---------------|
//! | `None`     | suppress      | suppress      |
//! | `Ghost`    | return error  | suppress      |
//! | `NonGhost` | suppress      | return error  |
//! | `All`      | return error  | return error  |
//!
//! A suppressed failure is recorded as the client's last error and the call
//! resolves to `Ok(None)`.

use std::fmt;

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Ghost answered with a structured `errors` array.
    Ghost,
    /// Anything else: network, status, or payload problems.
    Other,
}

/// Which failures are returned to the caller as errors.
///
/// # Example
///
/// ```rust
/// use ghost_api::content::{decide, Decision, ExceptionLevel, FailureKind};
///
/// assert_eq!(decide(FailureKind::Ghost, ExceptionLevel::Ghost), Decision::Throw);
/// assert_eq!(decide(FailureKind::Other, ExceptionLevel::Ghost), Decision::Suppress);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExceptionLevel {
    /// Suppress every failure.
    None,
    /// Return Ghost-reported failures; suppress the rest.
    Ghost,
    /// Return everything except Ghost-reported failures.
    NonGhost,
    /// Return every failure.
    #[default]
    All,
}

impl fmt::Display for ExceptionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::None => "none",
            Self::Ghost => "ghost",
            Self::NonGhost => "non_ghost",
            Self::All => "all",
        };
        f.write_str(level)
    }
}

/// The outcome of applying the policy to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Return the error to the caller.
    Throw,
    /// Record the error and return an absent result.
    Suppress,
}

/// Decides whether a failure of `kind` is returned under `level`.
#[must_use]
pub const fn decide(kind: FailureKind, level: ExceptionLevel) -> Decision {
    match (level, kind) {
        (ExceptionLevel::All, _)
        | (ExceptionLevel::Ghost, FailureKind::Ghost)
        | (ExceptionLevel::NonGhost, FailureKind::Other) => Decision::Throw,
        _ => Decision::Suppress,
    }
}
