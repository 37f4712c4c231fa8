//! Common error infrastructure for progression-core.
//!
//! Stat computation never fails: lookups fall back to documented defaults.
//! The errors defined across this crate therefore describe *reported
//! conditions* (a reforge that does not exist, a category with no reforges) and
//! *load-time invariant violations* (an unsorted XP curve). Domain-specific
//! errors live next to the code that produces them and implement [`GameError`].

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller can carry on with a default (e.g. no reforge rolled)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: Corrupt configuration; the catalog must not be installed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - gameplay continues with a fallback value.
    ///
    /// Examples: no reforges configured for a category
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown reforge id, unknown rarity name in strict parsing
    Validation,

    /// Fatal error - configuration is corrupt and cannot be used.
    ///
    /// Examples: XP thresholds that decrease as level increases
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the configuration that produced this error must be rejected.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all progression-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable SCREAMING_SNAKE_CASE identifiers for logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
