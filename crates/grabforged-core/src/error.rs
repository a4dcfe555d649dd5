//! Unified error type for the grabforged decision core.
//!
//! Nothing in this core is fatal: a bad candidate or a bad format is
//! converted to a reject/skip outcome with a human-readable reason.
//! [`Error`] covers the few cases where a caller supplies configuration
//! that cannot be evaluated at all.

/// Convenience alias for results in this workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type covering failure modes in the decision core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A quality profile references a cutoff that is not among its enabled items.
    #[error("profile {profile}: cutoff quality {cutoff} is not an enabled profile item")]
    CutoffNotInProfile {
        /// The offending profile id.
        profile: crate::ids::ProfileId,
        /// The cutoff quality id that was not found among enabled items.
        cutoff: crate::ids::QualityId,
    },

    /// A configuration record failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected internal errors.
    #[error("internal error: {0}")]
    Internal(String),
}
