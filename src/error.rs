//! Error types for logcap.
//!
//! All validation happens synchronously at rule-registration time; every
//! error aborts the configuration call that triggered it, before any graph
//! resolution work. There is no retry and no local recovery.

use thiserror::Error;

use crate::capability::Capability;
use crate::decision::DecisionPoint;
use crate::module::ModuleId;

/// Errors surfaced while registering resolution or substitution rules.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The supplied value cannot be resolved to a module reference at all.
    #[error("Cannot resolve '{notation}' to a module reference: {reason}")]
    InvalidNotation {
        /// The rejected input, verbatim.
        notation: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The resolved module is not a catalogued artifact for the decision
    /// point the caller invoked.
    #[error("Provided module '{module}' is not a valid {decision}")]
    UnrecognizedRole {
        /// The decision point that rejected the module.
        decision: DecisionPoint,
        /// The rejected module identity.
        module: ModuleId,
    },

    /// A low-level selection target is not a member of the capability.
    #[error("Module '{module}' is not a member of capability '{capability}'")]
    NotAMember {
        /// The capability whose member set was consulted.
        capability: Capability,
        /// The rejected module identity.
        module: ModuleId,
    },
}

impl CapabilityError {
    /// Returns true if this is an invalid-notation error.
    #[must_use]
    pub const fn is_invalid_notation(&self) -> bool {
        matches!(self, Self::InvalidNotation { .. })
    }

    /// Returns true if this is an unrecognized-role error.
    #[must_use]
    pub const fn is_unrecognized_role(&self) -> bool {
        matches!(self, Self::UnrecognizedRole { .. })
    }
}

/// Result type alias for logcap operations.
pub type CapResult<T> = Result<T, CapabilityError>;
