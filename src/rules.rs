//! Selection and substitution rules registered against the host graph.
//!
//! Rules are plain serializable values, not callbacks. The host enumerates
//! candidates and applies each rule's predicate; the core never reads the
//! graph back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::module::{ModuleId, ModuleRef};

/// A conflict-resolution rule for one capability.
///
/// When the host observes multiple candidates for the capability, the rule
/// selects the candidate whose `group:name` equals the target, attaching the
/// reason string. If no candidate matches, the rule has no effect: the
/// conflict simply never materialized in this build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRule {
    /// The capability whose candidate set this rule arbitrates.
    pub capability: Capability,
    /// Identity of the winning artifact.
    pub target: ModuleId,
    /// Human-readable justification attached to the selection.
    pub because: String,
}

impl SelectionRule {
    /// Creates a selection rule.
    #[must_use]
    pub fn new(capability: Capability, target: ModuleId, because: impl Into<String>) -> Self {
        Self {
            capability,
            target,
            because: because.into(),
        }
    }

    /// Applies the rule to a candidate set, version ignored.
    ///
    /// Returns the first candidate with the target's coordinates, or `None`
    /// when the target is absent.
    #[must_use]
    pub fn apply<'a>(&self, candidates: &'a [ModuleRef]) -> Option<&'a ModuleRef> {
        candidates.iter().find(|c| c.matches_id(&self.target))
    }
}

impl fmt::Display for SelectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.capability, self.target)
    }
}

/// An unconditional rewrite of one artifact reference to another.
///
/// Applied at dependency-substitution time, independent of whether any
/// conflict exists: its purpose is routing a legacy or bridge artifact onto
/// its canonical modern equivalent, not arbitration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    /// Identity to rewrite, at any version.
    pub source: ModuleId,
    /// Replacement reference, at its carried (or placeholder) version.
    pub replacement: ModuleRef,
}

impl SubstitutionRule {
    /// Creates a substitution rule.
    #[must_use]
    pub fn new(source: ModuleId, replacement: ModuleRef) -> Self {
        Self {
            source,
            replacement,
        }
    }

    /// Rewrites `reference` if it carries the source identity.
    #[must_use]
    pub fn apply(&self, reference: &ModuleRef) -> Option<ModuleRef> {
        reference
            .matches_id(&self.source)
            .then(|| self.replacement.clone())
    }
}

impl fmt::Display for SubstitutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.source, self.replacement)
    }
}
