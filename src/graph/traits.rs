//! Abstract registration surface exposed by the host graph.

use crate::rules::{SelectionRule, SubstitutionRule};

/// One mutable resolution context of the host graph.
///
/// A context accepts exactly two kinds of registrations: capability conflict
/// selections and dependency substitutions. Registrations accumulate; the
/// core never enumerates candidates or reads resolution results back, so
/// composition is simple appending and registration order is the only
/// ordering that matters.
pub trait ResolutionContext {
    /// Registers a conflict-resolution rule for one capability.
    fn register_selection(&mut self, rule: SelectionRule);

    /// Registers an unconditional dependency substitution.
    fn register_substitution(&mut self, rule: SubstitutionRule);
}

impl<T: ResolutionContext + ?Sized> ResolutionContext for &mut T {
    fn register_selection(&mut self, rule: SelectionRule) {
        (**self).register_selection(rule);
    }

    fn register_substitution(&mut self, rule: SubstitutionRule) {
        (**self).register_substitution(rule);
    }
}

/// Broadcast to every configuration the host exposes.
///
/// Mirrors the "register against all configurations" case; a single-element
/// vector models one named configuration.
impl<C: ResolutionContext> ResolutionContext for Vec<C> {
    fn register_selection(&mut self, rule: SelectionRule) {
        for context in self.iter_mut() {
            context.register_selection(rule.clone());
        }
    }

    fn register_substitution(&mut self, rule: SubstitutionRule) {
        for context in self.iter_mut() {
            context.register_substitution(rule.clone());
        }
    }
}
