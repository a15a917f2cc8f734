//! In-memory resolution context.
//!
//! Reference implementation of [`ResolutionContext`], used by the test
//! suites and usable by hosts for dry runs: it records registrations and can
//! replay them against a candidate set or a dependency reference the same
//! way a real graph would.

use crate::capability::Capability;
use crate::graph::traits::ResolutionContext;
use crate::module::{ModuleId, ModuleRef};
use crate::rules::{SelectionRule, SubstitutionRule};

/// Accumulates registered rules and replays them on demand.
///
/// Registration is idempotent: a rule equal to one already present is
/// dropped. When several selection rules cover the same capability, replay
/// applies them in registration order, so the last registered rule whose
/// target is present wins.
#[derive(Debug, Default, Clone)]
pub struct MemoryContext {
    selections: Vec<SelectionRule>,
    substitutions: Vec<SubstitutionRule>,
}

impl MemoryContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered selection rules, in registration order.
    #[must_use]
    pub fn selections(&self) -> &[SelectionRule] {
        &self.selections
    }

    /// All registered substitution rules, in registration order.
    #[must_use]
    pub fn substitutions(&self) -> &[SubstitutionRule] {
        &self.substitutions
    }

    /// Replays the selection rules for `capability` against a candidate set.
    ///
    /// Later registrations override earlier ones when both match, mirroring
    /// how a host applies accumulated resolution actions.
    #[must_use]
    pub fn resolve<'a>(
        &self,
        capability: Capability,
        candidates: &'a [ModuleRef],
    ) -> Option<&'a ModuleRef> {
        let mut selected = None;
        for rule in self.selections.iter().filter(|r| r.capability == capability) {
            if let Some(candidate) = rule.apply(candidates) {
                selected = Some(candidate);
            }
        }
        selected
    }

    /// The target of the last rule registered for `capability`, if any.
    #[must_use]
    pub fn selected_target(&self, capability: Capability) -> Option<&ModuleId> {
        self.selections
            .iter()
            .rev()
            .find(|r| r.capability == capability)
            .map(|r| &r.target)
    }

    /// The reason attached to the last rule registered for `capability`.
    #[must_use]
    pub fn reason_for(&self, capability: Capability) -> Option<&str> {
        self.selections
            .iter()
            .rev()
            .find(|r| r.capability == capability)
            .map(|r| r.because.as_str())
    }

    /// Rewrites a reference through the registered substitutions.
    ///
    /// Substitution is unconditional: it applies even when the graph holds
    /// no competing candidate. Sources are disjoint by construction, so a
    /// single pass suffices.
    #[must_use]
    pub fn substitute(&self, reference: &ModuleRef) -> ModuleRef {
        self.substitutions
            .iter()
            .find_map(|rule| rule.apply(reference))
            .unwrap_or_else(|| reference.clone())
    }

    /// The effective `(capability, target)` pairs, last registration per
    /// capability, in taxonomy order.
    #[must_use]
    pub fn selection_pairs(&self) -> Vec<(Capability, ModuleId)> {
        Capability::ALL
            .into_iter()
            .filter_map(|c| self.selected_target(c).map(|t| (c, t.clone())))
            .collect()
    }

    /// The registered `(source, replacement)` pairs, in registration order.
    #[must_use]
    pub fn substitution_pairs(&self) -> Vec<(ModuleId, ModuleRef)> {
        self.substitutions
            .iter()
            .map(|r| (r.source.clone(), r.replacement.clone()))
            .collect()
    }
}

impl ResolutionContext for MemoryContext {
    fn register_selection(&mut self, rule: SelectionRule) {
        if !self.selections.contains(&rule) {
            self.selections.push(rule);
        }
    }

    fn register_substitution(&mut self, rule: SubstitutionRule) {
        if !self.substitutions.contains(&rule) {
            self.substitutions.push(rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::KnownModule;

    fn implementation_rule(target: KnownModule) -> SelectionRule {
        SelectionRule::new(
            Capability::Slf4jImplementation,
            target.module_id(),
            "test selection",
        )
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut context = MemoryContext::new();
        context.register_selection(implementation_rule(KnownModule::LogbackClassic));
        context.register_selection(implementation_rule(KnownModule::LogbackClassic));
        assert_eq!(context.selections().len(), 1);

        let substitution = SubstitutionRule::new(
            KnownModule::CommonsLogging.module_id(),
            KnownModule::JclOverSlf4j.first_version_ref(),
        );
        context.register_substitution(substitution.clone());
        context.register_substitution(substitution);
        assert_eq!(context.substitutions().len(), 1);
    }

    #[test]
    fn test_resolve_selects_registered_target() {
        let mut context = MemoryContext::new();
        context.register_selection(implementation_rule(KnownModule::LogbackClassic));

        let candidates = vec![
            KnownModule::Slf4jSimple.version_zero(),
            KnownModule::LogbackClassic.version_zero(),
        ];
        let selected = context
            .resolve(Capability::Slf4jImplementation, &candidates)
            .unwrap();
        assert!(KnownModule::LogbackClassic.matches(selected));
    }

    #[test]
    fn test_resolve_without_matching_candidate_is_none() {
        let mut context = MemoryContext::new();
        context.register_selection(implementation_rule(KnownModule::LogbackClassic));

        let candidates = vec![KnownModule::Slf4jSimple.version_zero()];
        assert!(context
            .resolve(Capability::Slf4jImplementation, &candidates)
            .is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut context = MemoryContext::new();
        context.register_selection(implementation_rule(KnownModule::LogbackClassic));
        context.register_selection(implementation_rule(KnownModule::Slf4jSimple));

        let candidates = vec![
            KnownModule::Slf4jSimple.version_zero(),
            KnownModule::LogbackClassic.version_zero(),
        ];
        let selected = context
            .resolve(Capability::Slf4jImplementation, &candidates)
            .unwrap();
        assert!(KnownModule::Slf4jSimple.matches(selected));
        assert_eq!(
            context.selected_target(Capability::Slf4jImplementation),
            Some(&KnownModule::Slf4jSimple.module_id())
        );
    }

    #[test]
    fn test_substitute_is_unconditional() {
        let mut context = MemoryContext::new();
        context.register_substitution(SubstitutionRule::new(
            KnownModule::Log4j.module_id(),
            KnownModule::Log4jOverSlf4j.first_version_ref(),
        ));

        // A lone log4j reference, no competing candidate anywhere.
        let lone = ModuleRef::parse("log4j:log4j:1.2.17").unwrap();
        let rewritten = context.substitute(&lone);
        assert!(KnownModule::Log4jOverSlf4j.matches(&rewritten));
    }

    #[test]
    fn test_substitute_passes_through_unrelated_references() {
        let context = MemoryContext::new();
        let reference = KnownModule::LogbackClassic.version_zero();
        assert_eq!(context.substitute(&reference), reference);
    }

    #[test]
    fn test_selection_pairs_report_effective_targets() {
        let mut context = MemoryContext::new();
        context.register_selection(implementation_rule(KnownModule::LogbackClassic));
        context.register_selection(implementation_rule(KnownModule::Slf4jSimple));
        context.register_selection(SelectionRule::new(
            Capability::Slf4jVsJul,
            KnownModule::JulToSlf4j.module_id(),
            "test selection",
        ));

        let pairs = context.selection_pairs();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&(
            Capability::Slf4jImplementation,
            KnownModule::Slf4jSimple.module_id()
        )));
        assert!(pairs.contains(&(
            Capability::Slf4jVsJul,
            KnownModule::JulToSlf4j.module_id()
        )));
    }
}
