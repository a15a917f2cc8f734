//! The conflict resolution engine.
//!
//! [`LoggingCapabilities`] is the caller-facing surface: one high-level call
//! per decision point, a validated low-level `select`, ad-hoc substitution,
//! and composite policy enforcement. Every call is a one-shot registration
//! against the host graph; all validation happens before anything is
//! registered, so a failed call leaves the graph untouched.

use crate::capability::Capability;
use crate::decision::{DecisionPoint, Target};
use crate::error::{CapResult, CapabilityError};
use crate::graph::ResolutionContext;
use crate::module::{DependencyNotation, ModuleRef};
use crate::policy::{EnforcementPolicy, PolicyStep};
use crate::rules::{SelectionRule, SubstitutionRule};

/// Expresses preference over potential logging capability conflicts.
///
/// Generic over the host's [`ResolutionContext`]; pass a `Vec` of contexts
/// to register against every configuration, or a single context for a named
/// one.
#[derive(Debug)]
pub struct LoggingCapabilities<G> {
    graph: G,
}

impl<G: ResolutionContext> LoggingCapabilities<G> {
    /// Wraps the host resolution surface.
    #[must_use]
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    /// Releases the wrapped surface.
    #[must_use]
    pub fn into_inner(self) -> G {
        self.graph
    }

    /// Selects the provided module as the Slf4J binding to use.
    ///
    /// This also resolves all other potential conflicts with the passed-in
    /// module in favor of it.
    ///
    /// # Errors
    /// Invalid notation, or a module that is not a known Slf4J binding.
    pub fn select_slf4j_binding(
        &mut self,
        notation: impl Into<DependencyNotation>,
    ) -> CapResult<()> {
        self.select_for(DecisionPoint::Slf4jBinding, notation)
    }

    /// Selects the provided module as the Log4J 1.2 implementation to use.
    ///
    /// This also resolves all other potential conflicts with the passed-in
    /// module in favor of it.
    ///
    /// # Errors
    /// Invalid notation, or a module that is not a known Log4J implementation.
    pub fn select_log4j_implementation(
        &mut self,
        notation: impl Into<DependencyNotation>,
    ) -> CapResult<()> {
        self.select_for(DecisionPoint::Log4jImplementation, notation)
    }

    /// Selects the provided module as the java.util.logging delegation to use.
    ///
    /// This also resolves all other potential conflicts with the passed-in
    /// module in favor of it.
    ///
    /// # Errors
    /// Invalid notation, or a module that is not a known JUL delegation.
    pub fn select_jul_delegation(
        &mut self,
        notation: impl Into<DependencyNotation>,
    ) -> CapResult<()> {
        self.select_for(DecisionPoint::JulDelegation, notation)
    }

    /// Selects the provided module as the commons-logging implementation to
    /// use.
    ///
    /// This also resolves all other potential conflicts with the passed-in
    /// module in favor of it.
    ///
    /// # Errors
    /// Invalid notation, or a module that is not a known JCL implementation.
    pub fn select_jcl_implementation(
        &mut self,
        notation: impl Into<DependencyNotation>,
    ) -> CapResult<()> {
        self.select_for(DecisionPoint::JclImplementation, notation)
    }

    /// Selects the provided module as the Slf4J / Log4J 2 interaction to use.
    ///
    /// This also resolves all other potential conflicts with the passed-in
    /// module in favor of it.
    ///
    /// # Errors
    /// Invalid notation, or a module that plays no role in the Slf4J /
    /// Log4J 2 interaction.
    pub fn select_slf4j_log4j2_interaction(
        &mut self,
        notation: impl Into<DependencyNotation>,
    ) -> CapResult<()> {
        self.select_for(DecisionPoint::Slf4jLog4j2Interaction, notation)
    }

    /// Resolves one decision point with the chosen module.
    ///
    /// Looks up the module's dispatch row and registers one selection rule
    /// per capability the decision settles, more specific capability first.
    ///
    /// # Errors
    /// [`CapabilityError::InvalidNotation`] if the notation cannot be
    /// resolved, [`CapabilityError::UnrecognizedRole`] if the module plays
    /// no role at this decision point. Nothing is registered on error.
    pub fn select_for(
        &mut self,
        decision: DecisionPoint,
        notation: impl Into<DependencyNotation>,
    ) -> CapResult<()> {
        let target = notation.into().resolve()?;
        let entries =
            decision
                .entries(&target.id)
                .ok_or_else(|| CapabilityError::UnrecognizedRole {
                    decision,
                    module: target.id.clone(),
                })?;

        let because = format!("Logging capabilities selected {}", decision.description());
        for entry in entries {
            // Table rows only name capability members, so no re-validation.
            let rule_target = match entry.target {
                Target::Chosen => target.id.clone(),
                Target::Fixed(module) => module.module_id(),
            };
            self.graph.register_selection(SelectionRule::new(
                entry.capability,
                rule_target,
                because.as_str(),
            ));
        }
        Ok(())
    }

    /// Registers a selection rule for a single capability.
    ///
    /// Unlike the decision-point calls, this does not fan out; it is the
    /// low-level building block for hosts with unusual setups.
    ///
    /// # Errors
    /// [`CapabilityError::NotAMember`] when the target is not a legal
    /// competitor for the capability.
    pub fn select(
        &mut self,
        capability: Capability,
        target: &ModuleRef,
        because: impl Into<String>,
    ) -> CapResult<()> {
        if !capability.is_member(&target.id) {
            return Err(CapabilityError::NotAMember {
                capability,
                module: target.id.clone(),
            });
        }
        self.graph
            .register_selection(SelectionRule::new(capability, target.id.clone(), because));
        Ok(())
    }

    /// Registers an unconditional substitution of `source` by `replacement`.
    ///
    /// No role validation: substitution is routing, not arbitration, and is
    /// applied even when no competing candidate exists.
    ///
    /// # Errors
    /// [`CapabilityError::InvalidNotation`] when either side cannot be
    /// resolved; nothing is registered in that case.
    pub fn substitute(
        &mut self,
        source: impl Into<DependencyNotation>,
        replacement: impl Into<DependencyNotation>,
    ) -> CapResult<()> {
        let source = source.into().resolve()?;
        let replacement = replacement.into().resolve()?;
        self.graph
            .register_substitution(SubstitutionRule::new(source.id, replacement));
        Ok(())
    }

    /// Applies a composite enforcement policy, step by step.
    ///
    /// # Errors
    /// Propagates the first step failure. Policies are built from catalog
    /// identities, so failures indicate a defect, not bad caller input.
    pub fn enforce(&mut self, policy: EnforcementPolicy) -> CapResult<()> {
        for step in policy.steps() {
            match step {
                PolicyStep::Select { decision, target } => self.select_for(decision, target)?,
                PolicyStep::Substitute {
                    source,
                    replacement,
                } => {
                    self.graph
                        .register_substitution(SubstitutionRule::new(source, replacement));
                }
            }
        }
        Ok(())
    }

    /// Routes all five logging families into logback.
    ///
    /// Having `logback-classic` as a dependency is required for this to
    /// work; substitution redirects the remaining direct dependencies that
    /// would otherwise never conflict.
    ///
    /// # Errors
    /// See [`Self::enforce`].
    pub fn enforce_logback(&mut self) -> CapResult<()> {
        self.enforce(EnforcementPolicy::Logback)
    }

    /// Routes all five logging families into `slf4j-simple`.
    ///
    /// # Errors
    /// See [`Self::enforce`].
    pub fn enforce_slf4j_simple(&mut self) -> CapResult<()> {
        self.enforce(EnforcementPolicy::Slf4jSimple)
    }

    /// Routes all five logging families into Log4J 2.
    ///
    /// # Errors
    /// See [`Self::enforce`].
    pub fn enforce_log4j2(&mut self) -> CapResult<()> {
        self.enforce(EnforcementPolicy::Log4j2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MemoryContext;
    use crate::module::{KnownModule, ModuleId};

    fn engine() -> LoggingCapabilities<MemoryContext> {
        LoggingCapabilities::new(MemoryContext::new())
    }

    #[test]
    fn test_select_binding_by_coordinate_string() {
        let mut caps = engine();
        caps.select_slf4j_binding("ch.qos.logback:logback-classic:1.4.14")
            .unwrap();

        let context = caps.into_inner();
        assert_eq!(
            context.selected_target(Capability::Slf4jImplementation),
            Some(&KnownModule::LogbackClassic.module_id())
        );
    }

    #[test]
    fn test_select_rejects_unknown_binding() {
        let mut caps = engine();
        let err = caps
            .select_slf4j_binding("commons-logging:commons-logging:1.2")
            .unwrap_err();
        assert!(err.is_unrecognized_role());
        assert!(format!("{err}").contains("Slf4J binding"));
        assert!(caps.into_inner().selections().is_empty());
    }

    #[test]
    fn test_select_rejects_malformed_notation_without_registering() {
        let mut caps = engine();
        let err = caps.select_jul_delegation("not-a-coordinate").unwrap_err();
        assert!(err.is_invalid_notation());
        assert!(caps.into_inner().selections().is_empty());
    }

    #[test]
    fn test_low_level_select_validates_membership() {
        let mut caps = engine();
        let err = caps
            .select(
                Capability::Slf4jImplementation,
                &KnownModule::CommonsLogging.version_zero(),
                "test",
            )
            .unwrap_err();
        assert!(matches!(err, CapabilityError::NotAMember { .. }));

        caps.select(
            Capability::Slf4jImplementation,
            &KnownModule::Slf4jSimple.version_zero(),
            "test",
        )
        .unwrap();
        assert_eq!(caps.into_inner().selections().len(), 1);
    }

    #[test]
    fn test_substitute_accepts_uncatalogued_modules() {
        // Substitution is routing, not arbitration: no role validation.
        let mut caps = engine();
        caps.substitute("org.example:house-logger", "org.slf4j:jcl-over-slf4j:1.7.36")
            .unwrap();

        let context = caps.into_inner();
        let rewritten = context.substitute(
            &ModuleRef::new(ModuleId::new("org.example", "house-logger")).with_version("9"),
        );
        assert!(KnownModule::JclOverSlf4j.matches(&rewritten));
    }

    #[test]
    fn test_fan_out_registers_one_rule_per_capability() {
        let mut caps = engine();
        caps.select_slf4j_binding(KnownModule::Slf4jLog4j12).unwrap();

        let context = caps.into_inner();
        assert_eq!(context.selections().len(), 2);
        assert_eq!(
            context.selected_target(Capability::Slf4jVsLog4j),
            Some(&KnownModule::Slf4jLog4j12.module_id())
        );
        assert_eq!(
            context.selected_target(Capability::Slf4jImplementation),
            Some(&KnownModule::Slf4jLog4j12.module_id())
        );
    }

    #[test]
    fn test_jcl_selection_of_log4j_jcl_pins_commons_logging() {
        let mut caps = engine();
        caps.select_jcl_implementation(KnownModule::Log4jJcl).unwrap();

        let context = caps.into_inner();
        assert_eq!(
            context.selected_target(Capability::Slf4jVsLog4j2ForJcl),
            Some(&KnownModule::Log4jJcl.module_id())
        );
        assert_eq!(
            context.selected_target(Capability::CommonsLoggingImplementation),
            Some(&KnownModule::CommonsLogging.module_id())
        );
    }
}
