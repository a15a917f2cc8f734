//! End-to-end coverage of the high-level selection calls against the
//! in-memory resolution context.

use logcap::{
    Capability, CapabilityError, DecisionPoint, KnownModule, LoggingCapabilities, MemoryContext,
    ModuleId,
};

fn engine() -> LoggingCapabilities<MemoryContext> {
    LoggingCapabilities::new(MemoryContext::new())
}

/// The decision point whose high-level call arbitrates a capability.
fn decision_for(capability: Capability) -> DecisionPoint {
    match capability {
        Capability::Slf4jImplementation => DecisionPoint::Slf4jBinding,
        Capability::Slf4jVsLog4j | Capability::Slf4jVsLog4j2ForLog4j => {
            DecisionPoint::Log4jImplementation
        }
        Capability::Slf4jVsJul | Capability::Slf4jVsLog4j2ForJul => DecisionPoint::JulDelegation,
        Capability::CommonsLoggingImplementation
        | Capability::Slf4jVsJcl
        | Capability::Slf4jVsLog4j2ForJcl => DecisionPoint::JclImplementation,
        Capability::Log4j2VsSlf4j | Capability::Log4j2Implementation => {
            DecisionPoint::Slf4jLog4j2Interaction
        }
    }
}

#[test]
fn every_capability_member_is_accepted_by_its_decision_point() {
    for capability in Capability::ALL {
        for member in capability.members() {
            let mut caps = engine();
            caps.select_for(decision_for(capability), *member)
                .unwrap_or_else(|e| panic!("{member} rejected for {capability}: {e}"));

            let context = caps.into_inner();
            let registered = context
                .selections()
                .iter()
                .any(|rule| rule.capability == capability && member.matches_id(&rule.target));
            assert!(
                registered,
                "{member} selected for {capability} but no rule targets it"
            );
        }
    }
}

#[test]
fn non_members_are_rejected_naming_the_decision_point() {
    let cases = [
        (
            DecisionPoint::Slf4jBinding,
            KnownModule::CommonsLogging,
            "Slf4J binding",
        ),
        (
            DecisionPoint::Log4jImplementation,
            KnownModule::LogbackClassic,
            "Log4J implementation",
        ),
        (
            DecisionPoint::JulDelegation,
            KnownModule::JclOverSlf4j,
            "JUL delegation",
        ),
        (
            DecisionPoint::JclImplementation,
            KnownModule::Log4jJul,
            "JCL implementation",
        ),
        (
            DecisionPoint::Slf4jLog4j2Interaction,
            KnownModule::Log4j,
            "Slf4J / Log4J 2 interaction",
        ),
    ];

    for (decision, module, expected) in cases {
        let mut caps = engine();
        let err = caps.select_for(decision, module).unwrap_err();
        assert!(err.is_unrecognized_role());
        assert!(
            format!("{err}").contains(expected),
            "error for {module} should name '{expected}', got: {err}"
        );
        assert!(caps.into_inner().selections().is_empty());
    }
}

#[test]
fn malformed_notation_registers_nothing() {
    let mut caps = engine();
    let err = caps
        .select_slf4j_binding("this is not a dependency")
        .unwrap_err();
    assert!(matches!(err, CapabilityError::InvalidNotation { .. }));

    let context = caps.into_inner();
    assert!(context.selections().is_empty());
    assert!(context.substitutions().is_empty());
}

#[test]
fn selecting_a_legacy_bridge_binding_fans_out() {
    // One user decision must settle both the general implementation slot and
    // the legacy-specific capability.
    let mut caps = engine();
    caps.select_slf4j_binding("org.slf4j:slf4j-log4j12:1.7.36")
        .unwrap();

    let context = caps.into_inner();
    let target = KnownModule::Slf4jLog4j12.module_id();
    assert_eq!(
        context.selected_target(Capability::Slf4jImplementation),
        Some(&target)
    );
    assert_eq!(context.selected_target(Capability::Slf4jVsLog4j), Some(&target));
    assert_eq!(context.selections().len(), 2);
}

#[test]
fn selecting_the_classic_binding_touches_only_the_implementation_slot() {
    let mut caps = engine();
    caps.select_slf4j_binding(KnownModule::LogbackClassic).unwrap();

    let context = caps.into_inner();
    assert_eq!(context.selections().len(), 1);
    assert_eq!(
        context.selected_target(Capability::Slf4jImplementation),
        Some(&KnownModule::LogbackClassic.module_id())
    );
    let reason = context.reason_for(Capability::Slf4jImplementation).unwrap();
    assert!(reason.contains("selected Slf4J binding"), "reason: {reason}");
}

#[test]
fn selecting_jul_to_slf4j_settles_both_jul_capabilities() {
    let mut caps = engine();
    caps.select_jul_delegation(KnownModule::JulToSlf4j).unwrap();

    let context = caps.into_inner();
    let target = KnownModule::JulToSlf4j.module_id();
    assert_eq!(context.selected_target(Capability::Slf4jVsJul), Some(&target));
    assert_eq!(
        context.selected_target(Capability::Slf4jVsLog4j2ForJul),
        Some(&target)
    );
}

#[test]
fn selecting_slf4j_jdk14_as_delegation_settles_only_the_slf4j_side() {
    let mut caps = engine();
    caps.select_jul_delegation(KnownModule::Slf4jJdk14).unwrap();

    let context = caps.into_inner();
    assert_eq!(
        context.selected_target(Capability::Slf4jVsJul),
        Some(&KnownModule::Slf4jJdk14.module_id())
    );
    assert_eq!(context.selected_target(Capability::Slf4jVsLog4j2ForJul), None);
}

#[test]
fn repeated_selection_is_idempotent() {
    let mut caps = engine();
    caps.select_jcl_implementation(KnownModule::JclOverSlf4j)
        .unwrap();
    let once = caps.into_inner().selections().to_vec();

    let mut caps = engine();
    caps.select_jcl_implementation(KnownModule::JclOverSlf4j)
        .unwrap();
    caps.select_jcl_implementation(KnownModule::JclOverSlf4j)
        .unwrap();
    let twice = caps.into_inner().selections().to_vec();

    assert_eq!(once, twice);
}

#[test]
fn repeated_substitution_is_idempotent() {
    let mut caps = engine();
    caps.substitute(KnownModule::CommonsLogging, KnownModule::JclOverSlf4j.first_version_ref())
        .unwrap();
    caps.substitute(KnownModule::CommonsLogging, KnownModule::JclOverSlf4j.first_version_ref())
        .unwrap();

    assert_eq!(caps.into_inner().substitutions().len(), 1);
}

#[test]
fn last_registration_wins_for_one_capability() {
    let mut caps = engine();
    caps.select_slf4j_binding(KnownModule::LogbackClassic).unwrap();
    caps.select_slf4j_binding(KnownModule::Slf4jSimple).unwrap();

    let context = caps.into_inner();
    let candidates = vec![
        KnownModule::LogbackClassic.version_zero(),
        KnownModule::Slf4jSimple.version_zero(),
    ];
    let selected = context
        .resolve(Capability::Slf4jImplementation, &candidates)
        .unwrap();
    assert!(KnownModule::Slf4jSimple.matches(selected));
}

#[test]
fn selection_has_no_effect_when_conflict_never_materializes() {
    let mut caps = engine();
    caps.select_slf4j_binding(KnownModule::LogbackClassic).unwrap();

    let context = caps.into_inner();
    // Only a different binding present: the rule stays dormant.
    let candidates = vec![KnownModule::Slf4jSimple.version_zero()];
    assert!(context
        .resolve(Capability::Slf4jImplementation, &candidates)
        .is_none());
}

#[test]
fn uncatalogued_artifact_plays_no_role_anywhere() {
    let unknown = ModuleId::new("org.example", "house-logger");
    assert!(Capability::of(&unknown).is_empty());

    let mut caps = engine();
    let err = caps
        .select_slf4j_binding("org.example:house-logger:1.0")
        .unwrap_err();
    assert!(err.is_unrecognized_role());
}
