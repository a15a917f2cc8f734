//! Composite enforcement policies.
//!
//! A policy is a declarative bundle of decision-point selections and
//! substitutions that routes all five logging families into one concrete
//! engine. Policies carry no state: each is an ordered step list, rebuilt on
//! every invocation, and applying one twice registers nothing new.

use serde::{Deserialize, Serialize};

use crate::decision::DecisionPoint;
use crate::module::{KnownModule, ModuleId, ModuleRef};

/// One step of a composite policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStep {
    /// Resolve a decision point with the given target.
    Select {
        /// The decision point to resolve.
        decision: DecisionPoint,
        /// The winning module, usually at the placeholder version.
        target: ModuleRef,
    },
    /// Register an unconditional substitution.
    Substitute {
        /// Identity to rewrite.
        source: ModuleId,
        /// Replacement, at the first known compatible version.
        replacement: ModuleRef,
    },
}

fn select(decision: DecisionPoint, target: KnownModule) -> PolicyStep {
    PolicyStep::Select {
        decision,
        target: target.version_zero(),
    }
}

fn substitute(source: KnownModule, replacement: KnownModule) -> PolicyStep {
    PolicyStep::Substitute {
        source: source.module_id(),
        replacement: replacement.first_version_ref(),
    }
}

/// Routes every other family onto the Slf4J facade.
///
/// Shared by the logback and slf4j-simple policies; the binding selection
/// differs, the downstream routing does not.
fn slf4j_routing() -> Vec<PolicyStep> {
    vec![
        select(DecisionPoint::Log4jImplementation, KnownModule::Log4jOverSlf4j),
        select(DecisionPoint::JulDelegation, KnownModule::JulToSlf4j),
        select(DecisionPoint::JclImplementation, KnownModule::JclOverSlf4j),
        select(
            DecisionPoint::Slf4jLog4j2Interaction,
            KnownModule::Log4jToSlf4j,
        ),
    ]
}

/// Redirects direct dependencies on legacy artifacts into the facade.
///
/// These never conflict with a bridge (the bridge replaces the artifact
/// instead of competing with it), so substitution is the only way to keep
/// their events from being lost.
fn slf4j_substitutions() -> Vec<PolicyStep> {
    vec![
        substitute(KnownModule::Log4j, KnownModule::Log4jOverSlf4j),
        substitute(KnownModule::Log4j12Api, KnownModule::Log4jOverSlf4j),
        substitute(KnownModule::Log4jJul, KnownModule::JulToSlf4j),
        substitute(KnownModule::CommonsLogging, KnownModule::JclOverSlf4j),
        substitute(KnownModule::Log4jJcl, KnownModule::JclOverSlf4j),
        substitute(KnownModule::SpringJcl, KnownModule::JclOverSlf4j),
    ]
}

fn slf4j_binding_policy(binding: KnownModule) -> Vec<PolicyStep> {
    let mut steps = vec![select(DecisionPoint::Slf4jBinding, binding)];
    steps.extend(slf4j_routing());
    steps.extend(slf4j_substitutions());
    steps
}

/// A pre-built bundle that pins one complete, internally consistent choice
/// of logging implementation across all five families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementPolicy {
    /// Logback backs Slf4J; everything else routes into Slf4J.
    Logback,
    /// `slf4j-simple` backs Slf4J; everything else routes into Slf4J.
    Slf4jSimple,
    /// Log4J 2 runs its own core and backs Slf4J through `log4j-slf4j-impl`.
    Log4j2,
}

impl EnforcementPolicy {
    /// Every available policy.
    pub const ALL: [Self; 3] = [Self::Logback, Self::Slf4jSimple, Self::Log4j2];

    /// Stable policy name, usable as caller-facing vocabulary.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Logback => "enforce-logback",
            Self::Slf4jSimple => "enforce-slf4j-simple",
            Self::Log4j2 => "enforce-log4j2",
        }
    }

    /// Looks a policy up by its stable name.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|policy| policy.id() == id)
    }

    /// The ordered steps the policy performs.
    ///
    /// The first step pins the policy's engine at the decision point that
    /// cascades widest; the remaining selections route the other families;
    /// substitutions come last.
    #[must_use]
    pub fn steps(self) -> Vec<PolicyStep> {
        match self {
            Self::Logback => slf4j_binding_policy(KnownModule::LogbackClassic),
            Self::Slf4jSimple => slf4j_binding_policy(KnownModule::Slf4jSimple),
            Self::Log4j2 => vec![
                select(
                    DecisionPoint::Slf4jLog4j2Interaction,
                    KnownModule::Log4jSlf4jImpl,
                ),
                select(DecisionPoint::JulDelegation, KnownModule::Log4jJul),
                select(DecisionPoint::JclImplementation, KnownModule::Log4jJcl),
                select(DecisionPoint::Log4jImplementation, KnownModule::Log4j12Api),
                substitute(KnownModule::Log4j, KnownModule::Log4j12Api),
            ],
        }
    }
}
