//! Decision points and their capability dispatch tables.
//!
//! Each high-level selection call maps one user decision ("use this binding")
//! onto every capability conflict that decision settles. The mapping is a
//! static lookup table: one row per legitimate artifact, an ordered list of
//! capabilities per row, more specific capability first. Adding an artifact
//! means adding a row, not a branch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::module::{KnownModule, ModuleId};

/// A user-facing decision point: one question about the logging setup that a
/// single artifact choice answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPoint {
    /// Which binding backs the Slf4J API.
    Slf4jBinding,
    /// How Log4J 1.2 usage is implemented or routed away.
    Log4jImplementation,
    /// How java.util.logging is delegated.
    JulDelegation,
    /// Which artifact implements commons-logging.
    JclImplementation,
    /// How Slf4J and Log4J 2 interact.
    Slf4jLog4j2Interaction,
}

impl DecisionPoint {
    /// Every decision point.
    pub const ALL: [Self; 5] = [
        Self::Slf4jBinding,
        Self::Log4jImplementation,
        Self::JulDelegation,
        Self::JclImplementation,
        Self::Slf4jLog4j2Interaction,
    ];

    /// Human description used in error messages and selection reasons.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Slf4jBinding => "Slf4J binding",
            Self::Log4jImplementation => "Log4J implementation",
            Self::JulDelegation => "JUL delegation",
            Self::JclImplementation => "JCL implementation",
            Self::Slf4jLog4j2Interaction => "Slf4J / Log4J 2 interaction",
        }
    }

    /// The dispatch row for `id`, or `None` when the module plays no role at
    /// this decision point.
    #[must_use]
    pub(crate) fn entries(self, id: &ModuleId) -> Option<&'static [DispatchEntry]> {
        self.table()
            .iter()
            .find(|(module, _)| module.matches_id(id))
            .map(|(_, entries)| *entries)
    }

    fn table(self) -> &'static [(KnownModule, &'static [DispatchEntry])] {
        match self {
            Self::Slf4jBinding => SLF4J_BINDING,
            Self::Log4jImplementation => LOG4J_IMPLEMENTATION,
            Self::JulDelegation => JUL_DELEGATION,
            Self::JclImplementation => JCL_IMPLEMENTATION,
            Self::Slf4jLog4j2Interaction => SLF4J_LOG4J2_INTERACTION,
        }
    }
}

impl fmt::Display for DecisionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Whose identity a dispatch entry selects for its capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// The module the caller chose.
    Chosen,
    /// A fixed catalog module, independent of the caller's choice.
    Fixed(KnownModule),
}

/// One capability resolved by a dispatch row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DispatchEntry {
    pub(crate) capability: Capability,
    pub(crate) target: Target,
}

const fn chosen(capability: Capability) -> DispatchEntry {
    DispatchEntry {
        capability,
        target: Target::Chosen,
    }
}

const fn fixed(capability: Capability, module: KnownModule) -> DispatchEntry {
    DispatchEntry {
        capability,
        target: Target::Fixed(module),
    }
}

static SLF4J_BINDING: &[(KnownModule, &[DispatchEntry])] = &[
    (
        KnownModule::Slf4jLog4j12,
        &[
            chosen(Capability::Slf4jVsLog4j),
            chosen(Capability::Slf4jImplementation),
        ],
    ),
    (
        KnownModule::Slf4jJdk14,
        &[
            chosen(Capability::Slf4jVsJul),
            chosen(Capability::Slf4jImplementation),
        ],
    ),
    (
        KnownModule::Slf4jJcl,
        &[
            chosen(Capability::Slf4jVsJcl),
            chosen(Capability::Slf4jImplementation),
        ],
    ),
    (
        KnownModule::Log4jSlf4jImpl,
        &[
            chosen(Capability::Log4j2VsSlf4j),
            chosen(Capability::Slf4jImplementation),
        ],
    ),
    (
        KnownModule::Log4jSlf4j2Impl,
        &[
            chosen(Capability::Log4j2VsSlf4j),
            chosen(Capability::Slf4jImplementation),
        ],
    ),
    (
        KnownModule::LogbackClassic,
        &[chosen(Capability::Slf4jImplementation)],
    ),
    (
        KnownModule::Slf4jSimple,
        &[chosen(Capability::Slf4jImplementation)],
    ),
];

static LOG4J_IMPLEMENTATION: &[(KnownModule, &[DispatchEntry])] = &[
    (
        KnownModule::Log4jOverSlf4j,
        &[
            chosen(Capability::Slf4jVsLog4j2ForLog4j),
            chosen(Capability::Slf4jVsLog4j),
        ],
    ),
    (
        KnownModule::Log4j12Api,
        &[chosen(Capability::Slf4jVsLog4j2ForLog4j)],
    ),
    (
        KnownModule::Log4j,
        &[chosen(Capability::Slf4jVsLog4j2ForLog4j)],
    ),
    (
        KnownModule::Slf4jLog4j12,
        &[chosen(Capability::Slf4jVsLog4j)],
    ),
];

static JUL_DELEGATION: &[(KnownModule, &[DispatchEntry])] = &[
    (
        KnownModule::JulToSlf4j,
        &[
            chosen(Capability::Slf4jVsLog4j2ForJul),
            chosen(Capability::Slf4jVsJul),
        ],
    ),
    (KnownModule::Slf4jJdk14, &[chosen(Capability::Slf4jVsJul)]),
    (
        KnownModule::Log4jJul,
        &[chosen(Capability::Slf4jVsLog4j2ForJul)],
    ),
];

static JCL_IMPLEMENTATION: &[(KnownModule, &[DispatchEntry])] = &[
    (
        KnownModule::JclOverSlf4j,
        &[
            chosen(Capability::CommonsLoggingImplementation),
            chosen(Capability::Slf4jVsJcl),
            chosen(Capability::Slf4jVsLog4j2ForJcl),
        ],
    ),
    (
        KnownModule::CommonsLogging,
        &[chosen(Capability::CommonsLoggingImplementation)],
    ),
    (
        KnownModule::SpringJcl,
        &[chosen(Capability::CommonsLoggingImplementation)],
    ),
    (KnownModule::Slf4jJcl, &[chosen(Capability::Slf4jVsJcl)]),
    // log4j-jcl delegates the JCL contract but still requires the original
    // commons-logging artifact on the classpath, so picking it also pins
    // commons-logging as the contract implementation.
    (
        KnownModule::Log4jJcl,
        &[
            chosen(Capability::Slf4jVsLog4j2ForJcl),
            fixed(
                Capability::CommonsLoggingImplementation,
                KnownModule::CommonsLogging,
            ),
        ],
    ),
];

static SLF4J_LOG4J2_INTERACTION: &[(KnownModule, &[DispatchEntry])] = &[
    (
        KnownModule::Log4jToSlf4j,
        &[
            chosen(Capability::Log4j2VsSlf4j),
            chosen(Capability::Log4j2Implementation),
        ],
    ),
    (
        KnownModule::Log4jSlf4jImpl,
        &[
            chosen(Capability::Slf4jImplementation),
            chosen(Capability::Log4j2VsSlf4j),
        ],
    ),
    (
        KnownModule::Log4jSlf4j2Impl,
        &[
            chosen(Capability::Slf4jImplementation),
            chosen(Capability::Log4j2VsSlf4j),
        ],
    ),
    (
        KnownModule::Log4jCore,
        &[chosen(Capability::Log4j2Implementation)],
    ),
];
