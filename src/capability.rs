//! The capability taxonomy: named mutually-exclusive roles and their members.
//!
//! Each capability is a slot that at most one artifact may occupy in a
//! resolved dependency graph. Membership is a closed design-time enumeration,
//! never computed: an artifact competes for a capability exactly when the
//! table below says so.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::module::{KnownModule, ModuleId};

/// A named group of mutually exclusive logging artifact roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Which concrete binding backs the Slf4J API.
    Slf4jImplementation,
    /// Log4J 1.2 replaced by Slf4J vs Slf4J delegating to Log4J 1.2.
    Slf4jVsLog4j,
    /// Log4J 1.2 replaced by Slf4J vs replaced by (or kept under) Log4J 2.
    Slf4jVsLog4j2ForLog4j,
    /// java.util.logging bridged to Slf4J vs Slf4J delegating to it.
    Slf4jVsJul,
    /// java.util.logging bridged to Slf4J vs bridged to Log4J 2.
    Slf4jVsLog4j2ForJul,
    /// Which artifact actually implements the commons-logging contract.
    CommonsLoggingImplementation,
    /// commons-logging bridged to Slf4J vs Slf4J delegating to it.
    Slf4jVsJcl,
    /// commons-logging bridged to Slf4J vs bridged to Log4J 2.
    Slf4jVsLog4j2ForJcl,
    /// Log4J 2 acting as Slf4J binding vs delegating to Slf4J.
    Log4j2VsSlf4j,
    /// Log4J 2 running its own core vs delegating out.
    Log4j2Implementation,
}

impl Capability {
    /// Every capability, in taxonomy order.
    pub const ALL: [Self; 10] = [
        Self::Slf4jImplementation,
        Self::Slf4jVsLog4j,
        Self::Slf4jVsLog4j2ForLog4j,
        Self::Slf4jVsJul,
        Self::Slf4jVsLog4j2ForJul,
        Self::CommonsLoggingImplementation,
        Self::Slf4jVsJcl,
        Self::Slf4jVsLog4j2ForJcl,
        Self::Log4j2VsSlf4j,
        Self::Log4j2Implementation,
    ];

    /// The namespaced capability identifier, e.g. `logcap:slf4j-impl`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Slf4jImplementation => "logcap:slf4j-impl",
            Self::Slf4jVsLog4j => "logcap:slf4j-vs-log4j",
            Self::Slf4jVsLog4j2ForLog4j => "logcap:slf4j-vs-log4j2-log4j",
            Self::Slf4jVsJul => "logcap:slf4j-vs-jul",
            Self::Slf4jVsLog4j2ForJul => "logcap:slf4j-vs-log4j2-jul",
            Self::CommonsLoggingImplementation => "logcap:commons-logging-impl",
            Self::Slf4jVsJcl => "logcap:slf4j-vs-jcl",
            Self::Slf4jVsLog4j2ForJcl => "logcap:slf4j-vs-log4j2-jcl",
            Self::Log4j2VsSlf4j => "logcap:log4j2-vs-slf4j",
            Self::Log4j2Implementation => "logcap:log4j2-impl",
        }
    }

    /// Human description of what the capability arbitrates.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Slf4jImplementation => "the concrete binding backing the Slf4J API",
            Self::Slf4jVsLog4j => "Log4J 1.2 bridged onto Slf4J vs Slf4J delegating to Log4J 1.2",
            Self::Slf4jVsLog4j2ForLog4j => {
                "Log4J 1.2 routed to Slf4J vs routed to (or kept under) Log4J 2"
            }
            Self::Slf4jVsJul => "JUL bridged onto Slf4J vs Slf4J delegating to JUL",
            Self::Slf4jVsLog4j2ForJul => "JUL bridged onto Slf4J vs bridged onto Log4J 2",
            Self::CommonsLoggingImplementation => "the commons-logging contract implementation",
            Self::Slf4jVsJcl => "commons-logging bridged onto Slf4J vs Slf4J delegating to it",
            Self::Slf4jVsLog4j2ForJcl => {
                "commons-logging bridged onto Slf4J vs bridged onto Log4J 2"
            }
            Self::Log4j2VsSlf4j => "Log4J 2 as Slf4J binding vs Log4J 2 delegating to Slf4J",
            Self::Log4j2Implementation => "Log4J 2 running its own core vs delegating out",
        }
    }

    /// The fixed set of artifacts that compete for this capability.
    #[must_use]
    pub const fn members(self) -> &'static [KnownModule] {
        use KnownModule as M;
        match self {
            Self::Slf4jImplementation => &[
                M::Slf4jSimple,
                M::LogbackClassic,
                M::Slf4jLog4j12,
                M::Slf4jJcl,
                M::Slf4jJdk14,
                M::Log4jSlf4jImpl,
                M::Log4jSlf4j2Impl,
            ],
            Self::Slf4jVsLog4j => &[M::Log4jOverSlf4j, M::Slf4jLog4j12],
            Self::Slf4jVsLog4j2ForLog4j => &[M::Log4jOverSlf4j, M::Log4j12Api, M::Log4j],
            Self::Slf4jVsJul => &[M::JulToSlf4j, M::Slf4jJdk14],
            Self::Slf4jVsLog4j2ForJul => &[M::JulToSlf4j, M::Log4jJul],
            Self::CommonsLoggingImplementation => {
                &[M::CommonsLogging, M::JclOverSlf4j, M::SpringJcl]
            }
            Self::Slf4jVsJcl => &[M::JclOverSlf4j, M::Slf4jJcl],
            Self::Slf4jVsLog4j2ForJcl => &[M::JclOverSlf4j, M::Log4jJcl],
            Self::Log4j2VsSlf4j => &[M::Log4jSlf4jImpl, M::Log4jSlf4j2Impl, M::Log4jToSlf4j],
            Self::Log4j2Implementation => &[M::Log4jCore, M::Log4jToSlf4j],
        }
    }

    /// Returns true if `id` is a legal competitor for this capability.
    #[must_use]
    pub fn is_member(self, id: &ModuleId) -> bool {
        self.members().iter().any(|m| m.matches_id(id))
    }

    /// All capabilities a given artifact competes for (reverse index).
    ///
    /// The index is built once from the membership table and read-only
    /// thereafter.
    #[must_use]
    pub fn of(id: &ModuleId) -> &'static [Capability] {
        static INDEX: OnceLock<HashMap<ModuleId, Vec<Capability>>> = OnceLock::new();
        let index = INDEX.get_or_init(|| {
            let mut map: HashMap<ModuleId, Vec<Capability>> = HashMap::new();
            for capability in Self::ALL {
                for member in capability.members() {
                    map.entry(member.module_id()).or_default().push(capability);
                }
            }
            map
        });
        index.get(id).map_or(&[], Vec::as_slice)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
