//! Module identities and the known-artifact catalog.
//!
//! Every conflict in the JVM logging ecosystem is expressed in terms of
//! `group:name` coordinates. Version is never part of identity: conflicts
//! are resolved at the artifact-family level, not for a specific release.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CapResult, CapabilityError};

/// Placeholder version meaning "whatever version the resolver already has".
pub const VERSION_ZERO: &str = "0";

fn notation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_.\-]+):([A-Za-z0-9_.\-]+)(?::([A-Za-z0-9_.\-+]+))?$")
            .unwrap_or_else(|e| unreachable!("invalid notation pattern: {e}"))
    })
}

/// Immutable `group:name` coordinate identifying a logging artifact family.
///
/// Coordinates are globally unique keys; two references with the same
/// coordinates denote the same artifact family regardless of version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId {
    group: String,
    name: String,
}

impl ModuleId {
    /// Creates a module identity from its two coordinate parts.
    #[must_use]
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// The namespace (group) part of the coordinate.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The artifact name part of the coordinate.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// A concrete dependency reference: an identity plus an optional version.
///
/// The version only matters when the reference is used as a substitution
/// target; identity comparisons always ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRef {
    /// Coordinate identity of the referenced artifact.
    pub id: ModuleId,
    /// Version carried by the reference, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ModuleRef {
    /// Creates a versionless reference.
    #[must_use]
    pub fn new(id: ModuleId) -> Self {
        Self { id, version: None }
    }

    /// Attaches a version to the reference.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Parses a `group:name[:version]` coordinate string.
    ///
    /// # Errors
    /// Returns [`CapabilityError::InvalidNotation`] when the string does not
    /// have two or three non-empty colon-separated parts.
    pub fn parse(notation: &str) -> CapResult<Self> {
        let captures = notation_pattern().captures(notation.trim()).ok_or_else(|| {
            CapabilityError::InvalidNotation {
                notation: notation.to_string(),
                reason: "expected 'group:name' or 'group:name:version'".to_string(),
            }
        })?;

        let group = &captures[1];
        let name = &captures[2];
        let version = captures.get(3).map(|m| m.as_str().to_string());

        let mut reference = Self::new(ModuleId::new(group, name));
        reference.version = version;
        Ok(reference)
    }

    /// Returns true if this reference has the given identity (version ignored).
    #[must_use]
    pub fn matches_id(&self, id: &ModuleId) -> bool {
        self.id == *id
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{version}", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Caller-supplied identification of a target module.
///
/// Callers may pass a raw coordinate string or an already-built reference;
/// both are normalized to a [`ModuleRef`] at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyNotation {
    /// A `group:name[:version]` coordinate string, not yet validated.
    Coordinates(String),
    /// A fully-resolved dependency reference.
    Reference(ModuleRef),
}

impl DependencyNotation {
    /// Normalizes the notation to a concrete reference.
    ///
    /// # Errors
    /// Returns [`CapabilityError::InvalidNotation`] for malformed coordinate
    /// strings.
    pub fn resolve(self) -> CapResult<ModuleRef> {
        match self {
            Self::Coordinates(notation) => ModuleRef::parse(&notation),
            Self::Reference(reference) => Ok(reference),
        }
    }
}

impl From<&str> for DependencyNotation {
    fn from(notation: &str) -> Self {
        Self::Coordinates(notation.to_string())
    }
}

impl From<String> for DependencyNotation {
    fn from(notation: String) -> Self {
        Self::Coordinates(notation)
    }
}

impl From<ModuleRef> for DependencyNotation {
    fn from(reference: ModuleRef) -> Self {
        Self::Reference(reference)
    }
}

impl From<KnownModule> for DependencyNotation {
    fn from(module: KnownModule) -> Self {
        Self::Reference(module.version_zero())
    }
}

/// The closed catalog of known logging-ecosystem artifacts.
///
/// Membership in capability groups is declared against these identities.
/// Unknown artifacts are simply not in the catalog; there is no failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownModule {
    /// `org.slf4j:slf4j-simple`, the minimal Slf4J binding.
    Slf4jSimple,
    /// `ch.qos.logback:logback-classic`, the native Slf4J binding.
    LogbackClassic,
    /// `org.slf4j:slf4j-log4j12`, Slf4J delegating to Log4J 1.2.
    Slf4jLog4j12,
    /// `org.slf4j:slf4j-jcl`, Slf4J delegating to commons-logging.
    Slf4jJcl,
    /// `org.slf4j:slf4j-jdk14`, Slf4J delegating to java.util.logging.
    Slf4jJdk14,
    /// `org.apache.logging.log4j:log4j-slf4j-impl`, Log4J 2 as Slf4J 1.x binding.
    Log4jSlf4jImpl,
    /// `org.apache.logging.log4j:log4j-slf4j2-impl`, Log4J 2 as Slf4J 2.x binding.
    Log4jSlf4j2Impl,
    /// `org.apache.logging.log4j:log4j-to-slf4j`, Log4J 2 API delegating to Slf4J.
    Log4jToSlf4j,
    /// `org.apache.logging.log4j:log4j-core`, the Log4J 2 execution core.
    Log4jCore,
    /// `org.slf4j:log4j-over-slf4j`, Log4J 1.2 API bridged onto Slf4J.
    Log4jOverSlf4j,
    /// `org.apache.logging.log4j:log4j-1.2-api`, Log4J 1.2 API bridged onto Log4J 2.
    Log4j12Api,
    /// `log4j:log4j`, the original Log4J 1.2 implementation.
    Log4j,
    /// `org.slf4j:jul-to-slf4j`, java.util.logging bridged onto Slf4J.
    JulToSlf4j,
    /// `org.apache.logging.log4j:log4j-jul`, java.util.logging bridged onto Log4J 2.
    Log4jJul,
    /// `commons-logging:commons-logging`, the original commons-logging implementation.
    CommonsLogging,
    /// `org.slf4j:jcl-over-slf4j`, commons-logging API bridged onto Slf4J.
    JclOverSlf4j,
    /// `org.apache.logging.log4j:log4j-jcl`, commons-logging bridged onto Log4J 2.
    Log4jJcl,
    /// `org.springframework:spring-jcl`, Spring's commons-logging variant.
    SpringJcl,
}

impl KnownModule {
    /// Every catalogued artifact.
    pub const ALL: [Self; 18] = [
        Self::Slf4jSimple,
        Self::LogbackClassic,
        Self::Slf4jLog4j12,
        Self::Slf4jJcl,
        Self::Slf4jJdk14,
        Self::Log4jSlf4jImpl,
        Self::Log4jSlf4j2Impl,
        Self::Log4jToSlf4j,
        Self::Log4jCore,
        Self::Log4jOverSlf4j,
        Self::Log4j12Api,
        Self::Log4j,
        Self::JulToSlf4j,
        Self::Log4jJul,
        Self::CommonsLogging,
        Self::JclOverSlf4j,
        Self::Log4jJcl,
        Self::SpringJcl,
    ];

    /// Canonical `(group, name)` coordinates.
    #[must_use]
    pub const fn coordinates(self) -> (&'static str, &'static str) {
        match self {
            Self::Slf4jSimple => ("org.slf4j", "slf4j-simple"),
            Self::LogbackClassic => ("ch.qos.logback", "logback-classic"),
            Self::Slf4jLog4j12 => ("org.slf4j", "slf4j-log4j12"),
            Self::Slf4jJcl => ("org.slf4j", "slf4j-jcl"),
            Self::Slf4jJdk14 => ("org.slf4j", "slf4j-jdk14"),
            Self::Log4jSlf4jImpl => ("org.apache.logging.log4j", "log4j-slf4j-impl"),
            Self::Log4jSlf4j2Impl => ("org.apache.logging.log4j", "log4j-slf4j2-impl"),
            Self::Log4jToSlf4j => ("org.apache.logging.log4j", "log4j-to-slf4j"),
            Self::Log4jCore => ("org.apache.logging.log4j", "log4j-core"),
            Self::Log4jOverSlf4j => ("org.slf4j", "log4j-over-slf4j"),
            Self::Log4j12Api => ("org.apache.logging.log4j", "log4j-1.2-api"),
            Self::Log4j => ("log4j", "log4j"),
            Self::JulToSlf4j => ("org.slf4j", "jul-to-slf4j"),
            Self::Log4jJul => ("org.apache.logging.log4j", "log4j-jul"),
            Self::CommonsLogging => ("commons-logging", "commons-logging"),
            Self::JclOverSlf4j => ("org.slf4j", "jcl-over-slf4j"),
            Self::Log4jJcl => ("org.apache.logging.log4j", "log4j-jcl"),
            Self::SpringJcl => ("org.springframework", "spring-jcl"),
        }
    }

    /// First release known to be compatible with the modern routing rules.
    ///
    /// Used as the default version for substitution targets, where a concrete
    /// version is required even when the graph carried none.
    #[must_use]
    pub const fn first_version(self) -> &'static str {
        match self {
            Self::Slf4jSimple | Self::Slf4jLog4j12 | Self::Slf4jJcl | Self::Slf4jJdk14 => "1.6.0",
            Self::LogbackClassic => "0.2.5",
            Self::Log4jSlf4jImpl
            | Self::Log4jToSlf4j
            | Self::Log4jCore
            | Self::Log4j12Api
            | Self::Log4jJcl => "2.0",
            Self::Log4jSlf4j2Impl => "2.19.0",
            Self::Log4jOverSlf4j => "1.4.2",
            Self::Log4j => "1.1.3",
            Self::JulToSlf4j => "1.5.10",
            Self::Log4jJul => "2.1",
            Self::CommonsLogging => "1.0",
            Self::JclOverSlf4j => "1.5.6",
            Self::SpringJcl => "5.0.0",
        }
    }

    /// The identity of this artifact.
    #[must_use]
    pub fn module_id(self) -> ModuleId {
        let (group, name) = self.coordinates();
        ModuleId::new(group, name)
    }

    /// Returns true if `id` has this artifact's coordinates.
    #[must_use]
    pub fn matches_id(self, id: &ModuleId) -> bool {
        let (group, name) = self.coordinates();
        id.group() == group && id.name() == name
    }

    /// Returns true if `reference` points at this artifact, ignoring version.
    #[must_use]
    pub fn matches(self, reference: &ModuleRef) -> bool {
        self.matches_id(&reference.id)
    }

    /// A reference at the placeholder version `0`.
    ///
    /// Used as a conflict-selection target: the resolver keeps whatever
    /// version of the artifact is already present.
    #[must_use]
    pub fn version_zero(self) -> ModuleRef {
        ModuleRef::new(self.module_id()).with_version(VERSION_ZERO)
    }

    /// A reference at the first known compatible version.
    #[must_use]
    pub fn first_version_ref(self) -> ModuleRef {
        ModuleRef::new(self.module_id()).with_version(self.first_version())
    }

    /// Reverse lookup from an identity to the catalog entry.
    #[must_use]
    pub fn find(id: &ModuleId) -> Option<Self> {
        Self::ALL.into_iter().find(|module| module.matches_id(id))
    }
}

impl fmt::Display for KnownModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (group, name) = self.coordinates();
        write!(f, "{group}:{name}")
    }
}
