//! # logcap - capability conflict resolution for JVM logging graphs
//!
//! The JVM logging ecosystem ships many interchangeable, mutually exclusive
//! artifacts: bindings that back the Slf4J facade, bridges that route one
//! logging API into another, and legacy implementations the bridges replace.
//! When several land in one dependency graph, the build either silently
//! picks an arbitrary one or fails with an ambiguous-conflict error.
//!
//! logcap models those roles as named *capabilities* with fixed member
//! sets, and registers declarative resolution and substitution rules
//! against a host-provided graph surface:
//!
//! - **Capability selection**: pin the winner of a conflict ("use logback as
//!   the Slf4J binding"); one choice fans out to every capability it
//!   settles.
//! - **Substitution**: unconditionally rewrite a legacy artifact onto its
//!   modern equivalent, even when nothing conflicts.
//! - **Enforcement policies**: pre-built bundles that route all five logging
//!   families into one engine.
//!
//! ## Usage
//!
//! ```rust
//! use logcap::{LoggingCapabilities, MemoryContext};
//!
//! let mut caps = LoggingCapabilities::new(MemoryContext::new());
//! caps.select_slf4j_binding("ch.qos.logback:logback-classic")?;
//! caps.enforce_logback()?;
//! # Ok::<(), logcap::CapabilityError>(())
//! ```
//!
//! Graph construction, candidate enumeration, and version solving stay with
//! the host; the core only appends rules through [`ResolutionContext`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capability;
pub mod decision;
pub mod engine;
pub mod error;
pub mod graph;
pub mod module;
pub mod policy;
pub mod rules;

// Re-export primary types at crate root for convenience
pub use capability::Capability;
pub use decision::DecisionPoint;
pub use engine::LoggingCapabilities;
pub use error::{CapResult, CapabilityError};
pub use graph::{MemoryContext, ResolutionContext};
pub use module::{DependencyNotation, KnownModule, ModuleId, ModuleRef, VERSION_ZERO};
pub use policy::{EnforcementPolicy, PolicyStep};
pub use rules::{SelectionRule, SubstitutionRule};
