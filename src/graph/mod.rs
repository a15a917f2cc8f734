//! The host resolution surface.
//!
//! The host build tool owns the dependency graph; this crate only appends
//! rules to it. The surface is abstracted behind a trait so the engine is
//! fully testable against the in-memory implementation.

mod memory;
mod traits;

pub use memory::MemoryContext;
pub use traits::ResolutionContext;
