//! Manifestctl Core - Manifest-List Orchestration
//!
//! This module provides the types and operations used to assemble,
//! push, and remove multi-architecture OCI manifest lists by driving
//! an external manifest tool (`podman` by default).

pub mod error;
pub mod exec;
pub mod manifest;
pub mod reference;

// Re-export commonly used types
pub use error::{ManifestError, Result, Step};
pub use exec::{CommandRunner, ExecFailure, HostRunner};
pub use manifest::ManifestPublisher;
pub use reference::ManifestRef;

/// Manifestctl version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
