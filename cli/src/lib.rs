//! Manifestctl CLI - multi-arch manifest list publishing.

pub mod commands;
