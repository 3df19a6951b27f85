//! Manifest list orchestration.
//!
//! Drives the external manifest tool through the
//! create → add → push → remove lifecycle of a local manifest list.
//! Every operation is one or more blocking subprocess invocations;
//! the first non-zero exit aborts the operation and is reported with
//! the step it occurred in. Nothing is retried and nothing is rolled
//! back — a failed sequence leaves the tool's local store exactly as
//! the last successful invocation left it.
//!
//! The tool's local manifest store is shared, file-system-backed
//! state keyed by `repository:tag`. Concurrent use of the same key
//! from multiple processes must be serialized by the caller.

use tracing::info;

use crate::error::{ManifestError, Result, Step};
use crate::exec::{CommandRunner, ExecFailure, HostRunner};
use crate::reference::ManifestRef;

/// Default manifest tool binary.
const DEFAULT_TOOL: &str = "podman";

/// Environment variable overriding the manifest tool binary.
const TOOL_ENV: &str = "PODMAN";

/// Assembles, pushes, and removes multi-arch manifest lists by
/// invoking the manifest tool.
pub struct ManifestPublisher<R: CommandRunner = HostRunner> {
    runner: R,
    tool: String,
}

impl ManifestPublisher<HostRunner> {
    /// Publisher running the real tool on the host. The binary is
    /// `podman` unless the `PODMAN` environment variable names
    /// another one.
    pub fn new() -> Self {
        let tool = std::env::var(TOOL_ENV).unwrap_or_else(|_| DEFAULT_TOOL.to_string());
        Self {
            runner: HostRunner,
            tool,
        }
    }
}

impl Default for ManifestPublisher<HostRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> ManifestPublisher<R> {
    /// Publisher with a caller-supplied runner and the default tool
    /// binary name.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            tool: DEFAULT_TOOL.to_string(),
        }
    }

    /// Override the tool binary name.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Create the local manifest list `list` and add each of `images`
    /// to it, in order.
    ///
    /// Issues one `manifest create` invocation, then one
    /// `manifest add` per image. The first failure aborts the
    /// operation; earlier adds are not undone, so the local list may
    /// be left partially populated.
    pub fn create_local_manifest(&self, list: &ManifestRef, images: &[String]) -> Result<()> {
        info!(list = %list, images = images.len(), "creating local manifest list");

        self.run_step(
            Step::Create,
            vec![
                self.tool.clone(),
                "manifest".to_string(),
                "create".to_string(),
                list.to_string(),
            ],
        )?;

        for image in images {
            self.run_step(
                Step::AddImage,
                vec![
                    self.tool.clone(),
                    "manifest".to_string(),
                    "add".to_string(),
                    list.to_string(),
                    image.clone(),
                ],
            )?;
        }

        Ok(())
    }

    /// Remove the local manifest list `list`.
    ///
    /// No existence check is made; removing a list that does not
    /// exist is whatever error the tool reports.
    pub fn delete_local_manifest(&self, list: &ManifestRef) -> Result<()> {
        info!(list = %list, "removing local manifest list");

        self.run_step(
            Step::Remove,
            vec![
                self.tool.clone(),
                "manifest".to_string(),
                "rm".to_string(),
                list.to_string(),
            ],
        )
    }

    /// Push the local manifest list `list` and all images it
    /// references to the registry, under the same `repository:tag`.
    ///
    /// When `v2s2` is set, signatures are stripped and the legacy
    /// Docker v2 schema 2 media type is forced. This is a workaround
    /// for registries that reject manifest lists mixing two media
    /// types (seen with Quay); it stays a caller decision.
    pub fn push_manifest(&self, list: &ManifestRef, v2s2: bool) -> Result<()> {
        info!(list = %list, v2s2, "pushing manifest list");

        let mut argv = vec![
            self.tool.clone(),
            "manifest".to_string(),
            "push".to_string(),
            "--all".to_string(),
            list.to_string(),
            list.to_string(),
        ];
        if v2s2 {
            argv.extend([
                "--remove-signatures".to_string(),
                "-f".to_string(),
                "v2s2".to_string(),
            ]);
        }

        self.run_step(Step::Push, argv)
    }

    /// Create, push, then remove a manifest list in one sequence.
    ///
    /// Strictly create → push → remove. A create failure skips push
    /// and remove. A push failure skips the remove, leaving the local
    /// list in place so the push can be retried without rebuilding
    /// it. A remove failure after a successful push is still an
    /// overall failure, even though the list reached the registry.
    pub fn create_and_push(
        &self,
        list: &ManifestRef,
        images: &[String],
        v2s2: bool,
    ) -> Result<()> {
        self.create_local_manifest(list, images)?;
        self.push_manifest(list, v2s2)?;
        self.delete_local_manifest(list)
    }

    fn run_step(&self, step: Step, argv: Vec<String>) -> Result<()> {
        let command = argv.join(" ");
        self.runner.run(&argv).map_err(|failure| match failure {
            ExecFailure::Spawn(source) => ManifestError::SpawnFailed {
                step,
                command,
                source,
            },
            ExecFailure::Exit { code, stderr } => ManifestError::CommandFailed {
                step,
                command,
                code,
                stderr,
            },
        })
    }
}
