use thiserror::Error;

/// Logical step of the manifest-list workflow an external command was
/// serving when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `manifest create` — creating the empty local list
    Create,
    /// `manifest add` — appending one image to the list
    AddImage,
    /// `manifest push` — pushing the list to its registry
    Push,
    /// `manifest rm` — removing the local list
    Remove,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::Create => "create",
            Step::AddImage => "add-image",
            Step::Push => "push",
            Step::Remove => "remove",
        };
        write!(f, "{name}")
    }
}

/// Manifestctl error types
#[derive(Error, Debug)]
pub enum ManifestError {
    /// External tool ran and exited non-zero
    #[error("manifest {step} failed: `{command}` exited with code {code}: {stderr}")]
    CommandFailed {
        step: Step,
        command: String,
        code: i32,
        stderr: String,
    },

    /// External tool could not be started at all
    #[error("manifest {step} failed: could not run `{command}`: {source}")]
    SpawnFailed {
        step: Step,
        command: String,
        source: std::io::Error,
    },

    /// Malformed manifest list reference
    #[error("invalid manifest reference: {0}")]
    InvalidReference(String),
}

impl ManifestError {
    /// The workflow step this error is attributed to, if any.
    pub fn step(&self) -> Option<Step> {
        match self {
            ManifestError::CommandFailed { step, .. } => Some(*step),
            ManifestError::SpawnFailed { step, .. } => Some(*step),
            ManifestError::InvalidReference(_) => None,
        }
    }
}

/// Result type alias for manifestctl operations
pub type Result<T> = std::result::Result<T, ManifestError>;
