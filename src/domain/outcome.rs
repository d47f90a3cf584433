//! Per-artifact write outcomes and the end-of-run report.

use std::fmt;

use super::ArtifactKind;

/// Result of committing one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was written in full.
    Created,
    /// The file already existed; nothing was written.
    SkippedExisting,
    /// A mount fragment was appended to the existing entry point.
    Appended,
    /// The entry point already mounts the resource and the mount policy
    /// asked not to repeat it.
    Unchanged,
    /// Rendering or writing failed; the file was not left partially written.
    Failed(String),
}

impl WriteOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, WriteOutcome::Failed(_))
    }

    /// True when this outcome changed something on disk.
    pub fn wrote(&self) -> bool {
        matches!(self, WriteOutcome::Created | WriteOutcome::Appended)
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOutcome::Created => write!(f, "created"),
            WriteOutcome::SkippedExisting => write!(f, "skipped (already exists)"),
            WriteOutcome::Appended => write!(f, "appended mount"),
            WriteOutcome::Unchanged => write!(f, "unchanged (already mounted)"),
            WriteOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Outcome for a single artifact, with where it was (or would have been) written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    pub path: String,
    pub outcome: WriteOutcome,
}

/// Every artifact outcome of one generation run, in commit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    resource: String,
    artifacts: Vec<ArtifactReport>,
}

impl GenerationReport {
    pub fn new(resource: impl Into<String>) -> Self {
        Self { resource: resource.into(), artifacts: Vec::new() }
    }

    pub fn record(&mut self, kind: ArtifactKind, path: impl Into<String>, outcome: WriteOutcome) {
        self.artifacts.push(ArtifactReport { kind, path: path.into(), outcome });
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn artifacts(&self) -> &[ArtifactReport] {
        &self.artifacts
    }

    pub fn created(&self) -> Vec<&ArtifactReport> {
        self.filter(|o| matches!(o, WriteOutcome::Created))
    }

    pub fn skipped(&self) -> Vec<&ArtifactReport> {
        self.filter(|o| matches!(o, WriteOutcome::SkippedExisting))
    }

    pub fn failed(&self) -> Vec<&ArtifactReport> {
        self.filter(WriteOutcome::is_failure)
    }

    pub fn has_failures(&self) -> bool {
        self.artifacts.iter().any(|a| a.outcome.is_failure())
    }

    /// Outcome recorded for a project-relative path, if any.
    pub fn outcome_for(&self, path: &str) -> Option<&WriteOutcome> {
        self.artifacts.iter().find(|a| a.path == path).map(|a| &a.outcome)
    }

    fn filter(&self, pred: impl Fn(&WriteOutcome) -> bool) -> Vec<&ArtifactReport> {
        self.artifacts.iter().filter(|a| pred(&a.outcome)).collect()
    }
}
