//! Entry-point commit: create or append, bypassing the create-once policy.

use tracing::{debug, warn};

use crate::app::services::ArtifactRenderer;
use crate::domain::{
    AppError, ArtifactKind, EntryPointAction, EntryPointState, MountPolicy, ResourceDescriptor,
    WriteOutcome, merge_entry_point,
};
use crate::ports::{CreateStatus, ProjectFilesystem};

/// Read the current entry point, decide, and commit. Always re-reads from disk.
pub fn commit_entry_point<F: ProjectFilesystem>(
    filesystem: &F,
    renderer: &ArtifactRenderer,
    descriptor: &ResourceDescriptor,
    path: &str,
    policy: MountPolicy,
) -> WriteOutcome {
    match apply(filesystem, renderer, descriptor, path, policy, false) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(path, error = %err, "entry point update failed");
            WriteOutcome::Failed(err.to_string())
        }
    }
}

fn apply<F: ProjectFilesystem>(
    filesystem: &F,
    renderer: &ArtifactRenderer,
    descriptor: &ResourceDescriptor,
    path: &str,
    policy: MountPolicy,
    retried: bool,
) -> Result<WriteOutcome, AppError> {
    let state = EntryPointState::from_existing(filesystem.read_optional(path)?);
    let action = merge_entry_point(&state, descriptor.name(), policy, || {
        renderer.render(ArtifactKind::EntryPoint, descriptor)
    })?;

    match action {
        EntryPointAction::Create(content) => match filesystem.create_new(path, &content)? {
            CreateStatus::Created => {
                debug!(path, "created entry point");
                Ok(WriteOutcome::Created)
            }
            // Appeared between the read and the write; mount into what is there now.
            CreateStatus::AlreadyExists if !retried => {
                apply(filesystem, renderer, descriptor, path, policy, true)
            }
            // Still unreadable yet present, e.g. a dangling symlink.
            CreateStatus::AlreadyExists => {
                warn!(path, "entry point exists but is unreadable");
                Ok(WriteOutcome::Failed("entry point exists but is unreadable".to_string()))
            }
        },
        EntryPointAction::Append(fragment) => {
            filesystem.append(path, &fragment)?;
            debug!(path, resource = %descriptor.name(), "appended mount");
            Ok(WriteOutcome::Appended)
        }
        EntryPointAction::Unchanged => {
            debug!(path, resource = %descriptor.name(), "resource already mounted");
            Ok(WriteOutcome::Unchanged)
        }
    }
}
