//! Generate command: scaffold one resource into the project.

mod entry_point;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::services::WriteGuard;
use crate::domain::layout::PROJECT_DIRS;
use crate::domain::{
    AppError, ArtifactKind, AuthPart, FixedFile, GenerationReport, ResourceDescriptor,
};
use crate::ports::ProjectFilesystem;

use self::entry_point::commit_entry_point;

/// Artifacts committed through the write guard before the entry point, in order.
const PRIMARY_ARTIFACTS: [ArtifactKind; 7] = [
    ArtifactKind::FixedFile(FixedFile::DatabaseConnector),
    ArtifactKind::AuthBundle(AuthPart::Schema),
    ArtifactKind::AuthBundle(AuthPart::Handler),
    ArtifactKind::AuthBundle(AuthPart::Routes),
    ArtifactKind::Schema,
    ArtifactKind::Handler,
    ArtifactKind::RouteTable,
];

/// Validate raw input and scaffold the resource.
///
/// Validation errors are returned before anything touches the filesystem.
pub fn execute<F, S>(ctx: &AppContext<F>, name: &str, fields: &[S]) -> Result<GenerationReport, AppError>
where
    F: ProjectFilesystem,
    S: AsRef<str>,
{
    let descriptor = ResourceDescriptor::parse(name, fields)?;
    Ok(generate(ctx, &descriptor))
}

/// Scaffold an already-validated resource.
///
/// Best-effort: every artifact is attempted and its outcome recorded, whatever
/// happened to the ones before it.
pub fn generate<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    descriptor: &ResourceDescriptor,
) -> GenerationReport {
    let name = descriptor.name();
    info!(resource = %name, fields = descriptor.fields().len(), "generating resource");
    for duplicate in descriptor.fields().duplicates() {
        warn!(resource = %name, field = %duplicate, "field listed more than once");
    }

    ensure_project_dirs(ctx.filesystem());

    let guard = WriteGuard::new(ctx.filesystem());
    let mut report = GenerationReport::new(name.as_str());

    for kind in PRIMARY_ARTIFACTS {
        commit(ctx, &guard, &mut report, kind, descriptor);
    }

    let entry_path = ArtifactKind::EntryPoint.target_path(name);
    let outcome = commit_entry_point(
        ctx.filesystem(),
        ctx.renderer(),
        descriptor,
        &entry_path,
        ctx.config().entry_point.mount_policy,
    );
    report.record(ArtifactKind::EntryPoint, entry_path, outcome);

    for file in FixedFile::AUXILIARY {
        commit(ctx, &guard, &mut report, ArtifactKind::FixedFile(file), descriptor);
    }

    info!(
        resource = %name,
        created = report.created().len(),
        skipped = report.skipped().len(),
        failed = report.failed().len(),
        "generation finished"
    );
    report
}

/// Create the top-level directories. A directory that cannot be created is
/// logged; the artifacts inside it then report their own failures.
fn ensure_project_dirs<F: ProjectFilesystem>(filesystem: &F) {
    for dir in PROJECT_DIRS {
        if let Err(err) = filesystem.create_dir_all(dir) {
            warn!(dir, error = %err, "could not create directory");
        }
    }
}

fn commit<F: ProjectFilesystem>(
    ctx: &AppContext<F>,
    guard: &WriteGuard<'_, F>,
    report: &mut GenerationReport,
    kind: ArtifactKind,
    descriptor: &ResourceDescriptor,
) {
    let path = kind.target_path(descriptor.name());
    let outcome = guard.write_if_absent(&path, || ctx.renderer().render(kind, descriptor));
    report.record(kind, path, outcome);
}
