//! Entry-point merge decision.
//!
//! The entry point is the one artifact that is not create-once: a fresh
//! project gets the full bootstrap file, an existing one gets a mount
//! statement appended. Deciding which happens is pure; committing the
//! resulting [`EntryPointAction`] is the caller's job.

use super::layout::{ROUTES_DIR, mount_prefix};
use super::{AppError, MountPolicy, ResourceName};

/// On-disk state of the entry point, read fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPointState {
    Absent,
    Present(String),
}

impl EntryPointState {
    pub fn from_existing(existing: Option<String>) -> Self {
        match existing {
            Some(text) => EntryPointState::Present(text),
            None => EntryPointState::Absent,
        }
    }
}

/// What to do with the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPointAction {
    /// Write the full bootstrap file.
    Create(String),
    /// Append this fragment to the existing file.
    Append(String),
    /// Leave the file as it is.
    Unchanged,
}

/// The statement mounting a resource's router under its URL prefix.
///
/// Shared by the fresh entry point and the append fragment so the two never drift.
pub fn mount_statement(resource: &ResourceName) -> String {
    format!(
        "app.use(\"{}\", require(\"./{}/{}\"));",
        mount_prefix(resource),
        ROUTES_DIR,
        resource
    )
}

/// True when `existing` already has a line mounting `resource`.
///
/// Single- and double-quoted spellings of the statement are treated alike.
pub fn is_mounted(existing: &str, resource: &ResourceName) -> bool {
    let statement = mount_statement(resource);
    existing.lines().any(|line| line.trim().replace('\'', "\"") == statement)
}

/// Fragment appended to `existing`: one mount line, on its own line.
pub fn mount_fragment(existing: &str, resource: &ResourceName) -> String {
    let mut fragment = String::new();
    if !existing.is_empty() && !existing.ends_with('\n') {
        fragment.push('\n');
    }
    fragment.push_str(&mount_statement(resource));
    fragment.push('\n');
    fragment
}

/// Decide how the entry point changes for `resource`.
///
/// `render_full` is only invoked for [`EntryPointState::Absent`]. Existing
/// content is never validated, so a malformed entry point is appended to
/// like any other.
pub fn merge_entry_point<F>(
    state: &EntryPointState,
    resource: &ResourceName,
    policy: MountPolicy,
    render_full: F,
) -> Result<EntryPointAction, AppError>
where
    F: FnOnce() -> Result<String, AppError>,
{
    match state {
        EntryPointState::Absent => Ok(EntryPointAction::Create(render_full()?)),
        EntryPointState::Present(existing) => {
            if policy == MountPolicy::SkipExisting && is_mounted(existing, resource) {
                return Ok(EntryPointAction::Unchanged);
            }
            Ok(EntryPointAction::Append(mount_fragment(existing, resource)))
        }
    }
}
