pub mod artifact;
pub mod config;
pub mod entry_point;
pub mod error;
pub mod http_surface;
pub mod identifiers;
pub mod layout;
pub mod outcome;
pub mod resource;

pub use artifact::{ArtifactKind, AuthPart, FixedFile};
pub use config::{GeneratorConfig, MountPolicy, TokenIssuance};
pub use entry_point::{EntryPointAction, EntryPointState, merge_entry_point, mount_statement};
pub use error::AppError;
pub use identifiers::{FieldName, ResourceName};
pub use outcome::{ArtifactReport, GenerationReport, WriteOutcome};
pub use resource::{FieldSet, ResourceDescriptor, collect_fields, parse_field_count};
