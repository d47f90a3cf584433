//! Resource descriptors: the unit the generator scaffolds.

use std::collections::HashSet;

use serde::Serialize;

use super::{AppError, FieldName, ResourceName};

/// Ordered, non-empty list of field identifiers for one resource.
///
/// Order is emission order in every generated artifact. Duplicates are kept
/// as given; [`FieldSet::duplicates`] reports them so callers can warn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldSet(Vec<FieldName>);

impl FieldSet {
    /// Validate every raw field name and build the set.
    ///
    /// `resource` is only used to word the error for an empty list.
    pub fn parse<S: AsRef<str>>(resource: &str, raw: &[S]) -> Result<Self, AppError> {
        if raw.is_empty() {
            return Err(AppError::EmptyFieldSet(resource.to_string()));
        }
        let fields = raw
            .iter()
            .map(|field| FieldName::new(field.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(fields))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldName> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names that appear more than once, in first-repeat order.
    pub fn duplicates(&self) -> Vec<&FieldName> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for field in &self.0 {
            if !seen.insert(field.as_str()) && reported.insert(field.as_str()) {
                duplicates.push(field);
            }
        }
        duplicates
    }
}

/// Validated description of one resource: a name plus its ordered fields.
///
/// Built once per generation run and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    name: ResourceName,
    fields: FieldSet,
}

impl ResourceDescriptor {
    pub fn new(name: ResourceName, fields: FieldSet) -> Self {
        Self { name, fields }
    }

    /// Validate raw user input into a descriptor.
    pub fn parse<S: AsRef<str>>(name: &str, fields: &[S]) -> Result<Self, AppError> {
        let name = ResourceName::new(name)?;
        let fields = FieldSet::parse(name.as_str(), fields)?;
        Ok(Self { name, fields })
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }
}

/// Collect exactly `count` field names by pulling each one from `next`.
///
/// `next` receives the zero-based index of the field being requested. The
/// returned list preserves the order the names were produced in.
pub fn collect_fields<F>(count: usize, mut next: F) -> Result<Vec<String>, AppError>
where
    F: FnMut(usize) -> Result<String, AppError>,
{
    if count == 0 {
        return Err(AppError::Validation("Field count must be at least 1".to_string()));
    }
    (0..count).map(&mut next).collect()
}

/// Parse a user-supplied field count.
pub fn parse_field_count(raw: &str) -> Result<usize, AppError> {
    let trimmed = raw.trim();
    let count = trimmed.parse::<usize>().map_err(|_| {
        AppError::Validation(format!("Field count must be a positive integer, got '{}'", trimmed))
    })?;
    if count == 0 {
        return Err(AppError::Validation("Field count must be at least 1".to_string()));
    }
    Ok(count)
}
