use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated field identifier: one required, string-typed attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName(String);

impl_validated_id!(FieldName, AppError::InvalidFieldName);
