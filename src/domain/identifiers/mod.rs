pub mod field_name;
pub mod resource_name;
pub mod validation;

pub use field_name::FieldName;
pub use resource_name::ResourceName;
