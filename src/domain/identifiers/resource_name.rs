use crate::domain::AppError;
use crate::domain::layout::{AUTH_MODEL, AUTH_STEM};
use crate::impl_validated_id;

/// Names a resource cannot take: ECMAScript reserved words and literals, then
/// the bindings the generated schema, handler and route modules declare next
/// to the resource's own `const`.
pub const RESERVED_RESOURCE_NAMES: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield", "arguments",
    "eval", "undefined", "NaN", "Infinity",
    "mongoose", "require", "exports", "module", "express", "router", "req", "res", "err",
    "page", "limit", "result", "console", "parseInt",
];

/// A validated resource name.
///
/// Guarantees:
/// - Non-empty
/// - Usable verbatim as a JavaScript type/module symbol
/// - Usable verbatim as a file stem (no path separators, no `.`/`..`)
/// - Distinct from the auth bundle's file stem and model, ignoring case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl_validated_id!(ResourceName, AppError::InvalidResourceName, is_available);

fn is_available(name: &str) -> bool {
    // Stems collide on case-insensitive filesystems.
    !RESERVED_RESOURCE_NAMES.contains(&name)
        && !name.eq_ignore_ascii_case(AUTH_STEM)
        && !name.eq_ignore_ascii_case(AUTH_MODEL)
}

impl From<ResourceName> for String {
    fn from(val: ResourceName) -> Self {
        val.0
    }
}
