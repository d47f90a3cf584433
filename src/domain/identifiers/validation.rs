/// Validates an identifier string.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - First character is an ASCII letter, '_' or '$'
/// - Remaining characters are ASCII alphanumeric, '_' or '$'
///
/// Identifiers double as JavaScript symbols and file stems in the generated
/// project, so anything outside this set is rejected.
pub fn validate_identifier(id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    if id == "." || id == ".." {
        return false;
    }
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[macro_export]
macro_rules! impl_validated_id {
    ($name:ident, $err_variant:path, $accept:expr) => {
        impl $name {
            /// Validate and create a new instance. Surrounding whitespace is ignored.
            pub fn new(id: &str) -> Result<Self, $crate::domain::AppError> {
                let trimmed = id.trim();
                if $crate::domain::identifiers::validation::validate_identifier(trimmed)
                    && ($accept)(trimmed)
                {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err($err_variant(id.to_string()))
                }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }
    };
    ($name:ident, $err_variant:path) => {
        $crate::impl_validated_id!($name, $err_variant, |_: &str| true);
    };
}
