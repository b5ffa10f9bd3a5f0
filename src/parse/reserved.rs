use std::borrow::Cow;

/// Properties that every top-level object has, and that the
/// hand-written part of the library sets. No property methods
/// are generated for these.
const SPECIAL_PROPERTIES: &[&str] = &["apiVersion", "kind", "metadata"];

/// Jsonnet keywords, which can't be used as parameter names.
const JSONNET_KEYWORDS: &[&str] = &[
    "assert",
    "else",
    "error",
    "false",
    "for",
    "function",
    "if",
    "import",
    "importstr",
    "in",
    "local",
    "null",
    "self",
    "super",
    "tailstrict",
    "then",
    "true",
];

/// Returns `true` if no property method should be generated for
/// a property with this name.
pub fn is_special_property(name: &str) -> bool {
    SPECIAL_PROPERTIES.contains(&name) || JSONNET_KEYWORDS.contains(&name)
}

/// Returns `true` if `name` is a valid Jsonnet identifier.
pub fn is_jsonnet_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !JSONNET_KEYWORDS.contains(&name)
}

/// Converts an object kind to the name of its field in the library,
/// by lowercasing the first character (`Deployment` becomes `deployment`;
/// `APIService` becomes `aPIService`).
pub fn object_field_name(kind: &str) -> Cow<'_, str> {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            Cow::Owned(first.to_lowercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(kind),
    }
}
