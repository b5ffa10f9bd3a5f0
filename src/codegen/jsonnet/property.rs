use crate::{
    ir::{IrPropertyKind, IrPropertyMethod},
    parse::{Ty, is_jsonnet_identifier},
};

use super::error::PropertyError;

/// Generates the property method for a single field of an object.
///
/// A property method takes one argument, and returns an object that
/// sets the field when it's merged into another object with `+`.
/// Scalar and object fields merge with `+:`. Array fields append when
/// the argument is an array, and append a one-element array otherwise,
/// because `+:` can't tell setting an array from extending one.
#[derive(Clone, Copy, Debug)]
pub struct CodegenPropertyMethod<'a> {
    method: &'a IrPropertyMethod<'a>,
}

impl<'a> CodegenPropertyMethod<'a> {
    pub fn new(method: &'a IrPropertyMethod<'a>) -> Self {
        Self { method }
    }

    /// Returns the line of Jsonnet for this method, or `None` if
    /// the property refers to another definition.
    pub fn generate(&self) -> Result<Option<String>, PropertyError> {
        let name = self.method.name;
        match self.method.kind {
            IrPropertyKind::Ref(r) => {
                // TODO: Generate methods that take references as arguments,
                // along with mixins for the referenced objects.
                r.target().map_err(|source| PropertyError::BadRef {
                    property: name.to_owned(),
                    source,
                })?;
                tracing::debug!(
                    property = name,
                    reference = r.as_str(),
                    "skipping reference property"
                );
                Ok(None)
            }
            IrPropertyKind::Typed(ty) => {
                if !is_jsonnet_identifier(name) {
                    return Err(PropertyError::BadIdentifier(name.to_owned()));
                }
                let body = match ty {
                    Ty::Array => format!(
                        r#"if std.type({name}) == "array" then {{{name}+: {name}}} else {{{name}: [{name}]}}"#
                    ),
                    _ => format!("{{{name}+: {name}}}"),
                };
                Ok(Some(format!("{name}({name}):: {body},")))
            }
            IrPropertyKind::Untyped => Err(PropertyError::Untyped(name.to_owned())),
        }
    }
}
