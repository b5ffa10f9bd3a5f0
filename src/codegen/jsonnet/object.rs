use crate::{
    codegen::emit::Emitter,
    ir::{IrApiObject, IrVersionedApi},
    parse::{is_special_property, object_field_name},
};

use super::{Emit, error::CodegenError, property::CodegenPropertyMethod};

/// Emits an object as a namespace of property methods.
#[derive(Clone, Copy, Debug)]
pub struct CodegenApiObject<'a> {
    object: &'a IrApiObject<'a>,
    /// The versioned API that owns this object, used to look up
    /// sibling kinds.
    versioned: &'a IrVersionedApi<'a>,
}

impl<'a> CodegenApiObject<'a> {
    pub fn new(object: &'a IrApiObject<'a>, versioned: &'a IrVersionedApi<'a>) -> Self {
        Self { object, versioned }
    }
}

impl Emit for CodegenApiObject<'_> {
    fn emit(&self, out: &mut Emitter) -> Result<(), CodegenError> {
        let kind = self.object.kind;
        let ident = object_field_name(kind);
        if ident != kind && self.versioned.objects.contains_key(&*ident) {
            return Err(CodegenError::Collision {
                kind: kind.to_owned(),
                ident: ident.into_owned(),
                version: self.versioned.version.to_owned(),
            });
        }

        out.block(format!("{ident}:: {{"), "},", |out| {
            for method in self.object.sorted_properties() {
                if is_special_property(method.name) {
                    continue;
                }
                let line = CodegenPropertyMethod::new(method)
                    .generate()
                    .map_err(|source| CodegenError::Property {
                        object: kind.to_owned(),
                        source,
                    })?;
                if let Some(line) = line {
                    out.line(line);
                }
            }
            Ok(())
        })
    }
}
