use miette::{Context, IntoDiagnostic};

use crate::{
    codegen::{Code, EmitOptions, emit::Emitter},
    ir::{IrGroup, IrLibrary, IrVersionedApi},
};

use super::{Emit, error::CodegenError, object::CodegenApiObject};

/// Emits the whole library: one namespace per group, with
/// one namespace per version inside it.
#[derive(Clone, Copy, Debug)]
pub struct CodegenLibrary<'a> {
    library: &'a IrLibrary<'a>,
    options: &'a EmitOptions,
}

impl<'a> CodegenLibrary<'a> {
    pub fn new(library: &'a IrLibrary<'a>, options: &'a EmitOptions) -> Self {
        Self { library, options }
    }

    /// Emits the library into a new buffer. Either the whole library
    /// is emitted, or nothing is.
    pub fn render(&self) -> Result<Vec<u8>, CodegenError> {
        let mut out = Emitter::new(self.options.indent);
        self.emit(&mut out)?;
        Ok(out.finish())
    }
}

impl Emit for CodegenLibrary<'_> {
    fn emit(&self, out: &mut Emitter) -> Result<(), CodegenError> {
        // Groups, versions, objects, and properties are all emitted
        // in sorted order, so that regenerating the library on the same
        // schema produces the same output.
        out.block("{", "}", |out| {
            for group in self.library.sorted_groups() {
                CodegenGroup::new(group).emit(out)?;
            }
            Ok(())
        })
    }
}

impl Code for CodegenLibrary<'_> {
    fn path(&self) -> &str {
        &self.options.file_name
    }

    fn into_string(self) -> miette::Result<String> {
        let bytes = self
            .render()
            .into_diagnostic()
            .with_context(|| format!("Failed to generate `{}`", self.options.file_name))?;
        String::from_utf8(bytes).into_diagnostic()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CodegenGroup<'a> {
    group: &'a IrGroup<'a>,
}

impl<'a> CodegenGroup<'a> {
    pub fn new(group: &'a IrGroup<'a>) -> Self {
        Self { group }
    }
}

impl Emit for CodegenGroup<'_> {
    fn emit(&self, out: &mut Emitter) -> Result<(), CodegenError> {
        out.block(format!("{}:: {{", self.group.name), "},", |out| {
            for versioned in self.group.sorted_versions() {
                CodegenVersionedApi::new(versioned).emit(out)?;
            }
            Ok(())
        })
    }
}

/// Emits a version of a group. Only top-level objects are emitted.
#[derive(Clone, Copy, Debug)]
pub struct CodegenVersionedApi<'a> {
    versioned: &'a IrVersionedApi<'a>,
}

impl<'a> CodegenVersionedApi<'a> {
    pub fn new(versioned: &'a IrVersionedApi<'a>) -> Self {
        Self { versioned }
    }
}

impl Emit for CodegenVersionedApi<'_> {
    fn emit(&self, out: &mut Emitter) -> Result<(), CodegenError> {
        out.block(format!("{}:: {{", self.versioned.version), "},", |out| {
            for object in self.versioned.sorted_objects() {
                if !object.top_level {
                    continue;
                }
                CodegenApiObject::new(object, self.versioned).emit(out)?;
            }
            Ok(())
        })
    }
}
