use std::path::Path;

use miette::{Context, IntoDiagnostic};

use crate::{error::GenerateError, ir::IrLibrary, parse::Document};

pub mod emit;
pub mod jsonnet;

pub use jsonnet::{CodegenError, CodegenLibrary, PropertyError};

#[cfg(test)]
mod tests;

pub const DEFAULT_FILE_NAME: &str = "k8s.libsonnet";
pub const DEFAULT_INDENT: usize = 2;

/// Options that control how the library is written.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmitOptions {
    /// The path of the generated file, relative to the output directory.
    pub file_name: String,
    /// The number of spaces per indentation level.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_owned(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Generates the Jsonnet library for all the definitions in `doc`.
pub fn generate(doc: &Document, options: &EmitOptions) -> Result<Vec<u8>, GenerateError> {
    let library = IrLibrary::from_doc(doc)?;
    let code = CodegenLibrary::new(&library, options).render()?;
    Ok(code)
}

pub fn write_to_disk(output: &Path, code: impl IntoCode) -> miette::Result<()> {
    let code = code.into_code();
    let path = output.join(code.path());
    let string = code.into_string()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .into_diagnostic()
            .with_context(|| format!("Failed to create directory `{}`", parent.display()))?;
    }
    std::fs::write(&path, string)
        .into_diagnostic()
        .with_context(|| format!("Failed to write `{}`", path.display()))?;
    Ok(())
}

pub trait Code {
    fn path(&self) -> &str;
    fn into_string(self) -> miette::Result<String>;
}

pub trait IntoCode {
    type Code: Code;

    fn into_code(self) -> Self::Code;
}

impl<T: Code> IntoCode for T {
    type Code = T;

    fn into_code(self) -> Self::Code {
        self
    }
}
