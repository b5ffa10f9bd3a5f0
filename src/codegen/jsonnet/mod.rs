//! Generates a Jsonnet library of property methods.

mod error;
mod library;
mod object;
mod property;

pub use error::*;
pub use library::*;
pub use object::*;
pub use property::*;

use super::emit::Emitter;

/// A node in the model that can write itself as Jsonnet.
pub trait Emit {
    fn emit(&self, out: &mut Emitter) -> Result<(), CodegenError>;
}
