pub mod codegen;
pub mod error;
pub mod ir;
pub mod parse;


pub use codegen::{EmitOptions, generate};
pub use error::GenerateError;
