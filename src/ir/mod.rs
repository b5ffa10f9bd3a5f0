mod error;
mod library;
mod types;


pub use error::*;
pub use library::*;
pub use types::*;
