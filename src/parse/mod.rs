pub mod name;
mod reserved;
mod types;

pub use name::{BadDefinitionName, CORE_GROUP, ParsedDefinitionName};
pub use reserved::*;
pub use types::*;
