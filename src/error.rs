use crate::{codegen::CodegenError, ir::IrError};

#[derive(Debug, thiserror::Error)]
pub enum SerdeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    JsonWithPath(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    YamlWithPath(#[from] serde_path_to_error::Error<serde_yaml::Error>),
}

/// An error that aborts generation of the whole library.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to build the API model")]
    Ir(#[from] IrError),
    #[error("failed to generate the library")]
    Codegen(#[from] CodegenError),
}
