use crate::parse::BadDefinitionName;

#[derive(Debug, thiserror::Error)]
pub enum IrError {
    #[error(transparent)]
    BadDefinitionName(#[from] BadDefinitionName),
    #[error("duplicate object kinds with name `{0}`")]
    DuplicateKind(String),
    #[error("can't look up `{0}` without a version")]
    NoVersion(String),
    #[error("group `{0}` doesn't exist")]
    UnknownGroup(String),
    #[error("versioned API `{0}` doesn't exist")]
    UnknownVersion(String),
    #[error("kind `{0}` doesn't exist")]
    UnknownKind(String),
}
