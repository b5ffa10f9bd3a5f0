use crate::parse::BadDefinitionRef;

#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error(
        "tried to lowercase the first character of object kind `{kind}`, \
         but `{ident}` is already a kind in version `{version}`"
    )]
    Collision {
        kind: String,
        ident: String,
        version: String,
    },
    #[error("can't generate property method for `{object}`")]
    Property {
        object: String,
        #[source]
        source: PropertyError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("property `{0}` has neither a type nor a reference")]
    Untyped(String),
    #[error("property `{property}` has a bad reference")]
    BadRef {
        property: String,
        #[source]
        source: BadDefinitionRef,
    },
    #[error("property `{0}` isn't a valid Jsonnet identifier")]
    BadIdentifier(String),
}
