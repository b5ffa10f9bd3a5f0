use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::SerdeError;

/// A Swagger document describing the Kubernetes API.
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub info: Option<Info>,
    #[serde(default)]
    pub definitions: IndexMap<DefinitionName, Definition>,
}

impl Document {
    /// Parses a document from a YAML string. Since YAML is a superset
    /// of JSON, this also accepts JSON documents.
    pub fn from_yaml(yaml: &str) -> Result<Self, SerdeError> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml);
        let result = serde_path_to_error::deserialize(deserializer)?;
        Ok(result)
    }

    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SerdeError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let result = serde_path_to_error::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(result)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// The fully qualified name of a schema definition,
/// like `io.k8s.api.core.v1.Pod`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct DefinitionName(String);

impl DefinitionName {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for DefinitionName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// A named schema definition.
#[derive(Debug, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
    /// Marks the definition as a resource kind that can be constructed
    /// directly. Definitions without markers are only used as the types
    /// of other definitions' fields.
    #[serde(rename = "x-kubernetes-group-version-kind", default)]
    pub top_level_specs: Vec<GroupVersionKind>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct GroupVersionKind {
    #[serde(default)]
    pub group: String,
    pub version: String,
    pub kind: String,
}

/// Describes the type of a single definition property.
///
/// A well-formed property has either a `$ref` or a `type`.
/// Both are optional here; the code generator rejects properties
/// that have neither.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Property {
    #[serde(rename = "$ref", default)]
    pub reference: Option<DefinitionRef>,
    #[serde(rename = "type", default)]
    pub ty: Option<Ty>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Option<Box<Property>>,
}

/// The `type` of a property.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Ty {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Other(String),
}

impl Ty {
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Other(other) => other,
        }
    }
}

impl From<&str> for Ty {
    fn from(s: &str) -> Self {
        match s {
            "string" => Self::String,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl<'de> Deserialize<'de> for Ty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// The raw value of a `$ref`. Validated when the property is generated,
/// so that a bad reference fails generation rather than parsing.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct DefinitionRef(String);

impl DefinitionRef {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the name of the referenced definition. Only references
    /// to keys under `/definitions` in the current document are
    /// understood.
    pub fn target(&self) -> Result<DefinitionName, BadDefinitionRef> {
        let Some(name) = self.0.trim().strip_prefix("#/definitions/") else {
            return Err(BadDefinitionRef(self.0.clone()));
        };
        if name.is_empty() || name.contains('/') {
            return Err(BadDefinitionRef(self.0.clone()));
        }
        Ok(DefinitionName(name.replace("~1", "/").replace("~0", "~")))
    }
}

impl From<&str> for DefinitionRef {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("only `#/definitions/{{name}}` references are supported; got `{0}`")]
pub struct BadDefinitionRef(pub String);
