//! The group → version → object → property hierarchy.
//!
//! Each level owns its children in an insertion-ordered map. Insertion
//! order follows the input document, so it's never observable: code that
//! walks the hierarchy uses the `sorted_*()` methods, which yield
//! children in ascending order by key.

use indexmap::IndexMap;
use itertools::Itertools;

use crate::parse::{Definition, DefinitionRef, Property, Ty};

/// A named partition of the API surface, like `core` or `apps`.
#[derive(Debug)]
pub struct IrGroup<'a> {
    pub name: &'a str,
    pub versions: IndexMap<&'a str, IrVersionedApi<'a>>,
}

impl<'a> IrGroup<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            versions: IndexMap::new(),
        }
    }

    pub fn sorted_versions(&self) -> impl Iterator<Item = &IrVersionedApi<'a>> {
        self.versions
            .iter()
            .sorted_by_key(|&(&version, _)| version)
            .map(|(_, versioned)| versioned)
    }
}

/// A single version of a group, like `apps/v1beta1`.
#[derive(Debug)]
pub struct IrVersionedApi<'a> {
    pub version: &'a str,
    pub objects: IndexMap<&'a str, IrApiObject<'a>>,
}

impl<'a> IrVersionedApi<'a> {
    pub fn new(version: &'a str) -> Self {
        Self {
            version,
            objects: IndexMap::new(),
        }
    }

    pub fn sorted_objects(&self) -> impl Iterator<Item = &IrApiObject<'a>> {
        self.objects
            .iter()
            .sorted_by_key(|&(&kind, _)| kind)
            .map(|(_, object)| object)
    }
}

/// An object kind within a versioned API, like `Deployment`.
#[derive(Debug)]
pub struct IrApiObject<'a> {
    pub kind: &'a str,
    /// Whether this object is emitted as an entry in the library.
    /// Objects that aren't top-level are still part of the model,
    /// because other objects' properties can refer to them.
    pub top_level: bool,
    pub properties: IndexMap<&'a str, IrPropertyMethod<'a>>,
}

impl<'a> IrApiObject<'a> {
    pub fn new(kind: &'a str, def: &'a Definition) -> Self {
        Self {
            kind,
            top_level: !def.top_level_specs.is_empty(),
            properties: def
                .properties
                .iter()
                .map(|(name, property)| {
                    let name = name.as_str();
                    (name, IrPropertyMethod::new(name, property))
                })
                .collect(),
        }
    }

    pub fn sorted_properties(&self) -> impl Iterator<Item = &IrPropertyMethod<'a>> {
        self.properties
            .iter()
            .sorted_by_key(|&(&name, _)| name)
            .map(|(_, method)| method)
    }
}

/// A builder function for one field of an object.
#[derive(Clone, Copy, Debug)]
pub struct IrPropertyMethod<'a> {
    pub name: &'a str,
    pub kind: IrPropertyKind<'a>,
}

impl<'a> IrPropertyMethod<'a> {
    pub fn new(name: &'a str, property: &'a Property) -> Self {
        Self {
            name,
            kind: IrPropertyKind::from(property),
        }
    }
}

/// The declared type of a property, which selects the code
/// that's generated for its property method.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IrPropertyKind<'a> {
    /// A reference to another definition.
    Ref(&'a DefinitionRef),
    /// A primitive, array, or object type.
    Typed(&'a Ty),
    /// Neither a reference nor a type. The model keeps these,
    /// but generating code for them fails.
    Untyped,
}

impl<'a> From<&'a Property> for IrPropertyKind<'a> {
    fn from(property: &'a Property) -> Self {
        match (&property.reference, &property.ty) {
            (Some(r), _) => Self::Ref(r),
            (None, Some(ty)) => Self::Typed(ty),
            (None, None) => Self::Untyped,
        }
    }
}
