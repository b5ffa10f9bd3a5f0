use indexmap::{IndexMap, map::Entry};
use itertools::Itertools;

use crate::parse::{DefinitionName, Document, ParsedDefinitionName, name};

use super::{
    error::IrError,
    types::{IrApiObject, IrGroup, IrVersionedApi},
};

/// The root of the model: every group in a document, and the
/// definitions that couldn't be placed in a group.
#[derive(Debug, Default)]
pub struct IrLibrary<'a> {
    pub groups: IndexMap<&'a str, IrGroup<'a>>,
    pub skipped: Vec<SkippedDefinition<'a>>,
}

/// A definition that was left out of the model because its name
/// doesn't have a version.
#[derive(Clone, Copy, Debug)]
pub struct SkippedDefinition<'a> {
    pub name: &'a DefinitionName,
    pub parsed: ParsedDefinitionName<'a>,
}

impl<'a> IrLibrary<'a> {
    /// Builds the model from all the definitions in a document.
    ///
    /// Definitions without a version are skipped; every other
    /// definition becomes exactly one object. Fails if two definitions
    /// have the same group, version, and kind.
    pub fn from_doc(doc: &'a Document) -> Result<Self, IrError> {
        let mut library = Self::default();
        for (name, def) in &doc.definitions {
            let parsed = name::parse(name)?;
            let Some(version) = parsed.version else {
                tracing::warn!(
                    definition = name.as_str(),
                    kind = parsed.kind,
                    "can't make an API object from a name without a version; skipping"
                );
                library.skipped.push(SkippedDefinition { name, parsed });
                continue;
            };

            let group = library
                .groups
                .entry(parsed.group_or_core())
                .or_insert_with_key(|&name| IrGroup::new(name));
            let versioned = group
                .versions
                .entry(version)
                .or_insert_with_key(|&version| IrVersionedApi::new(version));
            match versioned.objects.entry(parsed.kind) {
                Entry::Occupied(_) => return Err(IrError::DuplicateKind(parsed.to_string())),
                Entry::Vacant(entry) => {
                    entry.insert(IrApiObject::new(parsed.kind, def));
                }
            }
        }
        Ok(library)
    }

    pub fn sorted_groups(&self) -> impl Iterator<Item = &IrGroup<'a>> {
        self.groups
            .iter()
            .sorted_by_key(|&(&name, _)| name)
            .map(|(_, group)| group)
    }

    /// Yields every object in the model, in no particular order.
    pub fn objects(&self) -> impl Iterator<Item = &IrApiObject<'a>> {
        self.groups
            .values()
            .flat_map(|group| group.versions.values())
            .flat_map(|versioned| versioned.objects.values())
    }

    /// Looks up an object by its group, version, and kind.
    pub fn object(&self, name: &ParsedDefinitionName<'_>) -> Result<&IrApiObject<'a>, IrError> {
        let version = name
            .version
            .ok_or_else(|| IrError::NoVersion(name.to_string()))?;
        let group = self
            .groups
            .get(name.group_or_core())
            .ok_or_else(|| IrError::UnknownGroup(name.group_or_core().to_owned()))?;
        let versioned = group
            .versions
            .get(version)
            .ok_or_else(|| IrError::UnknownVersion(version.to_owned()))?;
        versioned
            .objects
            .get(name.kind)
            .ok_or_else(|| IrError::UnknownKind(name.kind.to_owned()))
    }
}
