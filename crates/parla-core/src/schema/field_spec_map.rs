use super::{Builder, FieldSpec, Relation};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Lazily resolved registry of a related entity type.
pub type Target = fn() -> &'static FieldSpecMap;

/// The field registry of one entity type.
///
/// Built once per type at startup and never mutated afterwards, so it can be
/// shared by concurrent requests without locking.
#[derive(Debug)]
pub struct FieldSpecMap {
    /// Entity type name, used in error messages
    name: String,

    fields: IndexMap<String, FieldSpec>,
}

impl FieldSpecMap {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name.into())
    }

    pub(super) fn from_parts(name: String, fields: IndexMap<String, FieldSpec>) -> FieldSpecMap {
        FieldSpecMap { name, fields }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, field: &str) -> Option<&FieldSpec> {
        self.fields.get(field)
    }

    /// Looks up a field, failing with an invalid view error when the
    /// registry does not define it.
    pub fn field(&self, field: &str) -> Result<&FieldSpec> {
        self.get(field)
            .ok_or_else(|| Error::invalid_view(&self.name, field))
    }

    /// Looks up a relation field.
    pub fn relation(&self, field: &str) -> Result<&Relation> {
        self.field(field)?
            .as_relation()
            .ok_or_else(|| Error::not_a_relation(&self.name, field))
    }

    /// Finds the relation stored under the `populate` path segment.
    pub fn relation_by_populate(&self, populate: &str) -> Option<(&str, &Relation)> {
        self.fields.iter().find_map(|(name, spec)| match spec {
            FieldSpec::Relation(relation) if relation.populate == populate => {
                Some((name.as_str(), relation))
            }
            _ => None,
        })
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
