use super::{Annotate, FieldSpec, FieldSpecMap, Relation};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Builds a [`FieldSpecMap`].
///
/// Declaring the same field twice, or a relation whose populate segment is
/// empty, dotted or already used by another relation, is reported by
/// [`Builder::build`].
#[derive(Debug)]
pub struct Builder {
    name: String,
    fields: IndexMap<String, FieldSpec>,
    duplicates: Vec<String>,
}

impl Builder {
    pub(super) fn new(name: String) -> Builder {
        Builder {
            name,
            fields: IndexMap::new(),
            duplicates: vec![],
        }
    }

    pub fn column(self, name: impl Into<String>) -> Builder {
        self.spec(name.into(), FieldSpec::Column)
    }

    pub fn columns<S: Into<String>>(self, names: impl IntoIterator<Item = S>) -> Builder {
        names
            .into_iter()
            .fold(self, |builder, name| builder.column(name))
    }

    pub fn formula(self, name: impl Into<String>) -> Builder {
        self.spec(name.into(), FieldSpec::Formula)
    }

    pub fn relation(self, name: impl Into<String>, relation: Relation) -> Builder {
        self.spec(name.into(), FieldSpec::Relation(relation))
    }

    pub fn annotated(self, name: impl Into<String>, annotate: impl Annotate) -> Builder {
        self.spec(name.into(), FieldSpec::Annotated(Arc::new(annotate)))
    }

    fn spec(mut self, name: String, spec: FieldSpec) -> Builder {
        if self.fields.contains_key(&name) {
            self.duplicates.push(name);
        } else {
            self.fields.insert(name, spec);
        }
        self
    }

    pub fn build(self) -> Result<FieldSpecMap> {
        if let Some(name) = self.duplicates.first() {
            return Err(Error::invalid_schema(format!(
                "duplicate field `{name}` on `{}`",
                self.name
            )));
        }

        let mut populates = IndexMap::new();

        for (name, spec) in &self.fields {
            let FieldSpec::Relation(relation) = spec else {
                continue;
            };

            let populate = relation.populate.as_str();

            if populate.is_empty() || populate.contains('.') {
                return Err(Error::invalid_schema(format!(
                    "relation `{}::{name}` has invalid populate segment `{populate}`",
                    self.name
                )));
            }

            // Annotation paths are resolved by populate segment, so each
            // segment must name one relation.
            if let Some(first) = populates.insert(populate, name) {
                return Err(Error::invalid_schema(format!(
                    "relations `{first}` and `{name}` on `{}` share populate segment `{populate}`",
                    self.name
                )));
            }
        }

        Ok(FieldSpecMap::from_parts(self.name, self.fields))
    }
}
