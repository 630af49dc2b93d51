use super::{FieldSpecMap, Target};
use crate::{stmt::Filter, Context};

use std::{fmt, sync::Arc};

/// Produces the filter scoping a relation for the current request, or `None`
/// to load it unfiltered.
pub type DefaultFilter = Arc<dyn Fn(&Context) -> Option<Filter> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ToOne,
    ToMany,
}

/// A field referencing one or many entities of another type.
#[derive(Clone)]
pub struct Relation {
    /// Storage path segment used to populate the relation
    pub populate: String,

    /// Registry of the related entity type
    pub target: Option<Target>,

    pub cardinality: Cardinality,

    /// Scopes the relation when the caller does not supply a filter
    pub default_filter: Option<DefaultFilter>,
}

impl Relation {
    pub fn to_one(populate: impl Into<String>) -> Relation {
        Relation::new(populate.into(), Cardinality::ToOne)
    }

    pub fn to_many(populate: impl Into<String>) -> Relation {
        Relation::new(populate.into(), Cardinality::ToMany)
    }

    fn new(populate: String, cardinality: Cardinality) -> Relation {
        Relation {
            populate,
            target: None,
            cardinality,
            default_filter: None,
        }
    }

    /// Sets the registry of the related type.
    ///
    /// The registry is passed as a function so two entity types can point
    /// at each other; it is only called while planning.
    pub fn target(mut self, target: Target) -> Relation {
        self.target = Some(target);
        self
    }

    pub fn default_filter<F>(mut self, f: F) -> Relation
    where
        F: Fn(&Context) -> Option<Filter> + Send + Sync + 'static,
    {
        self.default_filter = Some(Arc::new(f));
        self
    }

    pub fn target_fields(&self) -> Option<&'static FieldSpecMap> {
        self.target.map(|target| target())
    }

    pub fn is_to_many(&self) -> bool {
        self.cardinality == Cardinality::ToMany
    }

    /// Evaluates the default filter for `cx`.
    pub fn filter_for(&self, cx: &Context) -> Option<Filter> {
        self.default_filter.as_ref().and_then(|f| f(cx))
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("populate", &self.populate)
            .field("target", &self.target_fields().map(FieldSpecMap::name))
            .field("cardinality", &self.cardinality)
            .field("default_filter", &self.default_filter.is_some())
            .finish()
    }
}
