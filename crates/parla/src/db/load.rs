use crate::RelationFilters;

use parla_core::{
    stmt::{Filter, Path, View},
    Context, FieldSpecMap,
};

/// One load request: which entity type, in which response shape, for whom.
#[derive(Debug)]
pub struct Load<'a> {
    pub(super) fields: &'a FieldSpecMap,
    pub(super) view: &'a View,
    pub(super) cx: &'a Context,
    pub(super) filter: Option<Filter>,
    pub(super) relation_filters: RelationFilters,
}

impl<'a> Load<'a> {
    pub fn new(fields: &'a FieldSpecMap, view: &'a View, cx: &'a Context) -> Load<'a> {
        Load {
            fields,
            view,
            cx,
            filter: None,
            relation_filters: RelationFilters::new(),
        }
    }

    /// Restricts the root entities.
    pub fn filter(mut self, filter: Filter) -> Load<'a> {
        self.filter = Some(filter);
        self
    }

    /// Replaces the default filter of the relation at `path`.
    pub fn relation_filter(mut self, path: impl Into<Path>, filter: Filter) -> Load<'a> {
        self.relation_filters.insert(path.into(), filter);
        self
    }
}
