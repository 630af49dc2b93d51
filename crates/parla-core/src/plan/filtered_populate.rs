use crate::stmt::{Filter, Path};

use indexmap::IndexMap;

/// A relation that must be populated with a runtime-scoped filter.
///
/// Each entry is a self-contained query shape: `populate` lists every hop
/// from the root to the filtered relation and below it, `filter` maps
/// relation paths to the filter applied when populating them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilteredPopulate {
    pub populate: Vec<Path>,
    pub filter: IndexMap<Path, Filter>,
    pub fields: Vec<Path>,
}

impl FilteredPopulate {
    /// The filtered relation this entry was emitted for.
    pub fn relation(&self) -> Option<&Path> {
        self.filter.keys().last()
    }
}
