mod annotated_field;
pub use annotated_field::AnnotatedField;

mod filtered_populate;
pub use filtered_populate::FilteredPopulate;

use crate::stmt::Path;

/// Flat fetch instructions compiled from a view.
///
/// `fields` and `populate` describe the unfiltered part of the query,
/// `filtered_populates` lists relations that need their own scoped
/// population, and `annotated_fields` are computed after the fetch.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FetchPlan {
    /// Column and formula paths, dotted through relations
    pub fields: Vec<Path>,

    /// Relation paths to populate, including every intermediate hop
    pub populate: Vec<Path>,

    /// One entry per relation loaded with a runtime filter
    pub filtered_populates: Vec<FilteredPopulate>,

    /// Post-fetch computations
    pub annotated_fields: Vec<AnnotatedField>,
}

impl FetchPlan {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.populate.is_empty()
            && self.filtered_populates.is_empty()
            && self.annotated_fields.is_empty()
    }
}
