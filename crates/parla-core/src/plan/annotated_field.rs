use crate::{schema::Annotate, stmt::Path};

use std::{fmt, sync::Arc};

/// A post-fetch computation for the entities living at `path`.
#[derive(Clone)]
pub struct AnnotatedField {
    /// Relation path of the owning entities, the root path for root entities
    pub path: Path,

    /// Name of the field the annotator produces
    pub field: String,

    pub annotate: Arc<dyn Annotate>,
}

impl PartialEq for AnnotatedField {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.field == other.field
            && Arc::ptr_eq(&self.annotate, &other.annotate)
    }
}

impl fmt::Debug for AnnotatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedField")
            .field("path", &self.path)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}
