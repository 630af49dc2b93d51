use super::{Annotate, Relation};

use std::{fmt, sync::Arc};

/// How one named field of an entity type is produced.
#[derive(Clone)]
pub enum FieldSpec {
    /// A plain stored column
    Column,

    /// A value computed by the persistence layer, selected like a column
    Formula,

    /// A reference to one or many other entities
    Relation(Relation),

    /// A value computed after the fetch by a batch annotator
    Annotated(Arc<dyn Annotate>),
}

impl FieldSpec {
    /// True for columns and formulas, the fields selected by path.
    pub fn is_selectable(&self) -> bool {
        matches!(self, FieldSpec::Column | FieldSpec::Formula)
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, FieldSpec::Relation(_))
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            FieldSpec::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    pub fn is_annotated(&self) -> bool {
        matches!(self, FieldSpec::Annotated(_))
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpec::Column => f.write_str("Column"),
            FieldSpec::Formula => f.write_str("Formula"),
            FieldSpec::Relation(relation) => f.debug_tuple("Relation").field(relation).finish(),
            FieldSpec::Annotated(_) => f.write_str("Annotated(..)"),
        }
    }
}
