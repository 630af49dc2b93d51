mod annotate;
pub use annotate::{from_fn, Annotate, FromFn};

mod builder;
pub use builder::Builder;

mod field_spec;
pub use field_spec::FieldSpec;

mod field_spec_map;
pub use field_spec_map::{FieldSpecMap, Target};

mod relation;
pub use relation::{Cardinality, DefaultFilter, Relation};
