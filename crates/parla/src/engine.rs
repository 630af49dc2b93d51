mod annotate;
pub use annotate::{annotate_fields, annotate_fields_bounded};

mod planner;
pub use planner::{build_fetch_plan, RelationFilters};
