pub mod db;
pub use db::{Db, Load};

pub mod driver;

mod engine;
pub use engine::{annotate_fields, annotate_fields_bounded, build_fetch_plan, RelationFilters};

pub use parla_core::{
    async_trait, path, plan, schema, stmt, view, Context, Error, FetchPlan, FieldSpecMap, Result,
};
