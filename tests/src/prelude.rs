//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{fixtures, init_tracing, schema, Library, LoggingDriver, QueryLog};

pub use parla::{
    build_fetch_plan, path,
    stmt::{Entity, Filter, Path, Value, View},
    view, Context, Db, FetchPlan, Load, RelationFilters,
};

pub use std_util::prelude::*;
