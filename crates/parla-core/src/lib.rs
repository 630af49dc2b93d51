#[macro_use]
mod macros;

mod context;
pub use context::Context;

pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod plan;
pub use plan::FetchPlan;

pub mod schema;
pub use schema::FieldSpecMap;

pub mod stmt;

/// A Result type alias that uses Parla's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
