use crate::{
    async_trait,
    plan::FetchPlan,
    stmt::{Entity, Filter},
    Result,
};

use std::fmt::Debug;

/// Storage backend executing fetch plans.
///
/// A driver receives the fetch plan compiled for one request and returns the
/// hydrated root entities with their populated relations nested inline. It
/// must issue a distinct scoped population for each filtered populate entry
/// and ignore the plan's annotated fields, which are computed afterwards.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    async fn fetch(&self, query: &Query<'_>) -> Result<Vec<Entity>>;
}

/// A fetch request handed to a [`Driver`].
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    /// Entity type being loaded
    pub model: &'a str,

    /// Filter on the root entities
    pub filter: Option<&'a Filter>,

    pub plan: &'a FetchPlan,
}
