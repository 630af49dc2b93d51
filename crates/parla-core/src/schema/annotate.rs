use crate::{
    async_trait,
    stmt::{Entity, Value},
    Context, Result,
};

use std::fmt;

/// Computes a field the persistence layer cannot produce.
///
/// An annotator is a batch operation: it receives every entity that owns the
/// field in one call, so it can issue a single lookup for all of them. It
/// returns one value per entity, in the order given; the executor attaches
/// the values once every annotator of the fetch succeeded.
#[async_trait]
pub trait Annotate: Send + Sync + 'static {
    async fn annotate(&self, entities: &[&Entity], cx: &Context) -> Result<Vec<Value>>;
}

/// Annotator built from a synchronous closure. See [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

/// Wraps a closure computing annotated values without I/O.
///
/// ```
/// # use parla_core::{schema, stmt::Value};
/// let word_count = schema::from_fn(|texts, _cx| {
///     Ok(texts
///         .iter()
///         .map(|text| {
///             let words = text
///                 .get("content")
///                 .and_then(Value::as_str)
///                 .map_or(0, |content| content.split_whitespace().count());
///             Value::from(words)
///         })
///         .collect())
/// });
/// # let _ = word_count;
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&[&Entity], &Context) -> Result<Vec<Value>> + Send + Sync + 'static,
{
    FromFn { f }
}

#[async_trait]
impl<F> Annotate for FromFn<F>
where
    F: Fn(&[&Entity], &Context) -> Result<Vec<Value>> + Send + Sync + 'static,
{
    async fn annotate(&self, entities: &[&Entity], cx: &Context) -> Result<Vec<Value>> {
        (self.f)(entities, cx)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
