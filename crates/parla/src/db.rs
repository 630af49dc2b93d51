mod builder;
pub use builder::Builder;

mod load;
pub use load::Load;

use crate::{driver::Query, engine, Result};

use parla_core::{driver::Driver, stmt::Entity, FetchPlan};

use std::sync::Arc;
use tracing::Instrument;

/// Shared state between all `Db` clones.
#[derive(Debug)]
struct Shared {
    driver: Box<dyn Driver>,

    /// Upper bound on annotation tasks running at once, unbounded if unset
    max_concurrent_annotations: Option<usize>,
}

/// Service-layer handle running loads: compile the view, fetch through the
/// driver, annotate, return.
///
/// Cloning is cheap and clones share the driver.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    /// Compiles the fetch plan of `load` without running it.
    pub fn plan(&self, load: &Load<'_>) -> Result<FetchPlan> {
        engine::build_fetch_plan(load.view, load.fields, load.cx, &load.relation_filters)
    }

    /// Loads the entities described by `load`.
    ///
    /// Returns only after every annotated field has been computed; if any
    /// annotator fails, the whole load fails.
    pub async fn load(&self, load: Load<'_>) -> Result<Vec<Entity>> {
        let span = tracing::debug_span!("load", model = load.fields.name());

        async {
            let plan = self.plan(&load)?;

            let query = Query {
                model: load.fields.name(),
                filter: load.filter.as_ref(),
                plan: &plan,
            };

            let mut entities = self.shared.driver.fetch(&query).await?;
            tracing::debug!(
                entities = entities.len(),
                filtered_populates = plan.filtered_populates.len(),
                "fetched"
            );

            match self.shared.max_concurrent_annotations {
                Some(limit) => {
                    engine::annotate_fields_bounded(
                        &mut entities,
                        &plan.annotated_fields,
                        load.fields,
                        load.cx,
                        limit,
                    )
                    .await?
                }
                None => {
                    engine::annotate_fields(
                        &mut entities,
                        &plan.annotated_fields,
                        load.fields,
                        load.cx,
                    )
                    .await?
                }
            }

            Ok::<_, crate::Error>(entities)
        }
        .instrument(span)
        .await
    }

    /// Loads the first entity described by `load`, if any.
    pub async fn load_one(&self, load: Load<'_>) -> Result<Option<Entity>> {
        Ok(self.load(load).await?.into_iter().next())
    }
}
