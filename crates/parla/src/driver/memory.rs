use super::{Driver, Query};
use parla_core::{
    async_trait,
    plan::FetchPlan,
    stmt::{Entity, Filter, Path, Value},
    Error, Result,
};

use indexmap::{IndexMap, IndexSet};

/// In-memory driver holding fully hydrated entity graphs per model.
///
/// Fetching projects every stored graph down to the plan: the selected
/// columns, the populated relations, and filtered relations reduced to the
/// entities matching their filter. The filtered populate entries are merged
/// into one projection, which is equivalent to running them as separate
/// query shapes and stitching the results together.
#[derive(Debug, Default)]
pub struct Memory {
    models: IndexMap<String, Vec<Entity>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// Stores `entities` under `model`, after any already stored.
    pub fn insert(&mut self, model: impl Into<String>, entities: impl IntoIterator<Item = Entity>) {
        self.models.entry(model.into()).or_default().extend(entities);
    }

    /// Builder-style [`Memory::insert`].
    pub fn with(mut self, model: impl Into<String>, entities: impl IntoIterator<Item = Entity>) -> Memory {
        self.insert(model, entities);
        self
    }
}

#[async_trait]
impl Driver for Memory {
    async fn fetch(&self, query: &Query<'_>) -> Result<Vec<Entity>> {
        let Some(rows) = self.models.get(query.model) else {
            return Err(Error::invalid_schema(format!(
                "model `{}` is not stored in this driver",
                query.model
            )));
        };

        let selection = Selection::from_plan(query.plan);

        rows.iter()
            .filter(|row| query.filter.map_or(true, |filter| filter.eval(row)))
            .map(|row| selection.project(row))
            .collect()
    }
}

/// Projection tree for one entity level.
#[derive(Debug, Default)]
struct Selection {
    columns: IndexSet<String>,
    relations: IndexMap<String, Selection>,

    /// Filter the entities of this relation must match
    filter: Option<Filter>,
}

impl Selection {
    fn from_plan(plan: &FetchPlan) -> Selection {
        let mut root = Selection::default();

        for path in &plan.populate {
            root.relation(path);
        }

        for path in &plan.fields {
            root.column(path);
        }

        for entry in &plan.filtered_populates {
            for path in &entry.populate {
                root.relation(path);
            }

            for path in &entry.fields {
                root.column(path);
            }

            for (path, filter) in &entry.filter {
                root.relation(path).filter = Some(filter.clone());
            }
        }

        root
    }

    fn relation(&mut self, path: &Path) -> &mut Selection {
        path.segments()
            .iter()
            .fold(self, |node, segment| node.relations.entry(segment.clone()).or_default())
    }

    fn column(&mut self, path: &Path) {
        let Some((column, relations)) = path.segments().split_last() else {
            return;
        };

        let node = relations
            .iter()
            .fold(self, |node, segment| node.relations.entry(segment.clone()).or_default());
        node.columns.insert(column.clone());
    }

    fn matches(&self, entity: &Entity) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter.eval(entity))
    }

    fn project(&self, row: &Entity) -> Result<Entity> {
        let mut ret = Entity::new();

        for column in &self.columns {
            ret.set(column.as_str(), row.get(column).cloned().unwrap_or_default());
        }

        for (name, nested) in &self.relations {
            let value = match row.get(name) {
                None | Some(Value::Null) => Value::Null,
                Some(Value::Entity(related)) if nested.matches(related) => {
                    nested.project(related)?.into()
                }
                Some(Value::Entity(_)) => Value::Null,
                Some(Value::List(items)) => {
                    let mut projected = vec![];
                    for item in items {
                        let Value::Entity(related) = item else {
                            return Err(Error::invalid_result(format!(
                                "relation `{name}` holds a {} item",
                                item.kind()
                            )));
                        };

                        if nested.matches(related) {
                            projected.push(nested.project(related)?.into());
                        }
                    }
                    Value::List(projected)
                }
                Some(other) => {
                    return Err(Error::invalid_result(format!(
                        "relation `{name}` holds a {} value",
                        other.kind()
                    )))
                }
            };

            ret.set(name.as_str(), value);
        }

        Ok(ret)
    }
}
