use super::{Path, Value};

use indexmap::IndexMap;
use serde::Serialize;

/// A hydrated record: named fields in fetch order, with relations nested
/// inline as [`Value::Entity`] or [`Value::List`].
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Entity {
    fields: IndexMap<String, Value>,
}

impl Entity {
    pub fn new() -> Entity {
        Entity::default()
    }

    /// Builder-style [`Entity::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Entity {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Sets a field, returning the previous value if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Every value reachable by walking `path` from this entity.
    ///
    /// Lists are flattened at each hop and missing or null hops contribute
    /// nothing, so `learners.id` on a meaning yields the id of each learner.
    pub fn values_at(&self, path: &Path) -> Vec<&Value> {
        let [head, rest @ ..] = path.segments() else {
            return vec![];
        };

        let mut current: Vec<&Value> = self.get(head).into_iter().collect();

        for segment in rest {
            current = current
                .into_iter()
                .flat_map(flatten)
                .filter_map(|value| value.as_entity()?.get(segment))
                .collect();
        }

        current.into_iter().flat_map(flatten).collect()
    }
}

fn flatten(value: &Value) -> Vec<&Value> {
    match value {
        Value::List(items) => items.iter().flat_map(flatten).collect(),
        Value::Null => vec![],
        value => vec![value],
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Entity {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Entity {
        Entity {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
