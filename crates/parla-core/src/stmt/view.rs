use indexmap::{IndexMap, IndexSet};

/// The caller-declared selection tree for one response shape.
///
/// `fields` lists field names of the current entity type, `relations` maps
/// relation field names to the nested view of the related type. Both keep
/// declaration order, which the planner follows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct View {
    fields: IndexSet<String>,
    relations: IndexMap<String, View>,
}

impl View {
    pub fn new() -> View {
        View::default()
    }

    /// Selects a field.
    pub fn field(mut self, name: impl Into<String>) -> View {
        self.fields.insert(name.into());
        self
    }

    /// Selects every field in `names`.
    pub fn fields<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> View {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Selects a relation with the nested `view`. Selecting the same
    /// relation twice merges the nested views.
    pub fn relation(mut self, name: impl Into<String>, view: View) -> View {
        let name = name.into();
        match self.relations.get_mut(&name) {
            Some(existing) => *existing = existing.merge(&view),
            None => {
                self.relations.insert(name, view);
            }
        }
        self
    }

    pub fn selected_fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn relations(&self) -> &IndexMap<String, View> {
        &self.relations
    }

    /// True when the view selects nothing at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.relations.is_empty()
    }

    /// The union of two views.
    ///
    /// Fields keep first-seen order and nested relation views merge
    /// recursively. A "logged-in" response shape is typically the summary
    /// view merged with a few user-specific fields.
    pub fn merge(&self, other: &View) -> View {
        let mut ret = self.clone();
        ret.fields.extend(other.fields.iter().cloned());

        for (name, view) in &other.relations {
            match ret.relations.get_mut(name) {
                Some(existing) => *existing = existing.merge(view),
                None => {
                    ret.relations.insert(name.clone(), view.clone());
                }
            }
        }

        ret
    }
}
