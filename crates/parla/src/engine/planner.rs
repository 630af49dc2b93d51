
use parla_core::{
    plan::{AnnotatedField, FilteredPopulate},
    schema::{FieldSpec, Relation},
    stmt::{Filter, Path, View},
    Context, Error, FetchPlan, FieldSpecMap, Result,
};

use indexmap::IndexMap;

/// Caller supplied filters replacing a relation's default filter, keyed by
/// the relation's populate path from the root (`meanings`,
/// `texts.meanings`).
pub type RelationFilters = IndexMap<Path, Filter>;

/// Compiles `view` against the registry of its entity type.
///
/// Columns and formulas become dotted field paths, relations become populate
/// paths, relations carrying a filter (from `relation_filters` or the
/// relation's default filter) become separate filtered populate entries, and
/// annotated fields become post-fetch tasks. Any name the registry does not
/// know aborts the whole compilation, as does a non-empty nested view on a
/// relation declared without a target registry.
pub fn build_fetch_plan(
    view: &View,
    fields: &FieldSpecMap,
    cx: &Context,
    relation_filters: &RelationFilters,
) -> Result<FetchPlan> {
    let mut planner = Planner {
        cx,
        relation_filters,
        filtered_populates: vec![],
        annotated_fields: vec![],
    };

    let mut root = Scope::default();
    planner.plan_view(view, fields, &Path::root(), &mut root)?;

    let plan = FetchPlan {
        fields: root.fields,
        populate: root.populate,
        filtered_populates: planner.filtered_populates,
        annotated_fields: planner.annotated_fields,
    };

    tracing::trace!(
        model = fields.name(),
        fields = plan.fields.len(),
        populate = plan.populate.len(),
        filtered_populates = plan.filtered_populates.len(),
        annotated_fields = plan.annotated_fields.len(),
        "compiled fetch plan"
    );

    Ok(plan)
}

struct Planner<'a> {
    cx: &'a Context,
    relation_filters: &'a RelationFilters,

    /// Entries are reserved before their nested view is planned, so a
    /// filtered relation always precedes filtered relations beneath it.
    filtered_populates: Vec<FilteredPopulate>,

    annotated_fields: Vec<AnnotatedField>,
}

/// The query shape selections at the current level are added to: the
/// unfiltered root query or one filtered populate entry.
#[derive(Default)]
struct Scope {
    fields: Vec<Path>,
    populate: Vec<Path>,
    filter: IndexMap<Path, Filter>,
}

impl Scope {
    fn populate(&mut self, path: Path) {
        if !self.populate.contains(&path) {
            self.populate.push(path);
        }
    }
}

impl Planner<'_> {
    fn plan_view(
        &mut self,
        view: &View,
        fields: &FieldSpecMap,
        prefix: &Path,
        scope: &mut Scope,
    ) -> Result<()> {
        for name in view.selected_fields() {
            match fields.field(name)? {
                FieldSpec::Column | FieldSpec::Formula => {
                    scope.fields.push(prefix.join(name));
                }
                FieldSpec::Annotated(annotate) => {
                    self.annotated_fields.push(AnnotatedField {
                        path: prefix.clone(),
                        field: name.to_string(),
                        annotate: annotate.clone(),
                    });
                }
                // Selecting a relation by name populates it without any
                // nested field detail, unless the relation pass below covers it.
                FieldSpec::Relation(_) if view.relations().contains_key(name) => {}
                FieldSpec::Relation(relation) => {
                    self.plan_relation(name, relation, &View::new(), fields, prefix, scope)?;
                }
            }
        }

        for (name, nested) in view.relations() {
            let relation = fields.relation(name)?;
            self.plan_relation(name, relation, nested, fields, prefix, scope)?;
        }

        Ok(())
    }

    fn plan_relation(
        &mut self,
        name: &str,
        relation: &Relation,
        view: &View,
        fields: &FieldSpecMap,
        prefix: &Path,
        scope: &mut Scope,
    ) -> Result<()> {
        let path = prefix.join(&relation.populate);
        let target = relation.target_fields();

        if target.is_none() && !view.is_empty() {
            return Err(Error::relation_without_target(fields.name(), name));
        }

        let filter = match self.relation_filters.get(&path) {
            Some(filter) => Some(filter.clone()),
            None => relation.filter_for(self.cx),
        };

        let Some(filter) = filter else {
            scope.populate(path.clone());

            if let Some(target) = target {
                self.plan_view(view, target, &path, scope)?;
            }

            return Ok(());
        };

        // A filter cannot share the parent query: it would apply to every
        // relation populated at that level. Give the relation its own shape,
        // carrying the filters of any filtered ancestor.
        let mut nested = Scope {
            fields: vec![],
            populate: path.ancestors().chain([path.clone()]).collect(),
            filter: scope.filter.clone(),
        };
        nested.filter.insert(path.clone(), filter);

        let index = self.filtered_populates.len();
        self.filtered_populates.push(FilteredPopulate::default());

        if let Some(target) = target {
            self.plan_view(view, target, &path, &mut nested)?;
        }

        self.filtered_populates[index] = FilteredPopulate {
            populate: nested.populate,
            filter: nested.filter,
            fields: nested.fields,
        };

        Ok(())
    }
}
