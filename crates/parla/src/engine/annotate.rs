
use parla_core::{
    plan::AnnotatedField,
    stmt::{Entity, Path, Value},
    Context, Error, FieldSpecMap, Result,
};

use futures::{
    future,
    stream::{self, StreamExt, TryStreamExt},
};

/// Runs every annotation task of a fetch and attaches the computed fields.
///
/// Each task receives the flat list of entities living at its path (to-many
/// hops are flattened, absent to-one hops contribute nothing) in a single
/// batch call. Tasks run concurrently. Values are only attached once every
/// task succeeded, so on error the entities are left untouched.
pub async fn annotate_fields(
    roots: &mut [Entity],
    annotated_fields: &[AnnotatedField],
    fields: &FieldSpecMap,
    cx: &Context,
) -> Result<()> {
    annotate(roots, annotated_fields, fields, cx, None).await
}

/// Like [`annotate_fields`], running at most `limit` tasks at a time.
pub async fn annotate_fields_bounded(
    roots: &mut [Entity],
    annotated_fields: &[AnnotatedField],
    fields: &FieldSpecMap,
    cx: &Context,
    limit: usize,
) -> Result<()> {
    annotate(roots, annotated_fields, fields, cx, Some(limit.max(1))).await
}

async fn annotate(
    roots: &mut [Entity],
    annotated_fields: &[AnnotatedField],
    fields: &FieldSpecMap,
    cx: &Context,
    limit: Option<usize>,
) -> Result<()> {
    if annotated_fields.is_empty() {
        return Ok(());
    }

    for task in annotated_fields {
        verify_path(fields, &task.path)?;
    }

    let computed: Vec<Vec<Value>> = {
        let roots = &*roots;
        let tasks = annotated_fields.iter().map(|task| run(roots, task, cx));

        match limit {
            Some(limit) => stream::iter(tasks).buffered(limit).try_collect().await?,
            None => future::try_join_all(tasks).await?,
        }
    };

    for (task, values) in annotated_fields.iter().zip(computed) {
        let mut values = values.into_iter();

        for root in roots.iter_mut() {
            visit_mut(root, task.path.segments(), &mut |entity| {
                if let Some(value) = values.next() {
                    entity.set(task.field.as_str(), value);
                }
            });
        }
    }

    Ok(())
}

async fn run(roots: &[Entity], task: &AnnotatedField, cx: &Context) -> Result<Vec<Value>> {
    let failed = || Error::annotation_failed(task.field.as_str(), &task.path);

    let mut entities = vec![];
    for root in roots {
        collect(root, &task.path, 0, &mut entities).map_err(|err| err.context(failed()))?;
    }

    tracing::debug!(
        field = %task.field,
        path = %task.path,
        entities = entities.len(),
        "running annotator"
    );

    let values = task
        .annotate
        .annotate(&entities, cx)
        .await
        .map_err(|err| err.context(failed()))?;

    if values.len() != entities.len() {
        return Err(Error::invalid_result(format!(
            "annotator returned {} values for {} entities",
            values.len(),
            entities.len()
        ))
        .context(failed()));
    }

    Ok(values)
}

/// Checks every hop of `path` names a relation of the registry it walks
/// through.
fn verify_path(fields: &FieldSpecMap, path: &Path) -> Result<()> {
    let mut current = fields;

    for (i, segment) in path.segments().iter().enumerate() {
        let Some((name, relation)) = current.relation_by_populate(segment) else {
            return Err(Error::invalid_view(current.name(), segment.as_str()));
        };

        match relation.target_fields() {
            Some(target) => current = target,
            None if i + 1 == path.len() => {}
            None => return Err(Error::relation_without_target(current.name(), name)),
        }
    }

    Ok(())
}

fn collect<'a>(
    entity: &'a Entity,
    path: &Path,
    depth: usize,
    out: &mut Vec<&'a Entity>,
) -> Result<()> {
    let Some(segment) = path.segments().get(depth) else {
        out.push(entity);
        return Ok(());
    };

    match entity.get(segment) {
        None | Some(Value::Null) => {}
        Some(Value::Entity(related)) => collect(related, path, depth + 1, out)?,
        Some(Value::List(items)) => {
            for item in items {
                match item {
                    Value::Entity(related) => collect(related, path, depth + 1, out)?,
                    other => {
                        return Err(Error::invalid_result(format!(
                            "relation `{segment}` holds a {} item",
                            other.kind()
                        )))
                    }
                }
            }
        }
        Some(other) => {
            return Err(Error::invalid_result(format!(
                "relation `{segment}` holds a {} value",
                other.kind()
            )))
        }
    }

    Ok(())
}

/// Visits the entities at `segments` in the same order [`collect`] lists
/// them.
fn visit_mut(entity: &mut Entity, segments: &[String], f: &mut dyn FnMut(&mut Entity)) {
    let [segment, rest @ ..] = segments else {
        f(entity);
        return;
    };

    match entity.get_mut(segment) {
        Some(Value::Entity(related)) => visit_mut(related, rest, f),
        Some(Value::List(items)) => {
            for item in items {
                if let Value::Entity(related) = item {
                    visit_mut(related, rest, f);
                }
            }
        }
        _ => {}
    }
}
