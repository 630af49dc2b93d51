use tests::{
    fixtures::{ALICE, BOB},
    prelude::*,
    schema::{collection, text, vocab},
};

use parla::plan::FilteredPopulate;
use pretty_assertions::assert_eq;

fn plan(view: &View, fields: &parla::FieldSpecMap, cx: &Context) -> FetchPlan {
    assert_ok!(build_fetch_plan(view, fields, cx, &RelationFilters::new()))
}

#[test]
fn learner_vocab_view() {
    let view = view! { id, text, language { code }, meanings { id, text } };
    let plan = plan(&view, vocab::fields(), &Context::for_user(ALICE));

    assert_eq!(plan.fields, ["id", "text", "language.code"]);
    assert_eq!(plan.populate, ["language"]);
    assert!(plan.annotated_fields.is_empty());
    assert_eq!(
        plan.filtered_populates,
        [FilteredPopulate {
            populate: vec![path!(.meanings)],
            filter: [(path!(.meanings), Filter::eq("learners", ALICE))]
                .into_iter()
                .collect(),
            fields: vec![path!(.meanings.id), path!(.meanings.text)],
        }]
    );
}

#[test]
fn anonymous_vocab_view_has_no_filtered_populates() {
    let view = view! { id, text, language { code }, meanings { id, text } };
    let plan = plan(&view, vocab::fields(), &Context::anonymous());

    assert_eq!(
        plan.fields,
        ["id", "text", "language.code", "meanings.id", "meanings.text"]
    );
    assert_eq!(plan.populate, ["language", "meanings"]);
    assert!(plan.filtered_populates.is_empty());
}

#[test]
fn filter_follows_the_current_user() {
    let view = vocab::learner();

    let alice = plan(&view, vocab::fields(), &Context::for_user(ALICE));
    let bob = plan(&view, vocab::fields(), &Context::for_user(BOB));

    assert_eq!(alice.fields, bob.fields);
    assert_eq!(
        alice.filtered_populates[0].filter[&path!(.meanings)],
        Filter::eq("learners", ALICE)
    );
    assert_eq!(
        bob.filtered_populates[0].filter[&path!(.meanings)],
        Filter::eq("learners", BOB)
    );
}

#[test]
fn merged_view_adds_annotations() {
    let plan = plan(
        &collection::logged_in_detail(),
        collection::fields(),
        &Context::for_user(ALICE),
    );

    assert_eq!(
        plan.fields,
        [
            "id",
            "title",
            "textsCount",
            "description",
            "language.code",
            "addedBy.id",
            "addedBy.username",
            "texts.id",
            "texts.title",
        ]
    );
    assert_eq!(plan.populate, ["language", "addedBy", "texts"]);

    let annotated: Vec<_> = plan
        .annotated_fields
        .iter()
        .map(|task| (task.path.to_string(), task.field.as_str()))
        .collect();
    assert_eq!(
        annotated,
        [
            (String::new(), "isBookmarked"),
            ("texts".to_string(), "isBookmarked"),
        ]
    );
}

#[test]
fn filtered_relation_beneath_unfiltered_relation() {
    let view = view! { id, vocabs { text, meanings { text, vocab { text } } } };
    let plan = plan(&view, text::fields(), &Context::for_user(ALICE));

    assert_eq!(plan.fields, ["id", "vocabs.text"]);
    assert_eq!(plan.populate, ["vocabs"]);
    assert_eq!(
        plan.filtered_populates,
        [FilteredPopulate {
            populate: vec![
                path!(.vocabs),
                path!(.vocabs.meanings),
                path!(.vocabs.meanings.vocab),
            ],
            filter: [(path!(.vocabs.meanings), Filter::eq("learners", ALICE))]
                .into_iter()
                .collect(),
            fields: vec![path!(.vocabs.meanings.text), path!(.vocabs.meanings.vocab.text)],
        }]
    );
}

#[test]
fn cyclic_registries_nest_as_deep_as_the_view() {
    let view = view! { vocabs { meanings { vocab { meanings { text } } } } };
    let plan = plan(&view, text::fields(), &Context::anonymous());

    assert_eq!(plan.fields, ["vocabs.meanings.vocab.meanings.text"]);
    assert_eq!(
        plan.populate,
        [
            "vocabs",
            "vocabs.meanings",
            "vocabs.meanings.vocab",
            "vocabs.meanings.vocab.meanings",
        ]
    );
}

#[test]
fn override_replaces_default_filter_by_path() {
    let mut overrides = RelationFilters::new();
    overrides.insert(path!(.vocabs.meanings), Filter::eq("text", "dog"));

    let view = view! { vocabs { meanings { text } } };
    let plan = assert_ok!(build_fetch_plan(
        &view,
        text::fields(),
        &Context::for_user(ALICE),
        &overrides,
    ));

    assert_eq!(plan.filtered_populates.len(), 1);
    assert_eq!(
        plan.filtered_populates[0].relation(),
        Some(&path!(.vocabs.meanings))
    );
    assert_eq!(
        plan.filtered_populates[0].filter[&path!(.vocabs.meanings)],
        Filter::eq("text", "dog")
    );
}

#[test]
fn override_on_another_path_leaves_default_in_place() {
    let mut overrides = RelationFilters::new();
    overrides.insert(path!(.meanings), Filter::eq("text", "dog"));

    // Keyed from the root of a text, `meanings` names nothing.
    let view = view! { vocabs { meanings { text } } };
    let plan = assert_ok!(build_fetch_plan(
        &view,
        text::fields(),
        &Context::for_user(BOB),
        &overrides,
    ));

    assert_eq!(
        plan.filtered_populates[0].filter[&path!(.vocabs.meanings)],
        Filter::eq("learners", BOB)
    );
}

#[test]
fn every_sample_view_compiles() {
    let cx = Context::for_user(ALICE);

    for (view, fields) in [
        (text::summary(), text::fields()),
        (text::detail(), text::fields()),
        (text::logged_in(), text::fields()),
        (collection::summary(), collection::fields()),
        (collection::detail(), collection::fields()),
        (collection::logged_in_detail(), collection::fields()),
        (vocab::summary(), vocab::fields()),
        (vocab::learner(), vocab::fields()),
        (tests::schema::meaning::detail(), tests::schema::meaning::fields()),
        (tests::schema::language::summary(), tests::schema::language::fields()),
        (tests::schema::user::public(), tests::schema::user::fields()),
    ] {
        let plan = plan(&view, fields, &cx);
        assert!(!plan.is_empty(), "empty plan for {}", fields.name());
    }
}

#[test]
fn compiling_twice_gives_the_same_plan() {
    let cx = Context::for_user(ALICE);
    let view = collection::logged_in_detail().merge(&view! { texts { vocabs { meanings { id } } } });

    let first = plan(&view, collection::fields(), &cx);
    let second = plan(&view, collection::fields(), &cx);

    assert_set_eq!(first.fields, second.fields);
    assert_set_eq!(first.populate, second.populate);
    assert_set_eq!(first.filtered_populates, second.filtered_populates);
    assert_set_eq!(first.annotated_fields, second.annotated_fields);
}

#[test]
fn misspelled_field_in_merged_view_is_rejected() {
    let view = text::summary().merge(&view! { collection { titel } });
    let err = assert_err!(build_fetch_plan(
        &view,
        text::fields(),
        &Context::anonymous(),
        &RelationFilters::new(),
    ));

    assert!(err.is_invalid_view());
    assert_eq!(
        err.to_string(),
        "invalid view: `Collection` has no field named `titel`"
    );
}
