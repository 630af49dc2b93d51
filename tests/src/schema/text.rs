use super::{annotators::IsBookmarked, collection, language, user, vocab};
use crate::fixtures::Bookmarkable;

use parla::{schema::Relation, stmt::View, view, FieldSpecMap};
use std::sync::LazyLock;

pub fn fields() -> &'static FieldSpecMap {
    static FIELDS: LazyLock<FieldSpecMap> = LazyLock::new(|| {
        FieldSpecMap::builder("Text")
            .columns(["id", "title", "content", "audio"])
            .formula("wordCount")
            .annotated("isBookmarked", IsBookmarked(Bookmarkable::Text))
            .relation("language", Relation::to_one("language").target(language::fields))
            .relation(
                "collection",
                Relation::to_one("collection").target(collection::fields),
            )
            .relation("vocabs", Relation::to_many("vocabs").target(vocab::fields))
            .relation("addedBy", Relation::to_one("addedBy").target(user::fields))
            .build()
            .expect("valid Text registry")
    });
    &FIELDS
}

pub fn summary() -> View {
    view! { id, title, wordCount, language { code } }
}

pub fn detail() -> View {
    summary().merge(&view! { content, audio, collection { id, title }, addedBy { id, username } })
}

pub fn logged_in() -> View {
    summary().merge(&view! { isBookmarked })
}
