use super::{annotators::IsBookmarked, language, text, user};
use crate::fixtures::Bookmarkable;

use parla::{schema::Relation, stmt::View, view, FieldSpecMap};
use std::sync::LazyLock;

pub fn fields() -> &'static FieldSpecMap {
    static FIELDS: LazyLock<FieldSpecMap> = LazyLock::new(|| {
        FieldSpecMap::builder("Collection")
            .columns(["id", "title", "description"])
            .formula("textsCount")
            .annotated("isBookmarked", IsBookmarked(Bookmarkable::Collection))
            .relation("language", Relation::to_one("language").target(language::fields))
            .relation("texts", Relation::to_many("texts").target(text::fields))
            .relation("addedBy", Relation::to_one("addedBy").target(user::fields))
            .build()
            .expect("valid Collection registry")
    });
    &FIELDS
}

pub fn summary() -> View {
    view! { id, title, textsCount, language { code } }
}

pub fn detail() -> View {
    summary().merge(&view! { description, addedBy { id, username }, texts { id, title } })
}

pub fn logged_in_detail() -> View {
    detail().merge(&view! { isBookmarked, texts { isBookmarked } })
}
