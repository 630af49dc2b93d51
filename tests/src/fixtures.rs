//! Sample data: a handful of languages, users, vocabulary and texts, plus
//! the per-user library the annotators read from.
//!
//! User 1 is `alice`, user 2 is `bob`.

use parla::{
    driver::Memory,
    stmt::{Entity, Value},
};

use std::{collections::HashMap, sync::LazyLock};

pub const ALICE: i64 = 1;
pub const BOB: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bookmarkable {
    Text,
    Collection,
}

/// What users saved: bookmarks and vocabulary levels.
#[derive(Debug, Default)]
pub struct Library {
    bookmarks: Vec<(Bookmarkable, i64, i64)>,
    levels: Vec<(i64, i64, i64)>,
}

impl Library {
    fn sample() -> Library {
        Library {
            bookmarks: vec![
                (Bookmarkable::Text, ALICE, 10),
                (Bookmarkable::Collection, BOB, 50),
            ],
            levels: vec![(ALICE, 100, 3), (ALICE, 101, 1), (BOB, 101, 5)],
        }
    }

    /// Ids of the `kind` entities `user` bookmarked.
    pub fn bookmarks(&self, kind: Bookmarkable, user: i64) -> Vec<i64> {
        self.bookmarks
            .iter()
            .filter(|(k, u, _)| *k == kind && *u == user)
            .map(|(_, _, id)| *id)
            .collect()
    }

    /// Vocab id to level for `user`.
    pub fn levels(&self, user: i64) -> HashMap<i64, i64> {
        self.levels
            .iter()
            .filter(|(u, _, _)| *u == user)
            .map(|(_, vocab, level)| (*vocab, *level))
            .collect()
    }

    pub fn learners_of(&self, meaning: i64) -> usize {
        MEANINGS
            .iter()
            .find(|m| m.id == meaning)
            .map_or(0, |m| m.learners.len())
    }
}

pub fn library() -> &'static Library {
    static LIBRARY: LazyLock<Library> = LazyLock::new(Library::sample);
    &LIBRARY
}

struct MeaningRow {
    id: i64,
    vocab: i64,
    text: &'static str,
    learners: &'static [i64],
}

static MEANINGS: [MeaningRow; 4] = [
    MeaningRow { id: 1, vocab: 100, text: "dog", learners: &[ALICE] },
    MeaningRow { id: 2, vocab: 100, text: "hound", learners: &[BOB] },
    MeaningRow { id: 3, vocab: 101, text: "cat", learners: &[ALICE, BOB] },
    MeaningRow { id: 4, vocab: 200, text: "dog", learners: &[] },
];

pub fn language(code: &str) -> Entity {
    let (id, name, texts) = match code {
        "de" => (1, "German", 2),
        "es" => (2, "Spanish", 1),
        "en" => (3, "English", 0),
        _ => (0, "Unknown", 0),
    };

    Entity::new()
        .with("id", id)
        .with("code", code)
        .with("name", name)
        .with("textsCount", texts)
        .with(
            "flagImage",
            Entity::new()
                .with("url", format!("/flags/{code}.svg"))
                .with("alt", name),
        )
}

pub fn user(id: i64) -> Entity {
    let username = match id {
        ALICE => "alice",
        BOB => "bob",
        _ => "ghost",
    };

    Entity::new()
        .with("id", id)
        .with("username", username)
        .with("email", format!("{username}@example.com"))
}

/// A vocab hydrated with its meanings; each meaning links back to a shallow
/// copy of its vocab.
pub fn vocab(id: i64) -> Entity {
    let (text, code) = match id {
        100 => ("Hund", "de"),
        101 => ("Katze", "de"),
        200 => ("perro", "es"),
        _ => ("?", "de"),
    };

    let meanings: Vec<Entity> = MEANINGS
        .iter()
        .filter(|m| m.vocab == id)
        .map(meaning)
        .collect();

    Entity::new()
        .with("id", id)
        .with("text", text)
        .with("meaningsCount", meanings.len())
        .with("language", language(code))
        .with("meanings", meanings)
}

fn meaning(row: &MeaningRow) -> Entity {
    let vocab = match row.vocab {
        100 => "Hund",
        101 => "Katze",
        _ => "perro",
    };

    Entity::new()
        .with("id", row.id)
        .with("text", row.text)
        .with("language", language("en"))
        .with("vocab", Entity::new().with("id", row.vocab).with("text", vocab))
        .with("learners", row.learners.to_vec())
}

pub fn text(id: i64) -> Entity {
    let (title, code, vocabs, collection): (&str, &str, &[i64], Option<i64>) = match id {
        10 => ("Der Hund", "de", &[100], Some(50)),
        11 => ("Die Katze", "de", &[100, 101], Some(50)),
        12 => ("El perro", "es", &[200], None),
        _ => ("?", "de", &[], None),
    };

    let collection = collection.map(|id| {
        Entity::new()
            .with("id", id)
            .with("title", "Tiere")
            .with("textsCount", 2)
    });

    Entity::new()
        .with("id", id)
        .with("title", title)
        .with("content", format!("{title}."))
        .with("audio", Value::Null)
        .with("wordCount", title.split_whitespace().count())
        .with("language", language(code))
        .with("collection", collection)
        .with("vocabs", vocabs.iter().map(|&id| vocab(id)).collect::<Vec<_>>())
        .with("addedBy", user(ALICE))
}

pub fn collection(id: i64) -> Entity {
    Entity::new()
        .with("id", id)
        .with("title", "Tiere")
        .with("description", "Short texts about animals")
        .with("textsCount", 2)
        .with("language", language("de"))
        .with("texts", vec![text(10), text(11)])
        .with("addedBy", user(BOB))
}

/// An in-memory store holding every sample entity.
pub fn store() -> Memory {
    Memory::new()
        .with("Language", ["de", "es"].map(language))
        .with("User", [ALICE, BOB].map(user))
        .with("Vocab", [100, 101, 200].map(vocab))
        .with("Meaning", MEANINGS.iter().map(meaning))
        .with("Text", [10, 11, 12].map(text))
        .with("Collection", [collection(50)])
}
