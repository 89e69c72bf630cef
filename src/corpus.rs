//! The fixed demo corpus: three movie plots and a query about space travel.

use serde_json::{json, Value};

/// One corpus entry: vector key, metadata id, plot text, genre label.
#[derive(Debug, Clone, Copy)]
pub struct CorpusEntry {
    /// Key of the vector in the index.
    pub key: &'static str,
    /// Metadata identifier.
    pub id: &'static str,
    /// Plot text submitted to the embedding model.
    pub text: &'static str,
    /// Genre label used for exact-match filtering.
    pub genre: &'static str,
}

/// The texts to convert to embeddings.
pub const ENTRIES: [CorpusEntry; 3] = [
    CorpusEntry {
        key: "v1",
        id: "key1",
        text: "Star Wars: A farm boy joins rebels to fight an evil empire in space",
        genre: "scifi",
    },
    CorpusEntry {
        key: "v2",
        id: "key2",
        text: "Jurassic Park: Scientists create dinosaurs in a theme park that goes wrong",
        genre: "scifi",
    },
    CorpusEntry {
        key: "v3",
        id: "key3",
        text: "Finding Nemo: A father fish searches the ocean to find his lost son",
        genre: "family",
    },
];

/// The query text embedded for the similarity search.
pub const QUERY_TEXT: &str = "List the movies about adventures in space";

/// Default genre filter applied to the query.
pub const DEFAULT_GENRE: &str = "scifi";

impl CorpusEntry {
    /// Metadata object stored with this entry's vector.
    pub fn metadata(&self) -> Value {
        json!({
            "id": self.id,
            "source_text": self.text,
            "genre": self.genre,
        })
    }
}
