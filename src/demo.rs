//! End-to-end demo pipeline: embed the corpus, store it, run one query.
//!
//! Fully sequential; each service call blocks until it completes or fails.
//! Errors propagate to the caller untouched.

use crate::corpus;
use crate::embeddings::EmbeddingProvider;
use crate::store::VectorStore;
use crate::types::{QueryMatch, Result, VectorQuery, VectorRecord};
use serde_json::json;
use tracing::info;

/// Options for the demo run.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Number of nearest neighbors to request.
    pub top_k: usize,
    /// Exact-match genre filter; `None` queries the whole index.
    pub genre: Option<String>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            genre: Some(corpus::DEFAULT_GENRE.to_string()),
        }
    }
}

/// Embed the fixed corpus and store all records in one call.
///
/// Prints each text with its embedding dimension and first five elements.
pub async fn seed_corpus(
    embedder: &dyn EmbeddingProvider,
    store: &dyn VectorStore,
) -> Result<()> {
    let mut records = Vec::with_capacity(corpus::ENTRIES.len());

    for (i, entry) in corpus::ENTRIES.iter().enumerate() {
        let embedding = embedder.embed(entry.text).await?;

        println!("Text {}: {}", i + 1, entry.text);
        println!("Embedding dimension: {}", embedding.len());
        println!(
            "First 5 elements: {:?}",
            &embedding[..embedding.len().min(5)]
        );
        println!();

        records.push(VectorRecord {
            key: entry.key.to_string(),
            embedding,
            metadata: entry.metadata(),
        });
    }

    store.put(records).await?;
    info!(count = corpus::ENTRIES.len(), "stored corpus vectors");

    Ok(())
}

/// Embed the fixed query text and run a top-K similarity search.
///
/// The result set is returned exactly as the store produced it; no local
/// re-ranking or filtering.
pub async fn search(
    embedder: &dyn EmbeddingProvider,
    store: &dyn VectorStore,
    options: &DemoOptions,
) -> Result<Vec<QueryMatch>> {
    let embedding = embedder.embed(corpus::QUERY_TEXT).await?;

    let filter = options.genre.as_ref().map(|genre| json!({ "genre": genre }));

    store
        .query(VectorQuery {
            embedding,
            top_k: options.top_k,
            filter,
        })
        .await
}

/// Run the full demo: seed the corpus, then search it.
pub async fn run(
    embedder: &dyn EmbeddingProvider,
    store: &dyn VectorStore,
    options: &DemoOptions,
) -> Result<Vec<QueryMatch>> {
    seed_corpus(embedder, store).await?;
    search(embedder, store, options).await
}
