//! Value types exchanged with the vector store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A (key, embedding, metadata) record submitted to the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    /// Unique key within the index.
    pub key: String,
    /// Embedding vector. Dimensionality is whatever the model produced;
    /// the index rejects mismatches, nothing is validated locally.
    pub embedding: Vec<f32>,
    /// Free-form metadata object stored alongside the vector.
    pub metadata: Value,
}

/// A top-K similarity query.
#[derive(Debug, Clone)]
pub struct VectorQuery {
    /// Query embedding.
    pub embedding: Vec<f32>,
    /// Number of nearest neighbors to return.
    pub top_k: usize,
    /// Optional exact-match metadata filter, e.g. `{"genre": "scifi"}`.
    pub filter: Option<Value>,
}

/// One match returned by a similarity query, in service order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMatch {
    /// Key of the stored vector.
    pub key: String,
    /// Distance to the query vector (present when requested).
    pub distance: Option<f32>,
    /// Stored metadata (present when requested).
    pub metadata: Option<Value>,
}
