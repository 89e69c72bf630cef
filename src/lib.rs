//! Semantic movie search demo over Bedrock Titan embeddings and S3 Vectors.
//!
//! Embeds a fixed corpus of movie plots with the Bedrock Runtime API, stores
//! the vectors with metadata in an S3 Vectors index, and runs a filtered
//! top-K similarity query against it. Every operation is a single-shot call
//! to the managed service; persistence lives entirely on the service side.

pub mod config;
pub mod corpus;
pub mod demo;
pub mod embeddings;
pub mod store;
pub mod types;

// Re-export main types
pub use config::SearchConfig;
pub use embeddings::{EmbeddingProvider, TitanEmbedder};
pub use store::{S3VectorStore, VectorStore};
pub use types::{QueryMatch, Result, SearchError, VectorQuery, VectorRecord};
