//! Vector storage and similarity queries against the S3 Vectors API.

mod s3;

use crate::types::{QueryMatch, Result, VectorQuery, VectorRecord};
use async_trait::async_trait;

pub use s3::S3VectorStore;

/// Vector store trait.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Store all records in a single upsert call.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Store` if the service rejects the call. There is
    /// no duplicate-key or partial-failure handling.
    async fn put(&self, records: Vec<VectorRecord>) -> Result<()>;

    /// Top-K similarity query, optionally constrained by an exact-match
    /// metadata filter.
    ///
    /// # Returns
    ///
    /// Matches in service order, with distance and metadata when the store
    /// returns them
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Store` if the query fails
    async fn query(&self, query: VectorQuery) -> Result<Vec<QueryMatch>>;
}
