//! Configuration resolution for the search demo.
//!
//! Bucket and index names come from CLI flags with environment variable
//! fallback:
//! - S3_VECTOR_BUCKET: vector bucket name
//! - S3_VECTOR_INDEX: vector index name
//!
//! Both are required before any service client is constructed. Empty values
//! count as unset.

use crate::types::{Result, SearchError};

/// Environment fallback for `--bucket`.
pub const BUCKET_ENV: &str = "S3_VECTOR_BUCKET";
/// Environment fallback for `--index`.
pub const INDEX_ENV: &str = "S3_VECTOR_INDEX";

/// Default AWS region for both service clients.
pub const DEFAULT_REGION: &str = "us-west-2";
/// Default Bedrock embedding model.
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-embed-text-v2:0";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Vector bucket name.
    pub bucket: String,
    /// Vector index name.
    pub index: String,
}

impl SearchConfig {
    /// Resolve bucket and index from CLI values with environment fallback.
    ///
    /// CLI values win over the environment.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Config` if either value is missing or empty
    /// after fallback.
    pub fn resolve(bucket: Option<String>, index: Option<String>) -> Result<Self> {
        Self::resolve_with(bucket, index, |name| std::env::var(name).ok())
    }

    fn resolve_with<F>(bucket: Option<String>, index: Option<String>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = non_empty(bucket).or_else(|| non_empty(env(BUCKET_ENV)));
        let index = non_empty(index).or_else(|| non_empty(env(INDEX_ENV)));

        match (bucket, index) {
            (Some(bucket), Some(index)) => Ok(Self { bucket, index }),
            (None, _) => Err(SearchError::Config(format!(
                "bucket name is required (--bucket or {})",
                BUCKET_ENV
            ))),
            (_, None) => Err(SearchError::Config(format!(
                "index name is required (--index or {})",
                INDEX_ENV
            ))),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
