//! Embedding provider trait.

use crate::types::Result;
use async_trait::async_trait;

/// Embedding provider trait.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embedding for a single text.
    ///
    /// # Arguments
    ///
    /// * `text` - Input text
    ///
    /// # Returns
    ///
    /// Embedding vector
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Embedding` if generation fails
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for a batch of texts.
    ///
    /// # Arguments
    ///
    /// * `texts` - Input texts
    ///
    /// # Returns
    ///
    /// Embedding vectors, in input order
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Embedding` if generation fails
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Get embedding dimensionality of the underlying model.
    fn dimensions(&self) -> usize;
}
