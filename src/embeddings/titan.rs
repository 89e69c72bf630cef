//! Bedrock Titan embedding client.

use crate::embeddings::provider::EmbeddingProvider;
use crate::types::{Result, SearchError};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Titan embedding request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbeddingRequest<'a> {
    input_text: &'a str,
}

/// Titan embedding response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmbeddingResponse {
    embedding: Vec<f32>,
    #[serde(default)]
    input_text_token_count: Option<i64>,
}

/// Output dimensions for known Titan text models.
fn model_dimensions(model_id: &str) -> usize {
    match model_id {
        "amazon.titan-embed-text-v2:0" => 1024,
        "amazon.titan-embed-text-v1" => 1536,
        _ => 1024,
    }
}

/// Bedrock Titan embedding provider.
pub struct TitanEmbedder {
    client: Client,
    model_id: String,
    dimensions: usize,
}

impl TitanEmbedder {
    /// Create a new Titan embedder.
    ///
    /// # Arguments
    ///
    /// * `client` - Bedrock Runtime client
    /// * `model_id` - Model id (e.g., "amazon.titan-embed-text-v2:0")
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        let dimensions = model_dimensions(&model_id);

        Self {
            client,
            model_id,
            dimensions,
        }
    }

    /// Call the InvokeModel API with a single input text.
    async fn invoke(&self, text: &str) -> Result<Vec<f32>> {
        let body = serde_json::to_vec(&EmbeddingRequest { input_text: text })?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| SearchError::Embedding(format!("Bedrock InvokeModel failed: {}", e)))?;

        let parsed: EmbeddingResponse = serde_json::from_slice(response.body().as_ref())
            .map_err(|e| SearchError::Embedding(format!("Failed to parse Titan response: {}", e)))?;

        if parsed.embedding.is_empty() {
            return Err(SearchError::Embedding(
                "No embedding returned from Bedrock".to_string(),
            ));
        }

        if let Some(tokens) = parsed.input_text_token_count {
            debug!(model = %self.model_id, tokens, dimension = parsed.embedding.len(), "generated embedding");
        }

        Ok(parsed.embedding)
    }
}

#[async_trait]
impl EmbeddingProvider for TitanEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.invoke(text).await
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        // Titan text models take one inputText per request
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.invoke(text).await?);
        }
        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_input_text_key() {
        let body = serde_json::to_value(EmbeddingRequest {
            input_text: "hello",
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({"inputText": "hello"}));
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"embedding": [0.1, -0.2, 0.3], "inputTextTokenCount": 7}"#;
        let parsed: EmbeddingResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.embedding.len(), 3);
        assert_eq!(parsed.input_text_token_count, Some(7));
    }

    #[test]
    fn test_response_without_token_count() {
        let raw = r#"{"embedding": [1.0]}"#;
        let parsed: EmbeddingResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.embedding, vec![1.0]);
        assert_eq!(parsed.input_text_token_count, None);
    }

    #[test]
    fn test_model_dimensions() {
        assert_eq!(model_dimensions("amazon.titan-embed-text-v2:0"), 1024);
        assert_eq!(model_dimensions("amazon.titan-embed-text-v1"), 1536);
        assert_eq!(model_dimensions("unknown-model"), 1024);
    }
}
