//! S3 Vectors client wrapper.

use crate::store::VectorStore;
use crate::types::{QueryMatch, Result, SearchError, VectorQuery, VectorRecord};
use async_trait::async_trait;
use aws_sdk_s3vectors::types::{PutInputVector, VectorData};
use aws_sdk_s3vectors::Client;
use aws_smithy_types::{Document, Number};
use serde_json::Value;
use tracing::debug;

/// S3 Vectors store bound to one bucket and index.
pub struct S3VectorStore {
    client: Client,
    bucket: String,
    index: String,
}

impl S3VectorStore {
    /// Create a store bound to `bucket` and `index`.
    pub fn new(client: Client, bucket: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            index: index.into(),
        }
    }
}

#[async_trait]
impl VectorStore for S3VectorStore {
    async fn put(&self, records: Vec<VectorRecord>) -> Result<()> {
        let mut vectors = Vec::with_capacity(records.len());
        for record in records {
            let vector = PutInputVector::builder()
                .key(record.key)
                .data(VectorData::Float32(record.embedding))
                .metadata(to_document(&record.metadata))
                .build()
                .map_err(|e| SearchError::Store(format!("Invalid vector record: {}", e)))?;
            vectors.push(vector);
        }

        debug!(
            bucket = %self.bucket,
            index = %self.index,
            count = vectors.len(),
            "putting vectors"
        );

        self.client
            .put_vectors()
            .vector_bucket_name(&self.bucket)
            .index_name(&self.index)
            .set_vectors(Some(vectors))
            .send()
            .await
            .map_err(|e| SearchError::Store(format!("PutVectors failed: {}", e)))?;

        Ok(())
    }

    async fn query(&self, query: VectorQuery) -> Result<Vec<QueryMatch>> {
        debug!(
            bucket = %self.bucket,
            index = %self.index,
            top_k = query.top_k,
            filtered = query.filter.is_some(),
            "querying vectors"
        );

        let response = self
            .client
            .query_vectors()
            .vector_bucket_name(&self.bucket)
            .index_name(&self.index)
            .query_vector(VectorData::Float32(query.embedding))
            .top_k(query.top_k as i32)
            .set_filter(query.filter.as_ref().map(to_document))
            .return_distance(true)
            .return_metadata(true)
            .send()
            .await
            .map_err(|e| SearchError::Store(format!("QueryVectors failed: {}", e)))?;

        let matches = response
            .vectors()
            .iter()
            .map(|vector| QueryMatch {
                key: vector.key().to_string(),
                distance: vector.distance(),
                metadata: vector.metadata().map(from_document),
            })
            .collect();

        Ok(matches)
    }
}

/// Convert JSON metadata to the SDK document type.
fn to_document(value: &Value) -> Document {
    match value {
        Value::Null => Document::Null,
        Value::Bool(b) => Document::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Document::Number(Number::PosInt(u))
            } else if let Some(i) = n.as_i64() {
                Document::Number(Number::NegInt(i))
            } else {
                Document::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        Value::String(s) => Document::String(s.clone()),
        Value::Array(items) => Document::Array(items.iter().map(to_document).collect()),
        Value::Object(map) => Document::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_document(v)))
                .collect(),
        ),
    }
}

/// Convert a response document back to JSON for printing and inspection.
fn from_document(doc: &Document) -> Value {
    match doc {
        Document::Null => Value::Null,
        Document::Bool(b) => Value::Bool(*b),
        Document::Number(Number::PosInt(u)) => Value::from(*u),
        Document::Number(Number::NegInt(i)) => Value::from(*i),
        Document::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Document::String(s) => Value::String(s.clone()),
        Document::Array(items) => Value::Array(items.iter().map(from_document).collect()),
        Document::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_document(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_converts_to_string_document() {
        let metadata = json!({
            "id": "key1",
            "source_text": "Star Wars",
            "genre": "scifi",
        });

        let doc = to_document(&metadata);

        let Document::Object(fields) = doc else {
            panic!("expected object document");
        };
        assert_eq!(fields["genre"], Document::String("scifi".to_string()));
        assert_eq!(fields["id"], Document::String("key1".to_string()));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_nested_document_survives_conversion() {
        let value = json!({
            "count": 3,
            "offset": -1,
            "score": 0.5,
            "tags": ["a", "b"],
            "flag": true,
            "missing": null,
        });

        assert_eq!(from_document(&to_document(&value)), value);
    }
}
