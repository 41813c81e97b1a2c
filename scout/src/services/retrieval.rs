//! Query → embedding → nearest candidates.

use tracing::info;

use super::{EmbeddingProvider, VectorIndex};
use crate::candidate::Candidate;
use crate::{Result, ScoutError};

/// Embed `query` and fetch the `top_k` nearest candidates
pub async fn retrieve(
    embedder: &dyn EmbeddingProvider,
    index: &dyn VectorIndex,
    query: &str,
    top_k: usize,
) -> Result<Vec<Candidate>> {
    let vector = embedder
        .embed(&[query.to_string()])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ScoutError::Service {
            service: "embedding service",
            status: 200,
            body: "no embedding returned for query".to_string(),
        })?;

    let candidates = index.query(&vector, top_k).await?;
    info!(
        model = embedder.model(),
        index = %index.describe(),
        dimensions = vector.len(),
        retrieved = candidates.len(),
        "Retrieved candidates"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MockEmbeddingProvider, MockVectorIndex};
    use serde_json::json;

    fn embedder_returning(vectors: Vec<Vec<f32>>) -> MockEmbeddingProvider {
        let mut embedder = MockEmbeddingProvider::new();
        embedder
            .expect_embed()
            .withf(|texts| texts == ["senior tax attorney".to_string()])
            .times(1)
            .returning(move |_| Ok(vectors.clone()));
        embedder.expect_model().return_const("mock-embedder".to_string());
        embedder
    }

    #[tokio::test]
    async fn test_retrieve_passes_vector_and_top_k() {
        let embedder = embedder_returning(vec![vec![0.1, 0.2, 0.3]]);

        let mut index = MockVectorIndex::new();
        index
            .expect_query()
            .withf(|vector, top_k| vector == [0.1, 0.2, 0.3] && *top_k == 25)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    Candidate::try_from(json!({"id": "a"})).unwrap(),
                    Candidate::try_from(json!({"id": "b"})).unwrap(),
                ])
            });
        index.expect_describe().return_const("mock index".to_string());

        let candidates = retrieve(&embedder, &index, "senior tax attorney", 25).await.unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].get("id"), Some(&json!("b")));
    }

    #[tokio::test]
    async fn test_retrieve_without_embedding_is_an_error() {
        let embedder = embedder_returning(Vec::new());
        let mut index = MockVectorIndex::new();
        index.expect_query().never();

        let err = retrieve(&embedder, &index, "senior tax attorney", 5).await.unwrap_err();
        assert!(matches!(err, ScoutError::Service { .. }));
    }

    #[tokio::test]
    async fn test_retrieve_propagates_index_errors() {
        let embedder = embedder_returning(vec![vec![1.0]]);
        let mut index = MockVectorIndex::new();
        index.expect_query().returning(|_, _| {
            Err(ScoutError::Service {
                service: "vector index",
                status: 401,
                body: "unauthorized".to_string(),
            })
        });

        let err = retrieve(&embedder, &index, "senior tax attorney", 5).await.unwrap_err();
        assert_eq!(err.to_string(), "vector index returned HTTP 401: unauthorized");
    }
}
