//! External collaborators.
//!
//! Each collaborator is a narrow async trait with one HTTP implementation:
//!
//! - [`EmbeddingProvider`] / [`VoyageEmbedder`]: text → vectors
//! - [`VectorIndex`] / [`TurbopufferNamespace`]: vector → nearest candidates
//! - [`EvaluationService`] / [`HttpEvaluator`]: ranked ids → evaluation result
//!
//! Clients validate their credentials when constructed and make exactly one
//! request per call, with no retry.

mod embedding;
mod evaluation;
mod http;
mod retrieval;
mod vector_index;

pub use embedding::{EmbeddingProvider, VoyageEmbedder};
pub use evaluation::{EvaluationResult, EvaluationService, HttpEvaluator, Submission};
pub use retrieval::retrieve;
pub use vector_index::{TurbopufferNamespace, VectorIndex};

#[cfg(test)]
pub use embedding::MockEmbeddingProvider;
#[cfg(test)]
pub use evaluation::MockEvaluationService;
#[cfg(test)]
pub use vector_index::MockVectorIndex;
