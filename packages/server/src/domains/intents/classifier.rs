use tracing::debug;

use super::models::IntentExample;
use super::vectorizer::{cosine_similarity, TfIdfVectorizer};
use crate::common::Result;

/// Best similarity must be strictly above this to count as a match
pub const SIMILARITY_THRESHOLD: f64 = 0.25;

/// Fitted vectorizer plus one vector per example phrase. Built once, never mutated.
pub struct SimilarityIndex {
    vectorizer: TfIdfVectorizer,
    examples: Vec<IntentExample>,
    vectors: Vec<Vec<f64>>,
}

impl SimilarityIndex {
    pub fn build(examples: Vec<IntentExample>) -> Result<Self> {
        let phrases: Vec<&str> = examples.iter().map(|e| e.phrase.as_str()).collect();
        let vectorizer = TfIdfVectorizer::fit(&phrases)?;
        let vectors = phrases.iter().map(|p| vectorizer.transform(p)).collect();

        debug!(
            examples = examples.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "Similarity index built"
        );

        Ok(Self {
            vectorizer,
            examples,
            vectors,
        })
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Example with the highest similarity to the query and that similarity.
    ///
    /// On equal similarity the earliest example wins.
    pub fn nearest(&self, query: &str) -> Option<(&IntentExample, f64)> {
        let query_vector = self.vectorizer.transform(query);
        let mut best: Option<(usize, f64)> = None;

        for (idx, vector) in self.vectors.iter().enumerate() {
            let similarity = cosine_similarity(&query_vector, vector);
            if best.map_or(true, |(_, top)| similarity > top) {
                best = Some((idx, similarity));
            }
        }

        best.map(|(idx, similarity)| (&self.examples[idx], similarity))
    }
}

/// Result of a successful classification
#[derive(Debug, Clone, PartialEq)]
pub struct IntentMatch {
    pub tag: String,
    pub similarity: f64,
}

/// Nearest-example intent classifier over a [`SimilarityIndex`].
pub struct IntentClassifier {
    index: SimilarityIndex,
    threshold: f64,
}

impl IntentClassifier {
    pub fn new(index: SimilarityIndex) -> Self {
        Self {
            index,
            threshold: SIMILARITY_THRESHOLD,
        }
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    pub fn classify(&self, query: &str) -> Option<IntentMatch> {
        let (example, similarity) = self.index.nearest(query)?;

        if similarity > self.threshold {
            debug!(tag = %example.tag, similarity, "Intent matched");
            Some(IntentMatch {
                tag: example.tag.clone(),
                similarity,
            })
        } else {
            debug!(similarity, "No intent above threshold");
            None
        }
    }
}
