//! TF-IDF vectorization over a fixed example corpus.
//!
//! Term weights follow the usual smoothed formulation:
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, raw term counts, and L2
//! normalisation of every vector.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::common::text::tokenize;
use crate::common::{ResponderError, Result};

/// Vocabulary and idf weights fitted once on the example phrases.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit on a corpus. Fails on an empty corpus or one without any indexable term.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        if documents.is_empty() {
            return Err(ResponderError::InvalidData(
                "no example phrases to index".into(),
            ));
        }

        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        // Sorted so term indices are stable across runs
        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        if terms.is_empty() {
            return Err(ResponderError::InvalidData(
                "example phrases contain no indexable terms".into(),
            ));
        }
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            for idx in unique {
                document_frequency[idx] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|df| ((1. + n) / (1. + df as f64)).ln() + 1.)
            .collect();

        Ok(Self { vocabulary, idf })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Unit-length tf-idf vector; out-of-vocabulary terms are ignored.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut tfidf = vec![0.; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                tfidf[idx] += 1.;
            }
        }

        for (weight, idf) in tfidf.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let l2_norm = tfidf.iter().map(|v| v * v).sum::<f64>().sqrt();
        if l2_norm > 0. {
            for weight in &mut tfidf {
                *weight /= l2_norm;
            }
        }
        tfidf
    }
}

/// Cosine similarity of two vectors; zero when either is the zero vector.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0. || norm_b == 0. {
        0.
    } else {
        dot / (norm_a * norm_b)
    }
}
