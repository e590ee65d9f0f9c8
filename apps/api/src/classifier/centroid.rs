//! TF-IDF nearest-centroid classifier trained from a labeled résumé dataset.
//!
//! Training (once, at startup):
//! 1. Tokenize each résumé into lower-case alphanumeric words of 2+ characters.
//! 2. Keep the `MAX_FEATURES` most frequent terms across the corpus (ties by term).
//! 3. Weight terms with smoothed IDF: `ln((1 + n) / (1 + df)) + 1`, L2-normalize.
//! 4. Average the normalized vectors per category and re-normalize → centroid.
//!
//! Prediction picks the centroid with the highest cosine similarity; ties go to the
//! alphabetically first category, so output is deterministic for a fixed dataset.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::classifier::CategoryClassifier;

const MAX_FEATURES: usize = 5000;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to read dataset: {0}")]
    Dataset(#[from] csv::Error),

    #[error("dataset contains no labeled résumés")]
    EmptyDataset,
}

/// One row of the labeled dataset (`Category`, `Resume` columns).
#[derive(Debug, Deserialize)]
struct LabeledResume {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Resume")]
    resume: String,
}

#[derive(Debug, Clone)]
pub struct CentroidClassifier {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    /// Category → L2-normalized dense centroid over the vocabulary.
    centroids: BTreeMap<String, Vec<f32>>,
}

impl CentroidClassifier {
    pub fn from_csv_path(path: &Path) -> Result<Self, ClassifierError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut samples = Vec::new();
        for row in reader.deserialize::<LabeledResume>() {
            let row = row?;
            samples.push((row.category, row.resume));
        }
        Self::train(&samples)
    }

    /// Trains from `(category, text)` pairs.
    pub fn train(samples: &[(String, String)]) -> Result<Self, ClassifierError> {
        let samples: Vec<&(String, String)> = samples
            .iter()
            .filter(|(category, _)| !category.trim().is_empty())
            .collect();
        if samples.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }

        let documents: Vec<Vec<String>> = samples.iter().map(|(_, text)| tokenize(text)).collect();
        let vocabulary = build_vocabulary(&documents);

        let mut df = vec![0usize; vocabulary.len()];
        for doc in &documents {
            let mut seen = vec![false; vocabulary.len()];
            for token in doc {
                if let Some(&idx) = vocabulary.get(token) {
                    if !seen[idx] {
                        seen[idx] = true;
                        df[idx] += 1;
                    }
                }
            }
        }
        let n = documents.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let mut sums: BTreeMap<String, Vec<f32>> = BTreeMap::new();
        for ((category, _), doc) in samples.iter().zip(&documents) {
            let vector = weigh(doc, &vocabulary, &idf);
            let sum = sums
                .entry(category.trim().to_string())
                .or_insert_with(|| vec![0.0; vocabulary.len()]);
            for (idx, weight) in vector {
                sum[idx] += weight;
            }
        }

        let centroids = sums
            .into_iter()
            .map(|(category, mut sum)| {
                normalize(&mut sum);
                (category, sum)
            })
            .collect();

        Ok(Self {
            vocabulary,
            idf,
            centroids,
        })
    }

    pub fn categories(&self) -> Vec<&str> {
        self.centroids.keys().map(String::as_str).collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl CategoryClassifier for CentroidClassifier {
    fn classify(&self, text: &str) -> Option<String> {
        let vector = weigh(&tokenize(text), &self.vocabulary, &self.idf);
        if vector.is_empty() {
            return None;
        }

        let mut best: Option<(&String, f32)> = None;
        for (category, centroid) in &self.centroids {
            let similarity: f32 = vector.iter().map(|(idx, w)| w * centroid[*idx]).sum();
            if best.map_or(true, |(_, top)| similarity > top) {
                best = Some((category, similarity));
            }
        }
        best.map(|(category, _)| category.clone())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

fn build_vocabulary(documents: &[Vec<String>]) -> HashMap<String, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for doc in documents {
        for token in doc {
            *counts.entry(token.as_str()).or_default() += 1;
        }
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(MAX_FEATURES);
    ranked.sort_by(|a, b| a.0.cmp(b.0));

    ranked
        .into_iter()
        .enumerate()
        .map(|(idx, (term, _))| (term.to_string(), idx))
        .collect()
}

/// Sparse, L2-normalized TF-IDF vector as `(term index, weight)` pairs.
fn weigh(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> Vec<(usize, f32)> {
    let mut tf: BTreeMap<usize, f32> = BTreeMap::new();
    for token in tokens {
        if let Some(&idx) = vocabulary.get(token) {
            *tf.entry(idx).or_default() += 1.0;
        }
    }
    let mut vector: Vec<(usize, f32)> = tf.into_iter().map(|(idx, count)| (idx, count * idf[idx])).collect();
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut vector {
            *w /= norm;
        }
    }
    vector
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for w in vector.iter_mut() {
            *w /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn samples() -> Vec<(String, String)> {
        [
            ("Data Science", "python pandas numpy machine learning statistics models"),
            ("Data Science", "tensorflow pytorch deep learning python data analysis"),
            ("Web Designing", "html css javascript react ui design responsive layouts"),
            ("Web Designing", "figma css design systems javascript frontend"),
            ("HR", "recruitment onboarding payroll employee relations hiring"),
        ]
        .into_iter()
        .map(|(c, t)| (c.to_string(), t.to_string()))
        .collect()
    }

    #[test]
    fn test_classifies_by_nearest_centroid() {
        let classifier = CentroidClassifier::train(&samples()).unwrap();
        assert_eq!(
            classifier.classify("Experienced with numpy, pandas and machine learning"),
            Some("Data Science".to_string())
        );
        assert_eq!(
            classifier.classify("Built responsive React frontends with CSS"),
            Some("Web Designing".to_string())
        );
        assert_eq!(
            classifier.classify("Managed payroll and hiring"),
            Some("HR".to_string())
        );
    }

    #[test]
    fn test_unknown_vocabulary_yields_none() {
        let classifier = CentroidClassifier::train(&samples()).unwrap();
        assert_eq!(classifier.classify("zzz qqq"), None);
        assert_eq!(classifier.classify(""), None);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let a = CentroidClassifier::train(&samples()).unwrap();
        let b = CentroidClassifier::train(&samples()).unwrap();
        let text = "python css hiring";
        assert_eq!(a.classify(text), b.classify(text));
        assert_eq!(a.classify(text), a.classify(text));
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        assert!(matches!(
            CentroidClassifier::train(&[]),
            Err(ClassifierError::EmptyDataset)
        ));
    }

    #[test]
    fn test_loads_labeled_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Category,Resume").unwrap();
        writeln!(file, "Java Developer,\"java spring hibernate microservices\"").unwrap();
        writeln!(file, "Testing,\"selenium test cases qa automation\"").unwrap();
        file.flush().unwrap();

        let classifier = CentroidClassifier::from_csv_path(file.path()).unwrap();
        assert_eq!(classifier.categories(), vec!["Java Developer", "Testing"]);
        assert_eq!(
            classifier.classify("wrote selenium automation"),
            Some("Testing".to_string())
        );
    }

    #[test]
    fn test_tokenize_lowercases_and_drops_short_tokens() {
        assert_eq!(tokenize("C, Go & Rust!"), vec!["go", "rust"]);
    }
}
