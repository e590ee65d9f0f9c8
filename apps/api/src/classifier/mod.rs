//! Résumé category classification.
//!
//! `AppState` holds an `Arc<dyn CategoryClassifier>`, built once at startup: the trained
//! `CentroidClassifier` when the labeled dataset loads, otherwise `FallbackClassifier`.
//! Callers go through `classify_or_default`, which never fails.

pub mod centroid;

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

pub use centroid::CentroidClassifier;

/// Label used whenever no trained classifier is available or it cannot decide.
pub const DEFAULT_CATEGORY: &str = "General";

/// Deterministic text classifier. Implementations are read-only after construction.
pub trait CategoryClassifier: Send + Sync {
    /// Returns a category label, or `None` when the classifier has no basis to decide.
    fn classify(&self, text: &str) -> Option<String>;
}

/// Classifier used when no model could be trained. Always defers to the default label.
pub struct FallbackClassifier;

impl CategoryClassifier for FallbackClassifier {
    fn classify(&self, _text: &str) -> Option<String> {
        None
    }
}

pub fn classify_or_default(classifier: &dyn CategoryClassifier, text: &str) -> String {
    classifier
        .classify(text)
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Trains from the labeled CSV at `path`, falling back to `FallbackClassifier` on any error.
pub fn load_or_fallback(path: &Path) -> Arc<dyn CategoryClassifier> {
    match CentroidClassifier::from_csv_path(path) {
        Ok(classifier) => {
            info!(
                dataset = %path.display(),
                categories = classifier.categories().len(),
                vocabulary = classifier.vocabulary_size(),
                "Category classifier trained"
            );
            Arc::new(classifier)
        }
        Err(e) => {
            warn!(
                dataset = %path.display(),
                error = %e,
                "Category classifier unavailable; predictions default to '{DEFAULT_CATEGORY}'"
            );
            Arc::new(FallbackClassifier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_yields_default_label() {
        assert_eq!(classify_or_default(&FallbackClassifier, "anything"), "General");
    }

    #[test]
    fn test_missing_dataset_falls_back() {
        let classifier = load_or_fallback(Path::new("/nonexistent/dataset.csv"));
        assert_eq!(
            classify_or_default(classifier.as_ref(), "python developer"),
            DEFAULT_CATEGORY
        );
    }
}
