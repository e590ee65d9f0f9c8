// ATS scoring pipeline: skill matching, section detection, the eight criteria,
// aggregation, skill gap analysis and category classification.
// Everything below `ResumeAnalyzer::analyze` is pure; the taxonomy and classifier are
// shared read-only across requests.

pub mod aggregate;
pub mod criteria;
pub mod handlers;
pub mod jobs;
pub mod models;
pub mod patterns;
pub mod sections;
pub mod skills;
pub mod taxonomy;

use std::sync::Arc;

use tracing::debug;

use crate::analysis::aggregate::aggregate;
use crate::analysis::criteria::{score_with_signals, TextSignals};
use crate::analysis::models::{AnalysisInput, AnalysisResult, AnalysisSummary};
use crate::analysis::skills::analyze_skill_gap;
use crate::analysis::taxonomy::Taxonomy;
use crate::classifier::{classify_or_default, CategoryClassifier};

#[derive(Clone)]
pub struct ResumeAnalyzer {
    taxonomy: Arc<Taxonomy>,
    classifier: Arc<dyn CategoryClassifier>,
}

impl ResumeAnalyzer {
    pub fn new(taxonomy: Arc<Taxonomy>, classifier: Arc<dyn CategoryClassifier>) -> Self {
        Self {
            taxonomy,
            classifier,
        }
    }

    /// Scores one résumé. Total over any input, including empty text.
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let text = input.raw_text.as_str();
        let signals = TextSignals::extract(text, &self.taxonomy);
        let results = score_with_signals(text, &input.source_filename, &signals);
        let aggregation = aggregate(&results);

        let predicted_category = classify_or_default(self.classifier.as_ref(), text);
        let skills_analysis = analyze_skill_gap(&signals.skills, &self.taxonomy);

        debug!(
            filename = %input.source_filename,
            ats_score = aggregation.composite,
            skills = signals.skills.len(),
            category = %predicted_category,
            "Résumé analyzed"
        );

        AnalysisResult {
            ats_score: aggregation.composite,
            score_breakdown: aggregation.breakdown,
            analysis: AnalysisSummary {
                overall_assessment: aggregation.overall_assessment,
                strengths: aggregation.strengths,
                improvements: aggregation.improvements,
                feedback: aggregation.feedback,
            },
            predicted_category,
            job_recommendations: jobs::recommendations(),
            skills_analysis,
        }
    }
}
