//! Combines criterion results into the composite score, the per-criterion breakdown,
//! the overall assessment, strengths and improvement tips.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::criteria::{Criterion, CriterionResult};

// ────────────────────────────────────────────────────────────────────────────
// Score breakdown
// ────────────────────────────────────────────────────────────────────────────

/// Per-criterion scores. Serialized as a map keyed by criterion name; absent keys
/// deserialize to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBreakdown {
    pub keyword_match: u32,
    pub section_presence: u32,
    pub experience_relevance: u32,
    pub formatting: u32,
    pub grammar: u32,
    pub contact_info: u32,
    pub filename: u32,
    pub customization: u32,
}

impl ScoreBreakdown {
    pub fn get(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::KeywordMatch => self.keyword_match,
            Criterion::SectionPresence => self.section_presence,
            Criterion::ExperienceRelevance => self.experience_relevance,
            Criterion::Formatting => self.formatting,
            Criterion::Grammar => self.grammar,
            Criterion::ContactInfo => self.contact_info,
            Criterion::Filename => self.filename,
            Criterion::Customization => self.customization,
        }
    }

    fn slot(&mut self, criterion: Criterion) -> &mut u32 {
        match criterion {
            Criterion::KeywordMatch => &mut self.keyword_match,
            Criterion::SectionPresence => &mut self.section_presence,
            Criterion::ExperienceRelevance => &mut self.experience_relevance,
            Criterion::Formatting => &mut self.formatting,
            Criterion::Grammar => &mut self.grammar,
            Criterion::ContactInfo => &mut self.contact_info,
            Criterion::Filename => &mut self.filename,
            Criterion::Customization => &mut self.customization,
        }
    }

    /// `(criterion, score)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, u32)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, score)| score).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assessment tiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentTier {
    Excellent,
    Good,
    HasPotential,
    NeedsWork,
}

impl AssessmentTier {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= 80 => AssessmentTier::Excellent,
            s if s >= 60 => AssessmentTier::Good,
            s if s >= 40 => AssessmentTier::HasPotential,
            _ => AssessmentTier::NeedsWork,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AssessmentTier::Excellent => "Excellent! Your resume is highly optimized for ATS and presents a strong candidate profile.",
            AssessmentTier::Good => "Good job! Your resume is generally well-optimized, but there's room for improvement in specific areas.",
            AssessmentTier::HasPotential => "Your resume has potential but needs significant optimization to pass ATS and attract recruiters.",
            AssessmentTier::NeedsWork => "Your resume needs substantial work to meet modern ATS and recruiter expectations.",
        }
    }
}

pub const NO_STRENGTHS: &str =
    "No specific strengths identified yet. Focus on all areas for improvement.";

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Everything derived from the eight criterion results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub composite: u32,
    pub breakdown: ScoreBreakdown,
    pub feedback: BTreeMap<Criterion, Vec<String>>,
    pub overall_assessment: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

pub fn aggregate(results: &[CriterionResult]) -> Aggregation {
    let mut breakdown = ScoreBreakdown::default();
    let mut feedback = BTreeMap::new();

    for result in results {
        *breakdown.slot(result.criterion) = result.score;
        feedback.insert(result.criterion, result.feedback_messages());
    }

    let composite = breakdown.total();

    let mut strengths: Vec<String> = breakdown
        .iter()
        .filter(|(criterion, score)| *score >= criterion.strength_threshold())
        .map(|(criterion, _)| criterion.strength_statement().to_string())
        .collect();
    if strengths.is_empty() {
        strengths.push(NO_STRENGTHS.to_string());
    }

    let improvements = results
        .iter()
        .flat_map(|r| r.reasons.iter())
        .map(|reason| reason.improvement_tip().to_string())
        .collect();

    Aggregation {
        composite,
        breakdown,
        feedback,
        overall_assessment: AssessmentTier::for_score(composite).message().to_string(),
        strengths,
        improvements,
    }
}
