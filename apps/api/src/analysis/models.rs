//! Wire-level analysis result. Every field carries a serde default so a partially
//! populated document (e.g. the JSON a browser posts back for a report) still
//! deserializes, with missing fields at their zero values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::aggregate::ScoreBreakdown;
use crate::analysis::criteria::Criterion;
use crate::analysis::skills::SkillInventory;

/// One analysis request: extracted text plus the (sanitized) upload filename.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub raw_text: String,
    pub source_filename: String,
}

impl AnalysisInput {
    pub fn new(raw_text: impl Into<String>, source_filename: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            source_filename: source_filename.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSummary {
    pub overall_assessment: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// Raw per-criterion feedback messages, in evaluation order.
    pub feedback: BTreeMap<Criterion, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecommendation {
    pub title: String,
    pub company: String,
    pub location: String,
    pub match_score: u8,
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Composite score, always `score_breakdown.total()`.
    pub ats_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub analysis: AnalysisSummary,
    pub predicted_category: String,
    pub job_recommendations: Vec<JobRecommendation>,
    pub skills_analysis: SkillInventory,
}
