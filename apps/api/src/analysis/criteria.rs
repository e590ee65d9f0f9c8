//! The eight ATS criteria. Each scorer is a total function over arbitrary text:
//! missing patterns lower the score, nothing here can fail.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::patterns;
use crate::analysis::sections::detect_sections;
use crate::analysis::skills::match_skills;
use crate::analysis::taxonomy::{Section, Taxonomy};

// ────────────────────────────────────────────────────────────────────────────
// Criterion
// ────────────────────────────────────────────────────────────────────────────

/// Scoring criteria in evaluation order. Ceilings sum to 90, so the composite never
/// reaches the top of its 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    KeywordMatch,
    SectionPresence,
    ExperienceRelevance,
    Formatting,
    Grammar,
    ContactInfo,
    Filename,
    Customization,
}

impl Criterion {
    pub const ALL: [Criterion; 8] = [
        Criterion::KeywordMatch,
        Criterion::SectionPresence,
        Criterion::ExperienceRelevance,
        Criterion::Formatting,
        Criterion::Grammar,
        Criterion::ContactInfo,
        Criterion::Filename,
        Criterion::Customization,
    ];

    pub fn max_score(self) -> u32 {
        match self {
            Criterion::KeywordMatch => 25,
            Criterion::SectionPresence => 10,
            Criterion::ExperienceRelevance => 15,
            Criterion::Formatting => 10,
            Criterion::Grammar => 10,
            Criterion::ContactInfo => 5,
            Criterion::Filename => 5,
            Criterion::Customization => 10,
        }
    }

    /// Score at or above which the criterion counts as a strength.
    pub fn strength_threshold(self) -> u32 {
        match self {
            Criterion::KeywordMatch => 20,
            Criterion::SectionPresence => 8,
            Criterion::ExperienceRelevance => 10,
            Criterion::Formatting => 8,
            Criterion::Grammar => 8,
            Criterion::ContactInfo => 4,
            Criterion::Filename => 5,
            Criterion::Customization => 7,
        }
    }

    pub fn strength_statement(self) -> &'static str {
        match self {
            Criterion::KeywordMatch => {
                "Strong keyword optimization, indicating a good match for target roles."
            }
            Criterion::SectionPresence => {
                "All essential resume sections are present, ensuring comprehensive information."
            }
            Criterion::ExperienceRelevance => {
                "Well-articulated experience with quantifiable achievements and strong action verbs."
            }
            Criterion::Formatting => "Clean and ATS-friendly formatting, enhancing readability.",
            Criterion::Grammar => "Excellent grammar and clear, concise language.",
            Criterion::ContactInfo => "Complete and easily identifiable contact information.",
            Criterion::Filename => "Professional and appropriate filename.",
            Criterion::Customization => "Resume appears well-customized and detailed.",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criterion::KeywordMatch => "Keyword Match",
            Criterion::SectionPresence => "Section Presence",
            Criterion::ExperienceRelevance => "Experience Relevance",
            Criterion::Formatting => "Formatting",
            Criterion::Grammar => "Grammar",
            Criterion::ContactInfo => "Contact Info",
            Criterion::Filename => "Filename",
            Criterion::Customization => "Customization",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Feedback reasons
// ────────────────────────────────────────────────────────────────────────────

/// Every condition a scorer can flag. Carries both the short feedback message and
/// the longer improvement tip, so the aggregator never matches on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackReason {
    FewSkills,
    MissingSection(Section),
    FewActionVerbs,
    FewAchievements,
    TablesDetected,
    ComplexLayout,
    LongSentences,
    IncompleteContact,
    FilenameMissingName,
    GenericFilename,
    TooBrief,
    FewKeySections,
    FewQuantifiedResults,
}

impl FeedbackReason {
    pub fn message(self) -> String {
        match self {
            FeedbackReason::FewSkills => "Add more technical skills to your resume".to_string(),
            FeedbackReason::MissingSection(section) => {
                format!("Missing {} section", section.as_str())
            }
            FeedbackReason::FewActionVerbs => {
                "Add more action verbs to describe your experience".to_string()
            }
            FeedbackReason::FewAchievements => "Include more quantified achievements".to_string(),
            FeedbackReason::TablesDetected => "Avoid using tables in your resume".to_string(),
            FeedbackReason::ComplexLayout => "Simplify your resume layout".to_string(),
            FeedbackReason::LongSentences => "Some sentences are too long".to_string(),
            FeedbackReason::IncompleteContact => "Add more contact information".to_string(),
            FeedbackReason::FilenameMissingName => "Include your name in the filename".to_string(),
            FeedbackReason::GenericFilename => {
                "Use a more specific filename (e.g., YourName_Resume.pdf)".to_string()
            }
            FeedbackReason::TooBrief => {
                "Resume might be too brief; consider adding more detail and examples.".to_string()
            }
            FeedbackReason::FewKeySections => "Ensure your resume includes key sections like \
                 Summary, Experience, Skills, and Education."
                .to_string(),
            FeedbackReason::FewQuantifiedResults => "Quantify your achievements with numbers, \
                 percentages, or metrics whenever possible."
                .to_string(),
        }
    }

    pub fn improvement_tip(self) -> &'static str {
        match self {
            FeedbackReason::FewSkills => "Strengthen your resume by integrating more industry-specific technical keywords relevant to your target roles.",
            FeedbackReason::MissingSection(Section::Summary) => "Include a concise professional summary or objective statement at the top of your resume.",
            FeedbackReason::MissingSection(Section::Skills) => "Add a dedicated skills section to highlight your technical and soft skills clearly.",
            FeedbackReason::MissingSection(Section::Experience) => "Ensure you have a detailed 'Experience' or 'Work History' section.",
            FeedbackReason::MissingSection(Section::Education) => "Include an 'Education' section with your degrees, institutions, and dates.",
            FeedbackReason::MissingSection(Section::Projects) => "Add a 'Projects' section that showcases work you have built or contributed to.",
            FeedbackReason::MissingSection(Section::Certifications) => "List relevant certifications or accreditations to validate your expertise.",
            FeedbackReason::FewActionVerbs => "Use strong action verbs (e.g., 'Developed', 'Managed', 'Achieved') to describe your accomplishments.",
            FeedbackReason::FewAchievements => "Quantify your accomplishments with numbers, percentages, or metrics whenever possible.",
            FeedbackReason::TablesDetected => "Remove tables and complex formatting elements that can be difficult for ATS to parse.",
            FeedbackReason::ComplexLayout => "Opt for a clean, simple, and standard resume layout for optimal ATS compatibility.",
            FeedbackReason::LongSentences => "Break down long sentences for better readability and clarity.",
            FeedbackReason::IncompleteContact => "Ensure your resume includes essential contact details: email, phone number, and a LinkedIn profile URL.",
            FeedbackReason::FilenameMissingName => "Rename your resume file to include your full name (e.g., 'JohnDoe_Resume.pdf').",
            FeedbackReason::GenericFilename => "Avoid generic filenames like 'resume.pdf'; use a more descriptive name.",
            FeedbackReason::TooBrief => "Review your resume to ensure it's well-detailed and comprehensively covers your experiences.",
            FeedbackReason::FewKeySections => "Organize your resume around the standard Summary, Experience, Skills, and Education sections.",
            FeedbackReason::FewQuantifiedResults => "Back up your claims with concrete results such as percentages, dollar amounts, or growth multiples.",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Criterion result
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub score: u32,
    pub reasons: Vec<FeedbackReason>,
}

impl CriterionResult {
    fn new(criterion: Criterion, score: u32, reasons: Vec<FeedbackReason>) -> Self {
        Self {
            criterion,
            score: score.min(criterion.max_score()),
            reasons,
        }
    }

    pub fn feedback_messages(&self) -> Vec<String> {
        self.reasons.iter().map(|r| r.message()).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text signals shared by the scorers
// ────────────────────────────────────────────────────────────────────────────

/// Detector outputs computed once per document.
#[derive(Debug, Clone)]
pub struct TextSignals {
    pub skills: BTreeSet<String>,
    pub sections: BTreeSet<Section>,
    pub achievements: usize,
    pub action_verbs: usize,
}

impl TextSignals {
    pub fn extract(text: &str, taxonomy: &Taxonomy) -> Self {
        let text_lower = text.to_lowercase();
        Self {
            skills: match_skills(&text_lower, taxonomy),
            sections: detect_sections(&text_lower, taxonomy),
            achievements: patterns::count_achievements(text),
            action_verbs: patterns::count_action_verbs(&text_lower, &taxonomy.action_verbs),
        }
    }
}

const MIN_SKILLS: usize = 5;
const POINTS_PER_SKILL: u32 = 2;
const POINTS_PER_SECTION: u32 = 2;
const MAX_VERB_POINTS: u32 = 5;
const POINTS_PER_ACHIEVEMENT: u32 = 2;
const MAX_ACHIEVEMENT_POINTS: u32 = 10;
const MAX_LINE_BREAKS: usize = 100;
const LONG_SENTENCE_TOKENS: usize = 30;
const MAX_LONG_SENTENCES: usize = 3;
const MIN_DETAIL_CHARS: usize = 1000;
const MIN_KEY_SECTIONS: usize = 4;
const MIN_QUANTIFIED_RESULTS: usize = 3;
const GENERIC_FILENAMES: &[&str] = &["resume.pdf", "cv.pdf"];

/// Runs all eight scorers in evaluation order.
#[cfg(test)]
pub fn score_all(text: &str, filename: &str, taxonomy: &Taxonomy) -> Vec<CriterionResult> {
    score_with_signals(text, filename, &TextSignals::extract(text, taxonomy))
}

/// Runs all eight scorers in evaluation order over signals the caller already extracted.
pub fn score_with_signals(
    text: &str,
    filename: &str,
    signals: &TextSignals,
) -> Vec<CriterionResult> {
    vec![
        score_keywords(signals),
        score_sections(signals),
        score_experience(signals),
        score_formatting(text),
        score_grammar(text),
        score_contact_info(text),
        score_filename(filename),
        score_customization(text, signals),
    ]
}

pub fn score_keywords(signals: &TextSignals) -> CriterionResult {
    let unique = signals.skills.len();
    let score = (unique as u32).saturating_mul(POINTS_PER_SKILL);
    let mut reasons = Vec::new();
    if unique < MIN_SKILLS {
        reasons.push(FeedbackReason::FewSkills);
    }
    CriterionResult::new(Criterion::KeywordMatch, score, reasons)
}

pub fn score_sections(signals: &TextSignals) -> CriterionResult {
    let reasons = Section::ALL
        .iter()
        .filter(|s| !signals.sections.contains(s))
        .map(|s| FeedbackReason::MissingSection(*s))
        .collect();
    let score = signals.sections.len() as u32 * POINTS_PER_SECTION;
    CriterionResult::new(Criterion::SectionPresence, score, reasons)
}

pub fn score_experience(signals: &TextSignals) -> CriterionResult {
    let verb_points = (signals.action_verbs as u32).min(MAX_VERB_POINTS);
    let achievement_points = (signals.achievements as u32)
        .saturating_mul(POINTS_PER_ACHIEVEMENT)
        .min(MAX_ACHIEVEMENT_POINTS);

    let mut reasons = Vec::new();
    if signals.action_verbs < 3 {
        reasons.push(FeedbackReason::FewActionVerbs);
    }
    if signals.achievements < 2 {
        reasons.push(FeedbackReason::FewAchievements);
    }
    CriterionResult::new(
        Criterion::ExperienceRelevance,
        verb_points + achievement_points,
        reasons,
    )
}

pub fn score_formatting(text: &str) -> CriterionResult {
    let mut score: u32 = 10;
    let mut reasons = Vec::new();

    if text.contains('|') || text.contains('\t') {
        score = score.saturating_sub(2);
        reasons.push(FeedbackReason::TablesDetected);
    }
    if text.matches('\n').count() > MAX_LINE_BREAKS {
        score = score.saturating_sub(2);
        reasons.push(FeedbackReason::ComplexLayout);
    }
    CriterionResult::new(Criterion::Formatting, score, reasons)
}

pub fn score_grammar(text: &str) -> CriterionResult {
    let mut score: u32 = 10;
    let mut reasons = Vec::new();

    if patterns::count_long_sentences(text, LONG_SENTENCE_TOKENS) > MAX_LONG_SENTENCES {
        score = score.saturating_sub(2);
        reasons.push(FeedbackReason::LongSentences);
    }
    CriterionResult::new(Criterion::Grammar, score, reasons)
}

pub fn score_contact_info(text: &str) -> CriterionResult {
    let score = [
        patterns::has_email(text),
        patterns::has_phone(text),
        patterns::has_profile_url(text),
    ]
    .into_iter()
    .filter(|found| *found)
    .count() as u32;

    let mut reasons = Vec::new();
    if score < 3 {
        reasons.push(FeedbackReason::IncompleteContact);
    }
    CriterionResult::new(Criterion::ContactInfo, score, reasons)
}

/// Both penalties are independent and may apply together.
pub fn score_filename(filename: &str) -> CriterionResult {
    let mut score: u32 = 5;
    let mut reasons = Vec::new();

    if !filename.chars().any(|c| c.is_ascii_alphabetic()) {
        score = score.saturating_sub(2);
        reasons.push(FeedbackReason::FilenameMissingName);
    }
    let lower = filename.to_lowercase();
    if GENERIC_FILENAMES.contains(&lower.as_str()) {
        score = score.saturating_sub(3);
        reasons.push(FeedbackReason::GenericFilename);
    }
    CriterionResult::new(Criterion::Filename, score, reasons)
}

pub fn score_customization(text: &str, signals: &TextSignals) -> CriterionResult {
    let mut score: u32 = 10;
    let mut reasons = Vec::new();

    if text.chars().count() < MIN_DETAIL_CHARS {
        score = score.saturating_sub(3);
        reasons.push(FeedbackReason::TooBrief);
    }
    if signals.sections.len() < MIN_KEY_SECTIONS {
        score = score.saturating_sub(2);
        reasons.push(FeedbackReason::FewKeySections);
    }
    if signals.achievements < MIN_QUANTIFIED_RESULTS {
        score = score.saturating_sub(2);
        reasons.push(FeedbackReason::FewQuantifiedResults);
    }
    CriterionResult::new(Criterion::Customization, score, reasons)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(text: &str) -> TextSignals {
        TextSignals::extract(text, &Taxonomy::standard())
    }

    #[test]
    fn test_ceilings_sum_to_90() {
        let total: u32 = Criterion::ALL.iter().map(|c| c.max_score()).sum();
        assert_eq!(total, 90);
    }

    #[test]
    fn test_keywords_two_points_per_skill() {
        let result = score_keywords(&signals("python java docker redis react leadership"));
        assert_eq!(result.score, 12);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_keywords_capped_at_25() {
        let text = "python java javascript ruby php typescript swift kotlin sql mysql \
                    postgresql mongodb redis oracle";
        let result = score_keywords(&signals(text));
        assert_eq!(result.score, 25);
    }

    #[test]
    fn test_keywords_feedback_below_five_skills() {
        let result = score_keywords(&signals("python and git"));
        assert_eq!(result.score, 4);
        assert_eq!(result.reasons, vec![FeedbackReason::FewSkills]);
    }

    #[test]
    fn test_sections_capped_at_ceiling_with_all_six() {
        let result =
            score_sections(&signals("summary skills experience education projects certifications"));
        assert_eq!(result.score, 10);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_sections_feedback_per_missing_section_in_order() {
        let result = score_sections(&signals("Experience\nEducation"));
        assert_eq!(result.score, 4);
        assert_eq!(
            result.feedback_messages(),
            vec![
                "Missing summary section",
                "Missing skills section",
                "Missing projects section",
                "Missing certifications section",
            ]
        );
    }

    #[test]
    fn test_experience_combines_verbs_and_achievements() {
        let text = "Led a team, designed APIs, managed releases, optimized queries, \
                    delivered features, resolved incidents. Cut costs 30% and grew sales 2x.";
        let result = score_experience(&signals(text));
        // 5 (verb cap) + 2 achievements * 2
        assert_eq!(result.score, 9);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_experience_feedback_when_sparse() {
        let result = score_experience(&signals("Worked at a company"));
        assert_eq!(result.score, 0);
        assert_eq!(
            result.reasons,
            vec![FeedbackReason::FewActionVerbs, FeedbackReason::FewAchievements]
        );
    }

    #[test]
    fn test_experience_never_exceeds_ceiling() {
        let text = "achieved developed implemented managed created improved \
                    1% 2% 3% 4% 5% 6% 7% 8%";
        assert_eq!(score_experience(&signals(text)).score, 15);
    }

    #[test]
    fn test_formatting_penalties() {
        assert_eq!(score_formatting("clean text").score, 10);
        let piped = score_formatting("Name | Role");
        assert_eq!(piped.score, 8);
        assert_eq!(piped.reasons, vec![FeedbackReason::TablesDetected]);

        let dense = format!("a\tb{}", "\n".repeat(101));
        let result = score_formatting(&dense);
        assert_eq!(result.score, 6);
        assert_eq!(
            result.reasons,
            vec![FeedbackReason::TablesDetected, FeedbackReason::ComplexLayout]
        );
    }

    #[test]
    fn test_formatting_exactly_100_line_breaks_not_penalized() {
        assert_eq!(score_formatting(&"\n".repeat(100)).score, 10);
    }

    #[test]
    fn test_grammar_penalizes_more_than_three_long_sentences() {
        let long = "word ".repeat(31);
        let three = format!("{long}. {long}. {long}.");
        assert_eq!(score_grammar(&three).score, 10);

        let four = format!("{three} {long}.");
        let result = score_grammar(&four);
        assert_eq!(result.score, 8);
        assert_eq!(result.reasons, vec![FeedbackReason::LongSentences]);
    }

    #[test]
    fn test_contact_info_full_and_partial() {
        let full = score_contact_info(
            "jane@example.com 555-123-4567 linkedin.com/in/janedoe",
        );
        assert_eq!(full.score, 3);
        assert!(full.reasons.is_empty());

        let partial = score_contact_info("jane@example.com");
        assert_eq!(partial.score, 1);
        assert_eq!(partial.reasons, vec![FeedbackReason::IncompleteContact]);
    }

    #[test]
    fn test_filename_rules() {
        assert_eq!(score_filename("JaneDoe_Resume.pdf").score, 5);

        let generic = score_filename("Resume.PDF");
        assert_eq!(generic.score, 2);
        assert_eq!(generic.reasons, vec![FeedbackReason::GenericFilename]);

        let numeric = score_filename("12345");
        assert_eq!(numeric.score, 3);
        assert_eq!(numeric.reasons, vec![FeedbackReason::FilenameMissingName]);
    }

    #[test]
    fn test_customization_all_penalties_on_empty_text() {
        let result = score_customization("", &signals(""));
        assert_eq!(result.score, 3);
        assert_eq!(
            result.reasons,
            vec![
                FeedbackReason::TooBrief,
                FeedbackReason::FewKeySections,
                FeedbackReason::FewQuantifiedResults,
            ]
        );
    }

    #[test]
    fn test_customization_full_marks_for_detailed_resume() {
        let body = "Summary Skills Experience Education. Grew revenue 20%, saved $400, \
                    shipped 3x faster. ";
        let text = body.repeat(12);
        assert!(text.chars().count() >= 1000);
        let result = score_customization(&text, &signals(&text));
        assert_eq!(result.score, 10);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_score_all_returns_criteria_in_order() {
        let results = score_all("", "resume.pdf", &Taxonomy::standard());
        let order: Vec<Criterion> = results.iter().map(|r| r.criterion).collect();
        assert_eq!(order, Criterion::ALL.to_vec());
    }

    #[test]
    fn test_every_reason_has_message_and_tip() {
        let mut reasons = vec![
            FeedbackReason::FewSkills,
            FeedbackReason::FewActionVerbs,
            FeedbackReason::FewAchievements,
            FeedbackReason::TablesDetected,
            FeedbackReason::ComplexLayout,
            FeedbackReason::LongSentences,
            FeedbackReason::IncompleteContact,
            FeedbackReason::FilenameMissingName,
            FeedbackReason::GenericFilename,
            FeedbackReason::TooBrief,
            FeedbackReason::FewKeySections,
            FeedbackReason::FewQuantifiedResults,
        ];
        reasons.extend(Section::ALL.iter().map(|s| FeedbackReason::MissingSection(*s)));
        for reason in reasons {
            assert!(!reason.message().is_empty());
            assert!(!reason.improvement_tip().is_empty());
        }
    }
}
