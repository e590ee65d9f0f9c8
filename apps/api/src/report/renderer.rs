//! Lays an `AnalysisResult` out as a paginated `ReportDocument`.
//!
//! Single pass, top to bottom. Every block asks the cursor for its minimum space
//! before drawing, so a block that does not fit starts on a fresh page; nothing
//! already drawn is ever moved.

use tracing::debug;

use crate::analysis::criteria::Criterion;
use crate::analysis::models::{AnalysisResult, JobRecommendation};
use crate::layout::{LayoutCursor, PageConfig, ReportFont};
use crate::report::document::ReportDocument;

// ────────────────────────────────────────────────────────────────────────────
// Block geometry (points)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    font: ReportFont,
    size: f32,
    leading: f32,
}

const TITLE_STYLE: TextStyle = TextStyle {
    font: ReportFont::HelveticaBold,
    size: 24.0,
    leading: 28.0,
};
const BODY: TextStyle = TextStyle {
    font: ReportFont::Helvetica,
    size: 12.0,
    leading: 15.0,
};
const CRITERION: TextStyle = TextStyle {
    font: ReportFont::Helvetica,
    size: 10.0,
    leading: 13.0,
};
const FEEDBACK: TextStyle = TextStyle {
    font: ReportFont::HelveticaOblique,
    size: 9.0,
    leading: 15.0,
};
const SUBHEADER: TextStyle = TextStyle {
    font: ReportFont::HelveticaBold,
    size: 12.0,
    leading: 15.0,
};
const PARAGRAPH: TextStyle = TextStyle {
    font: ReportFont::Helvetica,
    size: 11.0,
    leading: 14.0,
};
const JOB_META: TextStyle = TextStyle {
    font: ReportFont::Helvetica,
    size: 10.0,
    leading: 13.0,
};

const TITLE: &str = "Resume Analysis Report";
const TITLE_ADVANCE: f32 = 40.0;

const SECTION_SIZE: f32 = 16.0;
const SUBSECTION_SIZE: f32 = 14.0;
const HEADER_ADVANCE: f32 = 25.0;
const SECTION_MIN_SPACE: f32 = 100.0;

const BODY_ADVANCE: f32 = 25.0;
const CRITERION_INDENT: f32 = 20.0;
const CRITERION_ADVANCE: f32 = 20.0;
const FEEDBACK_INDENT: f32 = 40.0;
const LINE_MIN_SPACE: f32 = 50.0;
const SUBHEADER_ADVANCE: f32 = 20.0;
const PARAGRAPH_INDENT: f32 = 20.0;
const BLOCK_GAP: f32 = 10.0;

const JOB_MIN_SPACE: f32 = 100.0;
const JOB_META_ADVANCE: f32 = 16.0;

const BULLET: &str = "\u{2022}";
const NONE_IDENTIFIED: &str = "None identified";
const NO_JOBS: &str = "No job recommendations available.";

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

pub fn render(result: &AnalysisResult, config: &PageConfig) -> ReportDocument {
    let mut cursor = LayoutCursor::new(config.clone());

    title(&mut cursor, result);
    overall_assessment(&mut cursor, result);
    score_breakdown(&mut cursor, result);
    skills_analysis(&mut cursor, result);
    job_recommendations(&mut cursor, &result.job_recommendations);

    cursor.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

fn title(cursor: &mut LayoutCursor, result: &AnalysisResult) {
    line_block(cursor, 0.0, TITLE_STYLE, TITLE_ADVANCE, TITLE);

    let category = result.predicted_category.trim();
    if !category.is_empty() {
        line_block(
            cursor,
            0.0,
            BODY,
            BODY_ADVANCE,
            &format!("Predicted Category: {category}"),
        );
    }
}

fn overall_assessment(cursor: &mut LayoutCursor, result: &AnalysisResult) {
    section_header(cursor, "ATS Score", SECTION_SIZE);
    line_block(
        cursor,
        0.0,
        BODY,
        BODY_ADVANCE,
        &format!("Overall Score: {}/100", result.ats_score),
    );
    paragraph(cursor, 0.0, PARAGRAPH, &result.analysis.overall_assessment);

    bullet_list(cursor, "Strengths", &result.analysis.strengths);
    bullet_list(cursor, "Areas for Improvement", &result.analysis.improvements);
}

fn score_breakdown(cursor: &mut LayoutCursor, result: &AnalysisResult) {
    section_header(cursor, "Score Breakdown", SUBSECTION_SIZE);

    for (criterion, score) in result.score_breakdown.iter() {
        cursor.ensure_space(LINE_MIN_SPACE);
        line_block(
            cursor,
            CRITERION_INDENT,
            CRITERION,
            CRITERION_ADVANCE,
            &criterion_line(criterion, score),
        );

        let feedback = result.analysis.feedback.get(&criterion);
        for message in feedback.into_iter().flatten() {
            cursor.ensure_space(LINE_MIN_SPACE);
            line_block(
                cursor,
                FEEDBACK_INDENT,
                FEEDBACK,
                0.0,
                &format!("{BULLET} {message}"),
            );
        }
    }
    cursor.advance(BLOCK_GAP);
}

fn skills_analysis(cursor: &mut LayoutCursor, result: &AnalysisResult) {
    section_header(cursor, "Skills Analysis", SUBSECTION_SIZE);

    let inventory = &result.skills_analysis;
    let groups = [
        ("Technical Skills", &inventory.technical),
        ("Soft Skills", &inventory.soft),
        ("Missing Skills", &inventory.missing),
    ];
    for (label, skills) in groups {
        subheader(cursor, label);
        let text = if skills.is_empty() {
            NONE_IDENTIFIED.to_string()
        } else {
            skills.join(", ")
        };
        paragraph(cursor, PARAGRAPH_INDENT, PARAGRAPH, &text);
    }
}

fn job_recommendations(cursor: &mut LayoutCursor, jobs: &[JobRecommendation]) {
    section_header(cursor, "Job Recommendations", SUBSECTION_SIZE);

    if jobs.is_empty() {
        paragraph(cursor, PARAGRAPH_INDENT, PARAGRAPH, NO_JOBS);
        return;
    }

    for job in jobs {
        cursor.ensure_space(JOB_MIN_SPACE);
        line_block(cursor, 0.0, SUBHEADER, SUBHEADER_ADVANCE, &job.title);
        line_block(
            cursor,
            PARAGRAPH_INDENT,
            JOB_META,
            JOB_META_ADVANCE,
            &format!(
                "{} - {} - Match: {}%",
                job.company, job.location, job.match_score
            ),
        );
        let height = cursor.draw_wrapped(
            PARAGRAPH_INDENT,
            PARAGRAPH.font,
            PARAGRAPH.size,
            PARAGRAPH.leading,
            &job.description,
        );
        if height == 0.0 {
            debug!(title = %job.title, "Job recommendation has no description");
        }
        cursor.advance(BLOCK_GAP);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Draws `text` wrapped at `indent`, then pads the block out to `min_advance` when the
/// wrapped lines took less room than that.
fn line_block(
    cursor: &mut LayoutCursor,
    indent: f32,
    style: TextStyle,
    min_advance: f32,
    text: &str,
) {
    let height = cursor.draw_wrapped(indent, style.font, style.size, style.leading, text);
    cursor.advance((min_advance - height).max(0.0));
}

/// Draws a wrapped paragraph followed by a block gap. Blank text draws nothing.
fn paragraph(cursor: &mut LayoutCursor, indent: f32, style: TextStyle, text: &str) {
    let height = cursor.draw_wrapped(indent, style.font, style.size, style.leading, text);
    if height > 0.0 {
        cursor.advance(BLOCK_GAP);
    }
}

fn section_header(cursor: &mut LayoutCursor, text: &str, size: f32) {
    cursor.ensure_space(SECTION_MIN_SPACE);
    cursor.draw_text(0.0, ReportFont::HelveticaBold, size, text);
    cursor.advance(HEADER_ADVANCE);
}

fn subheader(cursor: &mut LayoutCursor, text: &str) {
    cursor.ensure_space(LINE_MIN_SPACE);
    line_block(cursor, 0.0, SUBHEADER, SUBHEADER_ADVANCE, text);
}

fn bullet_list(cursor: &mut LayoutCursor, header: &str, items: &[String]) {
    subheader(cursor, header);
    if items.is_empty() {
        line_block(cursor, PARAGRAPH_INDENT, PARAGRAPH, 0.0, NONE_IDENTIFIED);
    }
    for item in items {
        cursor.ensure_space(LINE_MIN_SPACE);
        line_block(
            cursor,
            PARAGRAPH_INDENT,
            PARAGRAPH,
            0.0,
            &format!("{BULLET} {item}"),
        );
    }
    cursor.advance(BLOCK_GAP);
}

fn criterion_line(criterion: Criterion, score: u32) -> String {
    format!(
        "{}: {}/{} points",
        criterion.label(),
        score,
        criterion.max_score()
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{AnalysisInput, AnalysisSummary};
    use crate::analysis::skills::SkillInventory;
    use crate::analysis::taxonomy::Taxonomy;
    use crate::analysis::{jobs, ResumeAnalyzer};
    use crate::classifier::FallbackClassifier;
    use crate::layout::default_page_config;
    use crate::layout::font_metrics::get_metrics;
    use crate::report::document::DrawOp;
    use std::sync::Arc;

    fn long_skill_list(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{prefix} skill {i}")).collect()
    }

    const LONG_CATEGORY: &str =
        "Information Technology and Enterprise Infrastructure Operations Management Lead";

    fn heavy_result() -> AnalysisResult {
        let mut jobs = jobs::recommendations();
        jobs.truncate(3);
        jobs[0].company = "Very Long Company Name Holdings International Group".to_string();
        jobs[0].location = "South San Francisco Bay Area, California, United States".to_string();
        AnalysisResult {
            ats_score: 42,
            predicted_category: LONG_CATEGORY.to_string(),
            analysis: AnalysisSummary {
                overall_assessment: "Your resume has potential.".to_string(),
                strengths: vec!["Good keyword optimization.".to_string()],
                improvements: long_skill_list("improve", 12),
                ..Default::default()
            },
            job_recommendations: jobs,
            skills_analysis: SkillInventory {
                technical: long_skill_list("technical", 120),
                soft: long_skill_list("soft", 60),
                missing: long_skill_list("missing", 60),
            },
            ..Default::default()
        }
    }

    fn all_text(document: &ReportDocument) -> String {
        document.texts().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_empty_result_renders_placeholders() {
        let document = render(&AnalysisResult::default(), &default_page_config());
        assert_eq!(document.page_count(), 1);

        let text = all_text(&document);
        assert!(text.starts_with(TITLE));
        assert!(text.contains("Overall Score: 0/100"));
        assert!(text.contains(NONE_IDENTIFIED));
        assert!(text.contains(NO_JOBS));
        assert!(!text.contains("Predicted Category"));
    }

    #[test]
    fn test_criterion_lines_follow_breakdown_order() {
        let document = render(&AnalysisResult::default(), &default_page_config());
        let lines: Vec<&str> = document
            .texts()
            .filter(|t| t.ends_with(" points"))
            .collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Keyword Match: 0/25 points");
    }

    #[test]
    fn test_heavy_result_paginates_deterministically() {
        let config = default_page_config();
        let result = heavy_result();
        let first = render(&result, &config);
        let second = render(&result, &config);

        assert!(first.page_count() > 1, "long skill lists should overflow one page");
        assert_eq!(first.page_count(), second.page_count());
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_op_stays_within_margins() {
        let config = default_page_config();
        let document = render(&heavy_result(), &config);
        for page in &document.pages {
            assert!(!page.is_empty());
            for op in &page.ops {
                let DrawOp::Text { x, y, font, size, text } = op;
                let right_edge = config.page_width_pt - config.margin_pt;
                assert!(*x >= config.margin_pt && *x < right_edge);
                let end = x + get_metrics(*font).width_pt(text, *size);
                assert!(end <= right_edge + 0.01, "past right margin ({end}): {text}");
                assert!(*y >= config.margin_pt, "below bottom margin: {y}");
                assert!(*y <= config.top(), "above top margin: {y}");
            }
        }
    }

    #[test]
    fn test_long_category_and_job_meta_wrap_onto_extra_lines() {
        let document = render(&heavy_result(), &default_page_config());
        let texts: Vec<&str> = document.texts().collect();

        let category_start = texts
            .iter()
            .position(|t| t.starts_with("Predicted Category:"))
            .expect("category line drawn");
        assert!(texts[category_start].len() < "Predicted Category: ".len() + LONG_CATEGORY.len());
        assert!(texts[category_start + 1].ends_with("Lead"));

        let meta_start = texts
            .iter()
            .position(|t| t.starts_with("Very Long Company Name"))
            .expect("job meta line drawn");
        assert!(!texts[meta_start].contains("Match:"));
        assert!(texts[meta_start + 1..].iter().any(|t| t.ends_with('%')));
    }

    #[test]
    fn test_no_content_dropped_across_page_breaks() {
        let result = heavy_result();
        let text = all_text(&render(&result, &default_page_config()));

        let inventory = &result.skills_analysis;
        for skill in inventory.technical.iter().chain(&inventory.soft).chain(&inventory.missing) {
            assert!(text.contains(skill.as_str()), "missing skill {skill}");
        }
        for job in &result.job_recommendations {
            assert!(text.contains(&job.title));
            assert!(text.contains(&job.description));
            assert!(text.contains(&format!("Match: {}%", job.match_score)));
        }
        for word in LONG_CATEGORY.split_whitespace() {
            assert!(text.contains(word), "category word {word} dropped");
        }
        for tip in &result.analysis.improvements {
            assert!(text.contains(tip.as_str()));
        }
    }

    #[test]
    fn test_renders_analyzer_output_with_feedback() {
        let analyzer =
            ResumeAnalyzer::new(Arc::new(Taxonomy::standard()), Arc::new(FallbackClassifier));
        let result = analyzer.analyze(&AnalysisInput::new("", "resume.pdf"));
        let document = render(&result, &default_page_config());
        let text = all_text(&document);

        assert!(text.contains("Overall Score: 25/100"));
        assert!(text.contains("Predicted Category: General"));
        for messages in result.analysis.feedback.values() {
            for message in messages {
                assert!(text.contains(message.as_str()), "missing feedback {message}");
            }
        }
    }
}
