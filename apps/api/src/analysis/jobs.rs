//! Illustrative job recommendations. Not computed from any job market; the list is
//! the same for every résumé.

use crate::analysis::models::JobRecommendation;

const JOBS: &[(&str, &str, &str, u8, &str)] = &[
    (
        "Software Engineer",
        "Tech Solutions Inc.",
        "San Francisco, CA",
        90,
        "Design, build and maintain backend services and web applications in a \
         collaborative agile team, with ownership from design review to production rollout.",
    ),
    (
        "Data Scientist",
        "Quant Insights LLC",
        "New York, NY",
        85,
        "Develop statistical models and machine learning pipelines that turn large \
         datasets into actionable insights for product and business stakeholders.",
    ),
    (
        "Product Manager",
        "Innovate Corp.",
        "Seattle, WA",
        75,
        "Own the roadmap for a customer-facing product line, coordinating engineering, \
         design and marketing to deliver measurable outcomes.",
    ),
    (
        "UX Designer",
        "Creative Studio",
        "Austin, TX",
        70,
        "Research user needs and craft intuitive interfaces, prototypes and design \
         systems for web and mobile products.",
    ),
];

pub fn recommendations() -> Vec<JobRecommendation> {
    JOBS.iter()
        .map(
            |(title, company, location, match_score, description)| JobRecommendation {
                title: title.to_string(),
                company: company.to_string(),
                location: location.to_string(),
                match_score: *match_score,
                link: "#".to_string(),
                description: description.to_string(),
            },
        )
        .collect()
}
