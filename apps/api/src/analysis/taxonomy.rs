//! Static résumé vocabulary: skill categories, section header synonyms, action verbs,
//! and the desirable-skills list used for gap analysis.
//!
//! Built once at startup and shared read-only (`Arc<Taxonomy>`) across requests.

// ────────────────────────────────────────────────────────────────────────────
// Skill categories
// ────────────────────────────────────────────────────────────────────────────

/// Skill taxonomy buckets. Soft skills are the only non-technical bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillCategory {
    Programming,
    Databases,
    Frameworks,
    Tools,
    DataScience,
    SoftSkills,
}

impl SkillCategory {
    #[cfg(test)]
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Programming,
        SkillCategory::Databases,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::DataScience,
        SkillCategory::SoftSkills,
    ];

    pub fn is_soft(self) -> bool {
        matches!(self, SkillCategory::SoftSkills)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Résumé sections
// ────────────────────────────────────────────────────────────────────────────

/// The six canonical résumé sections, in detection (and feedback) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Certifications,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// One skill bucket with its canonical (lower-case) entries.
#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

/// Header synonyms for one canonical section. Matching is plain substring.
#[derive(Debug, Clone)]
pub struct SectionHeaders {
    pub section: Section,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Taxonomy {
    pub skill_groups: Vec<SkillGroup>,
    pub section_headers: Vec<SectionHeaders>,
    pub action_verbs: Vec<String>,
    pub desirable_skills: Vec<String>,
}

impl Taxonomy {
    /// The built-in vocabulary used by the service.
    pub fn standard() -> Self {
        Self {
            skill_groups: SKILLS
                .iter()
                .map(|(category, skills)| SkillGroup {
                    category: *category,
                    skills: to_owned(skills),
                })
                .collect(),
            section_headers: SECTION_HEADERS
                .iter()
                .map(|(section, synonyms)| SectionHeaders {
                    section: *section,
                    synonyms: to_owned(synonyms),
                })
                .collect(),
            action_verbs: to_owned(ACTION_VERBS),
            desirable_skills: to_owned(DESIRABLE_SKILLS),
        }
    }

    /// Category a canonical skill belongs to, if it is in the taxonomy.
    pub fn category_of(&self, skill: &str) -> Option<SkillCategory> {
        self.skill_groups
            .iter()
            .find(|g| g.skills.iter().any(|s| s == skill))
            .map(|g| g.category)
    }

    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skill_groups
            .iter()
            .flat_map(|g| g.skills.iter().map(String::as_str))
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const SKILLS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Programming,
        &["python", "java", "javascript", "c++", "ruby", "php", "typescript", "swift", "kotlin"],
    ),
    (
        SkillCategory::Databases,
        &["sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "dynamodb"],
    ),
    (
        SkillCategory::Frameworks,
        &["django", "flask", "react", "angular", "vue", "spring", "express", "laravel", "asp.net"],
    ),
    (
        SkillCategory::Tools,
        &["git", "docker", "kubernetes", "jenkins", "aws", "azure", "gcp", "jira", "confluence"],
    ),
    (
        SkillCategory::DataScience,
        &["pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "spark", "hadoop"],
    ),
    (
        SkillCategory::SoftSkills,
        &[
            "leadership",
            "communication",
            "teamwork",
            "problem-solving",
            "time management",
            "adaptability",
        ],
    ),
];

const SECTION_HEADERS: &[(Section, &[&str])] = &[
    (Section::Summary, &["summary", "objective", "profile", "about"]),
    (Section::Skills, &["skills", "technical skills", "core competencies"]),
    (
        Section::Experience,
        &["experience", "work experience", "employment", "professional experience"],
    ),
    (Section::Education, &["education", "academic background", "qualification"]),
    (Section::Projects, &["projects", "project experience", "portfolio"]),
    (
        Section::Certifications,
        &["certifications", "certificates", "accreditations"],
    ),
];

const ACTION_VERBS: &[&str] = &[
    "achieved",
    "developed",
    "implemented",
    "managed",
    "created",
    "improved",
    "increased",
    "decreased",
    "optimized",
    "led",
    "coordinated",
    "designed",
    "analyzed",
    "resolved",
    "delivered",
    "maintained",
    "enhanced",
    "streamlined",
];

const DESIRABLE_SKILLS: &[&str] = &[
    "project management",
    "data analysis",
    "cloud computing",
    "machine learning",
    "web development",
    "mobile development",
    "cybersecurity",
    "networking",
    "problem-solving",
    "critical thinking",
    "adaptability",
    "teamwork",
    "communication",
    "leadership",
    "time management",
    "customer service",
];
