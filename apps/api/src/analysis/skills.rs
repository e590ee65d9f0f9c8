//! Skill matching against the taxonomy, and the technical/soft/missing partition.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::Taxonomy;

/// Returns the canonical skills found in `text_lower`.
///
/// An entry matches only on token boundaries: the characters immediately before and
/// after the occurrence must not be ASCII alphanumeric. "java" therefore does not
/// match inside "javascript", while "c++" and "time management" match as written.
pub fn match_skills(text_lower: &str, taxonomy: &Taxonomy) -> BTreeSet<String> {
    taxonomy
        .all_skills()
        .filter(|skill| contains_token(text_lower, skill))
        .map(str::to_string)
        .collect()
}

/// True when `needle` occurs in `haystack` bounded by non-alphanumeric characters.
pub(crate) fn contains_token(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        before_ok && after_ok
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Skill gap analysis
// ────────────────────────────────────────────────────────────────────────────

/// Matched skills split by category kind, plus desirable skills that were not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInventory {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

/// Partitions `matched` into technical and soft skills and lists the desirable skills
/// absent from it. Missing skills keep the desirable-list order.
pub fn analyze_skill_gap(matched: &BTreeSet<String>, taxonomy: &Taxonomy) -> SkillInventory {
    let mut technical = Vec::new();
    let mut soft = Vec::new();

    for skill in matched {
        match taxonomy.category_of(skill) {
            Some(category) if category.is_soft() => soft.push(skill.clone()),
            Some(_) => technical.push(skill.clone()),
            None => {}
        }
    }

    let matched_lower: BTreeSet<String> = matched.iter().map(|s| s.to_lowercase()).collect();
    let missing = taxonomy
        .desirable_skills
        .iter()
        .filter(|skill| !matched_lower.contains(skill.as_str()))
        .cloned()
        .collect();

    SkillInventory {
        technical,
        soft,
        missing,
    }
}
