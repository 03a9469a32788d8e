//! Skills section shaping: one chart per category.

use folio_model::SkillRecord;
use serde::Serialize;

pub const DEFAULT_CATEGORY: &str = "other";
pub const UNKNOWN_SKILL: &str = "Unknown";
pub const DEFAULT_BAR_COLOR: &str = "var(--color-default)";
const MIN_CHART_HEIGHT: u32 = 140;
const ROW_HEIGHT: u32 = 32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBar {
    pub name: String,
    pub proficiency: f32,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    /// Category slug as stored in the CMS.
    pub category: String,
    pub label: String,
    pub skills: Vec<SkillBar>,
    pub chart_height: u32,
}

/// "dev-ops" -> "Dev Ops".
pub fn category_label(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn chart_height(rows: usize) -> u32 {
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    rows.saturating_mul(ROW_HEIGHT).max(MIN_CHART_HEIGHT)
}

/// Group skills by category, categories in first-seen order and skills in
/// input order within each category.
pub fn group_skills(skills: &[SkillRecord]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        let bar = SkillBar {
            name: skill
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN_SKILL.to_string()),
            proficiency: skill.percentage.unwrap_or(0.0),
            fill: skill
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_BAR_COLOR.to_string()),
        };

        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(bar),
            None => groups.push(SkillGroup {
                category: category.to_string(),
                label: category_label(category),
                skills: vec![bar],
                chart_height: 0,
            }),
        }
    }

    for group in &mut groups {
        group.chart_height = chart_height(group.skills.len());
    }
    groups
}
