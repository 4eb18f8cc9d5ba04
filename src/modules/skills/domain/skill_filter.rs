use crate::content::domain::SkillEntry;

/// Sentinel selection that disables filtering.
pub const ALL_SKILLS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SkillSelection {
    #[default]
    All,
    Category(String),
}

impl SkillSelection {
    /// Missing, blank or `All` selects everything. Categories match exactly.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL_SKILLS) => Self::All,
            Some(category) => Self::Category(category.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_SKILLS,
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, skill: &SkillEntry) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => &skill.category == category,
        }
    }
}

/// Skills matching `selection`, in their original order.
pub fn filter_skills(skills: &[SkillEntry], selection: &SkillSelection) -> Vec<SkillEntry> {
    skills
        .iter()
        .filter(|skill| selection.matches(skill))
        .cloned()
        .collect()
}

/// Filter buttons: `All` followed by each category in first-appearance order.
pub fn filter_options(skills: &[SkillEntry]) -> Vec<String> {
    let mut options = vec![ALL_SKILLS.to_string()];
    for skill in skills {
        if !options.iter().skip(1).any(|c| c == &skill.category) {
            options.push(skill.category.clone());
        }
    }
    options
}
