use serde::Serialize;
use std::collections::HashSet;
use utoipa::ToSchema;

use crate::content::domain::SkillEntry;

/// Keyed difference between two filtered skill lists.
///
/// Entries are matched by name, never by position, so a renderer can animate
/// `leaving` entries out instead of silently replacing them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct SkillTransition {
    pub entering: Vec<String>,
    pub leaving: Vec<String>,
    pub retained: Vec<String>,
}

pub fn diff_by_name(previous: &[SkillEntry], next: &[SkillEntry]) -> SkillTransition {
    let before: HashSet<&str> = previous.iter().map(|s| s.name.as_str()).collect();
    let after: HashSet<&str> = next.iter().map(|s| s.name.as_str()).collect();

    let mut transition = SkillTransition::default();
    for skill in next {
        if before.contains(skill.name.as_str()) {
            transition.retained.push(skill.name.clone());
        } else {
            transition.entering.push(skill.name.clone());
        }
    }
    transition.leaving = previous
        .iter()
        .filter(|s| !after.contains(s.name.as_str()))
        .map(|s| s.name.clone())
        .collect();

    transition
}
