use std::collections::BTreeSet;

use crate::content::{Project, TechTag};

/// Active technology filters. An empty set shows everything; otherwise a
/// project is shown when any of its tags is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechFilter {
    active: BTreeSet<TechTag>,
}

impl TechFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, tag: TechTag) {
        if !self.active.remove(&tag) {
            self.active.insert(tag);
        }
    }

    pub fn clear_all(&mut self) {
        self.active.clear();
    }

    pub fn is_active(&self, tag: TechTag) -> bool {
        self.active.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn active(&self) -> impl Iterator<Item = TechTag> + '_ {
        self.active.iter().copied()
    }

    pub fn matches(&self, tags: &[TechTag]) -> bool {
        self.is_empty() || tags.iter().any(|t| self.active.contains(t))
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|p| self.matches(&p.technologies))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    fn project(id: &str, technologies: Vec<TechTag>) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            category: Category::FrontEnd,
            technologies,
            image_url: None,
            github: None,
            live: None,
        }
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut filter = TechFilter::new();
        filter.toggle(TechTag::Node);
        let before = filter.clone();
        for tag in [TechTag::React, TechTag::Docker] {
            filter.toggle(tag);
            filter.toggle(tag);
        }
        assert_eq!(filter, before);
        filter.toggle(TechTag::Node);
        filter.toggle(TechTag::Node);
        assert_eq!(filter, before);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut filter = TechFilter::new();
        filter.toggle(TechTag::Python);
        assert!(filter.is_active(TechTag::Python));
        assert_eq!(filter.len(), 1);
        filter.toggle(TechTag::Python);
        assert!(!filter.is_active(TechTag::Python));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_empty_filter_shows_all() {
        let projects = vec![
            project("a", vec![TechTag::React]),
            project("b", vec![]),
        ];
        let filter = TechFilter::new();
        assert_eq!(filter.apply(&projects).len(), 2);
    }

    #[test]
    fn test_filter_is_any_match() {
        let projects = vec![
            project("a", vec![TechTag::React, TechTag::Typescript]),
            project("b", vec![TechTag::Python]),
            project("c", vec![TechTag::Unity]),
            project("d", vec![]),
        ];
        let mut filter = TechFilter::new();
        filter.toggle(TechTag::Typescript);
        filter.toggle(TechTag::Python);
        let ids: Vec<&str> = filter.apply(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_clear_all() {
        let mut filter = TechFilter::new();
        filter.toggle(TechTag::Linux);
        filter.toggle(TechTag::Bash);
        filter.clear_all();
        assert!(filter.is_empty());
        assert_eq!(filter.active().count(), 0);
    }
}
