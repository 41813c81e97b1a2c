//! Resolution of a named role configuration into hard criteria.

use std::collections::BTreeMap;

use tracing::warn;

use super::HardCriteria;

/// Resolves a configuration name (e.g. `tax_lawyer.yml`) to hard criteria
pub trait CriteriaResolver {
    /// Criteria for `name`; unknown names yield empty criteria
    fn resolve(&self, name: &str) -> HardCriteria;
}

impl<F> CriteriaResolver for F
where
    F: Fn(&str) -> HardCriteria,
{
    fn resolve(&self, name: &str) -> HardCriteria {
        self(name)
    }
}

/// Profiles shipped with Scout
pub fn builtin_profiles() -> BTreeMap<String, HardCriteria> {
    [
        (
            "tax_lawyer.yml",
            HardCriteria::new()
                .with_degree("jd")
                .with_min_years(3)
                .with_country("United States"),
        ),
        (
            "junior_corporate_lawyer.yml",
            HardCriteria::new().with_degree("jd").with_min_years(2),
        ),
        (
            "radiology.yml",
            HardCriteria::new().with_degree("md").with_min_years(1),
        ),
        (
            "doctors_md.yml",
            HardCriteria::new().with_degree("md").with_min_years(2),
        ),
        (
            "mechanical_engineers.yml",
            HardCriteria::new().with_degree("bachelor").with_min_years(3),
        ),
    ]
    .into_iter()
    .map(|(name, criteria)| (name.to_string(), criteria))
    .collect()
}

/// Name-keyed table of criteria profiles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaCatalog {
    profiles: BTreeMap<String, HardCriteria>,
}

impl CriteriaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in profiles
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    /// Add or replace a profile
    pub fn insert(&mut self, name: impl Into<String>, criteria: HardCriteria) -> &mut Self {
        self.profiles.insert(name.into(), criteria);
        self
    }

    pub fn get(&self, name: &str) -> Option<&HardCriteria> {
        self.profiles.get(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profiles in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HardCriteria)> {
        self.profiles.iter().map(|(name, c)| (name.as_str(), c))
    }
}

impl From<BTreeMap<String, HardCriteria>> for CriteriaCatalog {
    fn from(profiles: BTreeMap<String, HardCriteria>) -> Self {
        Self { profiles }
    }
}

impl CriteriaResolver for CriteriaCatalog {
    fn resolve(&self, name: &str) -> HardCriteria {
        match self.profiles.get(name) {
            Some(criteria) => criteria.clone(),
            None => {
                warn!(
                    config = name,
                    "No criteria profile for config; ranking without hard criteria"
                );
                HardCriteria::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = CriteriaCatalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.resolve("tax_lawyer.yml"),
            HardCriteria::new()
                .with_degree("jd")
                .with_min_years(3)
                .with_country("United States")
        );
        assert_eq!(
            catalog.resolve("mechanical_engineers.yml"),
            HardCriteria::new().with_degree("bachelor").with_min_years(3)
        );
    }

    #[test]
    fn test_unknown_name_resolves_to_empty() {
        let catalog = CriteriaCatalog::builtin();
        assert!(catalog.resolve("astronauts.yml").is_empty());
    }

    #[test]
    fn test_insert_overrides() {
        let mut catalog = CriteriaCatalog::builtin();
        catalog.insert("radiology.yml", HardCriteria::new().with_degree("md").with_min_years(4));
        assert_eq!(catalog.resolve("radiology.yml").min_years, Some(4));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str| HardCriteria::new().with_degree(name);
        assert_eq!(resolver.resolve("md").degree(), Some("md"));
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let names: Vec<_> = CriteriaCatalog::builtin().iter().map(|(n, _)| n.to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
