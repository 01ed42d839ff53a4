use crate::model::{Position, Project, University};
use eyre::{Result, WrapErr, ensure};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Immutable reference data: the universities, projects and positions a
/// student can pick from.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub universities: Vec<University>,
    pub projects: Vec<Project>,
    pub positions: Vec<Position>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn embedded() -> Result<Catalog> {
        toml::from_str(include_str!("../catalog.toml")).wrap_err("cannot parse embedded catalog")
    }

    pub fn load(path: &Path) -> Result<Catalog> {
        let raw = std::fs::read_to_string(path).wrap_err("cannot read catalog file")?;
        toml::from_str(&raw).wrap_err("cannot parse catalog file")
    }

    pub fn university(&self, id: &str) -> Option<&University> {
        self.universities.iter().find(|u| u.id == id)
    }

    pub fn project(&self, number: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.number == number)
    }

    pub fn position(&self, code: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.code == code)
    }

    /// Check the reference data is usable before starting a session.
    pub fn check(&self) -> Result<()> {
        ensure!(!self.universities.is_empty(), "catalog has no universities");
        ensure!(!self.projects.is_empty(), "catalog has no projects");
        ensure!(!self.positions.is_empty(), "catalog has no positions");
        let mut seen = HashSet::new();
        for university in &self.universities {
            ensure!(
                seen.insert(&university.id),
                "duplicate university id: {}",
                university.id
            );
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            ensure!(
                seen.insert(&project.number),
                "duplicate project number: {}",
                project.number
            );
        }
        let mut seen = HashSet::new();
        for position in &self.positions {
            ensure!(
                seen.insert(&position.code),
                "duplicate position code: {}",
                position.code
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_checks() {
        let catalog = Catalog::embedded().unwrap();
        catalog.check().unwrap();
        assert_eq!(catalog.universities.len(), 5);
        assert_eq!(catalog.projects.len(), 2);
        assert_eq!(catalog.positions.len(), 3);
    }

    #[test]
    fn lookups_resolve_known_entries() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.university("2").unwrap().name, "Universidad Nacional de Cuyo");
        assert_eq!(catalog.project("00002").unwrap().company, "EduTech Innovations");
        assert_eq!(catalog.position("INS001").unwrap().weekly_hours, 20);
        assert!(catalog.university("9").is_none());
        assert!(catalog.project("00009").is_none());
        assert!(catalog.position("XXX").is_none());
    }

    #[test]
    fn duplicate_ids_fail_the_check() {
        let mut catalog = Catalog::embedded().unwrap();
        let copy = catalog.universities[0].clone();
        catalog.universities.push(copy);
        assert!(catalog.check().is_err());

        let mut catalog = Catalog::embedded().unwrap();
        let copy = catalog.projects[0].clone();
        catalog.projects.push(copy);
        assert!(catalog.check().is_err());

        let mut catalog = Catalog::embedded().unwrap();
        let copy = catalog.positions[0].clone();
        catalog.positions.push(copy);
        assert!(catalog.check().is_err());
    }

    #[test]
    fn empty_sections_fail_the_check() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.positions.clear();
        assert!(catalog.check().is_err());
    }
}
