use std::collections::HashMap;

use thiserror::Error;

use crate::features::regions::models::{RegionCatalogEntry, RegionLevel};
use crate::shared::validation::REGION_CODE_REGEX;

/// Parent key used for provinces in the `(parent_code, name)` index
const ROOT_PARENT: &str = "";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read region catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse region catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid region catalog: {0}")]
    Invalid(String),
}

/// One tier of the catalog: entries in source order plus lookup indexes
#[derive(Debug, Default)]
struct CatalogLevel {
    entries: Vec<RegionCatalogEntry>,
    by_parent_and_name: HashMap<String, HashMap<String, usize>>,
    by_code: HashMap<String, usize>,
}

impl CatalogLevel {
    fn build(level: RegionLevel, entries: Vec<RegionCatalogEntry>) -> Result<Self, CatalogError> {
        let mut by_parent_and_name: HashMap<String, HashMap<String, usize>> = HashMap::new();
        let mut by_code = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if !REGION_CODE_REGEX.is_match(&entry.code) {
                return Err(CatalogError::Invalid(format!(
                    "{} '{}' has malformed code '{}'",
                    level, entry.name, entry.code
                )));
            }
            if entry.name.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "{} with code '{}' has an empty name",
                    level, entry.code
                )));
            }
            if by_code.contains_key(&entry.code) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate {} code '{}'",
                    level, entry.code
                )));
            }
            by_code.insert(entry.code.clone(), idx);

            let parent = entry.parent_code.as_deref().unwrap_or(ROOT_PARENT);
            let siblings = by_parent_and_name.entry(parent.to_string()).or_default();
            if siblings.contains_key(&entry.name) {
                // First match wins, same as a top-to-bottom scan
                tracing::warn!(
                    "Duplicate {} name '{}' under parent '{}' (code {} ignored)",
                    level,
                    entry.name,
                    parent,
                    entry.code
                );
            } else {
                siblings.insert(entry.name.clone(), idx);
            }
        }

        Ok(Self {
            entries,
            by_parent_and_name,
            by_code,
        })
    }

    fn find(&self, parent_code: &str, name: &str) -> Option<&RegionCatalogEntry> {
        self.by_parent_and_name
            .get(parent_code)
            .and_then(|siblings| siblings.get(name))
            .map(|&idx| &self.entries[idx])
    }

    fn get(&self, code: &str) -> Option<&RegionCatalogEntry> {
        self.by_code.get(code).map(|&idx| &self.entries[idx])
    }

    fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }
}

/// Read-only three-level administrative region catalog
///
/// Built once at startup and shared by every resolution call. Each level
/// keeps its source ordering and is indexed by `(parent_code, name)` so a
/// child is always looked up under its claimed parent.
#[derive(Debug, Default)]
pub struct RegionCatalog {
    provinces: CatalogLevel,
    sub_districts: CatalogLevel,
    neighborhoods: CatalogLevel,
}

impl RegionCatalog {
    pub fn new(
        provinces: Vec<RegionCatalogEntry>,
        sub_districts: Vec<RegionCatalogEntry>,
        neighborhoods: Vec<RegionCatalogEntry>,
    ) -> Result<Self, CatalogError> {
        if provinces.is_empty() {
            return Err(CatalogError::Invalid("no provinces defined".to_string()));
        }

        if let Some(entry) = provinces
            .iter()
            .find(|p| p.parent_code.as_deref().is_some_and(|c| !c.is_empty()))
        {
            return Err(CatalogError::Invalid(format!(
                "province '{}' must not have a parent code",
                entry.name
            )));
        }
        // Normalize empty parent codes on provinces to "absent"
        let provinces = provinces
            .into_iter()
            .map(|mut p| {
                p.parent_code = None;
                p
            })
            .collect();

        let provinces = CatalogLevel::build(RegionLevel::Province, provinces)?;
        Self::check_parents(RegionLevel::SubDistrict, &sub_districts, &provinces)?;
        let sub_districts = CatalogLevel::build(RegionLevel::SubDistrict, sub_districts)?;
        Self::check_parents(RegionLevel::Neighborhood, &neighborhoods, &sub_districts)?;
        let neighborhoods = CatalogLevel::build(RegionLevel::Neighborhood, neighborhoods)?;

        Ok(Self {
            provinces,
            sub_districts,
            neighborhoods,
        })
    }

    fn check_parents(
        level: RegionLevel,
        entries: &[RegionCatalogEntry],
        parents: &CatalogLevel,
    ) -> Result<(), CatalogError> {
        for entry in entries {
            match entry.parent_code.as_deref() {
                Some(parent) if parents.contains_code(parent) => {}
                Some(parent) => {
                    return Err(CatalogError::Invalid(format!(
                        "{} '{}' ({}) references unknown parent '{}'",
                        level, entry.name, entry.code, parent
                    )))
                }
                None => {
                    return Err(CatalogError::Invalid(format!(
                        "{} '{}' ({}) has no parent code",
                        level, entry.name, entry.code
                    )))
                }
            }
        }
        Ok(())
    }

    fn level(&self, level: RegionLevel) -> &CatalogLevel {
        match level {
            RegionLevel::Province => &self.provinces,
            RegionLevel::SubDistrict => &self.sub_districts,
            RegionLevel::Neighborhood => &self.neighborhoods,
        }
    }

    /// Find a province by exact name
    pub fn find_province(&self, name: &str) -> Option<&RegionCatalogEntry> {
        self.provinces.find(ROOT_PARENT, name)
    }

    /// Find an entry at `level` by exact name, scoped to `parent_code`
    pub fn find_child(
        &self,
        level: RegionLevel,
        parent_code: &str,
        name: &str,
    ) -> Option<&RegionCatalogEntry> {
        self.level(level).find(parent_code, name)
    }

    /// Get an entry by its code
    pub fn get(&self, level: RegionLevel, code: &str) -> Option<&RegionCatalogEntry> {
        self.level(level).get(code)
    }

    /// All entries of a level, in source order
    pub fn entries(&self, level: RegionLevel) -> &[RegionCatalogEntry] {
        &self.level(level).entries
    }

    /// Entries of `level` whose parent is `parent_code`, in source order
    pub fn children(&self, level: RegionLevel, parent_code: &str) -> Vec<&RegionCatalogEntry> {
        self.level(level)
            .entries
            .iter()
            .filter(|e| e.parent_code.as_deref() == Some(parent_code))
            .collect()
    }

    pub fn len(&self, level: RegionLevel) -> usize {
        self.level(level).entries.len()
    }
}
