use std::sync::Arc;

use thiserror::Error;

use crate::features::regions::models::{RegionCatalog, RegionLevel, RegionRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The request omitted a name required by its level
    #[error("{0} name is required for this level")]
    MissingField(RegionLevel),

    /// No entry with that name exists under the resolved parent
    #[error("Region not found: {0}")]
    RegionNotFound(String),
}

/// Resolves hierarchical region names to catalog codes
///
/// Resolution always walks top-down (province → sub-district →
/// neighborhood) and looks each child up under the code resolved for its
/// parent, so names that repeat across parents never cross-match.
pub struct RegionResolver {
    catalog: Arc<RegionCatalog>,
}

impl RegionResolver {
    pub fn new(catalog: Arc<RegionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Resolve a request to the code of the region at `request.level`
    pub fn resolve(&self, request: &RegionRequest) -> Result<String, ResolveError> {
        let mut path = request.province.clone();

        let province = self
            .catalog
            .find_province(&request.province)
            .ok_or_else(|| ResolveError::RegionNotFound(path.clone()))?;

        if request.level == RegionLevel::Province {
            tracing::debug!("Resolved region {} = {}", path, province.code);
            return Ok(province.code.clone());
        }

        let sub_district_name = required_name(&request.sub_district, RegionLevel::SubDistrict)?;
        path = format!("{}/{}", path, sub_district_name);

        let sub_district = self
            .catalog
            .find_child(RegionLevel::SubDistrict, &province.code, sub_district_name)
            .ok_or_else(|| ResolveError::RegionNotFound(path.clone()))?;

        if request.level == RegionLevel::SubDistrict {
            tracing::debug!("Resolved region {} = {}", path, sub_district.code);
            return Ok(sub_district.code.clone());
        }

        let neighborhood_name = required_name(&request.neighborhood, RegionLevel::Neighborhood)?;
        path = format!("{}/{}", path, neighborhood_name);

        let neighborhood = self
            .catalog
            .find_child(
                RegionLevel::Neighborhood,
                &sub_district.code,
                neighborhood_name,
            )
            .ok_or_else(|| ResolveError::RegionNotFound(path.clone()))?;

        tracing::debug!("Resolved region {} = {}", path, neighborhood.code);
        Ok(neighborhood.code.clone())
    }
}

/// Empty names count as missing
fn required_name(name: &Option<String>, level: RegionLevel) -> Result<&str, ResolveError> {
    name.as_deref()
        .filter(|n| !n.is_empty())
        .ok_or(ResolveError::MissingField(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_catalog;

    fn resolver() -> RegionResolver {
        RegionResolver::new(Arc::new(sample_catalog()))
    }

    #[test]
    fn test_resolve_province() {
        let code = resolver().resolve(&RegionRequest::province("P1")).unwrap();
        assert_eq!(code, "10");
    }

    #[test]
    fn test_duplicate_sub_district_name_resolves_under_requested_province() {
        let resolver = resolver();

        let p1 = resolver
            .resolve(&RegionRequest::sub_district("P1", "S1"))
            .unwrap();
        let p2 = resolver
            .resolve(&RegionRequest::sub_district("P2", "S1"))
            .unwrap();

        assert_eq!(p1, "1010");
        assert_eq!(p2, "2010");
    }

    #[test]
    fn test_duplicate_neighborhood_name_resolves_under_requested_sub_district() {
        let resolver = resolver();

        let under_p1 = resolver
            .resolve(&RegionRequest::neighborhood("P1", "S1", "Central"))
            .unwrap();
        let under_p2 = resolver
            .resolve(&RegionRequest::neighborhood("P2", "S1", "Central"))
            .unwrap();

        assert_eq!(under_p1, "101001");
        assert_eq!(under_p2, "201001");
    }

    #[test]
    fn test_name_under_other_parent_is_not_found() {
        // "S2" only exists under P1
        let err = resolver()
            .resolve(&RegionRequest::sub_district("P2", "S2"))
            .unwrap_err();
        assert_eq!(err, ResolveError::RegionNotFound("P2/S2".to_string()));
    }

    #[test]
    fn test_unknown_province() {
        let err = resolver()
            .resolve(&RegionRequest::province("Atlantis"))
            .unwrap_err();
        assert_eq!(err, ResolveError::RegionNotFound("Atlantis".to_string()));
    }

    #[test]
    fn test_missing_sub_district_name() {
        let mut request = RegionRequest::sub_district("P1", "S1");
        request.sub_district = None;
        assert_eq!(
            resolver().resolve(&request).unwrap_err(),
            ResolveError::MissingField(RegionLevel::SubDistrict)
        );

        request.sub_district = Some(String::new());
        assert_eq!(
            resolver().resolve(&request).unwrap_err(),
            ResolveError::MissingField(RegionLevel::SubDistrict)
        );
    }

    #[test]
    fn test_missing_neighborhood_name() {
        let mut request = RegionRequest::neighborhood("P1", "S1", "Central");
        request.neighborhood = None;
        assert_eq!(
            resolver().resolve(&request).unwrap_err(),
            ResolveError::MissingField(RegionLevel::Neighborhood)
        );
    }

    #[test]
    fn test_neighborhood_not_found_reports_full_path() {
        let err = resolver()
            .resolve(&RegionRequest::neighborhood("P1", "S2", "Central"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::RegionNotFound("P1/S2/Central".to_string())
        );
    }

    #[test]
    fn test_province_level_ignores_lower_names() {
        let mut request = RegionRequest::neighborhood("P2", "nope", "nope");
        request.level = RegionLevel::Province;
        assert_eq!(resolver().resolve(&request).unwrap(), "20");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = resolver();
        let request = RegionRequest::neighborhood("P2", "S1", "Central");
        let first = resolver.resolve(&request).unwrap();
        for _ in 0..10 {
            assert_eq!(resolver.resolve(&request).unwrap(), first);
        }
    }
}
