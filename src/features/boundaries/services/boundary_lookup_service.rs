use std::sync::Arc;

use crate::features::boundaries::models::{BoundaryPayload, CacheKey};
use crate::features::boundaries::services::{BoundaryCache, BoundaryFetcher};
use crate::features::regions::models::{RegionLevel, RegionRequest};
use crate::features::regions::services::{RegionResolver, ResolveError};

/// Resolves region requests and serves their boundaries through the cache
///
/// Flow: resolver → cache → remote fetch on miss. A missing or malformed
/// boundary, or a failed fetch, yields `None`; only resolver errors are
/// returned to the caller.
pub struct BoundaryLookupService {
    resolver: Arc<RegionResolver>,
    cache: Arc<BoundaryCache>,
    fetcher: Arc<dyn BoundaryFetcher>,
}

impl BoundaryLookupService {
    pub fn new(
        resolver: Arc<RegionResolver>,
        cache: Arc<BoundaryCache>,
        fetcher: Arc<dyn BoundaryFetcher>,
    ) -> Self {
        Self {
            resolver,
            cache,
            fetcher,
        }
    }

    pub fn resolver(&self) -> &RegionResolver {
        &self.resolver
    }

    pub fn cache(&self) -> &BoundaryCache {
        &self.cache
    }

    /// Resolve `request` to a code and return the boundary at `request.level`
    pub async fn resolve_and_fetch_boundary(
        &self,
        request: &RegionRequest,
    ) -> Result<Option<Arc<BoundaryPayload>>, ResolveError> {
        let code = self.resolver.resolve(request)?;
        Ok(self.boundary_for_code(request.level, &code).await)
    }

    /// Boundary for an already resolved code, cached by `(level, code)`
    pub async fn boundary_for_code(
        &self,
        level: RegionLevel,
        code: &str,
    ) -> Option<Arc<BoundaryPayload>> {
        let key = CacheKey::new(level, code);

        if let Some(cached) = self.cache.get(&key).await {
            return Some(cached);
        }

        tracing::info!("Fetching boundary (cache miss): {}", key);

        // The cache lock is not held across the remote call
        let raw = match self.fetcher.fetch(code, level).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::warn!("No boundary data for {}", key);
                return None;
            }
            Err(e) => {
                tracing::error!("Boundary fetch for {} failed: {}", key, e);
                return None;
            }
        };

        match BoundaryPayload::from_upstream(raw) {
            Ok(payload) => Some(self.cache.put(key, payload).await),
            Err(reason) => {
                tracing::warn!("Malformed boundary for {}: {}", key, reason);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CacheConfig;
    use crate::shared::test_helpers::{
        boundary_json, sample_catalog, FailingBoundaryFetcher, StaticBoundaryFetcher,
    };
    use serde_json::json;

    fn service_with(
        fetcher: Arc<dyn BoundaryFetcher>,
        max_items: usize,
    ) -> BoundaryLookupService {
        let resolver = Arc::new(RegionResolver::new(Arc::new(sample_catalog())));
        let config = CacheConfig::new(max_items, 50 * 1024 * 1024, 10).unwrap();
        BoundaryLookupService::new(resolver, Arc::new(BoundaryCache::new(&config)), fetcher)
    }

    #[tokio::test]
    async fn test_miss_fetches_and_caches() {
        let fetcher = Arc::new(StaticBoundaryFetcher::with_all_codes());
        let service = service_with(fetcher.clone(), 10);
        let request = RegionRequest::sub_district("P2", "S1");

        let first = service
            .resolve_and_fetch_boundary(&request)
            .await
            .unwrap()
            .unwrap();
        let second = service
            .resolve_and_fetch_boundary(&request)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(fetcher.requested(), vec!["2010".to_string()]);

        let stats = service.cache().stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.keys, vec![CacheKey::new(RegionLevel::SubDistrict, "2010")]);
    }

    #[tokio::test]
    async fn test_resolver_error_propagates_without_fetch() {
        let fetcher = Arc::new(StaticBoundaryFetcher::with_all_codes());
        let service = service_with(fetcher.clone(), 10);

        let err = service
            .resolve_and_fetch_boundary(&RegionRequest::sub_district("P2", "S2"))
            .await
            .unwrap_err();

        assert_eq!(err, ResolveError::RegionNotFound("P2/S2".to_string()));
        assert_eq!(fetcher.calls(), 0);
        assert_eq!(service.cache().stats().await.total_requests, 0);
    }

    #[tokio::test]
    async fn test_absent_boundary_is_not_cached() {
        let fetcher = Arc::new(StaticBoundaryFetcher::empty());
        let service = service_with(fetcher.clone(), 10);
        let request = RegionRequest::province("P1");

        assert!(service
            .resolve_and_fetch_boundary(&request)
            .await
            .unwrap()
            .is_none());
        assert!(service
            .resolve_and_fetch_boundary(&request)
            .await
            .unwrap()
            .is_none());

        assert_eq!(fetcher.calls(), 2);
        assert_eq!(service.cache().stats().await.item_count, 0);
    }

    #[tokio::test]
    async fn test_malformed_boundary_is_not_cached() {
        let fetcher = Arc::new(StaticBoundaryFetcher::empty().with_boundary(
            "10",
            json!({"type": "Polygon", "coordinates": [], "centroid": {"lng": 127.0}}),
        ));
        let service = service_with(fetcher, 10);

        let result = service
            .resolve_and_fetch_boundary(&RegionRequest::province("P1"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(service.cache().stats().await.item_count, 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_downgraded_to_absent() {
        let service = service_with(Arc::new(FailingBoundaryFetcher), 10);

        let result = service
            .resolve_and_fetch_boundary(&RegionRequest::province("P1"))
            .await;

        let boundary = tokio_test::assert_ok!(result);
        assert!(boundary.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_names_hit_distinct_cache_entries() {
        let fetcher = Arc::new(StaticBoundaryFetcher::with_all_codes());
        let service = service_with(fetcher.clone(), 10);

        service
            .resolve_and_fetch_boundary(&RegionRequest::sub_district("P1", "S1"))
            .await
            .unwrap();
        service
            .resolve_and_fetch_boundary(&RegionRequest::sub_district("P2", "S1"))
            .await
            .unwrap();

        assert_eq!(fetcher.calls(), 2);
        assert_eq!(
            fetcher.requested(),
            vec!["1010".to_string(), "2010".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cache_ceiling_applies_through_service() {
        let fetcher = Arc::new(StaticBoundaryFetcher::with_all_codes());
        let service = service_with(fetcher.clone(), 3);

        for request in [
            RegionRequest::province("P1"),
            RegionRequest::province("P2"),
            RegionRequest::sub_district("P1", "S1"),
            RegionRequest::sub_district("P1", "S2"),
        ] {
            service.resolve_and_fetch_boundary(&request).await.unwrap();
        }

        let stats = service.cache().stats().await;
        assert_eq!(stats.evictions, 1);
        assert!(!stats
            .keys
            .contains(&CacheKey::new(RegionLevel::Province, "10")));

        // Evicted entry is fetched again
        service
            .resolve_and_fetch_boundary(&RegionRequest::province("P1"))
            .await
            .unwrap();
        assert_eq!(fetcher.calls(), 5);
    }

    #[test]
    fn test_boundary_json_fixture_is_valid() {
        assert!(BoundaryPayload::from_upstream(boundary_json(3)).is_ok());
    }
}
