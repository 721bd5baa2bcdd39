use std::env;
use std::time::Duration;

use crate::shared::constants::{
    BYTES_PER_MB, DEFAULT_CACHE_EVICTION_PERCENT, DEFAULT_CACHE_MAX_ITEMS,
    DEFAULT_CACHE_MAX_MEMORY_MB,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub catalog: CatalogConfig,
    pub cache: CacheConfig,
    pub supabase: SupabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Location of the administrative region catalog loaded at startup
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: String,
}

/// Ceilings for the in-process boundary cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Hard ceiling on the number of cached boundaries (must be > 0)
    pub max_items: usize,
    /// Soft ceiling on the estimated size of all cached keys and payloads
    pub max_memory_bytes: usize,
    /// Percentage of current entries evicted per pass once the memory ceiling is exceeded
    pub eviction_percent: usize,
}

/// Supabase (PostgREST) connection used for boundary, census and shape analysis calls
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            cache: CacheConfig::from_env()?,
            supabase: SupabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CatalogConfig {
    const DEFAULT_PATH: &'static str = "static/korea_admin_codes.json";

    pub fn from_env() -> Result<Self, String> {
        let path = env::var("REGION_CATALOG_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PATH.to_string());

        Ok(Self { path })
    }
}

impl CacheConfig {
    pub fn from_env() -> Result<Self, String> {
        let max_items = env::var("BOUNDARY_CACHE_MAX_ITEMS")
            .unwrap_or_else(|_| DEFAULT_CACHE_MAX_ITEMS.to_string())
            .parse::<usize>()
            .map_err(|_| "BOUNDARY_CACHE_MAX_ITEMS must be a valid number".to_string())?;

        let max_memory_mb = env::var("BOUNDARY_CACHE_MAX_MEMORY_MB")
            .unwrap_or_else(|_| DEFAULT_CACHE_MAX_MEMORY_MB.to_string())
            .parse::<usize>()
            .map_err(|_| "BOUNDARY_CACHE_MAX_MEMORY_MB must be a valid number".to_string())?;

        let eviction_percent = env::var("BOUNDARY_CACHE_EVICTION_PERCENT")
            .unwrap_or_else(|_| DEFAULT_CACHE_EVICTION_PERCENT.to_string())
            .parse::<usize>()
            .map_err(|_| "BOUNDARY_CACHE_EVICTION_PERCENT must be a valid number".to_string())?;

        Self::new(max_items, max_memory_mb * BYTES_PER_MB, eviction_percent)
    }

    pub fn new(
        max_items: usize,
        max_memory_bytes: usize,
        eviction_percent: usize,
    ) -> Result<Self, String> {
        if max_items == 0 {
            return Err("BOUNDARY_CACHE_MAX_ITEMS must be greater than 0".to_string());
        }
        if !(1..=100).contains(&eviction_percent) {
            return Err("BOUNDARY_CACHE_EVICTION_PERCENT must be between 1 and 100".to_string());
        }

        Ok(Self {
            max_items,
            max_memory_bytes,
            eviction_percent,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_CACHE_MAX_ITEMS,
            max_memory_bytes: DEFAULT_CACHE_MAX_MEMORY_MB * BYTES_PER_MB,
            eviction_percent: DEFAULT_CACHE_EVICTION_PERCENT,
        }
    }
}

impl SupabaseConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("SUPABASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "SUPABASE_URL environment variable is required".to_string())?;

        let api_key = env::var("SUPABASE_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "SUPABASE_KEY environment variable is required".to_string())?;

        let timeout_secs = env::var("SUPABASE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SUPABASE_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Region Boundary API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "1.0.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Administrative region resolution, boundary lookup and population analysis"
                .to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}
