//! Runtime configuration, read from an optional RON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use catalog_core::CatalogLayout;
use catalog_engine::{is_valid_key, FetchPlan, FetchSettings, DEFAULT_BASE_URL};
use engine_logging::engine_info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "catalog.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub max_response_bytes: u64,
    pub bulk_page_size: u32,
    pub fallback_page_size: u32,
    pub max_pages: u32,
    pub grid_page_size: usize,
    pub max_slides: usize,
    pub auto_advance_ms: u64,
    /// Directory holding the persisted key-value entries.
    pub data_dir: PathBuf,
    pub favorites_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        let plan = FetchPlan::default();
        let layout = CatalogLayout::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: fetch.request_timeout.as_millis() as u64,
            connect_timeout_ms: fetch.connect_timeout.as_millis() as u64,
            max_response_bytes: fetch.max_bytes,
            bulk_page_size: plan.bulk_page_size,
            fallback_page_size: plan.fallback_page_size,
            max_pages: plan.max_pages,
            grid_page_size: layout.page_size,
            max_slides: layout.max_slides,
            auto_advance_ms: 1500,
            data_dir: PathBuf::from(".catalog"),
            favorites_key: "favorites".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `path`. A missing file means defaults; a file that does not
    /// parse is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                engine_info!("No config at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading config {}", path.display()))
            }
        };
        let config: Self =
            ron::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
        engine_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn to_ron(&self) -> anyhow::Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
            .context("serializing config")
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.base_url)
            .with_context(|| format!("base_url {:?} is not a valid URL", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("base_url must use http or https, got {:?}", url.scheme());
        }
        if self.bulk_page_size == 0 || self.fallback_page_size == 0 {
            bail!("page sizes must be positive");
        }
        if self.max_pages == 0 {
            bail!("max_pages must be positive");
        }
        if self.grid_page_size == 0 || self.max_slides == 0 {
            bail!("grid_page_size and max_slides must be positive");
        }
        if self.request_timeout_ms == 0 || self.auto_advance_ms == 0 {
            bail!("timeouts and intervals must be positive");
        }
        if !is_valid_key(&self.favorites_key) {
            bail!(
                "favorites_key {:?} must be non-empty and use only letters, digits, '_' or '-'",
                self.favorites_key
            );
        }
        Ok(())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_response_bytes,
        }
    }

    pub fn fetch_plan(&self) -> FetchPlan {
        FetchPlan {
            bulk_page_size: self.bulk_page_size,
            fallback_page_size: self.fallback_page_size,
            max_pages: self.max_pages,
        }
    }

    pub fn layout(&self) -> CatalogLayout {
        CatalogLayout {
            page_size: self.grid_page_size,
            max_slides: self.max_slides,
        }
    }

    pub fn auto_advance_interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}
