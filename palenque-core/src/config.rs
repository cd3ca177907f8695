//! Store configuration

use std::path::PathBuf;

/// Default backend API root.
pub const DEFAULT_API_BASE: &str = "http://157.245.181.207/api/v1";

/// Default media host, prefixed onto relative image paths.
pub const DEFAULT_MEDIA_BASE: &str = "http://157.245.181.207";

/// Default base for shareable links (pool invites, referral links).
pub const DEFAULT_SHARE_BASE: &str = "https://palenquego.app";

/// Where catalog data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Fetch services and businesses from the backend
    #[default]
    Live,
    /// Seed data only, fetches are skipped
    Demo,
}

/// What happens when the current user joins a pool twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateJoins {
    /// Add another member entry (one person may hold several spots)
    #[default]
    Allow,
    /// Fail with [`StoreError::AlreadyMember`](crate::StoreError::AlreadyMember)
    Reject,
}

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend API root (e.g., "http://157.245.181.207/api/v1")
    pub api_base: String,

    /// Media host for relative image paths
    pub media_base: String,

    /// Base URL for shareable links
    pub share_base: String,

    /// State file location; `None` keeps state in memory only
    pub storage_path: Option<PathBuf>,

    /// Live backend or local demo data
    pub data_source: DataSource,

    /// Duplicate pool join policy
    pub duplicate_joins: DuplicateJoins,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl StoreConfig {
    /// Create a configuration with the production defaults
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            media_base: DEFAULT_MEDIA_BASE.to_string(),
            share_base: DEFAULT_SHARE_BASE.to_string(),
            storage_path: None,
            data_source: DataSource::default(),
            duplicate_joins: DuplicateJoins::default(),
            timeout: 30,
        }
    }

    /// Demo-mode configuration: seed data, no network
    pub fn demo() -> Self {
        Self::new().with_data_source(DataSource::Demo)
    }

    /// Set the backend API root
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the media host
    pub fn with_media_base(mut self, media_base: impl Into<String>) -> Self {
        self.media_base = media_base.into();
        self
    }

    /// Set the share link base
    pub fn with_share_base(mut self, share_base: impl Into<String>) -> Self {
        self.share_base = share_base.into();
        self
    }

    /// Persist state to this file
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Set the data source
    pub fn with_data_source(mut self, data_source: DataSource) -> Self {
        self.data_source = data_source;
        self
    }

    /// Set the duplicate join policy
    pub fn with_duplicate_joins(mut self, policy: DuplicateJoins) -> Self {
        self.duplicate_joins = policy;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
