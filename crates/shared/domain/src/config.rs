use crate::constants::{APP_NAME, COMPANY_NAME, DEBUG_INFO_ENABLED, ITEMS_PER_PAGE, VERSION};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Constant table of the application, serialized under the upper-case key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct AppConfigInner {
    #[serde(rename = "APP_NAME")]
    app_name: &'static str,
    #[serde(rename = "VERSION")]
    version: &'static str,
    #[serde(rename = "COMPANY_NAME")]
    company_name: &'static str,
    #[serde(rename = "PAGINATION_CONSTANTS")]
    pagination: PaginationConstants,
    #[serde(rename = "DEBUG_INFO_ENABLED")]
    debug_info_enabled: bool,
}

/// Read-only application configuration, built once at startup and passed explicitly
/// to whatever needs it.
///
/// The table lives behind an [`Arc`], so clones are cheap and every clone observes the
/// same values. There is intentionally no `DerefMut` and no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    #[serde(flatten)]
    inner: Arc<AppConfigInner>,
}

impl AppConfig {
    /// Builds the configuration from the compiled-in constants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AppConfigInner {
                app_name: APP_NAME,
                version: VERSION,
                company_name: COMPANY_NAME,
                pagination: PaginationConstants::default(),
                debug_info_enabled: DEBUG_INFO_ENABLED,
            }),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &'static str {
        self.inner.app_name
    }

    #[must_use]
    pub fn version(&self) -> &'static str {
        self.inner.version
    }

    #[must_use]
    pub fn company_name(&self) -> &'static str {
        self.inner.company_name
    }

    /// Returns a copy of the pagination record; changing it never touches the table.
    #[must_use]
    pub fn pagination(&self) -> PaginationConstants {
        self.inner.pagination
    }

    #[must_use]
    pub fn debug_info_enabled(&self) -> bool {
        self.inner.debug_info_enabled
    }
}

/// Pagination defaults shared by list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConstants {
    pub items_per_page: u32,
}

impl PaginationConstants {
    /// Number of pages needed to show `total_items`. A zero page size yields zero pages.
    #[must_use]
    pub fn page_count(&self, total_items: u64) -> u64 {
        if self.items_per_page == 0 {
            return 0;
        }
        total_items.div_ceil(u64::from(self.items_per_page))
    }

    /// Index of the first item on the zero-based `page`.
    #[must_use]
    pub fn offset(&self, page: u64) -> u64 {
        page.saturating_mul(u64::from(self.items_per_page))
    }

    /// Request for the zero-based `page` using this page size.
    #[must_use]
    pub const fn page(&self, page: u64) -> PageRequest {
        PageRequest { page, size: self.items_per_page }
    }
}

/// A single page request: zero-based page number plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u32,
}

impl PageRequest {
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(u64::from(self.size))
    }
}

// --- Default ---

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PaginationConstants {
    fn default() -> Self {
        Self { items_per_page: ITEMS_PER_PAGE }
    }
}
