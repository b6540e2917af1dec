//! Literal values fixed at build time. Changing any of them requires a rebuild.

pub const APP_NAME: &str = "passport-server";
pub const VERSION: &str = "1.0.0";
pub const COMPANY_NAME: &str = "Infinity Organization";

/// Default page size for list views.
pub const ITEMS_PER_PAGE: u32 = 10;

pub const DEBUG_INFO_ENABLED: bool = true;
