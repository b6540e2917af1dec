//! Kernel utilities shared by the passport server binaries.
//! Keep this crate lightweight: the constant registry and process settings loading.
//!
//! ## Constant lookup
//! ```rust
//! use passport_kernel::domain::config::AppConfig;
//! use passport_kernel::registry::{ConstantRegistry, ConstantValue};
//!
//! let registry = ConstantRegistry::new(AppConfig::new());
//! assert_eq!(registry.get("APP_NAME")?, ConstantValue::Text("passport-server"));
//! # Ok::<(), passport_kernel::registry::RegistryError>(())
//! ```
//!
//! ## Settings loading
//! ```rust,no_run
//! use passport_kernel::settings::{Settings, load_settings};
//!
//! let settings: Settings = load_settings(Some("passport")).unwrap_or_default();
//! ```
pub mod registry;
pub mod settings;

pub use passport_domain as domain;
