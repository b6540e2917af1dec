//! Constant registry.
//!
//! A write-once view over [`AppConfig`] that resolves the upper-case constant names
//! (`APP_NAME`, `PAGINATION_CONSTANTS`, ...) to their values. The key set is closed, so
//! an unknown key is always a programming error and is reported as
//! [`RegistryError::UnknownKey`].

use passport_domain::config::{AppConfig, PaginationConstants};
use passport_domain::error::format_context;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown constant key '{key}'{}", format_context(.context))]
    UnknownKey { key: String, context: Option<Cow<'static, str>> },
}

pub trait RegistryErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RegistryError>;
}

impl<T> RegistryErrorExt<T> for Result<T, RegistryError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                RegistryError::UnknownKey { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

/// The fixed set of registered constant names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstantKey {
    AppName,
    Version,
    CompanyName,
    PaginationConstants,
    DebugInfoEnabled,
}

/// A resolved constant. Returned by value, so callers own their copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Text(&'static str),
    Flag(bool),
    Pagination(PaginationConstants),
}

impl ConstantValue {
    #[must_use]
    pub const fn as_text(&self) -> Option<&'static str> {
        match self {
            Self::Text(text) => Some(*text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_pagination(&self) -> Option<PaginationConstants> {
        match self {
            Self::Pagination(pagination) => Some(*pagination),
            _ => None,
        }
    }
}

/// Read-only registry of the application constants.
///
/// Built once from an explicitly passed [`AppConfig`]. It exposes no mutation, so it can
/// be cloned or shared across threads freely.
///
/// # Example
/// ```rust
/// use passport_kernel::domain::config::AppConfig;
/// use passport_kernel::registry::{ConstantKey, ConstantRegistry};
///
/// let registry = ConstantRegistry::new(AppConfig::new());
/// let pagination = registry.value(ConstantKey::PaginationConstants).as_pagination();
/// assert_eq!(pagination.map(|p| p.items_per_page), Some(10));
/// assert!(registry.get("NOT_A_KEY").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ConstantRegistry {
    config: AppConfig,
}

impl ConstantRegistry {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        debug!(
            app = config.app_name(),
            version = config.version(),
            entries = ConstantKey::COUNT,
            "Constant registry initialized"
        );
        Self { config }
    }

    /// Resolves a constant by its upper-case name.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownKey`] if `key` is not one of the registered names.
    pub fn get(&self, key: &str) -> Result<ConstantValue, RegistryError> {
        let Ok(parsed) = key.parse::<ConstantKey>() else {
            warn!(key, "Lookup of unregistered constant");
            return Err(RegistryError::UnknownKey { key: key.to_owned(), context: None });
        };
        Ok(self.value(parsed))
    }

    /// Typed lookup; every [`ConstantKey`] is registered, so this cannot fail.
    #[must_use]
    pub fn value(&self, key: ConstantKey) -> ConstantValue {
        match key {
            ConstantKey::AppName => ConstantValue::Text(self.config.app_name()),
            ConstantKey::Version => ConstantValue::Text(self.config.version()),
            ConstantKey::CompanyName => ConstantValue::Text(self.config.company_name()),
            ConstantKey::PaginationConstants => {
                ConstantValue::Pagination(self.config.pagination())
            },
            ConstantKey::DebugInfoEnabled => ConstantValue::Flag(self.config.debug_info_enabled()),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        key.parse::<ConstantKey>().is_ok()
    }

    /// Registered entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ConstantKey, ConstantValue)> + '_ {
        ConstantKey::iter().map(|key| (key, self.value(key)))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        ConstantKey::COUNT
    }

    /// JSON object keyed by constant name, in the shape the web front-end reads.
    ///
    /// # Errors
    /// Returns a [`serde_json::Error`] if a value fails to serialize.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let map = self
            .entries()
            .map(|(key, value)| serde_json::to_value(value).map(|v| (key.to_string(), v)))
            .collect::<Result<Map<String, Value>, serde_json::Error>>()?;
        Ok(Value::Object(map))
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_use_upper_case_names() {
        let names: Vec<&'static str> = ConstantKey::iter().map(Into::into).collect();
        assert_eq!(
            names,
            [
                "APP_NAME",
                "VERSION",
                "COMPANY_NAME",
                "PAGINATION_CONSTANTS",
                "DEBUG_INFO_ENABLED"
            ]
        );
    }

    #[test]
    fn key_parsing_is_case_sensitive() {
        assert_eq!("VERSION".parse::<ConstantKey>().ok(), Some(ConstantKey::Version));
        assert!("version".parse::<ConstantKey>().is_err());
        assert!("ENV".parse::<ConstantKey>().is_err());
    }

    #[test]
    fn value_accessors_match_variant() {
        let text = ConstantValue::Text("x");
        assert_eq!(text.as_text(), Some("x"));
        assert_eq!(text.as_flag(), None);
        assert_eq!(ConstantValue::Flag(false).as_flag(), Some(false));
        assert!(ConstantValue::Flag(true).as_pagination().is_none());
    }

    #[test]
    fn values_serialize_untagged() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_value(ConstantValue::Text("x"))?, Value::from("x"));
        assert_eq!(serde_json::to_value(ConstantValue::Flag(true))?, Value::Bool(true));
        assert_eq!(
            serde_json::to_value(ConstantValue::Pagination(PaginationConstants::default()))?,
            serde_json::json!({ "itemsPerPage": 10 })
        );
        Ok(())
    }

    #[test]
    fn context_is_appended_to_message() {
        let registry = ConstantRegistry::new(AppConfig::new());
        let err = registry.get("ENV").context("resolving environment").unwrap_err();
        assert_eq!(err.to_string(), "Unknown constant key 'ENV' (resolving environment)");
    }
}
