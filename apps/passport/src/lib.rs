//! # Passport Server
//!
//! Startup wiring: settings, logging and the constant registry, with [`AppConfig`]
//! passed explicitly to every component that needs it.
//!
//! ## Example
//! ```no_run
//! use passport_server::Application;
//!
//! Application::builder().build().run();
//! ```

use passport_kernel::domain::config::{AppConfig, PageRequest};
use passport_kernel::registry::ConstantRegistry;
use passport_kernel::settings::LoggingSettings;
use passport_logger::{Logger, LoggerError};
use tracing::{debug, info, warn};

/// Installs the global logger from settings, defaulting to `DEBUG` when the
/// configuration enables debug info.
///
/// # Errors
/// Returns [`LoggerError`] if the settings describe an unusable logger or a subscriber
/// is already installed.
pub fn init_logger(settings: &LoggingSettings, config: &AppConfig) -> Result<Logger, LoggerError> {
    let mut builder = Logger::builder(config.app_name())
        .debug_info(config.debug_info_enabled())
        .console(settings.console)
        .json(settings.json)
        .max_files(settings.max_files);

    if let Some(directory) = &settings.directory {
        builder = builder.directory(directory);
    }
    if let Some(filter) = &settings.filter {
        builder = builder.env_filter(filter);
    }

    builder.init()
}

/// A fluent builder for the [`Application`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ApplicationBuilder {
    config: AppConfig,
}

impl ApplicationBuilder {
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the constant registry from the configured [`AppConfig`].
    pub fn build(self) -> Application {
        let registry = ConstantRegistry::new(self.config.clone());
        Application { config: self.config, registry }
    }
}

/// An initialized passport application.
#[derive(Debug)]
pub struct Application {
    config: AppConfig,
    registry: ConstantRegistry,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::default()
    }

    /// Logs the startup banner and, at debug level, every registered constant.
    pub fn run(self) {
        info!(
            app = self.config.app_name(),
            version = self.config.version(),
            company = self.config.company_name(),
            "{}",
            self.banner()
        );

        for (key, value) in self.registry.entries() {
            debug!(key = %key, value = ?value, "Registered constant");
        }
        match self.registry.to_json() {
            Ok(constants) => debug!(constants = %constants, "Front-end constant table"),
            Err(e) => warn!("Failed to render constant table: {e}"),
        }

        let first_page = self.first_page();
        info!(page = first_page.page, size = first_page.size, "Default page request");

        info!("Startup complete");
    }

    /// `<APP_NAME> v<VERSION> (c) <COMPANY_NAME>`.
    #[must_use]
    pub fn banner(&self) -> String {
        format!(
            "{} v{} (c) {}",
            self.config.app_name(),
            self.config.version(),
            self.config.company_name()
        )
    }

    /// First page of a list view under the configured page size.
    #[must_use]
    pub fn first_page(&self) -> PageRequest {
        self.config.pagination().page(0)
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &ConstantRegistry {
        &self.registry
    }
}
