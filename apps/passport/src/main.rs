use anyhow::Context;
use passport_kernel::domain::config::AppConfig;
use passport_kernel::settings::{Settings, load_settings};
use passport_server::{Application, init_logger};

fn main() -> anyhow::Result<()> {
    let settings: Settings =
        load_settings(None::<&str>).context("Critical: Settings are malformed")?;

    let config = AppConfig::new();
    let _log = init_logger(&settings.logging, &config)?;

    Application::builder().config(config).build().run();

    Ok(())
}
