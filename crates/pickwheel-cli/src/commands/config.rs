use anyhow::Result;
use tracing::info;

use pickwheel_core::AppConfig;

/// Print the effective configuration as TOML
pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration, leaving an existing file alone
pub fn init() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }

    AppConfig::default().save()?;
    info!(path = %path.display(), "Default config written");
    println!("Wrote default config to {}", path.display());
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
