use anyhow::Result;
use owo_colors::OwoColorize;
use yearplan_core::config::GlobalConfig;

pub fn run() -> Result<()> {
    let config_path = GlobalConfig::config_path().map_err(|e| anyhow::anyhow!(e))?;
    let config = GlobalConfig::load().map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", config.data_file().display());

    Ok(())
}
