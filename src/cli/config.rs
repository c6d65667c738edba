use crate::config::{self, Settings, DEFAULT_CONFIG};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize italicize.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Settings::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to pick a slant preset and compensation",
        config_path.display()
    );
    println!("2. Run 'italicize gen --input <font.json>' to build an italic master");

    Ok(())
}
