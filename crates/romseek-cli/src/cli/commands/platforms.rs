//! `romseek platforms` – list known platforms.

use anyhow::Result;
use romseek_core::config::RomseekConfig;
use romseek_core::Platform;

pub fn run_platforms(cfg: &RomseekConfig) -> Result<()> {
    println!("  {:<5}  {:<18}  {}", "Key", "Platform", "Listing");
    println!("  {}  {}  {}", "-----", "------------------", "-------");
    for platform in Platform::ALL {
        let listing = match cfg.repository_root.as_deref() {
            Some(root) => platform.listing_url(root)?,
            None => platform.listing_path().to_string(),
        };
        let marker = if cfg.default_platform == Some(platform) {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<5}  {:<18}  {listing}{marker}",
            platform.key(),
            platform.display_name()
        );
    }
    if cfg.repository_root.is_none() {
        println!("Set repository_root in the config file to see full listing URLs.");
    }
    Ok(())
}
