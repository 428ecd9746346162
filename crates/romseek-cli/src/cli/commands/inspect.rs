//! `romseek inspect <name>` – show how a display name and size are read.

use anyhow::{Context, Result};
use romseek_core::config::RomseekConfig;
use romseek_core::{parse_display_name, SizeDescriptor};

pub fn run_inspect(cfg: &RomseekConfig, name: &str, size: Option<&str>) -> Result<()> {
    let meta = parse_display_name(name).context("could not parse display name")?;
    println!("title:     {}", meta.title);
    println!("regions:   {}", meta.regions);
    println!("languages: {}", meta.languages);

    if let Some(size) = size {
        let parsed = SizeDescriptor::parse(size).context("could not parse size")?;
        let verdict = if cfg.size_gate().admit_descriptor(&parsed) {
            "admitted"
        } else {
            "rejected"
        };
        println!(
            "size:      {} {} ({verdict}, limit {} MiB)",
            parsed.magnitude, parsed.unit, cfg.max_mib
        );
    }
    Ok(())
}
