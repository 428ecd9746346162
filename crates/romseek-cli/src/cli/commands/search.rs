//! `romseek search [query] --listing <file>` – search a saved listing page.

use anyhow::{bail, Context, Result};
use romseek_core::config::RomseekConfig;
use romseek_core::listing::load_listing;
use romseek_core::{Platform, ResultDescriptor};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SearchArgs {
    pub query: String,
    pub listing: PathBuf,
    pub base_url: Option<String>,
    pub platform: Option<Platform>,
    pub limit: Option<usize>,
    pub json: bool,
}

/// Base URL for result links: explicit `--base-url`, else the platform
/// (or configured default platform) under the configured repository root.
pub(crate) fn resolve_base_url(
    cfg: &RomseekConfig,
    base_url: Option<&str>,
    platform: Option<Platform>,
) -> Result<String> {
    if let Some(url) = base_url {
        return Ok(url.to_string());
    }
    let Some(platform) = platform.or(cfg.default_platform) else {
        bail!("no base URL: pass --base-url or --platform (or set default_platform in config)");
    };
    let Some(root) = cfg.repository_root.as_deref() else {
        bail!(
            "platform {} needs repository_root in the config file",
            platform.key()
        );
    };
    platform.listing_url(root)
}

pub(crate) fn format_results(results: &[ResultDescriptor]) -> String {
    if results.is_empty() {
        return "No results.\n".to_string();
    }
    let mut out = String::new();
    for (i, r) in results.iter().enumerate() {
        out.push_str(&format!("{:>2}. {}\n", i + 1, r.title));
        out.push_str(&format!("    {}\n", r.description.trim_end()));
        out.push_str(&format!("    {}\n", r.document_url));
    }
    out
}

pub fn run_search(cfg: &RomseekConfig, args: SearchArgs) -> Result<()> {
    let base_url = resolve_base_url(cfg, args.base_url.as_deref(), args.platform)?;
    let cap = args.limit.unwrap_or(cfg.max_results);

    let snapshot = load_listing(&args.listing, &base_url)?.with_gate(cfg.size_gate());
    let results = snapshot
        .search(&args.query, cap)
        .context("could not parse results")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", format_results(&results));
    }
    Ok(())
}
