//! Platforms with a known listing path under the repository root.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "gba")]
    GameBoyAdvance,
    #[serde(rename = "n64")]
    Nintendo64,
    #[serde(rename = "psx")]
    PlayStation,
}

impl Platform {
    pub const ALL: [Platform; 3] = [
        Platform::GameBoyAdvance,
        Platform::Nintendo64,
        Platform::PlayStation,
    ];

    /// Short key used on the command line and in config.
    pub fn key(self) -> &'static str {
        match self {
            Platform::GameBoyAdvance => "gba",
            Platform::Nintendo64 => "n64",
            Platform::PlayStation => "psx",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::GameBoyAdvance => "Game Boy Advance",
            Platform::Nintendo64 => "Nintendo 64",
            Platform::PlayStation => "PlayStation",
        }
    }

    /// Listing directory relative to the repository root (already escaped).
    pub fn listing_path(self) -> &'static str {
        match self {
            Platform::GameBoyAdvance => "No-Intro/Nintendo%20-%20Game%20Boy%20Advance/",
            Platform::Nintendo64 => "No-Intro/Nintendo%20-%20Nintendo%2064%20(BigEndian)/",
            Platform::PlayStation => "Redump/Sony%20-%20PlayStation/",
        }
    }

    /// Absolute listing URL under `repository_root`.
    ///
    /// A root without a trailing `/` is treated as a directory.
    pub fn listing_url(self, repository_root: &str) -> Result<String> {
        let mut root = repository_root.trim().to_string();
        if !root.ends_with('/') {
            root.push('/');
        }
        let base = Url::parse(&root)
            .with_context(|| format!("invalid repository root: {repository_root}"))?;
        let url = base
            .join(self.listing_path())
            .with_context(|| format!("cannot join {} onto {root}", self.listing_path()))?;
        Ok(url.to_string())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| {
                p.key().eq_ignore_ascii_case(wanted) || p.display_name().eq_ignore_ascii_case(wanted)
            })
            .with_context(|| {
                let keys: Vec<_> = Platform::ALL.iter().map(|p| p.key()).collect();
                format!("unknown platform {wanted:?} (expected one of: {})", keys.join(", "))
            })
    }
}
