//! Size strings (`"4.1 MiB"`) and the size-based exclusion policy.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MalformedEntry;

/// Default upper bound for entries listed in MiB.
pub const DEFAULT_MAX_MIB: f64 = 20.0;

/// Unit token of a listing size column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    KiB,
    MiB,
    GiB,
    TiB,
    /// Any other token, kept verbatim.
    Other(String),
}

impl SizeUnit {
    pub fn from_token(token: &str) -> Self {
        match token {
            "B" => SizeUnit::Bytes,
            "KiB" => SizeUnit::KiB,
            "MiB" => SizeUnit::MiB,
            "GiB" => SizeUnit::GiB,
            "TiB" => SizeUnit::TiB,
            other => SizeUnit::Other(other.to_string()),
        }
    }
}

impl FromStr for SizeUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeUnit::Bytes => f.write_str("B"),
            SizeUnit::KiB => f.write_str("KiB"),
            SizeUnit::MiB => f.write_str("MiB"),
            SizeUnit::GiB => f.write_str("GiB"),
            SizeUnit::TiB => f.write_str("TiB"),
            SizeUnit::Other(s) => f.write_str(s),
        }
    }
}

/// Parsed `<number> <unit>` size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeDescriptor {
    pub magnitude: f64,
    pub unit: SizeUnit,
}

impl SizeDescriptor {
    /// Parses a size column value such as `"900 KiB"`.
    ///
    /// Tokens after the unit are ignored.
    pub fn parse(size: &str) -> Result<Self, MalformedEntry> {
        let mut parts = size.split_whitespace();
        let (magnitude, unit) = match (parts.next(), parts.next()) {
            (Some(magnitude), Some(unit)) => (magnitude, unit),
            _ => {
                return Err(MalformedEntry::MissingSizeUnit {
                    size: size.to_string(),
                })
            }
        };
        let magnitude = magnitude
            .parse::<f64>()
            .map_err(|_| MalformedEntry::InvalidMagnitude {
                size: size.to_string(),
            })?;
        Ok(Self {
            magnitude,
            unit: SizeUnit::from_token(unit),
        })
    }
}

/// Size-based admission policy.
///
/// Rejects anything listed in GiB and anything listed in MiB above `max_mib`.
/// Every other unit is admitted regardless of magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeGate {
    pub max_mib: f64,
}

impl Default for SizeGate {
    fn default() -> Self {
        Self {
            max_mib: DEFAULT_MAX_MIB,
        }
    }
}

impl SizeGate {
    pub fn new(max_mib: f64) -> Self {
        Self { max_mib }
    }

    pub fn admit_descriptor(&self, size: &SizeDescriptor) -> bool {
        match size.unit {
            SizeUnit::GiB => false,
            // Only a magnitude strictly above the limit rejects; NaN compares as neither.
            SizeUnit::MiB => size.magnitude.partial_cmp(&self.max_mib) != Some(Ordering::Greater),
            _ => true,
        }
    }

    /// Parses `size` and applies the policy.
    pub fn admit(&self, size: &str) -> Result<bool, MalformedEntry> {
        SizeDescriptor::parse(size).map(|d| self.admit_descriptor(&d))
    }
}

/// [`SizeGate::admit`] with the default 20 MiB limit.
pub fn admit(size: &str) -> Result<bool, MalformedEntry> {
    SizeGate::default().admit(size)
}
