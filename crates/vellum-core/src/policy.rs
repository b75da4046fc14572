//! Handling policies for markup outside the recognized vocabulary.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What happens to the recognized descendants of an unsupported tag.
///
/// The unsupported tag itself is always skipped. The policy only decides the
/// fate of recognized elements nested inside it. The names match external
/// configuration strings (snake_case).
///
/// # Variants
///
/// - `Drop` - The whole subtree is treated as opaque and discarded (default)
/// - `Hoist` - Recognized descendants attach to the nearest recognized ancestor
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedTagPolicy {
    /// Discard the unsupported element together with everything inside it
    #[default]
    Drop,
    /// Skip only the unsupported element and keep its recognized descendants
    Hoist,
}

impl FromStr for UnsupportedTagPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(Self::Drop),
            "hoist" => Ok(Self::Hoist),
            _ => Err("Unsupported tag policy"),
        }
    }
}

impl From<UnsupportedTagPolicy> for &'static str {
    fn from(val: UnsupportedTagPolicy) -> Self {
        match val {
            UnsupportedTagPolicy::Drop => "drop",
            UnsupportedTagPolicy::Hoist => "hoist",
        }
    }
}

impl fmt::Display for UnsupportedTagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
