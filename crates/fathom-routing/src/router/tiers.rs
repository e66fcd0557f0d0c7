use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Downstream model tier a prompt is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    /// Expensive, high-capability model
    Strong,
    /// Cheap, fast model
    Weak,
}

impl ModelTier {
    /// Upper-case label, as used in corpora and reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "STRONG",
            Self::Weak => "WEAK",
        }
    }

    /// Whether this is the strong tier.
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::Strong)
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Error returned when parsing an unknown tier name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTierError(String);

impl fmt::Display for ParseTierError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unknown model tier `{}` (expected STRONG or WEAK)",
            self.0
        )
    }
}

impl Error for ParseTierError {}

impl FromStr for ModelTier {
    type Err = ParseTierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("strong") {
            Ok(Self::Strong)
        } else if value.eq_ignore_ascii_case("weak") {
            Ok(Self::Weak)
        } else {
            Err(ParseTierError(value.to_owned()))
        }
    }
}
