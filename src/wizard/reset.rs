//! Reset intents. A reset is staged first and only applied once the
//! operator confirms it; at most one intent is pending at a time.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HubError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetKind {
    /// Back to location selection; drops everything.
    Location,
    /// Back to setup selection; keeps location and diamond.
    Plan,
}

impl ResetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResetKind::Location => "location",
            ResetKind::Plan => "plan",
        }
    }

    pub fn prompt_title(self) -> &'static str {
        match self {
            ResetKind::Location => "Change Location?",
            ResetKind::Plan => "Change Game Plan?",
        }
    }

    pub fn prompt_message(self) -> &'static str {
        match self {
            ResetKind::Location => {
                "This will wipe your current checklist and take you back to the very first screen. Are you sure?"
            }
            ResetKind::Plan => {
                "Going back to the setup screen will reset your current checklist. Are you sure you want to proceed?"
            }
        }
    }
}

impl FromStr for ResetKind {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "location" => Ok(ResetKind::Location),
            "plan" => Ok(ResetKind::Plan),
            other => Err(HubError::UnknownResetKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kinds() {
        assert_eq!("plan".parse::<ResetKind>(), Ok(ResetKind::Plan));
        assert_eq!("location".parse::<ResetKind>(), Ok(ResetKind::Location));
        assert!("everything".parse::<ResetKind>().is_err());
    }

    #[test]
    fn prompts_differ_by_kind() {
        assert_ne!(
            ResetKind::Plan.prompt_message(),
            ResetKind::Location.prompt_message()
        );
        assert!(ResetKind::Location.prompt_title().contains("Location"));
    }
}
