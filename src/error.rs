use thiserror::Error;

/// Error type for request parsing and rejected wizard actions.
///
/// None of these are fatal. The session store logs them and keeps the
/// previous state; route handlers render them as a short notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HubError {
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("unknown diamond {diamond} at {location}")]
    UnknownDiamond { location: String, diamond: String },

    #[error("unknown setup type: {0}")]
    UnknownSetupType(String),

    #[error("unknown checklist: {0}")]
    UnknownChecklist(String),

    #[error("unknown reset kind: {0}")]
    UnknownResetKind(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("missing {0} parameter")]
    MissingParam(&'static str),

    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[error("no location selected")]
    NoLocationSelected,

    #[error("no diamond selected")]
    NoDiamondSelected,

    #[error("no checklist in progress")]
    NoProgress,

    #[error("index {index} out of range for {checklist} ({len} items)")]
    IndexOutOfRange {
        checklist: String,
        index: usize,
        len: usize,
    },

    #[error("no reset pending")]
    NoPendingReset,
}
