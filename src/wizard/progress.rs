//! Per-item completion flags for every checklist in the wizard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HubError;
use crate::gear::{GearCategory, GearConfiguration};
use crate::wizard::steps::{CENTERFIELD_STEPS, DUGOUT_STEPS, SOFTWARE_STEPS};

/// One toggleable sequence: a gear category or a task screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checklist {
    Gear(GearCategory),
    Dugout,
    Centerfield,
    Software,
}

impl Checklist {
    pub fn as_str(self) -> &'static str {
        match self {
            Checklist::Gear(cat) => cat.as_str(),
            Checklist::Dugout => "dugout",
            Checklist::Centerfield => "centerfield",
            Checklist::Software => "software",
        }
    }
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Checklist {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dugout" => Ok(Checklist::Dugout),
            "centerfield" => Ok(Checklist::Centerfield),
            "software" => Ok(Checklist::Software),
            other => other.parse().map(Checklist::Gear),
        }
    }
}

/// Vacuously true for an empty sequence.
pub fn section_complete(items: &[bool]) -> bool {
    items.iter().all(|&done| done)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearProgress {
    pub brain: Vec<bool>,
    pub hub: Vec<bool>,
    pub cameras: Vec<bool>,
    pub cables: Vec<bool>,
    pub bridge: Vec<bool>,
}

impl GearProgress {
    fn get(&self, category: GearCategory) -> &Vec<bool> {
        match category {
            GearCategory::Brain => &self.brain,
            GearCategory::Hub => &self.hub,
            GearCategory::Cameras => &self.cameras,
            GearCategory::Cables => &self.cables,
            GearCategory::Bridge => &self.bridge,
        }
    }

    fn get_mut(&mut self, category: GearCategory) -> &mut Vec<bool> {
        match category {
            GearCategory::Brain => &mut self.brain,
            GearCategory::Hub => &mut self.hub,
            GearCategory::Cameras => &mut self.cameras,
            GearCategory::Cables => &mut self.cables,
            GearCategory::Bridge => &mut self.bridge,
        }
    }
}

/// Completion flags. Every sequence is exactly as long as the list it
/// tracks: gear sequences follow the derived gear configuration, the
/// others follow the fixed step tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    pub gear: GearProgress,
    pub dugout: Vec<bool>,
    pub centerfield: Vec<bool>,
    pub software: Vec<bool>,
}

impl ProgressState {
    /// All-false progress sized for `config`.
    pub fn for_configuration(config: &GearConfiguration) -> Self {
        let zeroed = |cat| vec![false; config.items(cat).len()];
        Self {
            gear: GearProgress {
                brain: zeroed(GearCategory::Brain),
                hub: zeroed(GearCategory::Hub),
                cameras: zeroed(GearCategory::Cameras),
                cables: zeroed(GearCategory::Cables),
                bridge: zeroed(GearCategory::Bridge),
            },
            dugout: vec![false; DUGOUT_STEPS.len()],
            centerfield: vec![false; CENTERFIELD_STEPS.len()],
            software: vec![false; SOFTWARE_STEPS.len()],
        }
    }

    pub fn items(&self, checklist: Checklist) -> &[bool] {
        match checklist {
            Checklist::Gear(cat) => self.gear.get(cat),
            Checklist::Dugout => &self.dugout,
            Checklist::Centerfield => &self.centerfield,
            Checklist::Software => &self.software,
        }
    }

    fn items_mut(&mut self, checklist: Checklist) -> &mut Vec<bool> {
        match checklist {
            Checklist::Gear(cat) => self.gear.get_mut(cat),
            Checklist::Dugout => &mut self.dugout,
            Checklist::Centerfield => &mut self.centerfield,
            Checklist::Software => &mut self.software,
        }
    }

    /// Flip one flag and return its new value. Out-of-range indices are
    /// rejected without touching anything.
    pub fn toggle(&mut self, checklist: Checklist, index: usize) -> Result<bool, HubError> {
        let items = self.items_mut(checklist);
        let len = items.len();
        let slot = items
            .get_mut(index)
            .ok_or_else(|| HubError::IndexOutOfRange {
                checklist: checklist.to_string(),
                index,
                len,
            })?;
        *slot = !*slot;
        Ok(*slot)
    }

    pub fn is_complete(&self, checklist: Checklist) -> bool {
        section_complete(self.items(checklist))
    }

    /// Every gear category done; empty categories count as done.
    pub fn gear_complete(&self) -> bool {
        GearCategory::ALL
            .into_iter()
            .all(|cat| self.is_complete(Checklist::Gear(cat)))
    }

    /// `true` when every sequence matches the list it tracks.
    pub fn matches(&self, config: &GearConfiguration) -> bool {
        GearCategory::ALL
            .into_iter()
            .all(|cat| self.gear.get(cat).len() == config.items(cat).len())
            && self.dugout.len() == DUGOUT_STEPS.len()
            && self.centerfield.len() == CENTERFIELD_STEPS.len()
            && self.software.len() == SOFTWARE_STEPS.len()
    }
}
