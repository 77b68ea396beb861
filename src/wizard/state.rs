//! Wizard state and its reducer.
//!
//! `WizardState` is a plain value. Every user action goes through
//! [`WizardState::reduce`], which returns the next state or the reason the
//! action was rejected. The reducer never mutates its input, so a rejected
//! action leaves the caller holding the exact previous state.

use serde::{Deserialize, Serialize};

use crate::catalog::{Diamond, Location, SetupType, lookup_diamond, lookup_location};
use crate::error::HubError;
use crate::gear::{GearConfiguration, derive_gear_configuration};
use crate::wizard::progress::{Checklist, ProgressState};
use crate::wizard::reset::ResetKind;
use crate::wizard::screens::{self, Screen};

/// What the operator has picked so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub location_id: Option<String>,
    pub diamond_id: Option<String>,
    pub setup_type: Option<SetupType>,
    pub screen_index: usize,
}

/// Complete session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub selection: Selection,
    /// Present only once a setup type has been chosen.
    pub progress: Option<ProgressState>,
    pub pending_reset: Option<ResetKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectLocation(String),
    SelectDiamond(String),
    SelectSetupType(SetupType),
    /// "Change Location" from the diamond list.
    ClearLocation,
    /// "Change Diamond" from the setup list.
    ClearDiamond,
    Advance,
    Retreat,
    Toggle { checklist: Checklist, index: usize },
    RequestReset(ResetKind),
    ConfirmReset,
    CancelReset,
}

/// Top-level view the state calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "screen", rename_all = "snake_case")]
pub enum Phase {
    ChooseLocation,
    ChooseDiamond,
    ChooseSetup,
    Checklist(Screen),
}

impl WizardState {
    pub fn location(&self) -> Option<&'static Location> {
        self.selection.location_id.as_deref().and_then(lookup_location)
    }

    pub fn diamond(&self) -> Option<&'static Diamond> {
        let location = self.location()?;
        let id = self.selection.diamond_id.as_deref()?;
        lookup_diamond(location, id)
    }

    /// Without a diamond the rig is assumed to run on batteries.
    pub fn has_power(&self) -> bool {
        self.diamond().is_some_and(|d| d.has_power)
    }

    pub fn gear_configuration(&self) -> GearConfiguration {
        derive_gear_configuration(self.selection.setup_type, self.has_power())
    }

    pub fn screens(&self) -> Vec<Screen> {
        screens::active_screens(self.selection.setup_type)
    }

    pub fn current_screen(&self) -> Screen {
        screens::screen_at(self.selection.setup_type, self.selection.screen_index)
    }

    pub fn phase(&self) -> Phase {
        if self.location().is_none() {
            Phase::ChooseLocation
        } else if self.diamond().is_none() {
            Phase::ChooseDiamond
        } else if self.selection.setup_type.is_none() {
            Phase::ChooseSetup
        } else {
            Phase::Checklist(self.current_screen())
        }
    }

    /// Completion of one checklist. `false` when nothing is in progress.
    pub fn is_complete(&self, checklist: Checklist) -> bool {
        self.progress
            .as_ref()
            .is_some_and(|p| p.is_complete(checklist))
    }

    pub fn gear_complete(&self) -> bool {
        self.progress.as_ref().is_some_and(ProgressState::gear_complete)
    }

    /// Whether the "Next" control on the current screen should be enabled.
    /// `reduce(Advance)` does not consult this.
    pub fn can_advance(&self) -> bool {
        match self.current_screen() {
            Screen::Gear => self.gear_complete(),
            Screen::Dugout => self.is_complete(Checklist::Dugout),
            Screen::Centerfield => self.is_complete(Checklist::Centerfield),
            Screen::Software => self.is_complete(Checklist::Software),
            Screen::Troubleshooting => false,
        }
    }

    /// Drop the setup tier and its checklist; keep location and diamond.
    pub fn reset_plan(&self) -> WizardState {
        WizardState {
            selection: Selection {
                setup_type: None,
                screen_index: 0,
                ..self.selection.clone()
            },
            progress: None,
            pending_reset: None,
        }
    }

    /// Back to a fresh session.
    pub fn reset_location(&self) -> WizardState {
        WizardState::default()
    }

    /// Compute the state after `action`.
    pub fn reduce(&self, action: &Action) -> Result<WizardState, HubError> {
        let mut next = self.clone();
        match action {
            Action::SelectLocation(id) => {
                let location =
                    lookup_location(id).ok_or_else(|| HubError::UnknownLocation(id.clone()))?;
                next.selection.location_id = Some(location.id.to_string());
                next.selection.diamond_id = None;
                next.selection.setup_type = None;
                next.progress = None;
            }
            Action::SelectDiamond(id) => {
                let location = self.location().ok_or(HubError::NoLocationSelected)?;
                let diamond =
                    lookup_diamond(location, id).ok_or_else(|| HubError::UnknownDiamond {
                        location: location.id.to_string(),
                        diamond: id.clone(),
                    })?;
                next.selection.diamond_id = Some(diamond.id.to_string());
                next.selection.setup_type = None;
                next.progress = None;
            }
            Action::SelectSetupType(setup) => {
                let diamond = self.diamond().ok_or(HubError::NoDiamondSelected)?;
                let config = derive_gear_configuration(Some(*setup), diamond.has_power);
                next.selection.setup_type = Some(*setup);
                next.selection.screen_index = 0;
                next.progress = Some(ProgressState::for_configuration(&config));
            }
            Action::ClearLocation => {
                next.selection.location_id = None;
                next.selection.diamond_id = None;
                next.selection.setup_type = None;
                next.selection.screen_index = 0;
                next.progress = None;
            }
            Action::ClearDiamond => {
                next.selection.diamond_id = None;
                next.selection.setup_type = None;
                next.selection.screen_index = 0;
                next.progress = None;
            }
            Action::Advance => {
                let last = screens::last_index(self.selection.setup_type);
                next.selection.screen_index = (self.selection.screen_index + 1).min(last);
            }
            Action::Retreat => {
                next.selection.screen_index = self.selection.screen_index.saturating_sub(1);
            }
            Action::Toggle { checklist, index } => {
                let progress = next.progress.as_mut().ok_or(HubError::NoProgress)?;
                progress.toggle(*checklist, *index)?;
            }
            Action::RequestReset(kind) => {
                next.pending_reset = Some(*kind);
            }
            Action::ConfirmReset => {
                next = match self.pending_reset.ok_or(HubError::NoPendingReset)? {
                    ResetKind::Plan => self.reset_plan(),
                    ResetKind::Location => self.reset_location(),
                };
            }
            Action::CancelReset => {
                next.pending_reset = None;
            }
        }
        Ok(next)
    }
}
