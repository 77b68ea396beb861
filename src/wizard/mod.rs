//! Wizard state machine: selection, checklist progress, screen flow and
//! the reset confirmation gate.
//!
//! `state` holds the pure reducer; `session` keeps the one live
//! `WizardState` for the lifetime of the Web Worker.

pub mod progress;
pub mod reset;
pub mod screens;
pub mod session;
pub mod state;
pub mod steps;

pub use progress::{Checklist, ProgressState, section_complete};
pub use reset::ResetKind;
pub use screens::Screen;
pub use state::{Action, Phase, Selection, WizardState};
