//! Gear checklist derivation.
//!
//! The gear list is never stored. It is recomputed from the chosen setup
//! tier and the diamond's power situation every time it is read, so the
//! progress sequences can always be checked against it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::SetupType;
use crate::error::HubError;

const MODEM: &str = "Netgear Nighthawk M7 Ultra 5G Modem";
const MODEM_POWER_MAINS: &str = "USB-C wall charger (Plug into 240v, remove modem battery)";
const MODEM_POWER_BANK: &str =
    "High-Capacity USB-C Power Bank (Remove modem battery to stop overheating)";

const ROUTER: &str = "GL.iNet Slate 7 Router (GL-BE3600)";
const ROUTER_POWER_MAINS: &str = "USB-C Power Adapter for Router (Plug into 240v)";
const ROUTER_POWER_BANK: &str = "Dedicated Power Bank for Router";
const TABLET: &str = "iPad / Tablet (For Video Streaming)";
const PHONE: &str = "Smartphone (Dedicated for sidelineHD / iScore)";

const CABLE_MODEM_TO_HUB: &str = "Short Ethernet Cable (Modem to Slate 7)";
const CABLE_CENTERFIELD: &str = "Long Ethernet Cable (Centerfield Camera to Slate AX)";
const CABLE_CHARGING: &str = "USB-C power / charging leads for all devices";

const CAMERAS_ONE: [&str; 3] = [
    "Home Plate Camera (NearStream VM46)",
    "1x Tripod or Fence Mount",
    "2x High-Capacity Power Banks (e.g. INIU 10000mAh)",
];

const CAMERAS_TWO: [&str; 5] = [
    "Home Plate Camera (NearStream VM46)",
    "Baseline/Dugout Camera (NearStream VM46)",
    "2x Tripods or Fence Mounts",
    "3x High-Capacity Power Banks (e.g. INIU/UGREEN)",
    "External Microphone (For crowd/ump audio)",
];

const CAMERAS_THREE_LOCAL: [&str; 6] = [
    "Home Plate Camera (NearStream VM46)",
    "1st Base Camera (NearStream VM46)",
    "3rd Base Camera (NearStream VM33)",
    "3x Tripods or Fence Mounts",
    "3x Power Banks + Projecta Solar Panel",
    "2x External Microphones",
];

const CAMERAS_THREE_CENTERFIELD: [&str; 6] = [
    "Centerfield Camera (NearStream VM46)",
    "Home Plate Camera (NearStream VM46)",
    "Baseline Camera (NearStream VM33)",
    "3x Tripods or Fence Mounts",
    "3x Power Banks + Projecta Solar Panel",
    "2x External Microphones",
];

const BRIDGE: [&str; 4] = [
    "GL.iNet Slate AX Router (GL-AXT1800)",
    "High-capacity Power Bank (e.g., UGREEN 20000mAh)",
    "Toolpro Protective Carry Box",
    "Router Fence Mount",
];

/// A named sub-list of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearCategory {
    Brain,
    Hub,
    Cameras,
    Cables,
    Bridge,
}

impl GearCategory {
    pub const ALL: [GearCategory; 5] = [
        GearCategory::Brain,
        GearCategory::Hub,
        GearCategory::Cameras,
        GearCategory::Cables,
        GearCategory::Bridge,
    ];

    /// Card order on the gear screen. The bridge sits next to the hub it
    /// extends.
    pub const DISPLAY_ORDER: [GearCategory; 5] = [
        GearCategory::Brain,
        GearCategory::Hub,
        GearCategory::Bridge,
        GearCategory::Cameras,
        GearCategory::Cables,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GearCategory::Brain => "brain",
            GearCategory::Hub => "hub",
            GearCategory::Cameras => "cameras",
            GearCategory::Cables => "cables",
            GearCategory::Bridge => "bridge",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GearCategory::Brain => "The Internet Brain",
            GearCategory::Hub => "The Dugout Command Hub",
            GearCategory::Cameras => "Cameras & Mounts",
            GearCategory::Cables => "Cables",
            GearCategory::Bridge => "The Centerfield Bridge",
        }
    }
}

impl fmt::Display for GearCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GearCategory {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GearCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| HubError::UnknownChecklist(s.to_string()))
    }
}

/// Equipment lists for one `(setup, has_power)` combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GearConfiguration {
    pub brain: Vec<&'static str>,
    pub hub: Vec<&'static str>,
    pub cameras: Vec<&'static str>,
    pub cables: Vec<&'static str>,
    pub bridge: Vec<&'static str>,
}

impl GearConfiguration {
    pub fn items(&self, category: GearCategory) -> &[&'static str] {
        match category {
            GearCategory::Brain => &self.brain,
            GearCategory::Hub => &self.hub,
            GearCategory::Cameras => &self.cameras,
            GearCategory::Cables => &self.cables,
            GearCategory::Bridge => &self.bridge,
        }
    }
}

/// Build the gear checklist for a setup tier.
///
/// With no tier chosen only the brain and hub lists are filled. `has_power`
/// picks between the mains and power-bank variants of the modem and router
/// supplies and has no other effect.
pub fn derive_gear_configuration(setup: Option<SetupType>, has_power: bool) -> GearConfiguration {
    let mut config = GearConfiguration {
        brain: vec![
            MODEM,
            if has_power { MODEM_POWER_MAINS } else { MODEM_POWER_BANK },
        ],
        hub: vec![
            ROUTER,
            if has_power { ROUTER_POWER_MAINS } else { ROUTER_POWER_BANK },
            TABLET,
            PHONE,
        ],
        ..GearConfiguration::default()
    };

    let Some(setup) = setup else {
        return config;
    };

    config.cameras = match setup {
        SetupType::OneCam => CAMERAS_ONE.to_vec(),
        SetupType::TwoCam => CAMERAS_TWO.to_vec(),
        SetupType::ThreeCamLocal => CAMERAS_THREE_LOCAL.to_vec(),
        SetupType::ThreeCamCenterfield => CAMERAS_THREE_CENTERFIELD.to_vec(),
    };

    config.cables.push(CABLE_MODEM_TO_HUB);
    if setup.uses_bridge() {
        config.cables.push(CABLE_CENTERFIELD);
        config.bridge = BRIDGE.to_vec();
    }
    config.cables.push(CABLE_CHARGING);

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_inputs() -> Vec<(Option<SetupType>, bool)> {
        let mut inputs = Vec::new();
        for power in [false, true] {
            inputs.push((None, power));
            for t in SetupType::ALL {
                inputs.push((Some(t), power));
            }
        }
        inputs
    }

    #[test]
    fn brain_and_hub_sizes_are_fixed() {
        for (setup, power) in all_inputs() {
            let c = derive_gear_configuration(setup, power);
            assert_eq!(c.brain.len(), 2);
            assert_eq!(c.hub.len(), 4);
            assert_eq!(c.brain[0], MODEM);
            assert_eq!(c.hub[0], ROUTER);
        }
    }

    #[test]
    fn power_slot_switches_on_has_power() {
        for setup in [None, Some(SetupType::TwoCam)] {
            let mains = derive_gear_configuration(setup, true);
            let bank = derive_gear_configuration(setup, false);
            assert_eq!(mains.brain[1], MODEM_POWER_MAINS);
            assert_eq!(bank.brain[1], MODEM_POWER_BANK);
            assert_eq!(mains.hub[1], ROUTER_POWER_MAINS);
            assert_eq!(bank.hub[1], ROUTER_POWER_BANK);
            assert_eq!(mains.cameras, bank.cameras);
            assert_eq!(mains.cables, bank.cables);
        }
    }

    #[test]
    fn no_setup_leaves_other_lists_empty() {
        let c = derive_gear_configuration(None, true);
        assert!(c.cameras.is_empty());
        assert!(c.cables.is_empty());
        assert!(c.bridge.is_empty());
    }

    #[test]
    fn camera_counts_per_setup() {
        let expected = [
            (SetupType::OneCam, 3),
            (SetupType::TwoCam, 5),
            (SetupType::ThreeCamLocal, 6),
            (SetupType::ThreeCamCenterfield, 6),
        ];
        for (setup, count) in expected {
            let c = derive_gear_configuration(Some(setup), false);
            assert_eq!(c.cameras.len(), count, "{setup}");
        }
    }

    #[test]
    fn bridge_and_long_cable_only_for_centerfield() {
        for (setup, power) in all_inputs() {
            let Some(setup) = setup else { continue };
            let c = derive_gear_configuration(Some(setup), power);
            let cf = setup == SetupType::ThreeCamCenterfield;
            assert_eq!(!c.bridge.is_empty(), cf);
            assert_eq!(c.bridge.len(), if cf { 4 } else { 0 });
            assert_eq!(c.cables.len(), if cf { 3 } else { 2 });
            assert_eq!(c.cables.contains(&CABLE_CENTERFIELD), cf);
            assert!(c.cables.contains(&CABLE_MODEM_TO_HUB));
            assert!(c.cables.contains(&CABLE_CHARGING));
        }
    }

    #[test]
    fn derivation_is_idempotent() {
        for (setup, power) in all_inputs() {
            assert_eq!(
                derive_gear_configuration(setup, power),
                derive_gear_configuration(setup, power)
            );
        }
    }

    #[test]
    fn items_accessor_matches_fields() {
        let c = derive_gear_configuration(Some(SetupType::ThreeCamCenterfield), true);
        for cat in GearCategory::ALL {
            let direct: &[&str] = match cat {
                GearCategory::Brain => &c.brain,
                GearCategory::Hub => &c.hub,
                GearCategory::Cameras => &c.cameras,
                GearCategory::Cables => &c.cables,
                GearCategory::Bridge => &c.bridge,
            };
            assert_eq!(c.items(cat), direct);
        }
    }

    #[test]
    fn category_parses_from_name() {
        assert_eq!("bridge".parse::<GearCategory>(), Ok(GearCategory::Bridge));
        assert!("dugout".parse::<GearCategory>().is_err());
    }
}
