//! Location / diamond catalog and camera setup tiers.
//!
//! Compiled-in, read-only data. Nothing here is ever mutated at runtime;
//! the wizard only stores ids and resolves them through the lookups below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HubError;

/// Camera configuration tier. The wire names match the form values the
/// setup buttons post (`1cam`, `2cam`, `3cam_nocf`, `3cam_cf`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupType {
    #[serde(rename = "1cam")]
    OneCam,
    #[serde(rename = "2cam")]
    TwoCam,
    #[serde(rename = "3cam_nocf")]
    ThreeCamLocal,
    #[serde(rename = "3cam_cf")]
    ThreeCamCenterfield,
}

impl SetupType {
    /// All tiers, in the order the setup view lists them.
    pub const ALL: [SetupType; 4] = [
        SetupType::OneCam,
        SetupType::TwoCam,
        SetupType::ThreeCamLocal,
        SetupType::ThreeCamCenterfield,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SetupType::OneCam => "1cam",
            SetupType::TwoCam => "2cam",
            SetupType::ThreeCamLocal => "3cam_nocf",
            SetupType::ThreeCamCenterfield => "3cam_cf",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SetupType::OneCam => "1-Camera Basic",
            SetupType::TwoCam => "2-Camera Standard",
            SetupType::ThreeCamLocal => "3-Camera (All Local)",
            SetupType::ThreeCamCenterfield => "3-Camera PRO (Centerfield)",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            SetupType::OneCam => "Home plate view only. Fast, simple, dugout setup.",
            SetupType::TwoCam => "Home plate + 1 baseline camera. Dugout setup.",
            SetupType::ThreeCamLocal => "Home plate + 2 baselines. No centerfield bridge.",
            SetupType::ThreeCamCenterfield => {
                "Full broadcast featuring the VM46 and long-range wireless bridge."
            }
        }
    }

    /// Crew size badge shown on the setup option.
    pub fn crew(self) -> &'static str {
        match self {
            SetupType::OneCam => "2-3 People",
            SetupType::TwoCam => "3-4 People",
            SetupType::ThreeCamLocal => "4+ People",
            SetupType::ThreeCamCenterfield => "5+ People",
        }
    }

    /// Only the centerfield tier runs the long-range wireless bridge.
    pub fn uses_bridge(self) -> bool {
        self == SetupType::ThreeCamCenterfield
    }
}

impl fmt::Display for SetupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetupType {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SetupType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| HubError::UnknownSetupType(s.to_string()))
    }
}

/// A single softball field at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diamond {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    /// 240v mains available at the backnet.
    pub has_power: bool,
    pub recommended_setup: SetupType,
}

/// A venue with one or more diamonds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub diamonds: &'static [Diamond],
}

impl Location {
    pub fn diamond(&self, id: &str) -> Option<&Diamond> {
        lookup_diamond(self, id)
    }
}

pub static LOCATIONS: &[Location] = &[
    Location {
        id: "shirley",
        title: "Shirley Strickland",
        desc: "Rebels Home Ground",
        diamonds: &[
            Diamond {
                id: "d1",
                title: "Diamond 1",
                desc: "Main diamond, home run fence, no 240v power.",
                has_power: false,
                recommended_setup: SetupType::ThreeCamCenterfield,
            },
            Diamond {
                id: "d2",
                title: "Diamond 2",
                desc: "Secondary diamond, home run fence, no 240v power.",
                has_power: false,
                recommended_setup: SetupType::TwoCam,
            },
            Diamond {
                id: "d3",
                title: "Diamond 3",
                desc: "Permanent backnet, no 240v power.",
                has_power: false,
                recommended_setup: SetupType::OneCam,
            },
            Diamond {
                id: "d4",
                title: "Diamond 4",
                desc: "Basic grass diamond, no 240v power.",
                has_power: false,
                recommended_setup: SetupType::OneCam,
            },
        ],
    },
    Location {
        id: "mirrabooka",
        title: "Mirrabooka (Softball WA)",
        desc: "Softball WA Grounds",
        diamonds: &[
            Diamond {
                id: "d1",
                title: "Diamond 1",
                desc: "Main diamond, clay infield, rope netting, 240v power.",
                has_power: true,
                recommended_setup: SetupType::ThreeCamCenterfield,
            },
            Diamond {
                id: "d2",
                title: "Diamond 2",
                desc: "Secondary prime, clay infield, rope netting, 240v power.",
                has_power: true,
                recommended_setup: SetupType::ThreeCamCenterfield,
            },
            Diamond {
                id: "d3",
                title: "Diamond 3",
                desc: "Grass infield, chain link, 240v power (inside).",
                has_power: true,
                recommended_setup: SetupType::TwoCam,
            },
            Diamond {
                id: "d4",
                title: "Diamond 4",
                desc: "Grass infield, chain link, 240v power (inside).",
                has_power: true,
                recommended_setup: SetupType::TwoCam,
            },
        ],
    },
    Location {
        id: "semsa",
        title: "SEMSA",
        desc: "SEMSA Grounds (Womens Summer)",
        diamonds: &[
            Diamond {
                id: "d1",
                title: "Diamond 1",
                desc: "Main diamond, chain link, 240v power (inside).",
                has_power: true,
                recommended_setup: SetupType::TwoCam,
            },
            Diamond {
                id: "other",
                title: "Other Diamonds",
                desc: "Grass, small portable backnet, no 240v power.",
                has_power: false,
                recommended_setup: SetupType::OneCam,
            },
        ],
    },
    Location {
        id: "away",
        title: "Away Game / Other",
        desc: "Assume no power, rely on batteries",
        diamonds: &[Diamond {
            id: "generic",
            title: "Generic Field",
            desc: "Standard away field setup.",
            has_power: false,
            recommended_setup: SetupType::OneCam,
        }],
    },
];

/// Look up a location by id.
pub fn lookup_location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.id == id)
}

/// Look up a diamond by id within a location. Diamond ids are only unique
/// per location (`d1` exists at several venues).
pub fn lookup_diamond<'a>(location: &'a Location, id: &str) -> Option<&'a Diamond> {
    location.diamonds.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_location_has_a_diamond() {
        for loc in LOCATIONS {
            assert!(!loc.diamonds.is_empty(), "{} has no diamonds", loc.id);
        }
    }

    #[test]
    fn location_ids_are_unique() {
        for (i, a) in LOCATIONS.iter().enumerate() {
            for b in &LOCATIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn lookup_known_location_and_diamond() {
        let shirley = lookup_location("shirley").unwrap();
        assert_eq!(shirley.title, "Shirley Strickland");
        let d1 = lookup_diamond(shirley, "d1").unwrap();
        assert!(!d1.has_power);
        assert_eq!(d1.recommended_setup, SetupType::ThreeCamCenterfield);

        let mirrabooka = lookup_location("mirrabooka").unwrap();
        assert!(mirrabooka.diamond("d1").unwrap().has_power);
    }

    #[test]
    fn lookup_misses_are_none() {
        assert!(lookup_location("narnia").is_none());
        let away = lookup_location("away").unwrap();
        assert!(lookup_diamond(away, "d1").is_none());
        assert!(away.diamond("generic").is_some());
    }

    #[test]
    fn setup_type_parses_wire_names() {
        assert_eq!("1cam".parse::<SetupType>(), Ok(SetupType::OneCam));
        assert_eq!("2cam".parse::<SetupType>(), Ok(SetupType::TwoCam));
        assert_eq!("3cam_nocf".parse::<SetupType>(), Ok(SetupType::ThreeCamLocal));
        assert_eq!(
            "3cam_cf".parse::<SetupType>(),
            Ok(SetupType::ThreeCamCenterfield)
        );
        assert_eq!(
            "4cam".parse::<SetupType>(),
            Err(HubError::UnknownSetupType("4cam".to_string()))
        );
    }

    #[test]
    fn setup_type_serde_uses_wire_names() {
        let json = serde_json::to_string(&SetupType::ThreeCamCenterfield).unwrap();
        assert_eq!(json, r#""3cam_cf""#);
        let back: SetupType = serde_json::from_str(r#""3cam_nocf""#).unwrap();
        assert_eq!(back, SetupType::ThreeCamLocal);
    }

    #[test]
    fn only_centerfield_uses_bridge() {
        for t in SetupType::ALL {
            assert_eq!(t.uses_bridge(), t == SetupType::ThreeCamCenterfield);
        }
    }
}
