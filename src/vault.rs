//! Emergency vault: account, device and stream details the crew needs at
//! the field. Displayed verbatim; nothing in the wizard reads it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VaultEntry {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VaultSection {
    pub title: &'static str,
    /// Entries are shown in groups separated by a small gap.
    pub groups: &'static [&'static [VaultEntry]],
}

pub static VAULT: &[VaultSection] = &[
    VaultSection {
        title: "Global Accounts",
        groups: &[&[
            VaultEntry {
                label: "Rebels Universal Email",
                value: "fremantlerebels@gmail.com",
            },
            VaultEntry {
                label: "Rebels Universal Password",
                value: "rebels1984",
            },
        ]],
    },
    VaultSection {
        title: "Hardware & IPs",
        groups: &[
            &[
                VaultEntry {
                    label: "Dugout Router (Slate 7) IP",
                    value: DUGOUT_ROUTER_IP,
                },
                VaultEntry {
                    label: "Dugout Router Admin PW",
                    value: "GL-BE3600-cfd",
                },
                VaultEntry {
                    label: "Dugout Wi-Fi PW",
                    value: "JK64ZKJPET",
                },
            ],
            &[
                VaultEntry {
                    label: "Centerfield Router (AX) IP",
                    value: "192.168.8.1",
                },
                VaultEntry {
                    label: "Centerfield Router Admin PW",
                    value: "GL-AXT1800-f41",
                },
                VaultEntry {
                    label: "Centerfield Wi-Fi PW",
                    value: "9NK74DR5JN",
                },
            ],
            &[
                VaultEntry {
                    label: "Netgear M7 IP",
                    value: "192.168.1.1",
                },
                VaultEntry {
                    label: "Netgear M7 Wi-Fi",
                    value: "REBELS M7",
                },
                VaultEntry {
                    label: "Netgear M7 PW",
                    value: "19841984",
                },
            ],
            &[
                VaultEntry {
                    label: "Nearstream VM46 (4k)",
                    value: "192.168.8.143",
                },
                VaultEntry {
                    label: "Nearstream VM46 NEW (4k)",
                    value: "192.168.8.188",
                },
                VaultEntry {
                    label: "Nearstream VM33 (2k)",
                    value: "192.168.8.178",
                },
            ],
        ],
    },
    VaultSection {
        title: "Stream Setup",
        groups: &[&[
            VaultEntry {
                label: "RTMP Stream URL",
                value: "rtmps://e07.sidelinehd.com:443/shd03",
            },
            VaultEntry {
                label: "Stream Key",
                value: "s03-wr0h-ypvz-uewk-4zxq-7ztj",
            },
        ]],
    },
];

/// Slate 7 address, also offered as a copy button on the dugout screen.
pub const DUGOUT_ROUTER_IP: &str = "192.168.8.2";

/// Find an entry by its label.
pub fn find_entry(label: &str) -> Option<&'static VaultEntry> {
    VAULT
        .iter()
        .flat_map(|section| section.groups.iter())
        .flat_map(|group| group.iter())
        .find(|entry| entry.label == label)
}
