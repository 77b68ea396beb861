//! Fixed instructional steps for the dugout, centerfield and software
//! screens. The progress sequences for those screens are sized from these
//! tables.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistStep {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const DUGOUT_STEPS: [ChecklistStep; 4] = [
    ChecklistStep {
        title: "Action 1: Battery Removed",
        subtitle: "Netgear M7 battery is out, plugged into external power.",
    },
    ChecklistStep {
        title: "Action 2: Mount the Modem",
        subtitle: "Mount the Netgear M7 high on the dugout fence, ideally under a shade hood.",
    },
    ChecklistStep {
        title: "Action 3: Wire the Brains",
        subtitle: "Plug an Ethernet cable from the Netgear M7 directly into the port labeled '2.5G WAN' on the Slate 7 router.",
    },
    ChecklistStep {
        title: "Action 4: Connect iPad",
        subtitle: "Connect your iPad/Tablet to the Slate 7's 5GHz Wi-Fi network.",
    },
];

pub const CENTERFIELD_STEPS: [ChecklistStep; 4] = [
    ChecklistStep {
        title: "Action 1: Walk it out",
        subtitle: "Walk the GL.iNet Slate AX router, a power bank, and a camera out to centerfield.",
    },
    ChecklistStep {
        title: "Action 2: Wire the VM46",
        subtitle: "Plug the NearStream VM46 directly into the Slate AX 'LAN' port using an Ethernet cable.",
    },
    ChecklistStep {
        title: "Action 3: Placement",
        subtitle: "Mount the router so it has a clear line of sight back to the dugout. Mount it HIGH so spectators walking by don't block the signal.",
    },
    ChecklistStep {
        title: "Action 4: Power Up",
        subtitle: "Plug the Slate AX and the VM46 into the portable power bank and turn them on.",
    },
];

pub const SOFTWARE_STEPS: [ChecklistStep; 2] = [
    ChecklistStep {
        title: "Stream Key Inputted",
        subtitle: "Copied from SidelineHD and pasted into the Nearstream app.",
    },
    ChecklistStep {
        title: "Radar Linked (Optional)",
        subtitle: "Pocket radar connection authorized in sidelineHD.",
    },
];
