//! Commands sent from the presentation layer to a simulation session.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All user actions a session understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    // --- Building ---
    /// Pick a material for one slot of a component.
    SelectMaterial {
        component: ComponentId,
        tier: MaterialTier,
        slot: usize,
    },
    /// Switch the build panel to another floor or the roof.
    SelectLevel { level: LevelSelection },

    // --- Simulation ---
    /// Unleash a disaster on the current design.
    Simulate { disaster: DisasterId },
    /// Back to an all-Weak, undamaged building.
    Reset,

    // --- Audio ---
    ToggleMute,
}
