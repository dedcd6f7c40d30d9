//! Events emitted by a session for audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Sound requests for the presentation layer's synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    /// A slot switched to a different material.
    MaterialChanged,
    /// The selected level changed.
    Click,
    /// A simulation was triggered.
    SimulationStarted,
    /// Ambient sound of the disaster itself.
    Disaster { disaster: DisasterId },
    /// One slot lost health during the last simulation.
    PartDamaged { component: ComponentId, slot: usize },
    /// Result jingle once the outcome is known.
    Result { tone: ResultTone },
    Reset,
}
