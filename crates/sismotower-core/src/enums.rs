//! Enumeration types used throughout the simulator.

use serde::{Deserialize, Serialize};

/// A structural or defensive part of the building.
///
/// Structural components other than `Roof` hold one slot per floor. `Roof`
/// and the four defense systems hold exactly one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentId {
    Roof,
    Walls,
    Pillars,
    Beams,
    Floor,
    Glass,
    /// Lightning protection system (SPDA).
    LightningRod,
    WindDampers,
    TsunamiBarriers,
    SeismicDampers,
}

impl ComponentId {
    /// Every component, in catalog order.
    pub const ALL: [ComponentId; 10] = [
        ComponentId::Roof,
        ComponentId::Walls,
        ComponentId::Pillars,
        ComponentId::Beams,
        ComponentId::Floor,
        ComponentId::Glass,
        ComponentId::LightningRod,
        ComponentId::WindDampers,
        ComponentId::TsunamiBarriers,
        ComponentId::SeismicDampers,
    ];

    /// Components that repeat on every floor.
    pub const PER_FLOOR: [ComponentId; 5] = [
        ComponentId::Pillars,
        ComponentId::Beams,
        ComponentId::Walls,
        ComponentId::Glass,
        ComponentId::Floor,
    ];

    /// Single-slot defense systems. At most one is expected to be non-Weak.
    pub const DEFENSES: [ComponentId; 4] = [
        ComponentId::LightningRod,
        ComponentId::WindDampers,
        ComponentId::TsunamiBarriers,
        ComponentId::SeismicDampers,
    ];

    /// Components whose material quality feeds the structural bonus.
    pub const LOAD_BEARING: [ComponentId; 3] =
        [ComponentId::Pillars, ComponentId::Beams, ComponentId::Floor];

    pub fn is_defense(self) -> bool {
        Self::DEFENSES.contains(&self)
    }

    /// Number of slots this component has in a building of `floor_count` floors.
    pub fn slot_count(self, floor_count: usize) -> usize {
        if Self::PER_FLOOR.contains(&self) {
            floor_count
        } else {
            1
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentId::Roof => "roof",
            ComponentId::Walls => "walls",
            ComponentId::Pillars => "pillars",
            ComponentId::Beams => "beams",
            ComponentId::Floor => "floor",
            ComponentId::Glass => "glass",
            ComponentId::LightningRod => "lightningRod",
            ComponentId::WindDampers => "windDampers",
            ComponentId::TsunamiBarriers => "tsunamiBarriers",
            ComponentId::SeismicDampers => "seismicDampers",
        }
    }
}

/// Material quality tier selectable for every component.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MaterialTier {
    /// Cheapest option. For defense systems this means "no protection".
    #[default]
    Weak,
    Medium,
    Strong,
}

impl MaterialTier {
    pub const ALL: [MaterialTier; 3] = [MaterialTier::Weak, MaterialTier::Medium, MaterialTier::Strong];
}

/// Disaster that can be unleashed on the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisasterId {
    LightningStorm,
    Hurricane,
    Tsunami,
    Earthquake,
}

impl DisasterId {
    pub const ALL: [DisasterId; 4] = [
        DisasterId::LightningStorm,
        DisasterId::Hurricane,
        DisasterId::Tsunami,
        DisasterId::Earthquake,
    ];

    /// The defense system that mitigates this disaster.
    pub fn defense(self) -> ComponentId {
        match self {
            DisasterId::LightningStorm => ComponentId::LightningRod,
            DisasterId::Hurricane => ComponentId::WindDampers,
            DisasterId::Tsunami => ComponentId::TsunamiBarriers,
            DisasterId::Earthquake => ComponentId::SeismicDampers,
        }
    }
}

/// Severity band of a finished simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutcomeCategory {
    /// Average health above 75.
    Minimal,
    /// Average health above 50.
    Significant,
    /// Average health above 20.
    Severe,
    Collapse,
}

impl OutcomeCategory {
    pub fn message(self) -> &'static str {
        match self {
            OutcomeCategory::Minimal => "resisted bravely, minimal damage",
            OutcomeCategory::Significant => "significant damage, still standing",
            OutcomeCategory::Severe => "severely compromised, risk of collapse",
            OutcomeCategory::Collapse => "total collapse",
        }
    }
}

/// Colour band of the overall integrity bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    Healthy,
    Warning,
    Critical,
}

/// Visual state of a single building part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartCondition {
    Intact,
    /// Took some damage; shaded.
    Scuffed,
    /// Below 70; outlined cracks.
    Cracked,
    /// Below 50; darkened.
    Darkened,
    /// At or below the destroyed threshold.
    Destroyed,
}

/// Which result jingle the presentation layer should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultTone {
    Triumph,
    Somber,
    Alarm,
}

/// Floor currently selected in the build panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LevelSelection {
    Floor(usize),
    Roof,
}

impl Default for LevelSelection {
    fn default() -> Self {
        LevelSelection::Floor(0)
    }
}

/// Top-level phase of a build/simulate/reset cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Materials may be changed.
    #[default]
    Building,
    /// A result is on display; the design is frozen until reset.
    Resolved,
}
