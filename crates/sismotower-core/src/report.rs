//! Simulation report: everything the presentation layer shows after a disaster.

use serde::{Deserialize, Serialize};

use crate::building::HealthMap;
use crate::constants::{DESTROYED_HEALTH, FULL_HEALTH};
use crate::enums::{ComponentId, DisasterId, OutcomeCategory};

/// Result of resolving one disaster against one building configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub disaster: DisasterId,
    /// Health of every slot after the disaster.
    pub health: HealthMap,
    /// Mean of every slot in `health`.
    pub average_health: f64,
    /// `average_health` rounded to the nearest integer.
    pub integrity_percent: u8,
    pub outcome: OutcomeCategory,
    /// Damage reduction earned from load-bearing materials, in [0, 0.30].
    pub structural_bonus: f64,
    /// Disaster power left after the matching defense system.
    pub effective_power: f64,
}

impl SimulationReport {
    /// Human-readable summary, e.g. `"total collapse (integrity: 12%)"`.
    pub fn summary(&self) -> String {
        format!(
            "{} (integrity: {}%)",
            self.outcome.message(),
            self.integrity_percent
        )
    }

    /// Slots that lost any health, in component order then floor order.
    pub fn damaged_slots(&self) -> Vec<(ComponentId, usize)> {
        self.health
            .iter()
            .flat_map(|(component, slots)| {
                slots
                    .iter()
                    .enumerate()
                    .filter(|(_, &health)| health < FULL_HEALTH)
                    .map(move |(slot, _)| (component, slot))
            })
            .collect()
    }

    /// Number of slots at or below the destroyed threshold.
    pub fn destroyed_count(&self) -> usize {
        self.health
            .values()
            .filter(|&&health| health <= DESTROYED_HEALTH)
            .count()
    }
}
