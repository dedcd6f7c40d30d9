//! Damage resolver: turns a building configuration and a disaster into a
//! health map and an outcome.
//!
//! Every run starts from an undamaged map. Lightning storms strike from the
//! top through the lightning rod; hurricanes, tsunamis and earthquakes load
//! every non-defense slot, differing only in how damage varies with height.
//! Defense systems mitigate incoming power; outside a lightning storm they
//! never take damage themselves.

use tracing::{debug, trace};

use sismotower_core::building::{BuildingConfig, HealthMap};
use sismotower_core::catalog::Catalog;
use sismotower_core::constants::*;
use sismotower_core::enums::{ComponentId, DisasterId, MaterialTier};
use sismotower_core::report::SimulationReport;

use crate::bonus::structural_bonus;
use crate::outcome;

/// Height-dependent damage multiplier for slot `slot` of `len`.
type Attenuation = fn(slot: usize, len: usize) -> f64;

/// Resolve `disaster` against `config`.
///
/// Several defense systems may be non-Weak at once; only the one matching
/// the disaster reduces its power.
///
/// # Panics
/// If `config` does not have the shape of a building with
/// `config.floor_count()` floors.
pub fn resolve_disaster(
    config: &BuildingConfig,
    disaster: DisasterId,
    catalog: &Catalog,
) -> SimulationReport {
    let floor_count = config.floor_count();
    assert!(
        config.matches_shape(floor_count),
        "building configuration does not match a {floor_count}-floor building"
    );

    let bonus = structural_bonus(config, catalog);
    let effective_power = effective_power(config, disaster, catalog);
    let mut health = HealthMap::full(floor_count);

    match disaster {
        DisasterId::LightningStorm => {
            strike(config, catalog, bonus, effective_power, &mut health);
        }
        DisasterId::Hurricane => {
            load_structure(config, catalog, bonus, effective_power, uniform, &mut health);
        }
        DisasterId::Tsunami => {
            load_structure(config, catalog, bonus, effective_power, tsunami, &mut health);
        }
        DisasterId::Earthquake => {
            load_structure(config, catalog, bonus, effective_power, earthquake, &mut health);
        }
    }

    let average_health = outcome::average_health(&health);
    let report = SimulationReport {
        disaster,
        health,
        average_health,
        integrity_percent: outcome::integrity_percent(average_health),
        outcome: outcome::classify(average_health),
        structural_bonus: bonus,
        effective_power,
    };
    debug!(
        ?disaster,
        bonus,
        effective_power,
        average_health,
        outcome = ?report.outcome,
        "disaster resolved"
    );
    report
}

/// Disaster power left after the matching defense system's resistance.
pub fn effective_power(config: &BuildingConfig, disaster: DisasterId, catalog: &Catalog) -> f64 {
    let defense = disaster.defense();
    let resistance = catalog.resistance(defense, config.tier(defense, 0));
    (catalog.disaster_power(disaster) - resistance).max(0.0)
}

/// Lightning storm. Only an installed rod that cannot absorb the full
/// strike lets damage through: the rod itself, the roof, and the top
/// floors, fading with distance from the roof.
fn strike(
    config: &BuildingConfig,
    catalog: &Catalog,
    bonus: f64,
    effective_power: f64,
    health: &mut HealthMap,
) {
    let power = catalog.disaster_power(DisasterId::LightningStorm);
    let rod_tier = config.tier(ComponentId::LightningRod, 0);
    let rod_resistance = catalog.resistance(ComponentId::LightningRod, rod_tier);
    if rod_tier == MaterialTier::Weak || rod_resistance >= power {
        return;
    }

    health.set(
        ComponentId::LightningRod,
        0,
        remaining((power - rod_resistance) * LIGHTNING_ROD_DAMAGE_FACTOR),
    );
    health.set(
        ComponentId::Roof,
        0,
        remaining(effective_power * LIGHTNING_ROOF_DAMAGE_FACTOR * (1.0 - bonus)),
    );

    let floor_count = health.slots(ComponentId::Beams).len();
    for i in 0..LIGHTNING_FLOORS_REACHED.min(floor_count) {
        let floor = floor_count - 1 - i;
        let multiplier = 1.0 / (i as f64 * LIGHTNING_FLOOR_FALLOFF + 1.0);
        let damage = effective_power * multiplier * (1.0 - bonus);

        for (component, divisor) in [
            (ComponentId::Beams, LIGHTNING_BEAMS_DIVISOR),
            (ComponentId::Walls, LIGHTNING_WALLS_DIVISOR),
            (ComponentId::Glass, LIGHTNING_GLASS_DIVISOR),
            (ComponentId::Pillars, LIGHTNING_PILLARS_DIVISOR),
            (ComponentId::Floor, LIGHTNING_FLOOR_DIVISOR),
        ] {
            health.set(component, floor, remaining(damage / divisor));
        }
        trace!(floor, damage, "lightning reached floor");
    }
}

/// Hurricane, tsunami and earthquake: every non-defense slot takes
/// whatever power its material does not resist, scaled by height and the
/// structural bonus. Defense systems stay at full health.
fn load_structure(
    config: &BuildingConfig,
    catalog: &Catalog,
    bonus: f64,
    effective_power: f64,
    attenuation: Attenuation,
    health: &mut HealthMap,
) {
    for (component, tiers) in config.iter() {
        if component.is_defense() {
            continue;
        }
        let len = tiers.len();
        for (slot, &tier) in tiers.iter().enumerate() {
            let resistance = catalog.resistance(component, tier);
            let damage = (effective_power - resistance).max(0.0)
                * attenuation(slot, len)
                * (1.0 - bonus);
            let left = remaining(damage);
            trace!(?component, slot, damage, left, "slot loaded");
            health.set(component, slot, left);
        }
    }
}

fn uniform(_slot: usize, _len: usize) -> f64 {
    1.0
}

/// Strongest at ground level, fading with height.
fn tsunami(slot: usize, len: usize) -> f64 {
    (TSUNAMI_BASE_MULTIPLIER - slot as f64 / len as f64).max(0.0)
}

/// Mild fade with height; never reaches zero.
fn earthquake(slot: usize, len: usize) -> f64 {
    EARTHQUAKE_BASE_MULTIPLIER - slot as f64 / (len as f64 * 2.0)
}

fn remaining(damage: f64) -> f64 {
    (FULL_HEALTH - damage).max(0.0)
}
