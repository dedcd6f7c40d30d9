//! Structural bonus: damage reduction earned from load-bearing materials.

use sismotower_core::building::BuildingConfig;
use sismotower_core::catalog::Catalog;
use sismotower_core::constants::MAX_STRUCTURAL_BONUS;
use sismotower_core::enums::ComponentId;

/// Bonus in [0, `MAX_STRUCTURAL_BONUS`] from the mean resistance of every
/// Pillars, Beams and Floor slot.
pub fn structural_bonus(config: &BuildingConfig, catalog: &Catalog) -> f64 {
    let (total, count) = ComponentId::LOAD_BEARING
        .iter()
        .flat_map(|&component| {
            config
                .slots(component)
                .iter()
                .map(move |&tier| catalog.resistance(component, tier))
        })
        .fold((0.0_f64, 0_usize), |(total, count), resistance| {
            (total + resistance, count + 1)
        });

    if count == 0 {
        return 0.0;
    }
    bonus_for_average(total / count as f64, catalog)
}

/// Linear ramp between the all-Weak and all-Strong load-bearing averages.
pub fn bonus_for_average(average_resistance: f64, catalog: &Catalog) -> f64 {
    let min = catalog.min_structural_resistance();
    let max = catalog.max_structural_resistance();

    if average_resistance <= min {
        return 0.0;
    }
    if average_resistance >= max {
        return MAX_STRUCTURAL_BONUS;
    }
    (average_resistance - min) / (max - min) * MAX_STRUCTURAL_BONUS
}
