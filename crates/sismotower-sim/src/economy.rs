//! Building cost bookkeeping.

use sismotower_core::building::BuildingConfig;
use sismotower_core::catalog::Catalog;
use sismotower_core::enums::{ComponentId, MaterialTier};

/// Sum of the selected material's cost over every slot.
pub fn total_cost(config: &BuildingConfig, catalog: &Catalog) -> f64 {
    config
        .iter()
        .flat_map(|(component, slots)| {
            slots
                .iter()
                .map(move |&tier| catalog.cost(component, tier))
        })
        .sum()
}

/// Change in total cost when one slot of `component` moves from `old` to `new`.
pub fn cost_delta(
    catalog: &Catalog,
    component: ComponentId,
    old: MaterialTier,
    new: MaterialTier,
) -> f64 {
    catalog.cost(component, new) - catalog.cost(component, old)
}
