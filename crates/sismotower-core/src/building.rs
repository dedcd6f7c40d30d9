//! Per-component, per-slot maps: the building configuration and its health.
//!
//! Both maps share one shape: every `ComponentId` maps to a slot vector whose
//! length is fixed at construction (`ComponentId::slot_count`). Slot 0 is the
//! ground floor. Indexing outside that shape is a caller bug and panics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FLOOR_COUNT, FULL_HEALTH};
use crate::enums::{ComponentId, MaterialTier};

/// Selected material tier for every slot.
pub type BuildingConfig = ComponentMap<MaterialTier>;

/// Health in [0, 100] for every slot.
pub type HealthMap = ComponentMap<f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentMap<T> {
    slots: BTreeMap<ComponentId, Vec<T>>,
}

impl<T: Clone> ComponentMap<T> {
    /// A map for a building of `floor_count` floors with every slot set to `value`.
    pub fn filled(floor_count: usize, value: T) -> Self {
        let slots = ComponentId::ALL
            .iter()
            .map(|&component| (component, vec![value.clone(); component.slot_count(floor_count)]))
            .collect();
        Self { slots }
    }

    /// Overwrite every slot with `value`, keeping the shape.
    pub fn fill(&mut self, value: T) {
        for slots in self.slots.values_mut() {
            slots.iter_mut().for_each(|slot| *slot = value.clone());
        }
    }
}

impl<T> ComponentMap<T> {
    pub fn floor_count(&self) -> usize {
        self.slots(ComponentId::Walls).len()
    }

    pub fn slots(&self, component: ComponentId) -> &[T] {
        self.slots
            .get(&component)
            .unwrap_or_else(|| panic!("component map has no slots for {component:?}"))
    }

    pub fn get(&self, component: ComponentId, slot: usize) -> &T {
        let slots = self.slots(component);
        assert!(
            slot < slots.len(),
            "slot {slot} out of range for {component:?} ({} slots)",
            slots.len()
        );
        &slots[slot]
    }

    /// Replace one slot, returning the previous value.
    pub fn set(&mut self, component: ComponentId, slot: usize, value: T) -> T {
        let slots = self
            .slots
            .get_mut(&component)
            .unwrap_or_else(|| panic!("component map has no slots for {component:?}"));
        assert!(
            slot < slots.len(),
            "slot {slot} out of range for {component:?} ({} slots)",
            slots.len()
        );
        std::mem::replace(&mut slots[slot], value)
    }

    /// Components with their slots, in `ComponentId` order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &[T])> {
        self.slots
            .iter()
            .map(|(&component, slots)| (component, slots.as_slice()))
    }

    /// Every slot value, flattened.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.values().flatten()
    }

    /// Total number of slots across all components.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every component is present with the slot count of a
    /// `floor_count`-floor building.
    pub fn matches_shape(&self, floor_count: usize) -> bool {
        self.slots.len() == ComponentId::ALL.len()
            && ComponentId::ALL.iter().all(|&component| {
                self.slots
                    .get(&component)
                    .is_some_and(|slots| slots.len() == component.slot_count(floor_count))
            })
    }
}

impl BuildingConfig {
    /// All-Weak building of `floor_count` floors.
    pub fn new(floor_count: usize) -> Self {
        Self::filled(floor_count, MaterialTier::Weak)
    }

    pub fn tier(&self, component: ComponentId, slot: usize) -> MaterialTier {
        *self.get(component, slot)
    }
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FLOOR_COUNT)
    }
}

impl HealthMap {
    /// Undamaged building of `floor_count` floors.
    pub fn full(floor_count: usize) -> Self {
        Self::filled(floor_count, FULL_HEALTH)
    }

    pub fn health(&self, component: ComponentId, slot: usize) -> f64 {
        *self.get(component, slot)
    }
}
