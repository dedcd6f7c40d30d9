//! Core types and reference data for the SISMOTOWER simulator.
//!
//! This crate defines the vocabulary shared by the simulation crate and any
//! presentation layer: building components, material tiers, disasters, the
//! static material catalog, per-slot component maps, simulation reports,
//! session commands, and audio cues. It has no dependency on any UI or
//! runtime framework.

pub mod building;
pub mod catalog;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod report;

pub use building::{BuildingConfig, ComponentMap, HealthMap};
pub use catalog::{Catalog, CatalogError, DisasterSpec, Material};
pub use enums::{ComponentId, DisasterId, MaterialTier};

#[cfg(test)]
mod tests;
