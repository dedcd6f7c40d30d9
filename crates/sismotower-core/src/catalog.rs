//! Static reference data: materials per component and tier, disaster power.
//!
//! The builtin catalog is built once per process and never mutated. A
//! custom catalog can be loaded from JSON; it is validated before use so
//! lookups on a `Catalog` never miss.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::enums::{ComponentId, DisasterId, MaterialTier};

/// A selectable material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name, presentation only.
    pub name: String,
    /// Power absorbed before the part takes damage.
    pub resistance: f64,
    pub cost: f64,
}

/// The three material options for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub label: String,
    pub weak: Material,
    pub medium: Material,
    pub strong: Material,
}

impl ComponentSpec {
    pub fn material(&self, tier: MaterialTier) -> &Material {
        match tier {
            MaterialTier::Weak => &self.weak,
            MaterialTier::Medium => &self.medium,
            MaterialTier::Strong => &self.strong,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterSpec {
    pub label: String,
    pub power: f64,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no entry for component {0:?}")]
    MissingComponent(ComponentId),
    #[error("catalog has no entry for disaster {0:?}")]
    MissingDisaster(DisasterId),
    #[error("duplicate {table} entry {key}")]
    DuplicateEntry { table: &'static str, key: String },
    #[error("{component:?}/{tier:?} has negative or non-finite {field}: {value}")]
    NegativeValue {
        component: ComponentId,
        tier: MaterialTier,
        field: &'static str,
        value: f64,
    },
    #[error("disaster {disaster:?} has negative or non-finite power: {power}")]
    NegativePower { disaster: DisasterId, power: f64 },
    #[error(
        "load-bearing resistance range is empty (weak average {min}, strong average {max})"
    )]
    DegenerateStructuralRange { min: f64, max: f64 },
}

/// Material and disaster tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    components: BTreeMap<ComponentId, ComponentSpec>,
    disasters: BTreeMap<DisasterId, DisasterSpec>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The process-wide reference catalog.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(Catalog::reference)
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Catalog::try_from(raw)
    }

    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn component(&self, component: ComponentId) -> &ComponentSpec {
        self.components
            .get(&component)
            .unwrap_or_else(|| panic!("catalog has no entry for {component:?}"))
    }

    pub fn material(&self, component: ComponentId, tier: MaterialTier) -> &Material {
        self.component(component).material(tier)
    }

    pub fn resistance(&self, component: ComponentId, tier: MaterialTier) -> f64 {
        self.material(component, tier).resistance
    }

    pub fn cost(&self, component: ComponentId, tier: MaterialTier) -> f64 {
        self.material(component, tier).cost
    }

    pub fn disaster(&self, disaster: DisasterId) -> &DisasterSpec {
        self.disasters
            .get(&disaster)
            .unwrap_or_else(|| panic!("catalog has no entry for {disaster:?}"))
    }

    pub fn disaster_power(&self, disaster: DisasterId) -> f64 {
        self.disaster(disaster).power
    }

    /// Mean resistance of the load-bearing components at a single tier.
    pub fn load_bearing_average(&self, tier: MaterialTier) -> f64 {
        let total: f64 = ComponentId::LOAD_BEARING
            .iter()
            .map(|&component| self.resistance(component, tier))
            .sum();
        total / ComponentId::LOAD_BEARING.len() as f64
    }

    /// Load-bearing average at which the structural bonus starts.
    pub fn min_structural_resistance(&self) -> f64 {
        self.load_bearing_average(MaterialTier::Weak)
    }

    /// Load-bearing average at which the structural bonus is maxed out.
    pub fn max_structural_resistance(&self) -> f64 {
        self.load_bearing_average(MaterialTier::Strong)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for component in ComponentId::ALL {
            let spec = self
                .components
                .get(&component)
                .ok_or(CatalogError::MissingComponent(component))?;
            for tier in MaterialTier::ALL {
                let material = spec.material(tier);
                for (field, value) in [("resistance", material.resistance), ("cost", material.cost)]
                {
                    if !valid_amount(value) {
                        return Err(CatalogError::NegativeValue {
                            component,
                            tier,
                            field,
                            value,
                        });
                    }
                }
            }
        }

        for disaster in DisasterId::ALL {
            let spec = self
                .disasters
                .get(&disaster)
                .ok_or(CatalogError::MissingDisaster(disaster))?;
            if !valid_amount(spec.power) {
                return Err(CatalogError::NegativePower {
                    disaster,
                    power: spec.power,
                });
            }
        }

        let min = self.min_structural_resistance();
        let max = self.max_structural_resistance();
        if max <= min {
            return Err(CatalogError::DegenerateStructuralRange { min, max });
        }
        Ok(())
    }

    /// The reference tables used by the builtin catalog.
    pub fn reference() -> Self {
        let components = BTreeMap::from([
            (
                ComponentId::Roof,
                spec(
                    "Roof",
                    ("Fiber-cement slab", 30.0, 15_000.0),
                    ("Ceramic tile", 35.0, 50_000.0),
                    ("Metal sheet", 70.0, 60_000.0),
                ),
            ),
            (
                ComponentId::Walls,
                spec(
                    "Walls",
                    ("Drywall", 45.0, 48_000.0),
                    ("Ceramic block", 65.0, 65_000.0),
                    ("Concrete block", 75.0, 18_000.0),
                ),
            ),
            (
                ComponentId::Pillars,
                spec(
                    "Pillars",
                    ("Precast concrete", 70.0, 13_000.0),
                    ("Structural steel", 75.0, 14_000.0),
                    ("Reinforced concrete", 90.0, 13_500.0),
                ),
            ),
            (
                ComponentId::Beams,
                spec(
                    "Beams",
                    ("Steel beam", 30.0, 3_000.0),
                    ("Solid timber beam", 80.0, 4_500.0),
                    ("Reinforced concrete beam", 90.0, 4_000.0),
                ),
            ),
            (
                ComponentId::Floor,
                spec(
                    "Floor",
                    ("Vinyl flooring", 40.0, 40_000.0),
                    ("Ceramic flooring", 45.0, 22_000.0),
                    ("Porcelain tile", 60.0, 36_000.0),
                ),
            ),
            (
                ComponentId::Glass,
                spec(
                    "Glass",
                    ("Open span", 1.0, 0.0),
                    ("Plain glass", 50.0, 20_000.0),
                    ("Tempered glass", 60.0, 25_000.0),
                ),
            ),
            (
                ComponentId::LightningRod,
                spec(
                    "Lightning protection",
                    UNPROTECTED,
                    ("Franklin rod", 25.0, 10_000.0),
                    ("Full protection system", 30.0, 25_000.0),
                ),
            ),
            (
                ComponentId::WindDampers,
                spec(
                    "Hurricane protection",
                    UNPROTECTED,
                    ("Laminated glazing", 20.0, 50_000.0),
                    ("Wind dampers", 25.0, 110_000.0),
                ),
            ),
            (
                ComponentId::TsunamiBarriers,
                spec(
                    "Tsunami protection",
                    UNPROTECTED,
                    ("Breakwater wall", 35.0, 75_000.0),
                    ("Flood barriers", 40.0, 100_000.0),
                ),
            ),
            (
                ComponentId::SeismicDampers,
                spec(
                    "Earthquake protection",
                    UNPROTECTED,
                    ("Hydraulic dampers", 50.0, 120_000.0),
                    ("Base isolators", 55.0, 150_000.0),
                ),
            ),
        ]);

        let disasters = BTreeMap::from([
            (DisasterId::LightningStorm, disaster("Lightning storm", 120.0)),
            (DisasterId::Hurricane, disaster("Hurricane", 90.0)),
            (DisasterId::Tsunami, disaster("Tsunami", 110.0)),
            (DisasterId::Earthquake, disaster("Earthquake", 135.0)),
        ]);

        Self {
            components,
            disasters,
        }
    }
}

/// Weak tier of every defense system.
const UNPROTECTED: (&str, f64, f64) = ("No protection", 1.0, 0.0);

fn spec(
    label: &str,
    weak: (&str, f64, f64),
    medium: (&str, f64, f64),
    strong: (&str, f64, f64),
) -> ComponentSpec {
    let material = |(name, resistance, cost): (&str, f64, f64)| Material {
        name: name.to_string(),
        resistance,
        cost,
    };
    ComponentSpec {
        label: label.to_string(),
        weak: material(weak),
        medium: material(medium),
        strong: material(strong),
    }
}

fn disaster(label: &str, power: f64) -> DisasterSpec {
    DisasterSpec {
        label: label.to_string(),
        power,
    }
}

/// Resistance, cost and power must be finite and non-negative.
pub(crate) fn valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Catalog as written in JSON, before duplicate and range checks.
#[derive(Deserialize)]
struct RawCatalog {
    components: Entries<ComponentId, ComponentSpec>,
    disasters: Entries<DisasterId, DisasterSpec>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        let catalog = Catalog {
            components: raw.components.into_unique("component")?,
            disasters: raw.disasters.into_unique("disaster")?,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Map entries in document order. Unlike a `BTreeMap`, a repeated key is
/// kept so it can be reported instead of silently overwriting the first.
struct Entries<K, V>(Vec<(K, V)>);

impl<K: Ord + fmt::Debug, V> Entries<K, V> {
    fn into_unique(self, table: &'static str) -> Result<BTreeMap<K, V>, CatalogError> {
        let mut map = BTreeMap::new();
        for (key, value) in self.0 {
            if map.contains_key(&key) {
                return Err(CatalogError::DuplicateEntry {
                    table,
                    key: format!("{key:?}"),
                });
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Deserialize<'de> for Entries<K, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<K, V> {
            type Value = Entries<K, V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of catalog entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
