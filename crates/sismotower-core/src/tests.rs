//! Tests for the shared vocabulary: catalog data, component maps, serde shapes.

use crate::building::{BuildingConfig, ComponentMap, HealthMap};
use crate::catalog::{Catalog, CatalogError};
use crate::commands::SessionCommand;
use crate::constants::DEFAULT_FLOOR_COUNT;
use crate::enums::*;
use crate::events::AudioCue;
use crate::report::SimulationReport;

// ---- Catalog ----

#[test]
fn test_builtin_catalog_reference_values() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.resistance(ComponentId::Walls, MaterialTier::Weak), 45.0);
    assert_eq!(catalog.resistance(ComponentId::LightningRod, MaterialTier::Medium), 25.0);
    assert_eq!(catalog.resistance(ComponentId::TsunamiBarriers, MaterialTier::Strong), 40.0);
    assert_eq!(catalog.cost(ComponentId::Walls, MaterialTier::Strong), 18_000.0);
    assert_eq!(catalog.cost(ComponentId::Glass, MaterialTier::Weak), 0.0);
    assert_eq!(catalog.disaster_power(DisasterId::Earthquake), 135.0);
    assert_eq!(catalog.disaster_power(DisasterId::LightningStorm), 120.0);
    assert_eq!(catalog.disaster_power(DisasterId::Tsunami), 110.0);
    assert_eq!(catalog.disaster_power(DisasterId::Hurricane), 90.0);
}

#[test]
fn test_builtin_catalog_is_shared() {
    let a = Catalog::builtin() as *const Catalog;
    let b = Catalog::builtin() as *const Catalog;
    assert_eq!(a, b);
}

#[test]
fn test_structural_resistance_bounds() {
    let catalog = Catalog::builtin();
    // (70 + 30 + 40) / 3 and (90 + 90 + 60) / 3
    assert!((catalog.min_structural_resistance() - 140.0 / 3.0).abs() < 1e-10);
    assert!((catalog.max_structural_resistance() - 80.0).abs() < 1e-10);
}

#[test]
fn test_defense_weak_tier_is_unprotected() {
    let catalog = Catalog::builtin();
    for defense in ComponentId::DEFENSES {
        let material = catalog.material(defense, MaterialTier::Weak);
        assert_eq!(material.resistance, 1.0);
        assert_eq!(material.cost, 0.0);
    }
}

#[test]
fn test_catalog_json_round_trip() {
    let json = Catalog::builtin().to_json_string().unwrap();
    let back = Catalog::from_json_str(&json).unwrap();
    assert_eq!(&back, Catalog::builtin());
    assert!(json.contains("\"lightningRod\""));
}

#[test]
fn test_catalog_rejects_missing_disaster() {
    let mut value: serde_json::Value =
        serde_json::from_str(&Catalog::builtin().to_json_string().unwrap()).unwrap();
    value["disasters"]
        .as_object_mut()
        .unwrap()
        .remove("tsunami");
    let err = Catalog::from_json_str(&value.to_string()).unwrap_err();
    assert!(matches!(err, CatalogError::MissingDisaster(DisasterId::Tsunami)));
}

#[test]
fn test_catalog_rejects_negative_cost() {
    let mut value: serde_json::Value =
        serde_json::from_str(&Catalog::builtin().to_json_string().unwrap()).unwrap();
    value["components"]["beams"]["medium"]["cost"] = serde_json::json!(-1.0);
    let err = Catalog::from_json_str(&value.to_string()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NegativeValue {
            component: ComponentId::Beams,
            tier: MaterialTier::Medium,
            field: "cost",
            ..
        }
    ));
}

#[test]
fn test_catalog_rejects_flat_structural_range() {
    let mut value: serde_json::Value =
        serde_json::from_str(&Catalog::builtin().to_json_string().unwrap()).unwrap();
    for component in ["pillars", "beams", "floor"] {
        let weak = value["components"][component]["weak"]["resistance"].clone();
        value["components"][component]["strong"]["resistance"] = weak;
    }
    let err = Catalog::from_json_str(&value.to_string()).unwrap_err();
    assert!(matches!(err, CatalogError::DegenerateStructuralRange { .. }));
}

#[test]
fn test_catalog_rejects_duplicate_disaster() {
    let json = Catalog::builtin().to_json_string().unwrap();
    assert!(json.contains("\"disasters\": {"));
    let json = json.replacen(
        "\"disasters\": {",
        "\"disasters\": {\n    \"earthquake\": { \"label\": \"Aftershock\", \"power\": 1.0 },",
        1,
    );
    let err = Catalog::from_json_str(&json).unwrap_err();
    assert!(
        matches!(err, CatalogError::DuplicateEntry { table: "disaster", ref key } if key == "Earthquake"),
        "unexpected error: {err}"
    );

    // Plain serde deserialization goes through the same checks.
    assert!(serde_json::from_str::<Catalog>(&json).is_err());
}

#[test]
fn test_catalog_rejects_duplicate_component() {
    let json = Catalog::builtin().to_json_string().unwrap();
    let walls = serde_json::to_string(&Catalog::builtin().component(ComponentId::Walls)).unwrap();
    let json = json.replacen(
        "\"components\": {",
        &format!("\"components\": {{\n    \"walls\": {walls},"),
        1,
    );
    let err = Catalog::from_json_str(&json).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::DuplicateEntry {
            table: "component",
            ..
        }
    ));
}

#[test]
fn test_catalog_amounts_must_be_finite() {
    use crate::catalog::valid_amount;
    assert!(valid_amount(0.0));
    assert!(valid_amount(135.0));
    assert!(!valid_amount(-1.0));
    assert!(!valid_amount(f64::NAN));
    assert!(!valid_amount(f64::INFINITY));

    let mut value: serde_json::Value =
        serde_json::from_str(&Catalog::builtin().to_json_string().unwrap()).unwrap();
    value["disasters"]["tsunami"]["power"] = serde_json::json!(1.0);
    let json = value.to_string().replace("\"power\":1.0", "\"power\":1e999");
    assert!(Catalog::from_json_str(&json).is_err());
}

#[test]
fn test_catalog_rejects_garbage() {
    let err = Catalog::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

// ---- Enums ----

#[test]
fn test_slot_counts() {
    assert_eq!(ComponentId::Roof.slot_count(7), 1);
    assert_eq!(ComponentId::SeismicDampers.slot_count(7), 1);
    for component in ComponentId::PER_FLOOR {
        assert_eq!(component.slot_count(7), 7);
    }
}

#[test]
fn test_disaster_defense_mapping() {
    assert_eq!(DisasterId::LightningStorm.defense(), ComponentId::LightningRod);
    assert_eq!(DisasterId::Hurricane.defense(), ComponentId::WindDampers);
    assert_eq!(DisasterId::Tsunami.defense(), ComponentId::TsunamiBarriers);
    assert_eq!(DisasterId::Earthquake.defense(), ComponentId::SeismicDampers);
    for disaster in DisasterId::ALL {
        assert!(disaster.defense().is_defense());
    }
}

#[test]
fn test_component_wire_names_match_as_str() {
    for component in ComponentId::ALL {
        let json = serde_json::to_string(&component).unwrap();
        assert_eq!(json, format!("\"{}\"", component.as_str()));
    }
}

// ---- Component maps ----

#[test]
fn test_default_config_shape() {
    let config = BuildingConfig::default();
    assert_eq!(config.floor_count(), DEFAULT_FLOOR_COUNT);
    assert!(config.matches_shape(DEFAULT_FLOOR_COUNT));
    // 5 per-floor components * 7 + roof + 4 defenses
    assert_eq!(config.len(), 40);
    assert!(config.values().all(|&tier| tier == MaterialTier::Weak));
}

#[test]
fn test_set_returns_previous_value() {
    let mut config = BuildingConfig::new(3);
    let old = config.set(ComponentId::Beams, 2, MaterialTier::Strong);
    assert_eq!(old, MaterialTier::Weak);
    assert_eq!(config.tier(ComponentId::Beams, 2), MaterialTier::Strong);
    assert_eq!(config.tier(ComponentId::Beams, 1), MaterialTier::Weak);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_slot_out_of_range_panics() {
    let config = BuildingConfig::new(7);
    config.get(ComponentId::Roof, 1);
}

#[test]
fn test_fill_keeps_shape() {
    let mut health = HealthMap::full(4);
    health.set(ComponentId::Walls, 0, 12.5);
    health.fill(100.0);
    assert!(health.matches_shape(4));
    assert!(health.values().all(|&h| h == 100.0));
}

#[test]
fn test_shape_mismatch_detected() {
    let config: ComponentMap<MaterialTier> = ComponentMap::filled(5, MaterialTier::Medium);
    assert!(config.matches_shape(5));
    assert!(!config.matches_shape(7));
}

#[test]
fn test_zero_floor_building() {
    let health = HealthMap::full(0);
    assert_eq!(health.floor_count(), 0);
    assert_eq!(health.len(), 5);
}

// ---- Serde ----

#[test]
fn test_material_tier_serde() {
    for v in MaterialTier::ALL {
        let json = serde_json::to_string(&v).unwrap();
        let back: MaterialTier = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
    assert_eq!(serde_json::to_string(&MaterialTier::Strong).unwrap(), "\"strong\"");
}

#[test]
fn test_config_serializes_as_component_keyed_map() {
    let config = BuildingConfig::new(2);
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["walls"], serde_json::json!(["weak", "weak"]));
    assert_eq!(value["lightningRod"], serde_json::json!(["weak"]));
    let back: BuildingConfig = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);
}

/// Verify SessionCommand round-trips through serde (tagged union).
#[test]
fn test_session_command_serde() {
    let commands = vec![
        SessionCommand::SelectMaterial {
            component: ComponentId::Pillars,
            tier: MaterialTier::Strong,
            slot: 3,
        },
        SessionCommand::SelectLevel {
            level: LevelSelection::Roof,
        },
        SessionCommand::SelectLevel {
            level: LevelSelection::Floor(4),
        },
        SessionCommand::Simulate {
            disaster: DisasterId::Tsunami,
        },
        SessionCommand::Reset,
        SessionCommand::ToggleMute,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: SessionCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(*cmd, back);
    }

    let parsed: SessionCommand =
        serde_json::from_str(r#"{"type":"Simulate","disaster":"lightningStorm"}"#).unwrap();
    assert_eq!(
        parsed,
        SessionCommand::Simulate {
            disaster: DisasterId::LightningStorm
        }
    );
}

#[test]
fn test_audio_cue_serde() {
    let cues = vec![
        AudioCue::MaterialChanged,
        AudioCue::Click,
        AudioCue::Disaster {
            disaster: DisasterId::Earthquake,
        },
        AudioCue::PartDamaged {
            component: ComponentId::Glass,
            slot: 6,
        },
        AudioCue::Result {
            tone: ResultTone::Alarm,
        },
    ];
    for cue in &cues {
        let json = serde_json::to_string(cue).unwrap();
        let back: AudioCue = serde_json::from_str(&json).unwrap();
        assert_eq!(*cue, back);
    }
}

// ---- Report ----

fn report_with(health: HealthMap) -> SimulationReport {
    SimulationReport {
        disaster: DisasterId::Hurricane,
        health,
        average_health: 0.0,
        integrity_percent: 0,
        outcome: OutcomeCategory::Collapse,
        structural_bonus: 0.0,
        effective_power: 89.0,
    }
}

#[test]
fn test_report_damaged_and_destroyed_slots() {
    let mut health = HealthMap::full(3);
    health.set(ComponentId::Walls, 1, 99.5);
    health.set(ComponentId::Roof, 0, 20.0);
    health.set(ComponentId::Glass, 2, 0.0);
    let report = report_with(health);

    assert_eq!(
        report.damaged_slots(),
        vec![
            (ComponentId::Roof, 0),
            (ComponentId::Walls, 1),
            (ComponentId::Glass, 2),
        ]
    );
    assert_eq!(report.destroyed_count(), 2);
}

#[test]
fn test_report_summary() {
    let mut report = report_with(HealthMap::full(1));
    report.integrity_percent = 12;
    assert_eq!(report.summary(), "total collapse (integrity: 12%)");
}
