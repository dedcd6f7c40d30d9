//! Aggregation and classification of a health map.
//!
//! All band thresholds use strict `>` comparisons, so a value sitting
//! exactly on a threshold falls into the lower band.

use sismotower_core::building::HealthMap;
use sismotower_core::constants::*;
use sismotower_core::enums::{HealthBand, OutcomeCategory, PartCondition, ResultTone};

/// Mean health over every slot. An empty map counts as undamaged.
pub fn average_health(health: &HealthMap) -> f64 {
    let count = health.len();
    if count == 0 {
        return FULL_HEALTH;
    }
    health.values().sum::<f64>() / count as f64
}

pub fn classify(average: f64) -> OutcomeCategory {
    if average > OUTCOME_MINIMAL_ABOVE {
        OutcomeCategory::Minimal
    } else if average > OUTCOME_SIGNIFICANT_ABOVE {
        OutcomeCategory::Significant
    } else if average > OUTCOME_SEVERE_ABOVE {
        OutcomeCategory::Severe
    } else {
        OutcomeCategory::Collapse
    }
}

/// Displayed integrity: the average rounded to the nearest whole percent.
pub fn integrity_percent(average: f64) -> u8 {
    average.round().clamp(0.0, FULL_HEALTH) as u8
}

/// Colour band of the overall integrity bar.
pub fn health_band(average: f64) -> HealthBand {
    if average > HEALTH_BAR_HEALTHY_ABOVE {
        HealthBand::Healthy
    } else if average > HEALTH_BAR_WARNING_ABOVE {
        HealthBand::Warning
    } else {
        HealthBand::Critical
    }
}

/// How a single part should be drawn.
pub fn part_condition(health: f64) -> PartCondition {
    if health <= DESTROYED_HEALTH {
        PartCondition::Destroyed
    } else if health < PART_DARKENED_BELOW {
        PartCondition::Darkened
    } else if health < PART_CRACKED_BELOW {
        PartCondition::Cracked
    } else if health < FULL_HEALTH {
        PartCondition::Scuffed
    } else {
        PartCondition::Intact
    }
}

pub fn result_tone(average: f64) -> ResultTone {
    if average > RESULT_TRIUMPH_ABOVE {
        ResultTone::Triumph
    } else if average > RESULT_SOMBER_ABOVE {
        ResultTone::Somber
    } else {
        ResultTone::Alarm
    }
}
