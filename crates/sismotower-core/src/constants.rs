//! Simulation constants and tuning parameters.

/// Floors in the reference building.
pub const DEFAULT_FLOOR_COUNT: usize = 7;

/// Health of an undamaged part.
pub const FULL_HEALTH: f64 = 100.0;

/// Parts at or below this health are drawn as destroyed.
pub const DESTROYED_HEALTH: f64 = 20.0;

// --- Structural bonus ---

/// Largest damage reduction earned from load-bearing materials (30%).
pub const MAX_STRUCTURAL_BONUS: f64 = 0.30;

// --- Lightning storm ---

/// Rod damage per point of power the rod fails to absorb.
pub const LIGHTNING_ROD_DAMAGE_FACTOR: f64 = 2.0;

/// Roof damage per point of effective power.
pub const LIGHTNING_ROOF_DAMAGE_FACTOR: f64 = 1.2;

/// Number of floors below the roof reached by a strike.
pub const LIGHTNING_FLOORS_REACHED: usize = 3;

/// Per-floor falloff: damage multiplier is `1 / (i * falloff + 1)`.
pub const LIGHTNING_FLOOR_FALLOFF: f64 = 1.5;

/// Divisors applied to the per-floor strike damage.
pub const LIGHTNING_BEAMS_DIVISOR: f64 = 1.25;
pub const LIGHTNING_WALLS_DIVISOR: f64 = 1.5;
pub const LIGHTNING_GLASS_DIVISOR: f64 = 2.0;
pub const LIGHTNING_PILLARS_DIVISOR: f64 = 1.2;
pub const LIGHTNING_FLOOR_DIVISOR: f64 = 1.8;

// --- Positional attenuation ---

/// Tsunami multiplier at ground level; decreases by `i / len` per floor.
pub const TSUNAMI_BASE_MULTIPLIER: f64 = 1.5;

/// Earthquake multiplier at ground level; decreases by `i / (2 * len)` per floor.
pub const EARTHQUAKE_BASE_MULTIPLIER: f64 = 1.2;

// --- Outcome bands (strict `>` comparisons) ---

pub const OUTCOME_MINIMAL_ABOVE: f64 = 75.0;
pub const OUTCOME_SIGNIFICANT_ABOVE: f64 = 50.0;
pub const OUTCOME_SEVERE_ABOVE: f64 = 20.0;

// --- Presentation thresholds ---

/// Integrity bar is green above this.
pub const HEALTH_BAR_HEALTHY_ABOVE: f64 = 70.0;
/// Integrity bar is amber above this, red otherwise.
pub const HEALTH_BAR_WARNING_ABOVE: f64 = 30.0;

/// Parts below this health are drawn cracked.
pub const PART_CRACKED_BELOW: f64 = 70.0;
/// Parts below this health are drawn darkened.
pub const PART_DARKENED_BELOW: f64 = 50.0;

/// Result jingle thresholds.
pub const RESULT_TRIUMPH_ABOVE: f64 = 75.0;
pub const RESULT_SOMBER_ABOVE: f64 = 35.0;

/// Delay the presentation layer waits before revealing a result (animation pacing).
/// The resolver itself is synchronous.
pub const RESULT_REVEAL_DELAY_MS: u64 = 2_000;
