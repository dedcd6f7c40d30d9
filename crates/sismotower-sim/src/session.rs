//! Session: one build/simulate/reset cycle.
//!
//! `Session` owns the building configuration, the last health map, the
//! running cost, and the audio cues waiting for the presentation layer.
//! It is headless and synchronous: any staged reveal of a result (see
//! `RESULT_REVEAL_DELAY_MS`) is the caller's business.

use thiserror::Error;
use tracing::debug;

use sismotower_core::building::{BuildingConfig, HealthMap};
use sismotower_core::catalog::Catalog;
use sismotower_core::commands::SessionCommand;
use sismotower_core::enums::*;
use sismotower_core::events::AudioCue;
use sismotower_core::report::SimulationReport;

use crate::settings::{SessionSettings, SettingsError};
use crate::{bonus, economy, outcome, resolver};

/// Why a session refused an action. State is untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("the design is frozen until the session is reset")]
    Locked,
    #[error("slot {slot} out of range for {component:?} ({slots} slots)")]
    SlotOutOfRange {
        component: ComponentId,
        slot: usize,
        slots: usize,
    },
    #[error("floor {floor} out of range ({floors} floors)")]
    LevelOutOfRange { floor: usize, floors: usize },
    #[error("{active:?} is already installed; only one defense system may be active")]
    DefenseInUse { active: ComponentId },
}

pub struct Session {
    catalog: Catalog,
    settings: SessionSettings,
    config: BuildingConfig,
    health: HealthMap,
    total_cost: f64,
    phase: SessionPhase,
    selected_level: LevelSelection,
    report: Option<SimulationReport>,
    audio_cues: Vec<AudioCue>,
}

impl Session {
    /// Create a session on the builtin catalog.
    pub fn new(settings: SessionSettings) -> Result<Self, SettingsError> {
        Self::with_catalog(settings, Catalog::builtin().clone())
    }

    pub fn with_catalog(settings: SessionSettings, catalog: Catalog) -> Result<Self, SettingsError> {
        settings.validate()?;
        let config = BuildingConfig::new(settings.floor_count);
        let total_cost = economy::total_cost(&config, &catalog);
        Ok(Self {
            health: HealthMap::full(settings.floor_count),
            config,
            total_cost,
            phase: SessionPhase::default(),
            selected_level: LevelSelection::default(),
            report: None,
            audio_cues: Vec::new(),
            catalog,
            settings,
        })
    }

    /// Apply a command from the presentation layer.
    pub fn apply(&mut self, command: SessionCommand) -> Result<(), SessionError> {
        match command {
            SessionCommand::SelectMaterial {
                component,
                tier,
                slot,
            } => self.select_material(component, tier, slot),
            SessionCommand::SelectLevel { level } => self.select_level(level),
            SessionCommand::Simulate { disaster } => self.simulate(disaster).map(|_| ()),
            SessionCommand::Reset => {
                self.reset();
                Ok(())
            }
            SessionCommand::ToggleMute => {
                self.toggle_mute();
                Ok(())
            }
        }
    }

    /// Put `tier` into one slot of `component`, keeping the running cost in step.
    pub fn select_material(
        &mut self,
        component: ComponentId,
        tier: MaterialTier,
        slot: usize,
    ) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Resolved {
            debug!(?component, slot, "material change rejected: result on display");
            return Err(SessionError::Locked);
        }

        let slots = self.config.slots(component).len();
        if slot >= slots {
            debug!(?component, slot, slots, "material change rejected: no such slot");
            return Err(SessionError::SlotOutOfRange {
                component,
                slot,
                slots,
            });
        }

        let old = self.config.tier(component, slot);
        if old == tier {
            return Ok(());
        }

        if self.settings.exclusive_defense && component.is_defense() && tier != MaterialTier::Weak {
            if let Some(active) = self.active_defense() {
                if active != component {
                    debug!(?component, ?active, "material change rejected: defense in use");
                    return Err(SessionError::DefenseInUse { active });
                }
            }
        }

        self.config.set(component, slot, tier);
        self.total_cost += economy::cost_delta(&self.catalog, component, old, tier);
        self.cue(AudioCue::MaterialChanged);
        Ok(())
    }

    pub fn select_level(&mut self, level: LevelSelection) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Resolved {
            debug!(?level, "level selection rejected: result on display");
            return Err(SessionError::Locked);
        }
        if let LevelSelection::Floor(floor) = level {
            let floors = self.settings.floor_count;
            if floor >= floors {
                debug!(floor, floors, "level selection rejected: no such floor");
                return Err(SessionError::LevelOutOfRange { floor, floors });
            }
        }
        if self.selected_level != level {
            self.selected_level = level;
            self.cue(AudioCue::Click);
        }
        Ok(())
    }

    /// Resolve `disaster` against the current design and freeze it until reset.
    pub fn simulate(&mut self, disaster: DisasterId) -> Result<&SimulationReport, SessionError> {
        if self.phase == SessionPhase::Resolved {
            debug!(?disaster, "simulation rejected: result already on display");
            return Err(SessionError::Locked);
        }

        self.cue(AudioCue::SimulationStarted);
        self.cue(AudioCue::Disaster { disaster });

        let report = resolver::resolve_disaster(&self.config, disaster, &self.catalog);
        for (component, slot) in report.damaged_slots() {
            self.cue(AudioCue::PartDamaged { component, slot });
        }
        self.cue(AudioCue::Result {
            tone: outcome::result_tone(report.average_health),
        });

        self.health = report.health.clone();
        self.phase = SessionPhase::Resolved;
        Ok(&*self.report.insert(report))
    }

    /// Back to an all-Weak, undamaged building on floor 0.
    pub fn reset(&mut self) {
        self.cue(AudioCue::Reset);
        self.config = BuildingConfig::new(self.settings.floor_count);
        self.health = HealthMap::full(self.settings.floor_count);
        self.report = None;
        self.phase = SessionPhase::Building;
        self.selected_level = LevelSelection::default();
        self.total_cost = economy::total_cost(&self.config, &self.catalog);
    }

    /// Flip the mute flag and return the new value. Muting drops pending cues.
    pub fn toggle_mute(&mut self) -> bool {
        self.settings.muted = !self.settings.muted;
        if self.settings.muted {
            self.audio_cues.clear();
        }
        self.settings.muted
    }

    pub fn complete_tutorial(&mut self) {
        self.settings.tutorial_completed = true;
    }

    /// Take every audio cue queued since the last call.
    pub fn drain_audio_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.audio_cues)
    }

    /// First defense system with a non-Weak material, if any.
    pub fn active_defense(&self) -> Option<ComponentId> {
        ComponentId::DEFENSES
            .into_iter()
            .find(|&defense| self.config.tier(defense, 0) != MaterialTier::Weak)
    }

    /// Whether the build panel should offer `defense` for selection.
    pub fn defense_available(&self, defense: ComponentId) -> bool {
        if self.phase == SessionPhase::Resolved {
            return false;
        }
        if !self.settings.exclusive_defense {
            return true;
        }
        match self.active_defense() {
            Some(active) => active == defense,
            None => true,
        }
    }

    /// Live structural bonus of the current design.
    pub fn structural_bonus(&self) -> f64 {
        bonus::structural_bonus(&self.config, &self.catalog)
    }

    /// Average of the current health map (100 before any simulation).
    pub fn overall_health(&self) -> f64 {
        outcome::average_health(&self.health)
    }

    pub fn health_band(&self) -> HealthBand {
        outcome::health_band(self.overall_health())
    }

    pub fn part_condition(&self, component: ComponentId, slot: usize) -> PartCondition {
        outcome::part_condition(self.health.health(component, slot))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    pub fn health(&self) -> &HealthMap {
        &self.health
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn selected_level(&self) -> LevelSelection {
        self.selected_level
    }

    /// The last simulation report, until reset.
    pub fn report(&self) -> Option<&SimulationReport> {
        self.report.as_ref()
    }

    pub fn is_muted(&self) -> bool {
        self.settings.muted
    }

    pub fn tutorial_completed(&self) -> bool {
        self.settings.tutorial_completed
    }

    fn cue(&mut self, cue: AudioCue) {
        if !self.settings.muted {
            self.audio_cues.push(cue);
        }
    }
}
