//! Damage resolution for SISMOTOWER.
//!
//! Pure functions compute the structural bonus, per-disaster damage, the
//! aggregate outcome, and building cost. `Session` wraps them in the
//! build/simulate/reset bookkeeping a presentation layer needs. Completely
//! headless and synchronous.

pub mod bonus;
pub mod economy;
pub mod outcome;
pub mod resolver;
pub mod session;
pub mod settings;

pub use sismotower_core as core;
pub use bonus::structural_bonus;
pub use economy::total_cost;
pub use resolver::resolve_disaster;
pub use session::{Session, SessionError};
pub use settings::{SessionSettings, SettingsError};
