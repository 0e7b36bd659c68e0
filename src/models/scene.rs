//! Scene descriptions
//!
//! The serde-facing shape of a scene snapshot: grid, rule switches, and the
//! placed combatants. Loaded from JSON by the adapter binary.

use serde::{Deserialize, Serialize};

use super::combatant::CombatantSnapshot;
use super::grid::GridContext;

/// Rule switches consulted by the flanking evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlankingSettings {
    /// When false, no combatant ever counts as flanking.
    pub detection_enabled: bool,
}

impl Default for FlankingSettings {
    fn default() -> Self {
        FlankingSettings {
            detection_enabled: true,
        }
    }
}

/// A scene as read from disk. `grid: None` models a scene whose canvas is
/// not ready; every distance in it is undefined.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub grid: Option<GridContext>,
    #[serde(default)]
    pub settings: FlankingSettings,
    #[serde(default)]
    pub combatants: Vec<CombatantSnapshot>,
}
