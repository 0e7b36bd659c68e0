//! Skirmish engine
//!
//! Owns one validated scene snapshot and answers distance and flanking
//! queries against it. This is the adapter between scene descriptions and
//! the pure geometry services.

mod generation;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::models::combatant::{CombatantId, CombatantSnapshot};
use crate::models::constants::MAX_SKIRMISH_COMBATANTS;
use crate::models::errors::{SceneError, SceneResult};
use crate::models::grid::GridContext;
use crate::models::scene::{FlankingSettings, SceneConfig};
use crate::services::distance::distance_between;
use crate::services::flanking::{self, FlankContext};

use generation::generate_combatants;

/// One flanker/flankee pair and the partners completing the flank.
#[derive(Debug, Clone, PartialEq)]
pub struct FlankEntry {
    pub flanker: CombatantId,
    pub flankee: CombatantId,
    pub buddies: Vec<CombatantId>,
}

/// A validated scene snapshot.
#[derive(Debug, Clone)]
pub struct Skirmish {
    grid: Option<GridContext>,
    settings: FlankingSettings,
    combatants: Vec<CombatantSnapshot>,
}

impl Skirmish {
    /// Build a skirmish from a scene description.
    ///
    /// # Errors
    ///
    /// * [`SceneError::InvalidGrid`] if the grid cannot convert distances
    /// * [`SceneError::DegenerateFootprint`] if a footprint is smaller than a cell
    /// * [`SceneError::DuplicateId`] if two combatants share an id
    pub fn from_config(config: SceneConfig) -> SceneResult<Self> {
        if let Some(grid) = &config.grid {
            grid.validate()?;
        }

        let mut seen = HashSet::new();
        for c in &config.combatants {
            if !seen.insert(c.id) {
                return Err(SceneError::DuplicateId(c.id));
            }
            if let Some(grid) = &config.grid {
                if !(c.width >= grid.size && c.height >= grid.size) {
                    return Err(SceneError::DegenerateFootprint {
                        id: c.id,
                        width: c.width,
                        height: c.height,
                        cell: grid.size,
                    });
                }
            }
        }

        info!(
            combatants = config.combatants.len(),
            grid = config.grid.is_some(),
            "scene loaded"
        );
        Ok(Skirmish {
            grid: config.grid,
            settings: config.settings,
            combatants: config.combatants,
        })
    }

    /// Generate a random skirmish on the default square grid.
    ///
    /// The same seed always produces the same skirmish. `count` is capped at
    /// the board's capacity.
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = GridContext::default();
        let count = count.min(MAX_SKIRMISH_COMBATANTS);
        let combatants = generate_combatants(&mut rng, &grid, count);
        debug!(seed, placed = combatants.len(), "generated skirmish");

        Skirmish {
            grid: Some(grid),
            settings: FlankingSettings::default(),
            combatants,
        }
    }

    pub fn grid(&self) -> Option<&GridContext> {
        self.grid.as_ref()
    }

    pub fn settings(&self) -> &FlankingSettings {
        &self.settings
    }

    pub fn combatants(&self) -> &[CombatantSnapshot] {
        &self.combatants
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&CombatantSnapshot> {
        self.combatants.iter().find(|c| c.id == id)
    }

    fn context(&self) -> FlankContext<'_> {
        FlankContext::new(self.grid.as_ref()).with_settings(self.settings)
    }

    /// Footprint distance between two combatants, the same in either
    /// direction. `None` if either id is unknown or there is no grid.
    pub fn distance(&self, a: CombatantId, b: CombatantId) -> Option<f64> {
        let a = self.combatant(a)?;
        let b = self.combatant(b)?;
        distance_between(a, b, self.grid.as_ref(), None)
    }

    pub fn is_flanking(&self, flanker: CombatantId, flankee: CombatantId) -> bool {
        match (self.combatant(flanker), self.combatant(flankee)) {
            (Some(flanker), Some(flankee)) => {
                flanking::is_flanking(flanker, flankee, &self.combatants, &self.context())
            }
            _ => false,
        }
    }

    /// Every flanker/flankee pair in the scene that has at least one partner.
    pub fn flank_report(&self) -> Vec<FlankEntry> {
        let ctx = self.context();
        let mut report = Vec::new();
        for flankee in &self.combatants {
            for flanker in &self.combatants {
                let buddies = flanking::flanking_buddies(flanker, flankee, &self.combatants, &ctx);
                if !buddies.is_empty() {
                    report.push(FlankEntry {
                        flanker: flanker.id,
                        flankee: flankee.id,
                        buddies,
                    });
                }
            }
        }
        report
    }

    /// The scene description this skirmish was built from.
    pub fn to_config(&self) -> SceneConfig {
        SceneConfig {
            grid: self.grid,
            settings: self.settings,
            combatants: self.combatants.clone(),
        }
    }
}
