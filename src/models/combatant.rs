//! Combatants as seen by the geometry engine.
//!
//! The engine never owns host tokens. Anything that can answer the
//! [`Combatant`] queries can be measured and flanked; [`CombatantSnapshot`]
//! is the plain-data implementation used by scenes and tests.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::DEFAULT_REACH;
use super::geometry::{Point, Rect};

/// Identity of a placed combatant. Two handles with the same id are the
/// same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Actor type behind a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorCategory {
    Character,
    #[default]
    Npc,
    Familiar,
    Hazard,
    Loot,
    Vehicle,
}

impl ActorCategory {
    /// Only player characters and NPCs can take part in a flank.
    pub fn can_flank(&self) -> bool {
        matches!(self, ActorCategory::Character | ActorCategory::Npc)
    }

    pub fn is_creature(&self) -> bool {
        matches!(
            self,
            ActorCategory::Character | ActorCategory::Npc | ActorCategory::Familiar
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActorCategory::Character => "character",
            ActorCategory::Npc => "npc",
            ActorCategory::Familiar => "familiar",
            ActorCategory::Hazard => "hazard",
            ActorCategory::Loot => "loot",
            ActorCategory::Vehicle => "vehicle",
        }
    }
}

/// Queries the geometry engine needs from a placed token.
pub trait Combatant {
    fn id(&self) -> CombatantId;

    /// Full footprint in scene coordinates.
    fn bounds(&self) -> Rect;

    fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Whether this combatant's type can flank at all.
    fn can_flank_others(&self) -> bool;

    /// Whether this combatant is a creature that can be flanked.
    fn is_creature(&self) -> bool;

    /// Whether a player owns or is allied with this combatant.
    fn has_player_allegiance(&self) -> bool;

    /// Whether this combatant is currently able to make attacks.
    fn can_attack(&self) -> bool;

    /// Reach for attack purposes, in distance units.
    fn attack_reach(&self) -> f64;
}

fn default_reach() -> f64 {
    DEFAULT_REACH
}

fn default_true() -> bool {
    true
}

/// Point-in-time copy of a token's flanking-relevant state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub id: CombatantId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: ActorCategory,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub player_allied: bool,
    #[serde(default = "default_true")]
    pub can_attack: bool,
    #[serde(default = "default_reach")]
    pub reach: f64,
}

impl CombatantSnapshot {
    /// A hostile NPC-style combatant with default reach occupying `footprint`.
    pub fn new(id: u32, category: ActorCategory, footprint: Rect) -> Self {
        CombatantSnapshot {
            id: CombatantId(id),
            name: String::new(),
            category,
            x: footprint.left,
            y: footprint.top,
            width: footprint.width(),
            height: footprint.height(),
            player_allied: false,
            can_attack: true,
            reach: DEFAULT_REACH,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn player_allied(mut self) -> Self {
        self.player_allied = true;
        self
    }

    pub fn with_reach(mut self, reach: f64) -> Self {
        self.reach = reach;
        self
    }

    pub fn unable_to_attack(mut self) -> Self {
        self.can_attack = false;
        self
    }

    /// Name for display, falling back to the id.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            format!("{} ({})", self.name, self.id)
        }
    }
}

impl Combatant for CombatantSnapshot {
    fn id(&self) -> CombatantId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn can_flank_others(&self) -> bool {
        self.category.can_flank()
    }

    fn is_creature(&self) -> bool {
        self.category.is_creature()
    }

    fn has_player_allegiance(&self) -> bool {
        self.player_allied
    }

    fn can_attack(&self) -> bool {
        self.can_attack
    }

    fn attack_reach(&self) -> f64 {
        self.reach
    }
}
