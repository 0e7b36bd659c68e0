//! Token Geometry
//!
//! Grid-aware distance measurement and flanking detection for tabletop
//! combat tokens.
//!
//! # Overview
//!
//! The library is pure geometry over caller-supplied snapshots. Host code
//! implements [`Combatant`] for its tokens (or fills in a
//! [`CombatantSnapshot`]), passes the active [`GridContext`] explicitly, and
//! gets back distances and flanking verdicts. A missing grid yields an
//! undefined distance, which never allows a flank.
//!
//! # Modules
//!
//! - [`models`] - Geometry values, grid, combatants, scene descriptions
//! - [`services`] - Distance engine and flanking evaluator
//! - [`engine`] - Validated scene snapshots and random skirmishes
//! - [`io`] - Scene files and output abstractions
//! - [`ui`] - Report presenters
//! - [`cli`] - Argument parsing for the binary
//!
//! # Example
//!
//! ```rust
//! use token_geometry::{
//!     is_flanking, ActorCategory, CombatantSnapshot, FlankContext, GridContext, Rect,
//! };
//!
//! let grid = GridContext::square(100.0, 5.0);
//! let ctx = FlankContext::new(Some(&grid));
//! let cell = |col: f64| Rect::new(col * 100.0, 0.0, 100.0, 100.0);
//!
//! let scene = vec![
//!     CombatantSnapshot::new(1, ActorCategory::Character, cell(0.0)).player_allied(),
//!     CombatantSnapshot::new(2, ActorCategory::Character, cell(2.0)).player_allied(),
//! ];
//! let ogre = CombatantSnapshot::new(3, ActorCategory::Npc, cell(1.0));
//!
//! assert!(is_flanking(&scene[0], &ogre, &scene, &ctx));
//! ```

pub mod cli;
pub mod engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use engine::{FlankEntry, Skirmish};
pub use models::combatant::{ActorCategory, Combatant, CombatantId, CombatantSnapshot};
pub use models::errors::{SceneError, SceneResult};
pub use models::geometry::{Point, Rect};
pub use models::grid::{DiagonalRule, GridContext, GridKind};
pub use models::scene::{FlankingSettings, SceneConfig};
pub use services::distance::{distance_between, measure_distance};
pub use services::flanking::{
    can_flank, flankers_of, flanking_buddies, in_flanking_arrangement, is_flanking,
    on_opposite_corners, on_opposite_sides, FlankContext,
};
