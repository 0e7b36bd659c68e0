//! Domain models
//!
//! Value types shared by the distance and flanking services: scene
//! geometry, the grid, combatants, and scene descriptions. Models are pure
//! data structures with minimal logic.

pub mod combatant;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod scene;
