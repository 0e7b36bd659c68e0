//! Geometry services
//!
//! Pure functions over caller-supplied snapshots: the distance engine and
//! the flanking evaluator built on top of it.

pub mod distance;
pub mod flanking;
