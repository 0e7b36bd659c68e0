//! User interface and presentation
//!
//! Presenters that format skirmish state and flanking verdicts for the
//! adapter binary, separating presentation from the geometry services.

pub mod presenters;
