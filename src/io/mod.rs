//! Input/output abstractions
//!
//! Scene files in and report text out. Output goes through a trait so
//! presenters can be tested with a mock writer.

use std::fs;
use std::path::Path;

use crate::models::errors::SceneResult;
use crate::models::scene::SceneConfig;

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal output using stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Read a JSON scene description from disk.
pub fn read_scene(path: &Path) -> SceneResult<SceneConfig> {
    let text = fs::read_to_string(path)?;
    parse_scene(&text)
}

pub fn parse_scene(text: &str) -> SceneResult<SceneConfig> {
    Ok(serde_json::from_str(text)?)
}

/// Render a scene description as pretty-printed JSON.
pub fn scene_to_json(scene: &SceneConfig) -> SceneResult<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}
