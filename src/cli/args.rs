use std::path::PathBuf;

use crate::models::errors::{SceneError, SceneResult};

/// Combatants placed by a random skirmish when `--count` is not given.
pub const DEFAULT_COUNT: usize = 6;

pub const USAGE: &str = "\
Usage: token-geometry [OPTIONS]

Options:
  -f, --scene <PATH>  Load a JSON scene description
  -s, --seed <INT>    Seed for a random skirmish (ignored with --scene)
  -n, --count <INT>   Combatants in a random skirmish [default: 6]
      --dump          Print the scene as JSON instead of the report
  -v, --verbose       Debug logging (RUST_LOG overrides)
  -h, --help          Print help";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub scene: Option<PathBuf>,
    pub seed: Option<u64>,
    pub count: usize,
    pub dump: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            scene: None,
            seed: None,
            count: DEFAULT_COUNT,
            dump: false,
            verbose: false,
            help: false,
        }
    }
}

/// Parse the process arguments.
pub fn parse() -> SceneResult<Args> {
    parse_from(std::env::args().skip(1))
}

/// Parse arguments, excluding the program name.
pub fn parse_from<I, S>(args: I) -> SceneResult<Args>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = Args::default();
    let mut iter = args.into_iter().map(Into::into);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--scene" | "-f" => {
                let val = iter.next().ok_or(SceneError::MissingValue("--scene"))?;
                parsed.scene = Some(PathBuf::from(val));
            }
            "--seed" | "-s" => {
                let val = iter.next().ok_or(SceneError::MissingValue("--seed"))?;
                parsed.seed = Some(val.parse::<u64>()?);
            }
            "--count" | "-n" => {
                let val = iter.next().ok_or(SceneError::MissingValue("--count"))?;
                parsed.count = val.parse::<usize>()?;
            }
            "--dump" => parsed.dump = true,
            "--verbose" | "-v" => parsed.verbose = true,
            "--help" | "-h" => parsed.help = true,
            other => return Err(SceneError::InvalidArgument(format!("unknown argument: {}", other))),
        }
    }

    Ok(parsed)
}
