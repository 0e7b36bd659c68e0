use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use token_geometry::cli::args::{self, Args, USAGE};
use token_geometry::io::{self as scene_io, OutputWriter, TerminalIO};
use token_geometry::ui::presenters::SkirmishPresenter;
use token_geometry::{SceneResult, Skirmish};

fn main() -> ExitCode {
    let args = match args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> SceneResult<()> {
    let skirmish = match &args.scene {
        Some(path) => Skirmish::from_config(scene_io::read_scene(path)?)?,
        None => Skirmish::generate(args.seed.unwrap_or(0), args.count),
    };

    let mut output = TerminalIO;
    if args.dump {
        output.writeln(&scene_io::scene_to_json(&skirmish.to_config())?);
        return Ok(());
    }

    output.writeln("*** SKIRMISH ***");
    SkirmishPresenter::show_grid(&skirmish, &mut output);
    output.writeln("");
    SkirmishPresenter::show_roster(&skirmish, &mut output);
    output.writeln("");
    SkirmishPresenter::show_distances(&skirmish, &mut output);
    output.writeln("");
    SkirmishPresenter::show_flanks(&skirmish, &skirmish.flank_report(), &mut output);
    Ok(())
}
