use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;

use swatchboard::Config;
use swatchboard::demo::{self, DemoKind};
use swatchboard::input::{InputState, MouseButton};
use swatchboard::{ui, util};

#[derive(Parser, Debug)]
#[command(name = "swatchboard")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SWATCHBOARD_GIT_HASH"), ")"),
    about = "Color palette with delegated click handling"
)]
struct Cli {
    /// Number of swatches (overrides the config file)
    #[arg(long, short = 'n', value_name = "N", value_parser = clap::value_parser!(u32).range(1..=1024))]
    count: Option<u32>,

    /// Swatches per row (overrides the config file)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=64))]
    columns: Option<u32>,

    /// Random seed for a reproducible palette
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Config file to use instead of ~/.config/swatchboard/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Click at page coordinates (repeatable)
    #[arg(long = "click", value_name = "X,Y", value_parser = util::parse_point, action = ArgAction::Append)]
    clicks: Vec<(i32, i32)>,

    /// Click the center of the swatch at INDEX (repeatable, applied in
    /// command-line order together with --click)
    #[arg(long = "pick", value_name = "INDEX", action = ArgAction::Append)]
    picks: Vec<usize>,

    /// Print a 24-bit color preview of the palette
    #[arg(long, short = 'p', action = ArgAction::SetTrue)]
    preview: bool,

    /// Write a PNG snapshot of the page
    #[cfg(feature = "png")]
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,

    /// Run an event propagation walkthrough and exit
    #[arg(long, value_name = "NAME", conflicts_with_all = ["clicks", "picks", "preview"])]
    demo: Option<DemoKind>,
}

/// One pointer action requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Click(i32, i32),
    Pick(usize),
}

/// Interleaves `--click` and `--pick` values in the order they were given.
fn ordered_actions(cli: &Cli, matches: &ArgMatches) -> Vec<Action> {
    let positions = |id: &str| {
        matches
            .indices_of(id)
            .map(|indices| indices.collect::<Vec<_>>())
            .unwrap_or_default()
    };
    let mut actions: Vec<(usize, Action)> = positions("clicks")
        .into_iter()
        .zip(cli.clicks.iter().map(|&(x, y)| Action::Click(x, y)))
        .chain(
            positions("picks")
                .into_iter()
                .zip(cli.picks.iter().map(|&index| Action::Pick(index))),
        )
        .collect();
    actions.sort_by_key(|&(position, _)| position);
    actions.into_iter().map(|(_, action)| action).collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if let Some(kind) = cli.demo {
        log::info!("Running {} demo", kind);
        for line in demo::run(kind)? {
            println!("{line}");
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(count) = cli.count {
        config.palette.count = count as usize;
    }
    if let Some(columns) = cli.columns {
        config.palette.columns = columns;
    }
    if cli.seed.is_some() {
        config.palette.seed = cli.seed;
    }

    let mut rng = match config.palette.seed {
        Some(seed) => {
            log::debug!("Using palette seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut state =
        InputState::new(&config, &mut rng).context("Failed to initialize the palette")?;

    for action in ordered_actions(&cli, &matches) {
        match action {
            Action::Click(x, y) => {
                state.on_mouse_press(MouseButton::Left, x, y);
            }
            Action::Pick(index) => {
                let available = state.palette.swatches(&state.document).len();
                if state.click_swatch(index).is_none() {
                    anyhow::bail!(
                        "No swatch at index {} (palette has {} swatches)",
                        index,
                        available
                    );
                }
            }
        }
    }
    log::info!("Delivered {} clicks", state.clicks);

    write_snapshot(&cli, &state, &config)?;

    if cli.preview {
        print!("{}", ui::render_preview(&state));
    } else if state.selected_color().is_some() {
        println!("{}", state.output_text());
    } else {
        println!("No color selected");
    }

    Ok(())
}

#[cfg(feature = "png")]
fn write_snapshot(cli: &Cli, state: &InputState, config: &Config) -> Result<()> {
    match &cli.png {
        Some(path) => swatchboard::draw::write_png(state, config, path),
        None => Ok(()),
    }
}

#[cfg(not(feature = "png"))]
fn write_snapshot(_cli: &Cli, _state: &InputState, _config: &Config) -> Result<()> {
    Ok(())
}
