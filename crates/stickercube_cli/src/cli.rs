use std::path::PathBuf;

use eyre::Result;
use stickercube::notation::{invert_notation, parse_notation, write_notation};
use stickercube::{Cube, CubeState};

use crate::settings::Settings;

/// Apply move notation to an NxNxN sticker cube
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Settings file to load instead of the user settings file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Number of stickers along each edge of a face.
    #[arg(short = 'n', long, global = true)]
    pub side_length: Option<usize>,
    /// Print without ANSI colors.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves to a solved cube and print its net.
    Apply {
        /// Move tokens, such as `R U' F2`.
        moves: Vec<String>,
    },
    /// Print the moves that undo a sequence.
    Invert {
        /// Move tokens, such as `R U' F2`.
        moves: Vec<String>,
    },
    /// Print the effective settings as YAML.
    Settings,
}

impl Args {
    /// Loads settings and applies overrides from the command line.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = crate::settings::load(self.config.as_deref())?;
        if let Some(side_length) = self.side_length {
            settings.side_length = side_length;
        }
        if self.no_color {
            settings.colored_output = false;
        }
        Ok(settings)
    }
}

pub(crate) fn exec(args: Args) -> Result<()> {
    match &args.subcommand {
        Subcommand::Apply { moves } => {
            let settings = args.settings()?;
            let cube = apply_to_solved(&settings, &moves.join(" "))?;
            let net = crate::net::render(cube.state(), settings.colored_output);
            print!("{net}");
            Ok(())
        }

        Subcommand::Invert { moves } => {
            let turns = parse_notation(&moves.join(" "))?;
            println!("{}", write_notation(&invert_notation(&turns)));
            Ok(())
        }

        Subcommand::Settings => {
            let settings = args.settings()?;
            print!("{}", serde_norway::to_string(&settings)?);
            Ok(())
        }
    }
}

/// Constructs a solved cube from `settings` and applies `notation` to it.
pub(crate) fn apply_to_solved(settings: &Settings, notation: &str) -> Result<Cube> {
    let scheme = settings.color_scheme.to_scheme()?;
    let state = CubeState::solved_with_scheme(settings.side_length, &scheme)?;
    let mut cube = Cube::from_state(state);
    let turns = cube.apply_notation(notation)?;
    log::info!("applied {} turns", turns.len());
    Ok(cube)
}
