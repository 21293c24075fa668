//! Command-line interface for applying move notation to a sticker cube.

mod cli;
mod net;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    let args = cli::Args::parse();
    cli::exec(args)
}

#[cfg(test)]
mod tests;
