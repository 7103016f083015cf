use clap::Parser;
use framepack::cli::{Cli, Commands};
use framepack::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.verbose);

    match cli.command {
        Commands::Slice(args) => framepack::cli::slice::run(args, &printer)?,
        Commands::Key(args) => framepack::cli::key::run(args, &printer)?,
        Commands::Crop(args) => framepack::cli::crop::run(args, &printer)?,
        Commands::Compose(args) => framepack::cli::compose::run(args, &printer)?,
        Commands::Init(args) => framepack::cli::init::run(args, &printer)?,
        Commands::Completions(args) => framepack::cli::completions::run(args)?,
    }

    Ok(())
}
