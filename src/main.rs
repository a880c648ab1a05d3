use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands, Context};
use swatch::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();

    let ctx = || Context::load(cli.config.as_deref(), cli.catalog.as_deref());

    match cli.command {
        Commands::Generate(args) => swatch::cli::generate::run(args, &ctx()?, &printer)?,
        Commands::Extract(args) => swatch::cli::extract::run(args, &printer)?,
        Commands::Template(args) => swatch::cli::template::run(args, &ctx()?, &printer)?,
        Commands::Export(args) => swatch::cli::export::run(args, &ctx()?, &printer)?,
        Commands::Gradient(args) => swatch::cli::gradient::run(args, &ctx()?, &printer)?,
        Commands::Texture(args) => swatch::cli::texture::run(args, &ctx()?, &printer)?,
        Commands::List(args) => swatch::cli::list::run(args, &ctx()?, &printer)?,
        Commands::Validate(args) => swatch::cli::validate::run(args, &ctx()?, &printer)?,
        Commands::Init(args) => swatch::cli::init::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from the default `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "swatch=debug",
        _ => "swatch=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
