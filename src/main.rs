use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use quotebox::cli::args::{Cli, Commands};
use quotebox::cli::commands::{self, Context};
use quotebox::config::{Config, Paths};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = Paths::new()?;
    let config = Config::load(&paths).context("could not load configuration")?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let ctx = Context::new(paths, config);

    let output = match cli.command {
        Commands::Show { category } => commands::show(&ctx, category.as_deref(), format)?,
        Commands::Add(args) => commands::add(&ctx, args, format).await?,
        Commands::List { category } => commands::list(&ctx, category.as_deref(), format)?,
        Commands::Categories => commands::categories(&ctx, format)?,
        Commands::Filter { category } => commands::filter(&ctx, &category, format)?,
        Commands::Import { file } => commands::import(&ctx, &file, format)?,
        Commands::Export { file } => commands::export(&ctx, &file, format)?,
        Commands::Sync => commands::sync(&ctx, format).await?,
        Commands::Watch { interval } => commands::watch(&ctx, interval, format).await?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
