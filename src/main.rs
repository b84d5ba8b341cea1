use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use paddock::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use paddock::cli::{Cli, Commands};
use paddock::config::PaddockConfig;
use paddock::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let config = load_config(cli.config.as_deref())?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
            no_seed,
        } => handle_serve(ctx.without_seed(no_seed), host, port, no_graphiql),
        Commands::Query {
            query,
            variables,
            no_seed,
        } => handle_query(ctx.without_seed(no_seed), query, variables),
        Commands::Mutate {
            mutation,
            variables,
            no_seed,
        } => handle_mutate(ctx.without_seed(no_seed), mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<PaddockConfig> {
    match explicit {
        Some(path) => PaddockConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => {
            let cwd = std::env::current_dir()?;
            PaddockConfig::discover(&cwd).context("Failed to load paddock configuration")
        }
    }
}
