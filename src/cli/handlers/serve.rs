use anyhow::Result;
use colored::Colorize;

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_graphiql: bool,
) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }
    if no_graphiql {
        ctx.config.server.graphiql = false;
    }

    let settings = ctx.config.server.clone();
    let schema = ctx.schema();

    println!(
        "{} GraphQL server on http://{}{}",
        "Starting".green(),
        settings.bind_addr(),
        settings.path
    );
    if settings.graphiql {
        println!(
            "GraphiQL: http://localhost:{}{}",
            settings.port,
            settings.path.cyan()
        );
    }

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &settings).await })?;
    Ok(())
}
