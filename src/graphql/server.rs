use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::Html,
    routing::{MethodRouter, get, post_service},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::PaddockSchema;
use crate::config::ServerSettings;
use crate::error::Result;

/// Build the HTTP router: the GraphQL endpoint at `settings.path` and `/health`.
///
/// GET on the endpoint serves GraphiQL when `settings.graphiql` is set.
pub fn build_router(schema: PaddockSchema, settings: &ServerSettings) -> Router {
    let endpoint: MethodRouter = if settings.graphiql {
        let page = GraphiQLSource::build().endpoint(&settings.path).finish();
        get(move || async move { Html(page) }).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };

    Router::new()
        .route(&settings.path, endpoint)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

pub async fn run_server(schema: PaddockSchema, settings: &ServerSettings) -> Result<()> {
    let app = build_router(schema, settings);
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        path = %settings.path,
        graphiql = settings.graphiql,
        "GraphQL server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => {
            tracing::error!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
