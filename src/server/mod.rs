use std::sync::Arc;

use log::info;
use thiserror::Error;

use crate::catalog::Catalog;

pub mod api;
pub mod routes;
pub mod static_files;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

pub async fn run_server(bind_addr: &str, catalog: Arc<Catalog>) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.to_string(),
            source,
        })?;
    info!("loadout server listening on http://{bind_addr}");

    axum::serve(listener, routes::router(catalog))
        .await
        .map_err(ServerError::Serve)
}
